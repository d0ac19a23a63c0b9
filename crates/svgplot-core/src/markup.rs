//! Markup serialization.
//!
//! Output is tab-indented, one element per line. Childless elements self-close with a space
//! before the slash (`<circle />`), text elements keep their content on the same line, and a
//! stylesheet renders as a CDATA `<style>` block after the element's children.

use crate::element::Element;
use crate::error::{Error, Result};
use crate::fmt::escape_xml_into;
use std::fmt;
use std::path::Path;

const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push('\t');
    }
}

impl Element {
    /// Serializes the subtree rooted at `self`. No trailing newline.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out, 0);
        out
    }

    /// Markup preceded by an XML declaration, newline-terminated.
    pub fn to_document(&self) -> String {
        let mut out = String::from(XML_PROLOG);
        out.push('\n');
        self.write_markup(&mut out, 0);
        out.push('\n');
        out
    }

    /// Writes the markup (plus a trailing newline) to `path`, truncating any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut markup = self.to_markup();
        markup.push('\n');
        std::fs::write(path, markup).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "svg saved");
        Ok(())
    }

    fn write_markup(&self, out: &mut String, depth: usize) {
        push_indent(out, depth);
        out.push('<');
        out.push_str(self.tag());
        for (key, value) in self.attrs.iter() {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            escape_xml_into(out, value);
            out.push('"');
        }

        if self.children.is_empty() && self.styles.is_empty() {
            match &self.content {
                Some(content) => {
                    out.push('>');
                    escape_xml_into(out, content);
                    out.push_str("</");
                    out.push_str(self.tag());
                    out.push('>');
                }
                None => out.push_str(" />"),
            }
            return;
        }

        out.push('>');
        if let Some(content) = &self.content {
            escape_xml_into(out, content);
        }
        out.push('\n');
        for child in &self.children {
            child.write_markup(out, depth + 1);
            out.push('\n');
        }
        self.write_stylesheet(out, depth + 1);
        push_indent(out, depth);
        out.push_str("</");
        out.push_str(self.tag());
        out.push('>');
    }

    fn write_stylesheet(&self, out: &mut String, depth: usize) {
        if self.styles.is_empty() {
            return;
        }

        push_indent(out, depth);
        out.push_str("<style type=\"text/css\">\n");
        push_indent(out, depth + 1);
        out.push_str("<![CDATA[\n");
        for (selector, rules) in &self.styles {
            push_indent(out, depth + 2);
            out.push_str(selector);
            out.push_str(" {\n");
            for (prop, value) in rules.iter() {
                push_indent(out, depth + 3);
                out.push_str(prop);
                out.push_str(": ");
                out.push_str(value);
                out.push_str(";\n");
            }
            push_indent(out, depth + 2);
            out.push_str("}\n");
        }
        push_indent(out, depth + 1);
        out.push_str("]]>\n");
        push_indent(out, depth);
        out.push_str("</style>\n");
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

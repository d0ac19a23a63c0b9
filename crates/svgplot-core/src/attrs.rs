use crate::color::Color;
use crate::fmt::fixed1;
use std::collections::BTreeMap;

/// Conversion into the string stored in an [`AttributeMap`].
///
/// Integers keep their plain decimal form while floats always carry one fractional digit, so
/// `set_attr("width", 100)` stores `"100"` and `set_attr("width", 100.0)` stores `"100.0"`.
pub trait AttrValue {
    fn to_attr_value(&self) -> String;
}

impl AttrValue for str {
    fn to_attr_value(&self) -> String {
        self.to_string()
    }
}

impl AttrValue for String {
    fn to_attr_value(&self) -> String {
        self.clone()
    }
}

impl AttrValue for f64 {
    fn to_attr_value(&self) -> String {
        fixed1(*self)
    }
}

impl AttrValue for f32 {
    fn to_attr_value(&self) -> String {
        fixed1(f64::from(*self))
    }
}

macro_rules! impl_attr_value_int {
    ($($t:ty),*) => {
        $(
            impl AttrValue for $t {
                fn to_attr_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_attr_value_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl AttrValue for Color {
    fn to_attr_value(&self) -> String {
        self.to_string()
    }
}

impl<T: AttrValue + ?Sized> AttrValue for &T {
    fn to_attr_value(&self) -> String {
        (**self).to_attr_value()
    }
}

/// String-keyed attribute storage. Iteration (and therefore serialization) follows sorted key
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    attrs: BTreeMap<String, String>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl AttrValue) -> &mut Self {
        self.attrs.insert(key.into(), value.to_attr_value());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Parses the attribute as a number. Missing or malformed values yield `None`.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|v| v.trim().parse::<f64>().ok())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.attrs.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_and_strings_are_stored_verbatim() {
        let mut attrs = AttributeMap::new();
        attrs.set_attr("width", 100).set_attr("height", "200");
        assert_eq!(attrs.get("width"), Some("100"));
        assert_eq!(attrs.get("height"), Some("200"));
    }

    #[test]
    fn floats_keep_one_decimal_place() {
        let mut attrs = AttributeMap::new();
        attrs
            .set_attr("x", 100.0)
            .set_attr("y", std::f64::consts::PI)
            .set_attr("stroke", Color::Black);
        assert_eq!(attrs.get("x"), Some("100.0"));
        assert_eq!(attrs.get("y"), Some("3.1"));
        assert_eq!(attrs.get("stroke"), Some("black"));
    }

    #[test]
    fn iteration_is_sorted_by_key() {
        let mut attrs = AttributeMap::new();
        attrs.set_attr("y2", 1).set_attr("x1", 2).set_attr("y1", 3);
        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["x1", "y1", "y2"]);
    }

    #[test]
    fn get_f64_parses_numbers() {
        let mut attrs = AttributeMap::new();
        attrs.set_attr("r", "30").set_attr("fill", "red");
        assert_eq!(attrs.get_f64("r"), Some(30.0));
        assert_eq!(attrs.get_f64("fill"), None);
        assert_eq!(attrs.get_f64("missing"), None);
    }
}

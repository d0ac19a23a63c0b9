// Number and text formatting helpers shared by attribute values and markup output.

use std::fmt::Write as _;

/// Formats `v` with exactly one fractional digit (`3.14159` -> `3.1`).
///
/// Non-finite values and negative zero both become `0.0`, so attribute output never carries
/// `NaN` or `-0.0`.
pub fn fixed1(v: f64) -> String {
    let mut out = String::new();
    fixed1_into(&mut out, v);
    out
}

pub fn fixed1_into(out: &mut String, v: f64) {
    if !v.is_finite() {
        out.push_str("0.0");
        return;
    }
    let start = out.len();
    let _ = write!(out, "{v:.1}");
    if &out[start..] == "-0.0" {
        out.truncate(start);
        out.push_str("0.0");
    }
}

/// Shortest round-trippable decimal form with float noise removed (`100.0` -> `100`).
pub fn compact(v: f64) -> String {
    let mut out = String::new();
    compact_into(&mut out, v);
    out
}

pub fn compact_into(out: &mut String, v: f64) {
    if !v.is_finite() {
        out.push('0');
        return;
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    if v == -0.0 {
        v = 0.0;
    }

    let _ = write!(out, "{v}");
}

/// `printf("%.Ng")`-style formatting: `significant` digits, trailing zeros removed, exponent
/// notation (`1e+03`) once the exponent reaches `significant` or drops below -4.
pub fn general(v: f64, significant: usize) -> String {
    if !v.is_finite() || v == 0.0 {
        return "0".to_string();
    }

    let precision = significant.max(1);
    // Let the std formatter do the rounding so the exponent accounts for carries (999.5 -> 1e3).
    let sci = format!("{:.*e}", precision - 1, v);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.unsigned_abs())
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{v:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_xml_into(&mut out, text);
    out
}

pub fn escape_xml_into(out: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        if start < i {
            out.push_str(&text[start..i]);
        }
        out.push_str(esc);
        start = i + 1;
    }
    if start < text.len() {
        out.push_str(&text[start..]);
    }
}

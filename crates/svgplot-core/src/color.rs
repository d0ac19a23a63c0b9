//! Named and RGB colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A paint color. Named variants serialize as their CSS keyword, [`Color::Rgb`] as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Aqua,
    Black,
    Blue,
    Brown,
    Cyan,
    Fuchsia,
    Green,
    Lime,
    Magenta,
    Orange,
    Purple,
    Red,
    Silver,
    White,
    Yellow,
    Transparent,
    Rgb(u8, u8, u8),
}

const NAMED: &[(&str, Color)] = &[
    ("aqua", Color::Aqua),
    ("black", Color::Black),
    ("blue", Color::Blue),
    ("brown", Color::Brown),
    ("cyan", Color::Cyan),
    ("fuchsia", Color::Fuchsia),
    ("green", Color::Green),
    ("lime", Color::Lime),
    ("magenta", Color::Magenta),
    ("orange", Color::Orange),
    ("purple", Color::Purple),
    ("red", Color::Red),
    ("silver", Color::Silver),
    ("white", Color::White),
    ("yellow", Color::Yellow),
    ("transparent", Color::Transparent),
];

impl Color {
    pub fn keyword(&self) -> Option<&'static str> {
        NAMED
            .iter()
            .find(|(_, c)| c == self)
            .map(|(name, _)| *name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            other => f.write_str(other.keyword().unwrap_or("black")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color: {0:?}")]
pub struct ParseColorError(pub String);

fn hex_nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let err = || ParseColorError(s.to_string());

        if let Some(hex) = raw.strip_prefix('#') {
            let digits = hex
                .bytes()
                .map(hex_nibble)
                .collect::<Option<Vec<u8>>>()
                .ok_or_else(err)?;
            return match digits.as_slice() {
                [r, g, b] => Ok(Color::Rgb(r * 17, g * 17, b * 17)),
                [r1, r2, g1, g2, b1, b2] => {
                    Ok(Color::Rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2))
                }
                _ => Err(err()),
            };
        }

        let lower = raw.to_ascii_lowercase();
        NAMED
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, c)| *c)
            .ok_or_else(err)
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_string()
    }
}

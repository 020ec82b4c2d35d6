use std::{convert::Infallible, str::FromStr};

use serde::{Deserialize, Serialize};

/// Caption numbering scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelStyle {
    /// `1`, `2`, `3`, ...
    #[default]
    Number,
    /// `a` through `z`, then decimal.
    Letter,
    /// `i` through `xx`, then decimal.
    Roman,
    /// `(1)`, `(2)`, `(3)`, ...
    Parenthesis,
}

impl LabelStyle {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Letter => "letter",
            Self::Roman => "roman",
            Self::Parenthesis => "parenthesis",
        }
    }
}

/// Unknown names fall back to [`LabelStyle::Number`].
impl FromStr for LabelStyle {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "letter" => Self::Letter,
            "roman" => Self::Roman,
            "parenthesis" => Self::Parenthesis,
            _ => Self::Number,
        })
    }
}

impl std::fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LabelStyle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LabelStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(style) = s.parse::<LabelStyle>();
        Ok(style)
    }
}

const ROMAN: [&str; 20] = [
    "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x", "xi", "xii", "xiii", "xiv", "xv",
    "xvi", "xvii", "xviii", "xix", "xx",
];

/// Caption text for the `index`-th image of a figure (1-based, counted across rows).
pub fn label(index: usize, style: LabelStyle) -> String {
    match style {
        LabelStyle::Number => index.to_string(),
        LabelStyle::Letter => match index {
            1..=26 => char::from(b'a' + (index - 1) as u8).to_string(),
            _ => index.to_string(),
        },
        LabelStyle::Roman => match index {
            1..=20 => ROMAN[index - 1].to_owned(),
            _ => index.to_string(),
        },
        LabelStyle::Parenthesis => format!("({index})"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/label.rs"]
mod tests;

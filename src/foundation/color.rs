use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{FigureError, FigureResult};

/// Canvas background fill.
///
/// `Solid` figures are flattened to opaque RGB and encoded as JPEG. `Transparent` keeps the alpha
/// channel of every source image and encodes as PNG.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Background {
    /// Opaque sRGB fill color.
    Solid([u8; 3]),
    /// Fully transparent fill; alpha is preserved end-to-end.
    Transparent,
}

impl Background {
    /// Pure white, the default figure background.
    pub const WHITE: Self = Self::Solid([255, 255, 255]);

    /// Named palette offered to callers, in display order.
    pub const PALETTE: [(&'static str, Background); 6] = [
        ("white", Self::Solid([255, 255, 255])),
        ("light_gray", Self::Solid([245, 245, 245])),
        ("cream", Self::Solid([255, 253, 248])),
        ("light_blue", Self::Solid([240, 248, 255])),
        ("light_green", Self::Solid([245, 255, 250])),
        ("transparent", Self::Transparent),
    ];

    /// `true` for [`Background::Transparent`].
    pub fn is_transparent(self) -> bool {
        matches!(self, Self::Transparent)
    }

    /// Canvas fill pixel in straight (non-premultiplied) RGBA8.
    pub fn fill_rgba(self) -> [u8; 4] {
        match self {
            Self::Solid([r, g, b]) => [r, g, b, 255],
            Self::Transparent => [0, 0, 0, 0],
        }
    }

    /// Look up a palette entry by name (case-insensitive, `-` and `_` are equivalent).
    pub fn named(name: &str) -> Option<Self> {
        let key = name.trim().to_ascii_lowercase().replace('-', "_");
        Self::PALETTE
            .iter()
            .find(|(n, _)| *n == key)
            .map(|(_, bg)| *bg)
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Background {
    type Err = FigureError;

    fn from_str(s: &str) -> FigureResult<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return parse_hex(s).map(Self::Solid);
        }
        Self::named(s).ok_or_else(|| {
            let names: Vec<&str> = Self::PALETTE.iter().map(|(n, _)| *n).collect();
            FigureError::invalid_config(format!(
                "unknown background color \"{s}\" (expected #RRGGBB or one of: {})",
                names.join(", ")
            ))
        })
    }
}

impl std::fmt::Display for Background {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solid([r, g, b]) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Transparent => f.write_str("transparent"),
        }
    }
}

impl Serialize for Background {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Background {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Name(String),
            Arr([u8; 3]),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Name(s) => s.parse().map_err(serde::de::Error::custom),
            Repr::Arr(rgb) => Ok(Self::Solid(rgb)),
        }
    }
}

fn parse_hex(s: &str) -> FigureResult<[u8; 3]> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(FigureError::invalid_config(format!(
            "hex color must be #RRGGBB, got \"{s}\""
        )));
    }

    let byte = |pair: &str| {
        u8::from_str_radix(pair, 16)
            .map_err(|_| FigureError::invalid_config(format!("invalid hex byte \"{pair}\"")))
    };
    Ok([byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?])
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;

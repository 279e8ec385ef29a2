//! RGBA color type with hex parsing and formatting.
//!
//! Colors are stored as four 8-bit channels and serialized as hex strings
//! (`#RRGGBB` when fully opaque, `#RRGGBBAA` otherwise), which keeps the
//! persisted file human-editable.

use core::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Color {
    /// Create a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string.
    ///
    /// Accepts `#RGB`, `#RRGGBB`, and `#RRGGBBAA`; the leading `#` is
    /// optional and hex digits are case-insensitive. Returns `None` for any
    /// other shape.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            3 => {
                let mut channels = digits
                    .chars()
                    .map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                let r = channels.next()??;
                let g = channels.next()??;
                let b = channels.next()??;
                Some(Self::rgb(r, g, b))
            }
            6 | 8 => {
                let byte_at = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                let r = byte_at(0)?;
                let g = byte_at(2)?;
                let b = byte_at(4)?;
                let a = if digits.len() == 8 { byte_at(6)? } else { 255 };
                Some(Self::rgba(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Format as an uppercase hex string.
    ///
    /// Alpha is included only when the color is not fully opaque, so opaque
    /// colors render in the familiar `#RRGGBB` form.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex).ok_or_else(|| D::Error::custom(format!("invalid hex color: {hex}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_form() {
        assert_eq!(Color::from_hex("#FF8000"), Some(Color::rgb(255, 128, 0)));
        assert_eq!(Color::from_hex("ff8000"), Some(Color::rgb(255, 128, 0)));
    }

    #[test]
    fn parse_with_alpha() {
        assert_eq!(
            Color::from_hex("#FF800080"),
            Some(Color::rgba(255, 128, 0, 128))
        );
        assert_eq!(Color::from_hex("#00000000"), Some(Color::rgba(0, 0, 0, 0)));
    }

    #[test]
    fn parse_short_form() {
        // #F80 expands each digit: F -> FF, 8 -> 88, 0 -> 00.
        assert_eq!(Color::from_hex("#F80"), Some(Color::rgb(255, 136, 0)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Color::from_hex(""), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#GGGGGG"), None);
        assert_eq!(Color::from_hex("not a color"), None);
    }

    #[test]
    fn format_opaque_omits_alpha() {
        assert_eq!(Color::rgb(255, 128, 0).to_hex(), "#FF8000");
        assert_eq!(Color::rgba(255, 128, 0, 64).to_hex(), "#FF800040");
    }

    #[test]
    fn hex_roundtrip_alpha_extremes() {
        for color in [
            Color::rgba(1, 2, 3, 0),
            Color::rgba(1, 2, 3, 255),
            Color::rgba(255, 255, 255, 1),
        ] {
            assert_eq!(Color::from_hex(&color.to_hex()), Some(color));
        }
    }

    #[test]
    fn serde_as_hex_string() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrap {
            c: Color,
        }

        let toml_str = toml::to_string(&Wrap {
            c: Color::rgba(18, 52, 86, 120),
        })
        .unwrap();
        assert!(toml_str.contains("\"#12345678\""), "got: {toml_str}");

        let parsed: Wrap = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.c, Color::rgba(18, 52, 86, 120));
    }
}

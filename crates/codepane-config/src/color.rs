//! `#RGB`, `#RRGGBB` and `#RRGGBBAA` colors as they appear in theme files.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parses a `#`-prefixed hex color. The short `#RGB` form doubles each
    /// digit, as in CSS.
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize, width: usize| -> Option<u8> {
            let v = u8::from_str_radix(digits.get(i * width..(i + 1) * width)?, 16).ok()?;
            Some(if width == 1 { v * 17 } else { v })
        };
        match digits.len() {
            3 => Some(Self::rgb(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?)),
            6 => Some(Self::rgb(channel(0, 2)?, channel(1, 2)?, channel(2, 2)?)),
            8 => Some(Self::rgba(
                channel(0, 2)?,
                channel(1, 2)?,
                channel(2, 2)?,
                channel(3, 2)?,
            )),
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for HexColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim()).ok_or_else(|| anyhow::anyhow!("invalid hex color: {s}"))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_forms() {
        assert_eq!(HexColor::from_hex("#FF8800"), Some(HexColor::rgb(255, 136, 0)));
        assert_eq!(
            HexColor::from_hex("#e0404080"),
            Some(HexColor::rgba(224, 64, 64, 128))
        );
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!(HexColor::from_hex("#fa0"), Some(HexColor::rgb(255, 170, 0)));
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["", "#", "fff", "#GG0000", "#12345", "#ééé", "#1234567890"] {
            assert!(HexColor::from_hex(bad).is_none(), "{bad}");
        }
        let err = "nope".parse::<HexColor>().unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_display_omits_opaque_alpha() {
        assert_eq!(HexColor::rgb(30, 30, 30).to_hex(), "#1E1E1E");
        assert_eq!(HexColor::rgb(30, 30, 30).with_alpha(64).to_hex(), "#1E1E1E40");
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let c = HexColor::rgba(224, 64, 64, 40);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#E0404028\"");
        assert_eq!(serde_json::from_str::<HexColor>(&json).unwrap(), c);
        assert!(serde_json::from_str::<HexColor>("\"red\"").is_err());
    }
}

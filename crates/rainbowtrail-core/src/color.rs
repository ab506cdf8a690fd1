//! Packed RGB colors, alpha re-encoding, and the two spawn palettes.

use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::TrailError;

/// 8-bit RGB triple. Serialized as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(C)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a hex integer (0xRRGGBB).
    pub const fn from_u32(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(text: &str) -> Result<Self, TrailError> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TrailError::InvalidColor(text.to_owned()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_u32)
            .map_err(|_| TrailError::InvalidColor(text.to_owned()))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_array(self) -> [u8; 3] {
        bytemuck::cast(self)
    }

    pub fn from_array(channels: [u8; 3]) -> Self {
        bytemuck::cast(channels)
    }

    /// Same channels, new alpha.
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba { rgb: self, alpha }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = TrailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = TrailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

/// An [`Rgb`] with a per-draw alpha. The channels are never touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    pub fn alpha_u8(&self) -> u8 {
        (self.alpha.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }
}

/// Which palette newly spawned particles draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Rainbow,
    Palette,
}

pub const RAINBOW: [Rgb; 6] = [
    Rgb::from_u32(0xFF006E),
    Rgb::from_u32(0xFB5607),
    Rgb::from_u32(0xFFBE0B),
    Rgb::from_u32(0x8338EC),
    Rgb::from_u32(0x3A86FF),
    Rgb::from_u32(0x06FFA5),
];

pub const RETRO: [Rgb; 6] = [
    Rgb::from_u32(0xFF71CE),
    Rgb::from_u32(0x01CDFE),
    Rgb::from_u32(0x05FFA1),
    Rgb::from_u32(0xB967FF),
    Rgb::from_u32(0xFFFB96),
    Rgb::from_u32(0xF5F5F5),
];

impl ColorMode {
    pub const ALL: [ColorMode; 2] = [ColorMode::Rainbow, ColorMode::Palette];

    pub fn colors(self) -> &'static [Rgb] {
        match self {
            ColorMode::Rainbow => &RAINBOW,
            ColorMode::Palette => &RETRO,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorMode::Rainbow => "Rainbow",
            ColorMode::Palette => "Retro palette",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_decomposes_into_channels_and_back() {
        for color in RAINBOW.iter().chain(RETRO.iter()) {
            let hex = color.to_hex();
            let parsed = Rgb::from_hex(&hex).unwrap();
            assert_eq!(parsed, *color);
            assert_eq!(Rgb::from_array(parsed.to_array()), *color);
        }
        let pink = Rgb::from_hex("#FF006E").unwrap();
        assert_eq!(pink.to_array(), [255, 0, 110]);
    }

    #[test]
    fn lowercase_and_bare_hex_parse() {
        assert_eq!(Rgb::from_hex("3a86ff").unwrap(), Rgb::new(0x3A, 0x86, 0xFF));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        for bad in ["", "#FFF", "#GG0000", "#FF006E00", "rgb(1,2,3)"] {
            assert!(matches!(Rgb::from_hex(bad), Err(TrailError::InvalidColor(_))), "{bad}");
        }
    }

    #[test]
    fn alpha_reencoding_keeps_channels() {
        let color = Rgb::from_u32(0x8338EC);
        let faded = color.with_alpha(0.25);
        assert_eq!(faded.rgb, color);
        assert_eq!((faded.rgb.r, faded.rgb.g, faded.rgb.b), (131, 56, 236));
        assert_eq!(faded.alpha, 0.25);
        assert_eq!(color.with_alpha(1.5).alpha_u8(), 255);
        assert_eq!(color.with_alpha(-0.2).alpha_u8(), 0);
    }

    #[test]
    fn color_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::from_u32(0x0A0A14)).unwrap();
        assert_eq!(json, "\"#0A0A14\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(10, 10, 20));
        assert!(serde_json::from_str::<Rgb>("\"#zz\"").is_err());
    }

    #[test]
    fn color_mode_uses_lowercase_tags() {
        assert_eq!(serde_json::to_string(&ColorMode::Palette).unwrap(), "\"palette\"");
        assert_eq!(ColorMode::Rainbow.colors().len(), 6);
    }
}

//! Category colours and the per-column colour ramp
//!
//! Stateless: every function is deterministic integer arithmetic over an RGB
//! triple, so the same input always yields bit-identical output.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shared::LogicModelDataset;
use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

/// Number of colours in a ramp, one per display column
pub const RAMP_LEN: usize = shared::DISPLAY_COLUMNS;

/// Blend percentages from lightest to darkest; positive blends toward white
const RAMP_STEPS: [i32; RAMP_LEN] = [60, 40, 20, 0, -20, -40, -60];

/// Brand colour used when no PBC component is selected
pub const DEFAULT_COLOR: Color = Color::rgb(0x3D, 0xAF, 0x49);

/// Fixed palette indexed by PBC component position
pub const PBC_PALETTE: [Color; 8] = [
    Color::rgb(0x3D, 0xAF, 0x49),
    Color::rgb(0x00, 0x72, 0xBC),
    Color::rgb(0xF7, 0x94, 0x1D),
    Color::rgb(0x8E, 0x44, 0xAD),
    Color::rgb(0xE8, 0x45, 0x3C),
    Color::rgb(0x00, 0xA6, 0xA6),
    Color::rgb(0xF2, 0xC5, 0x00),
    Color::rgb(0x6D, 0x4C, 0x41),
];

/// An sRGB colour, written as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend each channel toward white (`percent > 0`) or black (`percent < 0`)
    pub fn shade(&self, percent: i32) -> Color {
        let percent = percent.clamp(-100, 100);
        let channel = |c: u8| -> u8 {
            let c = c as i32;
            let shifted = if percent >= 0 {
                c + ((255 - c) * percent + 50) / 100
            } else {
                c - (c * -percent + 50) / 100
            };
            shifted.clamp(0, 255) as u8
        };
        Color::rgb(channel(self.r), channel(self.g), channel(self.b))
    }

    /// Relative brightness used to order ramps (Rec. 601 weights, integer)
    pub fn luma(&self) -> u32 {
        299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = EngineError;

    /// Accepts `#RRGGBB` or the `#RGB` shorthand; the `#` is optional
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidColor { input: s.to_string() };
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| invalid());
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

        match hex.len() {
            3 => Ok(Color::rgb(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
            6 => Ok(Color::rgb(pair(0)?, pair(2)?, pair(4)?)),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Maps categories to display colours
pub struct ColorMapper;

impl ColorMapper {
    /// Palette entry for a PBC component position, cycling past the palette end
    pub fn palette_color(index: usize) -> Color {
        PBC_PALETTE[index % PBC_PALETTE.len()]
    }

    /// Colour for a PBC component name, or `DEFAULT_COLOR` if unknown
    pub fn resolve_color(category: &str, dataset: &LogicModelDataset) -> Color {
        dataset
            .pbc_index(category)
            .map(Self::palette_color)
            .unwrap_or(DEFAULT_COLOR)
    }

    /// Light-to-dark ramp around `base`; the base sits in the middle
    pub fn derive_ramp(base: Color) -> [Color; RAMP_LEN] {
        RAMP_STEPS.map(|step| base.shade(step))
    }

    /// `derive_ramp` for a hex string
    pub fn derive_ramp_hex(base: &str) -> EngineResult<[Color; RAMP_LEN]> {
        Ok(Self::derive_ramp(base.parse()?))
    }

    /// Ramp shown when nothing is selected
    pub fn default_ramp() -> [Color; RAMP_LEN] {
        Self::derive_ramp(DEFAULT_COLOR)
    }
}

//! Reference swatches shown on the simulator page.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::math::hex::parse_hex_rgb;

const DEFAULT_PALETTE: [(&str, &str, [u8; 3]); 9] = [
    ("Bleu Principal", "#3366CC", [51, 102, 204]),
    ("Orange Accent", "#FF9900", [255, 153, 0]),
    ("Vert Action", "#66CC33", [102, 204, 51]),
    ("Violet", "#7b13d6", [123, 19, 214]),
    ("Rouge", "#f91616", [249, 22, 22]),
    ("Bleu", "#3885f4", [56, 133, 244]),
    ("Rose", "#ed5fb1", [237, 95, 177]),
    ("Jaune", "#f9c900", [249, 201, 0]),
    ("Vert", "#2e9959", [46, 153, 89]),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub hex: String,
    pub rgb: [u8; 3],
}

impl PaletteEntry {
    pub fn color(&self) -> Color {
        Color::from(self.rgb)
    }

    fn validate(&self) -> Result<()> {
        match parse_hex_rgb(&self.hex) {
            Some(c) if c.to_array() == self.rgb => Ok(()),
            Some(_) => Err(Error::PaletteMismatch {
                name: self.name.clone(),
                hex: self.hex.clone(),
                rgb: self.rgb,
            }),
            None => Err(Error::InvalidHex(self.hex.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: DEFAULT_PALETTE
                .iter()
                .map(|(name, hex, rgb)| PaletteEntry {
                    name: name.to_string(),
                    hex: hex.to_string(),
                    rgb: *rgb,
                })
                .collect(),
        }
    }
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self> {
        let palette = Self { entries };
        palette.validate()?;
        Ok(palette)
    }

    /// Parse a JSON array of `{ name, hex, rgb }` entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<PaletteEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(Error::EmptyPalette);
        }
        self.entries.iter().try_for_each(PaletteEntry::validate)
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use napi_derive::napi;

use crate::math::effects::VisualEffect;
use crate::math::wcag::{Compliance, Rating};

/// One palette swatch as seen under a condition
#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedSwatch {
    pub name: String,
    pub original_hex: String,
    pub hex: String,
    /// [r, g, b], each 0-255
    pub rgb: Vec<u32>,
}

/// Whole palette under one condition
#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionPalette {
    pub condition: String,
    pub label: String,
    /// "matrix" | "fieldLoss"
    pub family: String,
    pub swatches: Vec<SimulatedSwatch>,
}

#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct RatingJs {
    /// "AAA" | "AA" | "Conforme" | "Fail"
    pub level: String,
    pub pass: bool,
}

#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceJs {
    pub normal_text: RatingJs,
    pub large_text: RatingJs,
    pub ui_element: RatingJs,
}

/// Result of the contrast checker for a text/background pair
#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastReport {
    pub text_hex: String,
    pub bg_hex: String,
    /// Rounded to the configured number of decimals
    pub ratio: f64,
    pub ratio_raw: f64,
    /// e.g. "4.5:1"
    pub display: String,
    pub compliance: ComplianceJs,
    /// Ratio after both colors go through the deuteranopia matrix
    pub deuteranopia_ratio: f64,
    /// Ratio after both colors go through the protanopia matrix
    pub protanopia_ratio: f64,
}

/// Contrast between two swatches of a simulated palette
#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct PairContrast {
    pub first: String,
    pub second: String,
    pub first_hex: String,
    pub second_hex: String,
    pub ratio: f64,
    /// Meets the 3:1 non-text contrast minimum
    pub distinguishable: bool,
}

/// Normal-text compliance of one swatch against a fixed background
#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchCompliance {
    pub name: String,
    pub hex: String,
    pub ratio: f64,
    /// e.g. "5.4:1"
    pub display: String,
    /// "AAA" | "AA" | "Fail"
    pub level: String,
    /// Meets 4.5:1
    pub pass: bool,
}

#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct VisualEffectJs {
    /// "none" | "filter" | "overlay"
    pub kind: String,
    pub css: Option<String>,
}

#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionInfo {
    pub tag: String,
    pub label: String,
    pub family: String,
    pub effect: VisualEffectJs,
}

impl From<Rating> for RatingJs {
    fn from(rating: Rating) -> Self {
        Self {
            level: rating.level.as_str().to_string(),
            pass: rating.pass,
        }
    }
}

impl From<Compliance> for ComplianceJs {
    fn from(c: Compliance) -> Self {
        Self {
            normal_text: c.normal_text.into(),
            large_text: c.large_text.into(),
            ui_element: c.ui_element.into(),
        }
    }
}

impl From<VisualEffect> for VisualEffectJs {
    fn from(effect: VisualEffect) -> Self {
        Self {
            kind: effect.kind().to_string(),
            css: effect.css().map(str::to_string),
        }
    }
}

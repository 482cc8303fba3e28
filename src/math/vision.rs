//! Per-condition color simulation.
//!
//! Color-vision deficiencies and light-level conditions use a fixed 3x3
//! linear matrix on 0-255 channels. Field-loss conditions mostly affect
//! what part of the page is visible, so their swatch colors are either
//! dimmed by a constant factor (tunnel, peripheral) or left untouched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Error;

pub type Matrix3 = [[f64; 3]; 3];

const IDENTITY: Matrix3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

const DEUTERANOPIA: Matrix3 = [[0.625, 0.375, 0.0], [0.7, 0.3, 0.0], [0.0, 0.3, 0.7]];

const PROTANOPIA: Matrix3 = [[0.567, 0.433, 0.0], [0.558, 0.442, 0.0], [0.0, 0.242, 0.758]];

const TRITANOPIA: Matrix3 = [[0.95, 0.05, 0.0], [0.0, 0.433, 0.567], [0.0, 0.475, 0.525]];

// Rec. 601 luma weights
const ACHROMATOPSIA: Matrix3 = [
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
];

// Rec. 709 luma weights
const MONOCHROMACY: Matrix3 = [
    [0.213, 0.715, 0.072],
    [0.213, 0.715, 0.072],
    [0.213, 0.715, 0.072],
];

const PHOTOPHOBIA: Matrix3 = [[0.4, 0.4, 0.4], [0.4, 0.4, 0.4], [0.4, 0.4, 0.4]];

const SCOTOPIC: Matrix3 = [[0.1, 0.8, 0.1], [0.1, 0.8, 0.1], [0.1, 0.8, 0.1]];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisionCondition {
    #[default]
    Normal,
    Deuteranopia,
    Protanopia,
    Tritanopia,
    Achromatopsia,
    Monochromacy,
    Photophobia,
    Scotopic,
    Tunnel,
    Peripheral,
    Central,
    Hemianopia,
    Prosopagnosia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionFamily {
    /// Per-pixel linear color transform.
    Matrix,
    /// Spatial visibility loss, rendered as an overlay.
    FieldLoss,
}

impl ConditionFamily {
    /// Name reported to JS.
    pub fn as_str(self) -> &'static str {
        match self {
            ConditionFamily::Matrix => "matrix",
            ConditionFamily::FieldLoss => "fieldLoss",
        }
    }
}

impl VisionCondition {
    pub const ALL: [VisionCondition; 13] = [
        VisionCondition::Normal,
        VisionCondition::Deuteranopia,
        VisionCondition::Protanopia,
        VisionCondition::Tritanopia,
        VisionCondition::Achromatopsia,
        VisionCondition::Monochromacy,
        VisionCondition::Photophobia,
        VisionCondition::Scotopic,
        VisionCondition::Tunnel,
        VisionCondition::Peripheral,
        VisionCondition::Central,
        VisionCondition::Hemianopia,
        VisionCondition::Prosopagnosia,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            VisionCondition::Normal => "normal",
            VisionCondition::Deuteranopia => "deuteranopia",
            VisionCondition::Protanopia => "protanopia",
            VisionCondition::Tritanopia => "tritanopia",
            VisionCondition::Achromatopsia => "achromatopsia",
            VisionCondition::Monochromacy => "monochromacy",
            VisionCondition::Photophobia => "photophobia",
            VisionCondition::Scotopic => "scotopic",
            VisionCondition::Tunnel => "tunnel",
            VisionCondition::Peripheral => "peripheral",
            VisionCondition::Central => "central",
            VisionCondition::Hemianopia => "hemianopia",
            VisionCondition::Prosopagnosia => "prosopagnosia",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VisionCondition::Normal => "Normal vision",
            VisionCondition::Deuteranopia => "Deuteranopia (green-blind)",
            VisionCondition::Protanopia => "Protanopia (red-blind)",
            VisionCondition::Tritanopia => "Tritanopia (blue-blind)",
            VisionCondition::Achromatopsia => "Achromatopsia (no color)",
            VisionCondition::Monochromacy => "Monochromacy",
            VisionCondition::Photophobia => "Photophobia (light sensitivity)",
            VisionCondition::Scotopic => "Scotopic (night) vision",
            VisionCondition::Tunnel => "Tunnel vision",
            VisionCondition::Peripheral => "Peripheral field loss",
            VisionCondition::Central => "Central scotoma",
            VisionCondition::Hemianopia => "Hemianopia",
            VisionCondition::Prosopagnosia => "Prosopagnosia",
        }
    }

    pub fn family(self) -> ConditionFamily {
        match self {
            VisionCondition::Tunnel
            | VisionCondition::Peripheral
            | VisionCondition::Central
            | VisionCondition::Hemianopia
            | VisionCondition::Prosopagnosia => ConditionFamily::FieldLoss,
            _ => ConditionFamily::Matrix,
        }
    }

    /// Linear transform for matrix-family conditions.
    pub fn matrix(self) -> Option<&'static Matrix3> {
        match self {
            VisionCondition::Normal => Some(&IDENTITY),
            VisionCondition::Deuteranopia => Some(&DEUTERANOPIA),
            VisionCondition::Protanopia => Some(&PROTANOPIA),
            VisionCondition::Tritanopia => Some(&TRITANOPIA),
            VisionCondition::Achromatopsia => Some(&ACHROMATOPSIA),
            VisionCondition::Monochromacy => Some(&MONOCHROMACY),
            VisionCondition::Photophobia => Some(&PHOTOPHOBIA),
            VisionCondition::Scotopic => Some(&SCOTOPIC),
            _ => None,
        }
    }

    /// Uniform dimming applied to swatches for tunnel and peripheral loss.
    pub fn brightness_scale(self) -> Option<f64> {
        match self {
            VisionCondition::Tunnel => Some(0.6),
            VisionCondition::Peripheral => Some(0.8),
            _ => None,
        }
    }

    /// Parse a tag, falling back to `Normal` for anything unrecognized.
    pub fn from_tag_lossy(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|_| {
            tracing::warn!(tag, "unknown vision condition, using normal");
            VisionCondition::Normal
        })
    }
}

impl fmt::Display for VisionCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for VisionCondition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VisionCondition::ALL
            .into_iter()
            .find(|c| c.tag() == s)
            .ok_or_else(|| Error::UnknownCondition(s.to_string()))
    }
}

fn apply_matrix(m: &Matrix3, color: Color) -> Color {
    let [r, g, b] = color.to_f64();
    Color::from_f64_clamped([
        m[0][0] * r + m[0][1] * g + m[0][2] * b,
        m[1][0] * r + m[1][1] * g + m[1][2] * b,
        m[2][0] * r + m[2][1] * g + m[2][2] * b,
    ])
}

/// Simulate how `color` is perceived under `condition`.
pub fn transform(color: Color, condition: VisionCondition) -> Color {
    if let Some(scale) = condition.brightness_scale() {
        let [r, g, b] = color.to_f64();
        return Color::from_f64_clamped([r * scale, g * scale, b * scale]);
    }
    match condition.matrix() {
        Some(m) => apply_matrix(m, color),
        // central, hemianopia, prosopagnosia
        None => color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> impl Iterator<Item = Color> {
        let steps = || (0..=255u8).step_by(17);
        steps().flat_map(move |r| steps().flat_map(move |g| steps().map(move |b| Color::new(r, g, b))))
    }

    #[test]
    fn normal_is_identity() {
        for c in grid() {
            assert_eq!(transform(c, VisionCondition::Normal), c);
        }
    }

    #[test]
    fn view_only_conditions_leave_color_unchanged() {
        for c in grid() {
            assert_eq!(transform(c, VisionCondition::Central), c);
            assert_eq!(transform(c, VisionCondition::Hemianopia), c);
            assert_eq!(transform(c, VisionCondition::Prosopagnosia), c);
        }
    }

    #[test]
    fn tunnel_scales_by_point_six() {
        let out = transform(Color::new(51, 102, 204), VisionCondition::Tunnel);
        assert_eq!(out, Color::new(31, 61, 122));
    }

    #[test]
    fn peripheral_scales_by_point_eight() {
        let out = transform(Color::new(255, 153, 0), VisionCondition::Peripheral);
        assert_eq!(out, Color::new(204, 122, 0));
    }

    #[test]
    fn photophobia_saturates_at_255() {
        // 0.4 * 3 * 255 = 306 before clamping
        assert_eq!(transform(Color::WHITE, VisionCondition::Photophobia), Color::WHITE);
        assert_eq!(transform(Color::new(100, 100, 100), VisionCondition::Photophobia), Color::new(120, 120, 120));
    }

    #[test]
    fn deuteranopia_reference_swatch() {
        // 0.625*51 + 0.375*102 = 70.125; 0.7*51 + 0.3*102 = 66.3; 0.3*102 + 0.7*204 = 173.4
        let out = transform(Color::new(51, 102, 204), VisionCondition::Deuteranopia);
        assert_eq!(out, Color::new(70, 66, 173));
    }

    #[test]
    fn protanopia_reference_swatch() {
        // 0.567*51 + 0.433*102 = 73.083; 0.558*51 + 0.442*102 = 73.542; 0.242*102 + 0.758*204 = 179.316
        let out = transform(Color::new(51, 102, 204), VisionCondition::Protanopia);
        assert_eq!(out, Color::new(73, 74, 179));
    }

    #[test]
    fn tritanopia_reference_swatch() {
        // 0.95*51 + 0.05*102 = 53.55; 0.433*102 + 0.567*204 = 159.834; 0.475*102 + 0.525*204 = 155.55
        let out = transform(Color::new(51, 102, 204), VisionCondition::Tritanopia);
        assert_eq!(out, Color::new(54, 160, 156));
    }

    #[test]
    fn monochromacy_reference_swatch() {
        // 0.213*51 + 0.715*102 + 0.072*204 = 98.481 on every channel
        let out = transform(Color::new(51, 102, 204), VisionCondition::Monochromacy);
        assert_eq!(out, Color::new(98, 98, 98));
        // pure red separates it from achromatopsia: 0.213*255 = 54.315 vs 0.299*255 = 76.245
        assert_eq!(transform(Color::new(255, 0, 0), VisionCondition::Monochromacy), Color::new(54, 54, 54));
        assert_eq!(transform(Color::new(255, 0, 0), VisionCondition::Achromatopsia), Color::new(76, 76, 76));
    }

    #[test]
    fn scotopic_reference_swatch() {
        // 0.1*51 + 0.8*102 + 0.1*204 = 107.1 on every channel
        let out = transform(Color::new(51, 102, 204), VisionCondition::Scotopic);
        assert_eq!(out, Color::new(107, 107, 107));
    }

    #[test]
    fn family_names() {
        assert_eq!(VisionCondition::Scotopic.family().as_str(), "matrix");
        assert_eq!(VisionCondition::Hemianopia.family().as_str(), "fieldLoss");
    }

    #[test]
    fn achromatopsia_is_gray() {
        for c in grid() {
            let out = transform(c, VisionCondition::Achromatopsia);
            assert_eq!(out.r, out.g);
            assert_eq!(out.g, out.b);
        }
    }

    #[test]
    fn every_condition_handles_extremes() {
        for cond in VisionCondition::ALL {
            // u8 output makes the range structural; this checks nothing panics on the saturating paths
            let _ = transform(Color::WHITE, cond);
            assert_eq!(transform(Color::BLACK, cond), Color::BLACK, "{cond}");
        }
    }

    #[test]
    fn families_partition_conditions() {
        for cond in VisionCondition::ALL {
            match cond.family() {
                ConditionFamily::Matrix => assert!(cond.matrix().is_some(), "{cond}"),
                ConditionFamily::FieldLoss => assert!(cond.matrix().is_none(), "{cond}"),
            }
        }
        assert_eq!(
            VisionCondition::ALL.iter().filter(|c| c.family() == ConditionFamily::FieldLoss).count(),
            5
        );
    }

    #[test]
    fn tags_roundtrip() {
        for cond in VisionCondition::ALL {
            assert_eq!(cond.tag().parse::<VisionCondition>().unwrap(), cond);
            let json = serde_json::to_string(&cond).unwrap();
            assert_eq!(json, format!("\"{}\"", cond.tag()));
        }
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        assert!(matches!("Deuteranopia".parse::<VisionCondition>(), Err(Error::UnknownCondition(_))));
        assert!("xray".parse::<VisionCondition>().is_err());
    }

    #[test]
    fn lossy_parse_falls_back_to_normal() {
        assert_eq!(VisionCondition::from_tag_lossy("xray"), VisionCondition::Normal);
        assert_eq!(VisionCondition::from_tag_lossy(""), VisionCondition::Normal);
        assert_eq!(VisionCondition::from_tag_lossy("scotopic"), VisionCondition::Scotopic);
        let c = Color::new(12, 200, 99);
        assert_eq!(transform(c, VisionCondition::from_tag_lossy("unknown")), c);
    }
}

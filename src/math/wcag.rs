use serde::Serialize;

use crate::color::Color;

/// Convert sRGB channel (0-255) to linear light value.
/// Uses the WCAG 2.0 threshold 0.03928 (not the IEC 0.04045).
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * srgb_to_linear(color.r) + 0.7152 * srgb_to_linear(color.g) + 0.0722 * srgb_to_linear(color.b)
}

/// Calculate WCAG contrast ratio between two colors.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplianceLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    /// UI components have a single 3:1 criterion.
    Conforme,
    Fail,
}

impl ComplianceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ComplianceLevel::Aaa => "AAA",
            ComplianceLevel::Aa => "AA",
            ComplianceLevel::Conforme => "Conforme",
            ComplianceLevel::Fail => "Fail",
        }
    }
}

/// A level plus the pass flag used for badge styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rating {
    pub level: ComplianceLevel,
    pub pass: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Compliance {
    pub normal_text: Rating,
    pub large_text: Rating,
    pub ui_element: Rating,
}

/// Classify a contrast ratio against the AA/AAA thresholds.
pub fn classify(ratio: f64) -> Compliance {
    let normal_text = Rating {
        level: if ratio >= 7.0 {
            ComplianceLevel::Aaa
        } else if ratio >= 4.5 {
            ComplianceLevel::Aa
        } else {
            ComplianceLevel::Fail
        },
        pass: ratio >= 4.5,
    };
    let large_text = Rating {
        level: if ratio >= 4.5 {
            ComplianceLevel::Aaa
        } else if ratio >= 3.0 {
            ComplianceLevel::Aa
        } else {
            ComplianceLevel::Fail
        },
        pass: ratio >= 3.0,
    };
    let ui_element = Rating {
        level: if ratio >= 3.0 { ComplianceLevel::Conforme } else { ComplianceLevel::Fail },
        pass: ratio >= 3.0,
    };
    Compliance {
        normal_text,
        large_text,
        ui_element,
    }
}

/// Display form used by the contrast checker: one decimal, `:1` suffix.
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.1}:1", ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn hex(s: &str) -> Color {
        s.parse().unwrap()
    }

    #[test]
    fn luminance_extremes() {
        assert_abs_diff_eq!(relative_luminance(Color::WHITE), 1.0, epsilon = 1e-12);
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
    }

    #[test]
    fn low_channels_use_linear_segment() {
        // 10/255 = 0.0392 <= 0.03928
        let c = Color::new(10, 0, 0);
        assert_abs_diff_eq!(relative_luminance(c), 0.2126 * (10.0 / 255.0) / 12.92, epsilon = 1e-15);
    }

    #[test]
    fn black_on_white_is_21() {
        assert_abs_diff_eq!(contrast_ratio(Color::BLACK, Color::WHITE), 21.0, epsilon = 1e-9);
    }

    #[test]
    fn identical_colors_are_exactly_1() {
        for v in (0..=255u8).step_by(17) {
            let c = Color::new(v, 255 - v, v / 2);
            assert_eq!(contrast_ratio(c, c), 1.0);
        }
    }

    #[test]
    fn order_independent() {
        let channels = (0..=255u8).step_by(51);
        for r in channels.clone() {
            for g in channels.clone() {
                let a = Color::new(r, g, 128);
                let b = Color::new(g, 40, r);
                assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
                assert!(contrast_ratio(a, b) >= 1.0);
            }
        }
    }

    #[test]
    fn gray_on_white() {
        assert_abs_diff_eq!(contrast_ratio(hex("#767676"), Color::WHITE), 4.54, epsilon = 0.01);
    }

    #[test]
    fn red_on_white() {
        assert_abs_diff_eq!(contrast_ratio(hex("#ff0000"), Color::WHITE), 3.99, epsilon = 0.01);
    }

    #[test]
    fn max_ratio_is_all_top_levels() {
        let c = classify(contrast_ratio(Color::WHITE, Color::BLACK));
        assert_eq!(c.normal_text.level, ComplianceLevel::Aaa);
        assert_eq!(c.large_text.level, ComplianceLevel::Aaa);
        assert_eq!(c.ui_element.level, ComplianceLevel::Conforme);
        assert!(c.normal_text.pass && c.large_text.pass && c.ui_element.pass);
    }

    #[test]
    fn thresholds_are_inclusive() {
        let c = classify(7.0);
        assert_eq!(c.normal_text.level, ComplianceLevel::Aaa);

        let c = classify(4.5);
        assert_eq!(c.normal_text.level, ComplianceLevel::Aa);
        assert!(c.normal_text.pass);
        assert_eq!(c.large_text.level, ComplianceLevel::Aaa);

        let c = classify(3.0);
        assert_eq!(c.normal_text.level, ComplianceLevel::Fail);
        assert!(!c.normal_text.pass);
        assert_eq!(c.large_text.level, ComplianceLevel::Aa);
        assert!(c.large_text.pass);
        assert_eq!(c.ui_element.level, ComplianceLevel::Conforme);
    }

    #[test]
    fn below_three_fails_everything() {
        let c = classify(2.99);
        assert_eq!(c.normal_text.level, ComplianceLevel::Fail);
        assert_eq!(c.large_text.level, ComplianceLevel::Fail);
        assert_eq!(c.ui_element.level, ComplianceLevel::Fail);
        assert!(!c.ui_element.pass);
    }

    #[test]
    fn level_strings() {
        assert_eq!(ComplianceLevel::Aaa.as_str(), "AAA");
        assert_eq!(ComplianceLevel::Fail.as_str(), "Fail");
        let json = serde_json::to_string(&classify(5.0)).unwrap();
        assert!(json.contains(r#""normalText":{"level":"AA","pass":true}"#), "{json}");
    }

    #[test]
    fn ratio_display() {
        assert_eq!(format_ratio(21.0), "21.0:1");
        assert_eq!(format_ratio(4.544), "4.5:1");
    }
}

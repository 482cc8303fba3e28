use serde::Serialize;

use super::vision::VisionCondition;

/// Page-level effect for a condition, as CSS the host applies to its
/// main content container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "css", rename_all = "camelCase")]
pub enum VisualEffect {
    None,
    /// Value for the container's `filter` property.
    Filter(&'static str),
    /// `background` of a full-size, pointer-transparent overlay.
    Overlay(&'static str),
}

const TUNNEL_OVERLAY: &str = "radial-gradient(circle at center, transparent 15%, rgba(0,0,0,0.3) 25%, rgba(0,0,0,0.7) 40%, rgba(0,0,0,0.95) 60%)";
const PERIPHERAL_OVERLAY: &str =
    "radial-gradient(circle at center, rgba(0,0,0,0.8) 0%, rgba(0,0,0,0.8) 20%, transparent 35%)";
const CENTRAL_OVERLAY: &str = "radial-gradient(circle at center, rgba(0,0,0,0.9) 0%, rgba(0,0,0,0.9) 15%, rgba(0,0,0,0.3) 25%, transparent 35%)";
const HEMIANOPIA_OVERLAY: &str =
    "linear-gradient(to right, rgba(0,0,0,0.9) 0%, rgba(0,0,0,0.9) 48%, transparent 52%, transparent 100%)";

pub fn visual_effect(condition: VisionCondition) -> VisualEffect {
    match condition {
        VisionCondition::Tunnel => VisualEffect::Overlay(TUNNEL_OVERLAY),
        VisionCondition::Peripheral => VisualEffect::Overlay(PERIPHERAL_OVERLAY),
        VisionCondition::Central => VisualEffect::Overlay(CENTRAL_OVERLAY),
        VisionCondition::Hemianopia => VisualEffect::Overlay(HEMIANOPIA_OVERLAY),
        VisionCondition::Photophobia => VisualEffect::Filter("brightness(0.3) contrast(0.7)"),
        VisionCondition::Scotopic => VisualEffect::Filter("brightness(0.4) contrast(1.2) hue-rotate(180deg)"),
        VisionCondition::Prosopagnosia => VisualEffect::Filter("blur(1px) contrast(0.8)"),
        // color-only conditions are shown through the swatches
        VisionCondition::Normal
        | VisionCondition::Deuteranopia
        | VisionCondition::Protanopia
        | VisionCondition::Tritanopia
        | VisionCondition::Achromatopsia
        | VisionCondition::Monochromacy => VisualEffect::None,
    }
}

impl VisualEffect {
    pub fn kind(&self) -> &'static str {
        match *self {
            VisualEffect::None => "none",
            VisualEffect::Filter(_) => "filter",
            VisualEffect::Overlay(_) => "overlay",
        }
    }

    pub fn css(&self) -> Option<&'static str> {
        match *self {
            VisualEffect::None => None,
            VisualEffect::Filter(css) | VisualEffect::Overlay(css) => Some(css),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_loss_overlays() {
        for cond in [
            VisionCondition::Tunnel,
            VisionCondition::Peripheral,
            VisionCondition::Central,
            VisionCondition::Hemianopia,
        ] {
            assert_eq!(visual_effect(cond).kind(), "overlay", "{cond}");
        }
        assert!(visual_effect(VisionCondition::Hemianopia).css().unwrap().starts_with("linear-gradient"));
    }

    #[test]
    fn filters() {
        assert_eq!(
            visual_effect(VisionCondition::Scotopic),
            VisualEffect::Filter("brightness(0.4) contrast(1.2) hue-rotate(180deg)")
        );
        assert_eq!(visual_effect(VisionCondition::Prosopagnosia).kind(), "filter");
    }

    #[test]
    fn color_conditions_have_no_page_effect() {
        assert_eq!(visual_effect(VisionCondition::Normal), VisualEffect::None);
        assert_eq!(visual_effect(VisionCondition::Deuteranopia).css(), None);
    }

    #[test]
    fn serializes_tagged() {
        let json = serde_json::to_string(&visual_effect(VisionCondition::Photophobia)).unwrap();
        assert_eq!(json, r#"{"kind":"filter","css":"brightness(0.3) contrast(0.7)"}"#);
        let json = serde_json::to_string(&VisualEffect::None).unwrap();
        assert_eq!(json, r#"{"kind":"none"}"#);
    }
}

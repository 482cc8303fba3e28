//! Host-supplied settings, passed from JS as an optional JSON string.

use serde::Deserialize;

use crate::error::Result;
use crate::math::hex::HexCase;
use crate::math::vision::VisionCondition;
use crate::palette::Palette;

/// What to do with a condition tag outside the known set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownConditionPolicy {
    /// Treat it as normal vision.
    #[default]
    Fallback,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulatorConfig {
    pub palette: Palette,
    pub unknown_condition: UnknownConditionPolicy,
    pub hex_case: HexCase,
    /// Decimal places kept on reported contrast ratios.
    pub ratio_decimals: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            unknown_condition: UnknownConditionPolicy::default(),
            hex_case: HexCase::default(),
            ratio_decimals: 2,
        }
    }
}

impl SimulatorConfig {
    /// Parse and validate a JSON config. Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SimulatorConfig = serde_json::from_str(json)?;
        config.palette.validate()?;
        tracing::debug!(
            swatches = config.palette.len(),
            policy = ?config.unknown_condition,
            "loaded simulator config"
        );
        Ok(config)
    }

    pub fn from_optional_json(json: Option<&str>) -> Result<Self> {
        json.map_or_else(|| Ok(Self::default()), Self::from_json)
    }

    pub fn resolve_condition(&self, tag: &str) -> Result<VisionCondition> {
        match self.unknown_condition {
            UnknownConditionPolicy::Fallback => Ok(VisionCondition::from_tag_lossy(tag)),
            UnknownConditionPolicy::Reject => tag.parse(),
        }
    }

    pub fn round_ratio(&self, ratio: f64) -> f64 {
        let factor = 10f64.powi(self.ratio_decimals.min(10) as i32);
        (ratio * factor).round() / factor
    }
}

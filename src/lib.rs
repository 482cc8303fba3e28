#[macro_use]
extern crate napi_derive;

pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod math;
pub mod palette;
pub mod types;

use crate::color::Color;
use crate::config::SimulatorConfig;
use crate::math::hex::HexCase;
use crate::types::{
    ComplianceJs, ConditionInfo, ConditionPalette, ContrastReport, PairContrast, SimulatedSwatch, SwatchCompliance,
    VisualEffectJs,
};

fn parse_color(hex: &str) -> error::Result<Color> {
    hex.parse()
}

#[napi]
pub fn health_check() -> String {
    "vision-sim-native ok".to_string()
}

/// Simulated color for one hex value under a condition tag.
#[napi]
pub fn transform_color(hex: String, condition: String, config_json: Option<String>) -> napi::Result<String> {
    let config = SimulatorConfig::from_optional_json(config_json.as_deref())?;
    let color = parse_color(&hex)?;
    let condition = config.resolve_condition(&condition)?;
    let seen = math::vision::transform(color, condition);
    Ok(math::hex::to_hex(seen, config.hex_case))
}

/// `[r, g, b]`, or null when `hex` is not exactly six hex digits.
#[napi]
pub fn hex_to_rgb(hex: String) -> Option<Vec<u32>> {
    math::hex::parse_hex_rgb(&hex).map(|c| c.to_array().iter().map(|&v| v as u32).collect())
}

/// Channels above 255 saturate.
#[napi]
pub fn rgb_to_hex(r: u32, g: u32, b: u32, uppercase: Option<bool>) -> String {
    let channel = |v: u32| v.min(255) as u8;
    let case = if uppercase.unwrap_or(true) { HexCase::Upper } else { HexCase::Lower };
    math::hex::to_hex(Color::new(channel(r), channel(g), channel(b)), case)
}

#[napi]
pub fn relative_luminance(hex: String) -> napi::Result<f64> {
    Ok(math::wcag::relative_luminance(parse_color(&hex)?))
}

#[napi]
pub fn contrast_ratio(first: String, second: String) -> napi::Result<f64> {
    Ok(math::wcag::contrast_ratio(parse_color(&first)?, parse_color(&second)?))
}

#[napi]
pub fn classify_ratio(ratio: f64) -> ComplianceJs {
    math::wcag::classify(ratio).into()
}

#[napi]
pub fn check_contrast(text_hex: String, bg_hex: String, config_json: Option<String>) -> napi::Result<ContrastReport> {
    let config = SimulatorConfig::from_optional_json(config_json.as_deref())?;
    Ok(engine::check_pair(parse_color(&text_hex)?, parse_color(&bg_hex)?, &config))
}

#[napi]
pub fn simulate_palette(condition: String, config_json: Option<String>) -> napi::Result<Vec<SimulatedSwatch>> {
    let config = SimulatorConfig::from_optional_json(config_json.as_deref())?;
    let condition = config.resolve_condition(&condition)?;
    Ok(engine::simulate_palette(&config.palette, condition, config.hex_case))
}

#[napi]
pub fn simulate_all(config_json: Option<String>) -> napi::Result<Vec<ConditionPalette>> {
    let config = SimulatorConfig::from_optional_json(config_json.as_deref())?;
    Ok(engine::simulate_all(&config.palette, config.hex_case))
}

#[napi]
pub fn contrast_grid(condition: String, config_json: Option<String>) -> napi::Result<Vec<PairContrast>> {
    let config = SimulatorConfig::from_optional_json(config_json.as_deref())?;
    let condition = config.resolve_condition(&condition)?;
    Ok(engine::contrast_grid(&config.palette, condition, &config))
}

/// Normal-text compliance of every palette swatch against white.
#[napi]
pub fn compliance_grid(config_json: Option<String>) -> napi::Result<Vec<SwatchCompliance>> {
    let config = SimulatorConfig::from_optional_json(config_json.as_deref())?;
    Ok(engine::compliance_grid(&config.palette, Color::WHITE, &config))
}

#[napi]
pub fn list_conditions() -> Vec<ConditionInfo> {
    engine::list_conditions()
}

/// Page-level filter/overlay for a condition tag. Unknown tags get no effect.
#[napi]
pub fn visual_effect(condition: String) -> VisualEffectJs {
    let condition = math::vision::VisionCondition::from_tag_lossy(&condition);
    math::effects::visual_effect(condition).into()
}

/// Normalize any opaque CSS color to uppercase `#RRGGBB`.
#[napi]
pub fn parse_css_color(value: String) -> Option<String> {
    math::color_parse::parse_css_color(&value).map(|c| c.to_string())
}

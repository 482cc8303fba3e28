use rayon::prelude::*;

use crate::color::Color;
use crate::config::SimulatorConfig;
use crate::math::effects::visual_effect;
use crate::math::hex::{to_hex, HexCase};
use crate::math::vision::{transform, VisionCondition};
use crate::math::wcag::{classify, contrast_ratio, format_ratio};
use crate::palette::Palette;
use crate::types::{
    ConditionInfo, ConditionPalette, ContrastReport, PairContrast, SimulatedSwatch, SwatchCompliance,
};

fn rgb_vec(color: Color) -> Vec<u32> {
    color.to_array().iter().map(|&c| c as u32).collect()
}

/// Ratio between two colors after both are seen through `condition`.
pub fn simulated_ratio(a: Color, b: Color, condition: VisionCondition) -> f64 {
    contrast_ratio(transform(a, condition), transform(b, condition))
}

/// Full contrast-checker result for one text/background pair.
pub fn check_pair(text: Color, bg: Color, config: &SimulatorConfig) -> ContrastReport {
    let ratio_raw = contrast_ratio(text, bg);
    ContrastReport {
        text_hex: to_hex(text, config.hex_case),
        bg_hex: to_hex(bg, config.hex_case),
        ratio: config.round_ratio(ratio_raw),
        ratio_raw,
        display: format_ratio(ratio_raw),
        compliance: classify(ratio_raw).into(),
        deuteranopia_ratio: config.round_ratio(simulated_ratio(text, bg, VisionCondition::Deuteranopia)),
        protanopia_ratio: config.round_ratio(simulated_ratio(text, bg, VisionCondition::Protanopia)),
    }
}

/// Every palette swatch as perceived under `condition`, in palette order.
pub fn simulate_palette(palette: &Palette, condition: VisionCondition, case: HexCase) -> Vec<SimulatedSwatch> {
    palette
        .entries()
        .iter()
        .map(|entry| {
            let original = entry.color();
            let seen = transform(original, condition);
            SimulatedSwatch {
                name: entry.name.clone(),
                original_hex: to_hex(original, case),
                hex: to_hex(seen, case),
                rgb: rgb_vec(seen),
            }
        })
        .collect()
}

/// Simulate the palette under every condition.
///
/// Conditions run in parallel on the rayon pool; output follows
/// `VisionCondition::ALL` order.
pub fn simulate_all(palette: &Palette, case: HexCase) -> Vec<ConditionPalette> {
    tracing::debug!(
        swatches = palette.len(),
        conditions = VisionCondition::ALL.len(),
        "simulating palette under all conditions"
    );
    VisionCondition::ALL
        .par_iter()
        .map(|&condition| ConditionPalette {
            condition: condition.tag().to_string(),
            label: condition.label().to_string(),
            family: condition.family().as_str().to_string(),
            swatches: simulate_palette(palette, condition, case),
        })
        .collect()
}

/// Contrast for every unordered pair of swatches under `condition`.
/// Pairs come out as (0,1), (0,2), ..., (1,2), ...
pub fn contrast_grid(palette: &Palette, condition: VisionCondition, config: &SimulatorConfig) -> Vec<PairContrast> {
    let entries = palette.entries();
    let seen: Vec<Color> = entries.iter().map(|e| transform(e.color(), condition)).collect();
    let pairs: Vec<(usize, usize)> = (0..entries.len())
        .flat_map(|i| (i + 1..entries.len()).map(move |j| (i, j)))
        .collect();
    tracing::debug!(condition = condition.tag(), pairs = pairs.len(), "computing contrast grid");

    pairs
        .par_iter()
        .map(|&(i, j)| {
            let ratio = contrast_ratio(seen[i], seen[j]);
            PairContrast {
                first: entries[i].name.clone(),
                second: entries[j].name.clone(),
                first_hex: to_hex(seen[i], config.hex_case),
                second_hex: to_hex(seen[j], config.hex_case),
                ratio: config.round_ratio(ratio),
                distinguishable: classify(ratio).ui_element.pass,
            }
        })
        .collect()
}

/// Normal-text compliance of each unmodified swatch against `bg`, in palette order.
pub fn compliance_grid(palette: &Palette, bg: Color, config: &SimulatorConfig) -> Vec<SwatchCompliance> {
    palette
        .entries()
        .iter()
        .map(|entry| {
            let ratio = contrast_ratio(entry.color(), bg);
            let normal_text = classify(ratio).normal_text;
            SwatchCompliance {
                name: entry.name.clone(),
                hex: to_hex(entry.color(), config.hex_case),
                ratio: config.round_ratio(ratio),
                display: format_ratio(ratio),
                level: normal_text.level.as_str().to_string(),
                pass: normal_text.pass,
            }
        })
        .collect()
}

pub fn describe_condition(condition: VisionCondition) -> ConditionInfo {
    ConditionInfo {
        tag: condition.tag().to_string(),
        label: condition.label().to_string(),
        family: condition.family().as_str().to_string(),
        effect: visual_effect(condition).into(),
    }
}

pub fn list_conditions() -> Vec<ConditionInfo> {
    VisionCondition::ALL.iter().copied().map(describe_condition).collect()
}

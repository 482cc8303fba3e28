use crate::color::Color;

/// Convert any opaque CSS color value to a color.
/// Handles: rgb, hsl, hwb, named colors, 3/6-digit hex.
/// Returns None for: keywords without a fixed value, translucent colors, unrecognized input.
///
/// Picker inputs that must be strict 6-digit hex go through `hex::parse_hex_rgb` instead.
pub fn parse_css_color(value: &str) -> Option<Color> {
    let trimmed = value.trim();

    match trimmed.to_lowercase().as_str() {
        "transparent" | "inherit" | "currentcolor" | "initial" | "unset" => return None,
        _ => {}
    }

    match trimmed.parse::<csscolorparser::Color>() {
        Ok(color) => {
            let [r, g, b, a] = color.to_rgba8();
            if a < 255 {
                tracing::debug!(value = trimmed, alpha = a, "translucent css color rejected");
                None
            } else {
                Some(Color::new(r, g, b))
            }
        }
        Err(_) => None,
    }
}

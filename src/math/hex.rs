use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexCase {
    #[default]
    Upper,
    Lower,
}

/// Parse a 6-digit hex string (optional leading `#`) to a color.
/// Case-insensitive. 3-digit shorthand and 8-digit hex return None.
pub fn parse_hex_rgb(hex: &str) -> Option<Color> {
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    // all-ASCII, so byte slicing is on char boundaries
    let r = u8::from_str_radix(&raw[0..2], 16).ok()?;
    let g = u8::from_str_radix(&raw[2..4], 16).ok()?;
    let b = u8::from_str_radix(&raw[4..6], 16).ok()?;
    Some(Color::new(r, g, b))
}

/// Format a color as `#rrggbb` in the requested case.
pub fn to_hex(color: Color, case: HexCase) -> String {
    match case {
        HexCase::Upper => format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b),
        HexCase::Lower => format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b),
    }
}

pub mod color_parse;
pub mod effects;
pub mod hex;
pub mod vision;
pub mod wcag;

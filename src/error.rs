//! Error types for parsing and configuration.
//!
//! The color math itself is total; only string inputs (hex values,
//! condition tags, JSON config) can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Not exactly six hex digits (with an optional leading `#`).
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// Condition tag outside the known set, under the `reject` policy.
    #[error("unknown vision condition: {0:?}")]
    UnknownCondition(String),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// A palette entry whose `hex` and `rgb` disagree.
    #[error("palette entry {name:?}: hex {hex} does not match rgb {rgb:?}")]
    PaletteMismatch {
        name: String,
        hex: String,
        rgb: [u8; 3],
    },

    #[error("palette has no entries")]
    EmptyPalette,
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for napi::Error {
    fn from(err: Error) -> Self {
        napi::Error::new(napi::Status::InvalidArg, err.to_string())
    }
}

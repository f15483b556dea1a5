//! Error types for the navigation core.

use thiserror::Error;

/// Navigation core error type.
///
/// Per-frame anomalies (clamped positions, out-of-range grid access,
/// collisions) are recovered locally and surfaced as data; only
/// construction-time configuration problems reach this type.
#[derive(Error, Debug)]
pub enum NavError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for NavError {
    fn from(e: toml::de::Error) -> Self {
        NavError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NavError>;

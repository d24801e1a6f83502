//! Error types for configuration and request loading

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("name distance threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid comparison request: {0}")]
    Request(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MatchError>;

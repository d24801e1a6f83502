//! Matching configuration

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Default cut-off for `normalized_name_distance` in the rename predicates.
pub const DEFAULT_NAME_DISTANCE_THRESHOLD: f64 = 0.5;

/// Tunables for the fuzzy rename predicates.
///
/// Only constructed through [`MatchConfig::new`], [`Default`] or
/// deserialization, all of which keep the threshold within [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchConfig")]
pub struct MatchConfig {
    name_distance_threshold: f64,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawMatchConfig {
    name_distance_threshold: f64,
}

impl Default for RawMatchConfig {
    fn default() -> Self {
        RawMatchConfig {
            name_distance_threshold: DEFAULT_NAME_DISTANCE_THRESHOLD,
        }
    }
}

impl TryFrom<RawMatchConfig> for MatchConfig {
    type Error = MatchError;

    fn try_from(raw: RawMatchConfig) -> Result<Self> {
        MatchConfig::new(raw.name_distance_threshold)
    }
}

impl MatchConfig {
    pub fn new(name_distance_threshold: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&name_distance_threshold) {
            Ok(MatchConfig { name_distance_threshold })
        } else {
            Err(MatchError::InvalidThreshold(name_distance_threshold))
        }
    }

    /// Parse a TOML document, e.g. `name_distance_threshold = 0.3`.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: MatchConfig = toml::from_str(source)?;
        tracing::debug!(threshold = config.name_distance_threshold, "Loaded match config");
        Ok(config)
    }

    /// Largest name distance still accepted as a rename.
    pub fn name_distance_threshold(&self) -> f64 {
        self.name_distance_threshold
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            name_distance_threshold: DEFAULT_NAME_DISTANCE_THRESHOLD,
        }
    }
}

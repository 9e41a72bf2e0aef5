//! Configuration for the extraction engine.
//!
//! Every tunable bound lives here so regional/currency recalibration is a
//! config change, not a code change.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{EarnrError, Result};

/// Main configuration for the earnr engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Business-rule validation bounds.
    pub validation: ValidationConfig,

    /// Confidence scoring adjustments.
    pub confidence: ConfidenceConfig,
}

/// Bounds applied by the result validator. Amounts are in won.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Confidence floor below which a clearer image is requested.
    pub min_confidence: f64,

    /// Totals below this are flagged as unusually low.
    pub min_amount: u64,

    /// Totals above this are flagged as unusually high.
    pub max_amount: u64,

    /// Lower bound of the plausible per-delivery average.
    pub min_per_delivery: u64,

    /// Upper bound of the plausible per-delivery average.
    pub max_per_delivery: u64,

    /// Delivery counts above this are flagged.
    pub max_delivery_count: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.7,
            min_amount: 5_000,
            max_amount: 1_000_000,
            min_per_delivery: 2_000,
            max_per_delivery: 15_000,
            max_delivery_count: 100,
        }
    }
}

/// Scalar knobs of the confidence scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Texts shorter than this many characters are penalized.
    pub short_text_chars: usize,

    /// Texts longer than this many characters get a small bonus.
    pub long_text_chars: usize,

    /// Multiplier applied below the short threshold.
    pub short_text_penalty: f64,

    /// Multiplier applied above the long threshold (capped at 1.0 overall).
    pub long_text_bonus: f64,

    /// Flat base contribution when the platform is unknown.
    pub unknown_base: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            short_text_chars: 20,
            long_text_chars: 300,
            short_text_penalty: 0.5,
            long_text_bonus: 1.1,
            unknown_base: 0.2,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| EarnrError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| EarnrError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let config = ValidationConfig::default();
        assert_eq!(config.min_amount, 5_000);
        assert_eq!(config.max_amount, 1_000_000);
        assert_eq!(config.max_delivery_count, 100);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"validation": {"min_amount": 1000}}"#).unwrap();
        assert_eq!(config.validation.min_amount, 1_000);
        assert_eq!(config.validation.max_amount, 1_000_000);
        assert_eq!(config.confidence.short_text_penalty, 0.5);
    }

    #[test]
    fn test_config_round_trip() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.validation.min_per_delivery, config.validation.min_per_delivery);
    }
}

//! Simulation tuning
//!
//! Loaded from JSON; every field falls back to its default when omitted.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading a [`SimConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Physics step configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Whirlpool self-rotation rate (radians per millisecond)
    pub attractor_spin_rate: f32,
    /// Upper clamp for a single tick's elapsed time (milliseconds)
    pub max_elapsed_ms: f32,
    /// Width of the debug lines tracing each bounding box (pixels)
    pub line_thickness: f32,
    /// Moving-entity count above which the all-pairs sweep warns once
    pub sweep_warn_threshold: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            attractor_spin_rate: ATTRACTOR_SPIN_RATE,
            max_elapsed_ms: MAX_ELAPSED_MS,
            line_thickness: LINE_THICKNESS,
            sweep_warn_threshold: SWEEP_WARN_THRESHOLD,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded sim config from {}", path.display());
        Ok(config)
    }

    /// Reject values the step cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.attractor_spin_rate.is_finite() {
            return Err(ConfigError::Invalid(
                "attractor_spin_rate must be finite".into(),
            ));
        }
        if !self.max_elapsed_ms.is_finite() || self.max_elapsed_ms < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_elapsed_ms must be a non-negative number, got {}",
                self.max_elapsed_ms
            )));
        }
        if !self.line_thickness.is_finite() || self.line_thickness < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "line_thickness must be a non-negative number, got {}",
                self.line_thickness
            )));
        }
        Ok(())
    }

    /// Clamp a caller-supplied time slice into `[0, max_elapsed_ms]`
    pub fn clamp_elapsed(&self, elapsed_ms: f32) -> f32 {
        if elapsed_ms.is_nan() {
            return 0.0;
        }
        elapsed_ms.clamp(0.0, self.max_elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config = SimConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SimConfig::from_json_str(r#"{ "line_thickness": 4.0 }"#).unwrap();
        assert_eq!(config.line_thickness, 4.0);
        assert_eq!(config.attractor_spin_rate, ATTRACTOR_SPIN_RATE);
    }

    #[test]
    fn test_rejects_negative_max_elapsed() {
        let err = SimConfig::from_json_str(r#"{ "max_elapsed_ms": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SimConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SimConfig::load("/nonexistent/undertow.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_clamp_elapsed() {
        let config = SimConfig::default();
        assert_eq!(config.clamp_elapsed(-16.0), 0.0);
        assert_eq!(config.clamp_elapsed(16.0), 16.0);
        assert_eq!(config.clamp_elapsed(10_000.0), MAX_ELAPSED_MS);
        assert_eq!(config.clamp_elapsed(f32::NAN), 0.0);
    }
}

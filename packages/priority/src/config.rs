//! Priority policy configuration.
//!
//! The default policy is embedded at compile time from
//! `config/priority.toml`. Setting `PRIORITY_CONFIG` to a file path
//! replaces it with that file.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../config/priority.toml");

/// Exclusive upper bound for `traffic_probe_offset_degrees`.
const MAX_PROBE_OFFSET_DEGREES: f64 = 1.0;

/// Tunable constants of the classification pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriorityConfig {
    /// Issue type that is always classified Low.
    pub low_priority_issue_type: String,
    /// Nearby-place search radius, in meters.
    pub search_radius_meters: u32,
    /// Critical-infrastructure keywords, highest precedence first.
    pub critical_keywords: Vec<String>,
    /// Offset of the traffic probe destination, in degrees on both axes.
    pub traffic_probe_offset_degrees: f64,
    /// Congestion ratio that must be strictly exceeded to flag an anomaly.
    pub traffic_anomaly_threshold: f64,
}

/// Errors from loading a [`PriorityConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The override file could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML did not match the expected shape.
    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Values parsed but violate a policy constraint.
    #[error("Invalid config: {message}")]
    Invalid {
        /// Which constraint was violated.
        message: String,
    },
}

impl Default for PriorityConfig {
    /// Returns the embedded default policy.
    ///
    /// # Panics
    ///
    /// Panics if the embedded `config/priority.toml` is malformed.
    fn default() -> Self {
        Self::from_toml(DEFAULT_CONFIG)
            .unwrap_or_else(|e| panic!("Embedded priority config is invalid: {e}"))
    }
}

impl PriorityConfig {
    /// Loads the policy from `PRIORITY_CONFIG` if set, else the embedded
    /// default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the override file cannot be read, parsed,
    /// or validated.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var("PRIORITY_CONFIG") {
            Ok(path) if !path.trim().is_empty() => {
                log::info!("Loading priority config from {path}");
                Self::from_file(Path::new(&path))
            }
            _ => Ok(Self::default()),
        }
    }

    /// Reads and validates a policy file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed, or
    /// validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parses and validates a policy from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the TOML is malformed or a value is out
    /// of range.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::de::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: &str| {
            Err(ConfigError::Invalid {
                message: message.to_string(),
            })
        };

        if self.low_priority_issue_type.trim().is_empty() {
            return invalid("low_priority_issue_type must not be empty");
        }
        if self.search_radius_meters == 0 {
            return invalid("search_radius_meters must be positive");
        }
        if self.critical_keywords.is_empty() {
            return invalid("critical_keywords must not be empty");
        }
        if self.critical_keywords.iter().any(|k| k.trim().is_empty()) {
            return invalid("critical_keywords must not contain blank entries");
        }
        if !self.traffic_probe_offset_degrees.is_finite()
            || self.traffic_probe_offset_degrees <= 0.0
            || self.traffic_probe_offset_degrees >= MAX_PROBE_OFFSET_DEGREES
        {
            return invalid("traffic_probe_offset_degrees must be positive and below 1 degree");
        }
        if !self.traffic_anomaly_threshold.is_finite() || self.traffic_anomaly_threshold < 0.0 {
            return invalid("traffic_anomaly_threshold must be a non-negative number");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_is_valid() {
        let config = PriorityConfig::default();
        assert_eq!(config.low_priority_issue_type, "colony-work");
        assert_eq!(config.search_radius_meters, 5);
        assert_eq!(
            config.critical_keywords,
            [
                "hospital",
                "school",
                "police station",
                "bus station",
                "airport",
                "temple",
                "tourist attraction",
                "landmark",
            ]
        );
        assert!((config.traffic_probe_offset_degrees - 0.005).abs() < f64::EPSILON);
        assert!((config.traffic_anomaly_threshold - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_empty_keyword_list() {
        let toml = r#"
            low_priority_issue_type = "colony-work"
            search_radius_meters = 5
            critical_keywords = []
            traffic_probe_offset_degrees = 0.005
            traffic_anomaly_threshold = 0.25
        "#;
        assert!(matches!(
            PriorityConfig::from_toml(toml).unwrap_err(),
            ConfigError::Invalid { .. }
        ));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let base = PriorityConfig::default();

        let mut config = base.clone();
        config.search_radius_meters = 0;
        assert!(config.validate().is_err());

        let mut config = base.clone();
        config.traffic_probe_offset_degrees = 0.0;
        assert!(config.validate().is_err());

        let mut config = base.clone();
        config.traffic_probe_offset_degrees = 400.0;
        assert!(config.validate().is_err());

        let mut config = base.clone();
        config.traffic_probe_offset_degrees = MAX_PROBE_OFFSET_DEGREES;
        assert!(config.validate().is_err());

        let mut config = base.clone();
        config.traffic_anomaly_threshold = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = base;
        config.critical_keywords.push("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn reads_override_file() {
        let path = std::env::temp_dir().join(format!(
            "janawaaz_priority_config_{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"
                low_priority_issue_type = "garden-trimming"
                search_radius_meters = 250
                critical_keywords = ["fire station", "hospital"]
                traffic_probe_offset_degrees = 0.01
                traffic_anomaly_threshold = 0.5
            "#,
        )
        .unwrap();

        let config = PriorityConfig::from_file(&path).unwrap();
        assert_eq!(config.low_priority_issue_type, "garden-trimming");
        assert_eq!(config.search_radius_meters, 250);
        assert_eq!(config.critical_keywords, ["fire station", "hospital"]);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_override_file_is_io_error() {
        let path = std::env::temp_dir().join("janawaaz_priority_config_missing.toml");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            PriorityConfig::from_file(&path).unwrap_err(),
            ConfigError::Io(_)
        ));
    }
}

//! Maps provider settings read from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `GOOGLE_MAPS_API_KEY` | *(required)* |
//! | `GOOGLE_MAPS_BASE_URL` | `https://maps.googleapis.com/maps/api` |
//! | `MAPS_TIMEOUT_SECS` | `10` |

use std::time::Duration;

use crate::MapsError;

/// Default Google Maps Web Services root.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the maps provider.
#[derive(Debug, Clone)]
pub struct MapsConfig {
    /// API credential sent with every request.
    pub api_key: String,
    /// Service root, without a trailing slash.
    pub base_url: String,
    /// Timeout applied to every request; a timeout counts as a failed call.
    pub timeout: Duration,
}

impl MapsConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Config`] if `GOOGLE_MAPS_API_KEY` is unset or
    /// empty, or `MAPS_TIMEOUT_SECS` is not a positive integer.
    pub fn from_env() -> Result<Self, MapsError> {
        Self::from_lookup(|key: &str| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MapsError> {
        let api_key = lookup("GOOGLE_MAPS_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| MapsError::Config {
                message: "GOOGLE_MAPS_API_KEY environment variable not set".to_string(),
            })?;

        let base_url = lookup("GOOGLE_MAPS_BASE_URL")
            .filter(|u| !u.trim().is_empty())
            .map_or_else(
                || DEFAULT_BASE_URL.to_string(),
                |u| u.trim_end_matches('/').to_string(),
            );

        let timeout_secs = match lookup("MAPS_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| MapsError::Config {
                    message: format!("MAPS_TIMEOUT_SECS must be a positive integer, got '{raw}'"),
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn requires_api_key() {
        let err = MapsConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, MapsError::Config { .. }));

        let err = MapsConfig::from_lookup(lookup_from(&[("GOOGLE_MAPS_API_KEY", "  ")]))
            .unwrap_err();
        assert!(matches!(err, MapsError::Config { .. }));
    }

    #[test]
    fn applies_defaults() {
        let config =
            MapsConfig::from_lookup(lookup_from(&[("GOOGLE_MAPS_API_KEY", "key")])).unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn reads_overrides() {
        let config = MapsConfig::from_lookup(lookup_from(&[
            ("GOOGLE_MAPS_API_KEY", "key"),
            ("GOOGLE_MAPS_BASE_URL", "http://localhost:8081/maps/api/"),
            ("MAPS_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8081/maps/api");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn rejects_bad_timeout() {
        for raw in ["0", "soon", "-1"] {
            let err = MapsConfig::from_lookup(lookup_from(&[
                ("GOOGLE_MAPS_API_KEY", "key"),
                ("MAPS_TIMEOUT_SECS", raw),
            ]))
            .unwrap_err();
            assert!(matches!(err, MapsError::Config { .. }), "accepted {raw}");
        }
    }
}

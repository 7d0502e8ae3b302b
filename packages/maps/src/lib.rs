#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Outbound maps collaborators for complaint priority classification.
//!
//! The classifier needs three remote lookups:
//!
//! 1. **Nearby place search** ([`PlacesApi`]) — named places matching a
//!    keyword within a radius of a point.
//! 2. **Routing** ([`DirectionsApi`]) — driving duration between two
//!    points, optionally adjusted for live traffic.
//! 3. **Reverse geocoding** ([`GeocodingApi`]) — typed address components
//!    for a point.
//!
//! Each lookup is a trait so the classifier can be driven by any provider.
//! [`google::GoogleMapsClient`] implements all three against the Google
//! Maps Web Services.

pub mod config;
pub mod google;

use janawaaz_priority_models::Coordinates;
use thiserror::Error;

/// A named place returned by a nearby search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    /// Display name (e.g. "City General Hospital").
    pub name: String,
}

/// Whether a routing query should account for live traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficMode {
    /// Depart now using the provider's best-guess traffic model.
    Live,
    /// Free-flow travel time with no departure time.
    FreeFlow,
}

/// Durations of the first leg of the first route, in seconds.
///
/// Providers omit fields they cannot compute, so both are optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteDurations {
    /// Typical travel time without traffic.
    pub duration_secs: Option<u64>,
    /// Travel time adjusted for current traffic (only for [`TrafficMode::Live`]).
    pub duration_in_traffic_secs: Option<u64>,
}

/// One typed component of a reverse-geocoded address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressComponent {
    /// Full text of the component (e.g. "Bengaluru").
    pub long_name: String,
    /// Component types (e.g. `["locality", "political"]`).
    pub types: Vec<String>,
}

impl AddressComponent {
    /// Whether this component is tagged with `component_type`.
    #[must_use]
    pub fn has_type(&self, component_type: &str) -> bool {
        self.types.iter().any(|t| t == component_type)
    }
}

/// Errors from maps provider calls.
#[derive(Debug, Error)]
pub enum MapsError {
    /// HTTP request failed (connection, timeout, body decoding).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success HTTP status.
    #[error("Provider returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// Provider answered 200 but reported an error in its payload.
    #[error("Provider returned status {status}: {message}")]
    Api {
        /// Provider status string (e.g. `"REQUEST_DENIED"`).
        status: String,
        /// Provider error message, or empty.
        message: String,
    },

    /// Response parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },

    /// Client configuration is missing or invalid.
    #[error("Config error: {message}")]
    Config {
        /// Description of the configuration problem.
        message: String,
    },
}

impl MapsError {
    /// Whether the provider could not be reached at all (no response).
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}

/// Nearby place search.
#[async_trait::async_trait]
pub trait PlacesApi: Send + Sync {
    /// Returns places matching `keyword` within `radius_meters` of `at`,
    /// best match first.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError`] if the provider call fails.
    async fn nearby_search(
        &self,
        at: Coordinates,
        radius_meters: u32,
        keyword: &str,
    ) -> Result<Vec<Place>, MapsError>;
}

/// Driving route durations.
#[async_trait::async_trait]
pub trait DirectionsApi: Send + Sync {
    /// Returns the durations of the first route from `origin` to
    /// `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError`] if the provider call fails.
    async fn route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        traffic: TrafficMode,
    ) -> Result<RouteDurations, MapsError>;
}

/// Reverse geocoding.
#[async_trait::async_trait]
pub trait GeocodingApi: Send + Sync {
    /// Returns the address components of the best result for `at`, or an
    /// empty list when nothing is known about the point.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError`] if the provider call fails.
    async fn reverse_geocode(&self, at: Coordinates) -> Result<Vec<AddressComponent>, MapsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_component_type_lookup() {
        let component = AddressComponent {
            long_name: "Bengaluru".to_string(),
            types: vec!["locality".to_string(), "political".to_string()],
        };
        assert!(component.has_type("locality"));
        assert!(!component.has_type("route"));
    }

    #[test]
    fn non_http_errors_are_not_unreachable() {
        let err = MapsError::Status {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert!(!err.is_unreachable());
        let err = MapsError::Api {
            status: "OVER_QUERY_LIMIT".to_string(),
            message: String::new(),
        };
        assert!(!err.is_unreachable());
    }
}

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Complaint priority types.
//!
//! Defines the validated coordinate type, the three-level priority scale,
//! and the request/result shapes that flow through the classification
//! pipeline. These are plain data types with no I/O so they can be shared
//! by the maps clients, the classifier, and the API server.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Area name used when reverse geocoding yields no locality.
pub const DEFAULT_AREA_NAME: &str = "the surrounding area";

/// Place name reported when priority is raised by traffic congestion alone.
pub const TRAFFIC_PLACE_NAME: &str = "the surrounding roads";

/// High-priority reason reported for a traffic anomaly.
pub const HIGH_TRAFFIC_REASON: &str = "high traffic";

/// A WGS84 latitude/longitude pair in decimal degrees.
///
/// Only constructible through [`Coordinates::new`], which rejects
/// out-of-range and non-finite values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Creates a validated coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCoordinatesError`] if either component is not
    /// finite, latitude is outside `[-90, 90]`, or longitude is outside
    /// `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinatesError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinatesError::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinatesError::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns a point shifted by `delta` degrees on both axes.
    ///
    /// Latitude is clamped to the poles and longitude wraps across the
    /// antimeridian, so for any finite `delta` the result is a valid
    /// coordinate.
    #[must_use]
    pub fn offset_by(&self, delta: f64) -> Self {
        let latitude = (self.latitude + delta).clamp(-90.0, 90.0);
        let longitude = (self.longitude + delta + 180.0).rem_euclid(360.0) - 180.0;
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Error returned when a coordinate component is out of range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidCoordinatesError {
    /// Latitude not finite or outside `[-90, 90]`.
    Latitude(f64),
    /// Longitude not finite or outside `[-180, 180]`.
    Longitude(f64),
}

impl std::fmt::Display for InvalidCoordinatesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Latitude(v) => write!(f, "latitude {v} out of range [-90, 90]"),
            Self::Longitude(v) => write!(f, "longitude {v} out of range [-180, 180]"),
        }
    }
}

impl std::error::Error for InvalidCoordinatesError {}

/// Triage priority assigned to a complaint.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Priority {
    /// Near critical infrastructure or in congested traffic.
    High,
    /// Default for general complaints.
    Medium,
    /// Known minor residential work.
    Low,
}

/// A complaint to classify.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintPriorityRequest {
    /// Where the complaint was reported.
    pub coordinates: Coordinates,
    /// Free-form issue category chosen by the citizen (e.g. `"pothole"`).
    pub issue_type: String,
}

/// The first critical-infrastructure category found at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalPlaceMatch {
    /// The keyword that produced the match (e.g. `"hospital"`).
    pub matched_term: String,
    /// Display name of the top search result.
    pub place_name: String,
}

/// Outcome of comparing live-traffic and free-flow travel times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSignal {
    /// Whether congestion exceeded the anomaly threshold.
    pub is_anomalous: bool,
}

impl TrafficSignal {
    /// The signal used whenever travel times are unavailable.
    pub const NORMAL: Self = Self {
        is_anomalous: false,
    };
}

/// Final classification of a complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityResult {
    /// Assigned priority.
    pub priority: Priority,
    /// Short justification.
    pub reason: String,
    /// Why the complaint was escalated, when priority is [`Priority::High`].
    pub high_priority_reason: Option<String>,
    /// The place or road context that caused escalation.
    pub high_priority_place_name: Option<String>,
    /// Locality name, or [`DEFAULT_AREA_NAME`].
    pub area_name: String,
    /// Citizen-facing message summarizing the outcome.
    pub message: String,
}

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the complaint priority server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the pipeline types so the API contract can evolve independently.

use janawaaz_priority_models::{Coordinates, Priority, PriorityResult};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/complaints/priority`.
///
/// Every field is optional at the serde level so that a missing field is
/// reported as a validation error rather than a generic parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPriorityRequest {
    /// Latitude in decimal degrees.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    pub longitude: Option<f64>,
    /// Issue category (e.g. `"pothole"`, `"colony-work"`).
    pub issue_type: Option<String>,
}

/// A coordinate pair echoed back to the client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCoordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl From<Coordinates> for ApiCoordinates {
    fn from(c: Coordinates) -> Self {
        Self {
            latitude: c.latitude(),
            longitude: c.longitude(),
        }
    }
}

/// Successful classification response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPriorityResponse {
    /// Citizen-facing summary of the outcome.
    pub message: String,
    /// Assigned priority.
    pub priority: Priority,
    /// Where the complaint was reported.
    pub coordinates: ApiCoordinates,
    /// The issue type that was classified.
    pub issue: String,
}

impl ApiPriorityResponse {
    /// Builds the response for a classified complaint.
    #[must_use]
    pub fn new(result: PriorityResult, coordinates: Coordinates, issue: String) -> Self {
        Self {
            message: result.message,
            priority: result.priority,
            coordinates: coordinates.into(),
            issue,
        }
    }
}

/// Error body for 4xx/5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Short human-readable error.
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Complaint priority classification.
//!
//! Decides whether a citizen complaint is High, Medium, or Low priority
//! from three location signals:
//!
//! - [`critical_place::CriticalPlaceDetector`] — is the complaint at a
//!   hospital, school, police station, or other critical infrastructure?
//! - [`traffic::TrafficAnomalyDetector`] — is traffic around it heavily
//!   congested right now?
//! - [`area::AreaNameResolver`] — which locality is it in, for the
//!   citizen-facing message?
//!
//! [`classifier::PriorityClassifier`] runs them in order and assembles the
//! [`PriorityResult`](janawaaz_priority_models::PriorityResult). The policy
//! constants live in [`config::PriorityConfig`].

pub mod area;
pub mod classifier;
pub mod config;
pub mod critical_place;
pub mod traffic;

#[cfg(test)]
mod fakes;

pub use classifier::PriorityClassifier;
pub use config::{ConfigError, PriorityConfig};

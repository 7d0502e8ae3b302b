//! Critical-infrastructure proximity detection.
//!
//! Keywords are searched one at a time in precedence order and the loop
//! stops at the first keyword with a named result. A later keyword is
//! never queried once an earlier one matched, even if it would have been
//! the stronger signal.

use std::sync::Arc;

use janawaaz_maps::PlacesApi;
use janawaaz_priority_models::{Coordinates, CriticalPlaceMatch};

/// Finds the highest-precedence critical place at a location.
pub struct CriticalPlaceDetector {
    places: Arc<dyn PlacesApi>,
    keywords: Vec<String>,
    radius_meters: u32,
}

impl CriticalPlaceDetector {
    /// Creates a detector searching `keywords` in order within
    /// `radius_meters`.
    #[must_use]
    pub fn new(places: Arc<dyn PlacesApi>, keywords: Vec<String>, radius_meters: u32) -> Self {
        Self {
            places,
            keywords,
            radius_meters,
        }
    }

    /// Returns the first keyword with a nearby result, paired with that
    /// result's name.
    ///
    /// A failed search counts as no match for that keyword and the next
    /// keyword is tried.
    pub async fn detect(&self, at: Coordinates) -> Option<CriticalPlaceMatch> {
        for keyword in &self.keywords {
            let places = match self
                .places
                .nearby_search(at, self.radius_meters, keyword)
                .await
            {
                Ok(places) => places,
                Err(e) => {
                    log::warn!("Place search for '{keyword}' near {at} failed: {e}");
                    continue;
                }
            };

            let Some(top) = places.into_iter().find(|p| !p.name.trim().is_empty()) else {
                log::debug!("No '{keyword}' within {}m of {at}", self.radius_meters);
                continue;
            };

            log::debug!("Matched '{keyword}' near {at}: {}", top.name);
            return Some(CriticalPlaceMatch {
                matched_term: keyword.clone(),
                place_name: top.name,
            });
        }

        None
    }
}

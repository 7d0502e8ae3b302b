//! Locality naming for complaint messages.

use std::sync::Arc;

use janawaaz_maps::GeocodingApi;
use janawaaz_priority_models::{Coordinates, DEFAULT_AREA_NAME};

/// Address component type that names a town or neighborhood.
const LOCALITY: &str = "locality";

/// Resolves a human-readable area name for a location.
pub struct AreaNameResolver {
    geocoder: Arc<dyn GeocodingApi>,
}

impl AreaNameResolver {
    /// Creates a resolver backed by `geocoder`.
    #[must_use]
    pub fn new(geocoder: Arc<dyn GeocodingApi>) -> Self {
        Self { geocoder }
    }

    /// Returns the locality name at `at`, or [`DEFAULT_AREA_NAME`] if the
    /// lookup fails or finds no locality.
    pub async fn resolve(&self, at: Coordinates) -> String {
        let components = match self.geocoder.reverse_geocode(at).await {
            Ok(components) => components,
            Err(e) => {
                log::warn!("Reverse geocoding {at} failed: {e}");
                return DEFAULT_AREA_NAME.to_string();
            }
        };

        components
            .into_iter()
            .find(|c| c.has_type(LOCALITY) && !c.long_name.trim().is_empty())
            .map_or_else(
                || {
                    log::debug!("No locality for {at}");
                    DEFAULT_AREA_NAME.to_string()
                },
                |c| c.long_name,
            )
    }
}

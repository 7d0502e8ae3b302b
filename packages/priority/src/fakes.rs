//! In-memory maps collaborators for pipeline tests.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use janawaaz_maps::{
    AddressComponent, DirectionsApi, GeocodingApi, MapsError, Place, PlacesApi, RouteDurations,
    TrafficMode,
};
use janawaaz_priority_models::Coordinates;

pub fn upstream_down() -> MapsError {
    MapsError::Status {
        status: 503,
        body: "upstream unavailable".to_string(),
    }
}

/// Keyword -> canned places. Keywords not in the map return no results.
#[derive(Default)]
pub struct FakePlaces {
    results: BTreeMap<String, Vec<String>>,
    failing: Vec<String>,
    fail_all: bool,
    searched: Mutex<Vec<String>>,
}

impl FakePlaces {
    pub fn with(mut self, keyword: &str, names: &[&str]) -> Self {
        self.results.insert(
            keyword.to_string(),
            names.iter().map(|n| (*n).to_string()).collect(),
        );
        self
    }

    pub fn failing_on(mut self, keyword: &str) -> Self {
        self.failing.push(keyword.to_string());
        self
    }

    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.searched.lock().unwrap().len()
    }

    pub fn searched(&self) -> Vec<String> {
        self.searched.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PlacesApi for FakePlaces {
    async fn nearby_search(
        &self,
        _at: Coordinates,
        _radius_meters: u32,
        keyword: &str,
    ) -> Result<Vec<Place>, MapsError> {
        self.searched.lock().unwrap().push(keyword.to_string());
        if self.fail_all || self.failing.iter().any(|k| k == keyword) {
            return Err(upstream_down());
        }
        Ok(self
            .results
            .get(keyword)
            .map(|names| {
                names
                    .iter()
                    .map(|name| Place { name: name.clone() })
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// Returns fixed durations per traffic mode.
pub struct FakeDirections {
    live: Result<RouteDurations, ()>,
    free_flow: Result<RouteDurations, ()>,
    calls: AtomicUsize,
}

impl FakeDirections {
    /// Free-flow leg of `base` seconds and a live leg of `traffic` seconds.
    pub const fn with_durations(base: u64, traffic: u64) -> Self {
        Self {
            live: Ok(RouteDurations {
                duration_secs: Some(base),
                duration_in_traffic_secs: Some(traffic),
            }),
            free_flow: Ok(RouteDurations {
                duration_secs: Some(base),
                duration_in_traffic_secs: None,
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub const fn with_responses(live: RouteDurations, free_flow: RouteDurations) -> Self {
        Self {
            live: Ok(live),
            free_flow: Ok(free_flow),
            calls: AtomicUsize::new(0),
        }
    }

    pub const fn failing() -> Self {
        Self {
            live: Err(()),
            free_flow: Err(()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Live query fails, free-flow query succeeds.
    pub const fn failing_live(base: u64) -> Self {
        Self {
            live: Err(()),
            free_flow: Ok(RouteDurations {
                duration_secs: Some(base),
                duration_in_traffic_secs: None,
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl DirectionsApi for FakeDirections {
    async fn route(
        &self,
        _origin: Coordinates,
        _destination: Coordinates,
        traffic: TrafficMode,
    ) -> Result<RouteDurations, MapsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let response = match traffic {
            TrafficMode::Live => self.live,
            TrafficMode::FreeFlow => self.free_flow,
        };
        response.map_err(|()| upstream_down())
    }
}

/// Returns a fixed component list, or fails.
pub struct FakeGeocoder {
    components: Option<Vec<AddressComponent>>,
    calls: AtomicUsize,
}

impl FakeGeocoder {
    pub fn with_locality(name: &str) -> Self {
        Self::with_components(vec![
            AddressComponent {
                long_name: "MG Road".to_string(),
                types: vec!["route".to_string()],
            },
            AddressComponent {
                long_name: name.to_string(),
                types: vec!["locality".to_string(), "political".to_string()],
            },
        ])
    }

    pub const fn with_components(components: Vec<AddressComponent>) -> Self {
        Self {
            components: Some(components),
            calls: AtomicUsize::new(0),
        }
    }

    pub const fn failing() -> Self {
        Self {
            components: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl GeocodingApi for FakeGeocoder {
    async fn reverse_geocode(&self, _at: Coordinates) -> Result<Vec<AddressComponent>, MapsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.components.clone().ok_or_else(upstream_down)
    }
}

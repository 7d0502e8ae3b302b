//! Google Maps Web Services client.
//!
//! Implements [`PlacesApi`], [`DirectionsApi`], and [`GeocodingApi`]
//! against:
//!
//! - `GET {base}/place/nearbysearch/json`
//! - `GET {base}/directions/json`
//! - `GET {base}/geocode/json`
//!
//! Every response carries a top-level `status`. `OK` and `ZERO_RESULTS`
//! are successes; anything else (`REQUEST_DENIED`, `OVER_QUERY_LIMIT`,
//! `INVALID_REQUEST`, ...) is reported as [`MapsError::Api`].
//!
//! See <https://developers.google.com/maps/documentation>

use crate::config::MapsConfig;
use crate::{
    AddressComponent, DirectionsApi, GeocodingApi, MapsError, Place, PlacesApi, RouteDurations,
    TrafficMode,
};
use janawaaz_priority_models::Coordinates;

/// HTTP client for the Google Maps Web Services.
pub struct GoogleMapsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GoogleMapsClient {
    /// Builds a client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Http`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: MapsConfig) -> Result<Self, MapsError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("janawaaz/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Issues a `GET` against `{base}/{path}` and returns the JSON body.
    async fn get_json(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<serde_json::Value, MapsError> {
        let url = format!("{}/{path}", self.base_url);
        log::trace!("GET {url} {params:?}");

        let resp = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            log::debug!("{path} returned HTTP {status}");
            return Err(MapsError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json().await?)
    }
}

#[async_trait::async_trait]
impl PlacesApi for GoogleMapsClient {
    async fn nearby_search(
        &self,
        at: Coordinates,
        radius_meters: u32,
        keyword: &str,
    ) -> Result<Vec<Place>, MapsError> {
        let params = nearby_params(at, radius_meters, keyword);
        let body = self.get_json("place/nearbysearch/json", &params).await?;
        parse_nearby_search(&body)
    }
}

#[async_trait::async_trait]
impl DirectionsApi for GoogleMapsClient {
    async fn route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        traffic: TrafficMode,
    ) -> Result<RouteDurations, MapsError> {
        let params = route_params(origin, destination, traffic);
        let body = self.get_json("directions/json", &params).await?;
        parse_directions(&body)
    }
}

#[async_trait::async_trait]
impl GeocodingApi for GoogleMapsClient {
    async fn reverse_geocode(&self, at: Coordinates) -> Result<Vec<AddressComponent>, MapsError> {
        let body = self
            .get_json("geocode/json", &[("latlng", at.to_string())])
            .await?;
        parse_reverse_geocode(&body)
    }
}

/// Query parameters for a keyword search around `at`.
fn nearby_params(
    at: Coordinates,
    radius_meters: u32,
    keyword: &str,
) -> Vec<(&'static str, String)> {
    vec![
        ("location", at.to_string()),
        ("radius", radius_meters.to_string()),
        ("keyword", keyword.to_string()),
    ]
}

/// Query parameters for a driving route.
///
/// Only live requests carry `departure_time`; without it Google omits
/// `duration_in_traffic`.
fn route_params(
    origin: Coordinates,
    destination: Coordinates,
    traffic: TrafficMode,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("origin", origin.to_string()),
        ("destination", destination.to_string()),
        ("mode", "driving".to_string()),
    ];
    if traffic == TrafficMode::Live {
        params.push(("departure_time", "now".to_string()));
        params.push(("traffic_model", "best_guess".to_string()));
    }
    params
}

/// Fails with [`MapsError::Api`] unless `status` is `OK` or `ZERO_RESULTS`.
fn check_status(body: &serde_json::Value) -> Result<(), MapsError> {
    let status = body
        .get("status")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| MapsError::Parse {
            message: "Response missing 'status'".to_string(),
        })?;

    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        other => Err(MapsError::Api {
            status: other.to_string(),
            message: body
                .get("error_message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_string(),
        }),
    }
}

/// Parses a nearby search response into places, preserving result order.
fn parse_nearby_search(body: &serde_json::Value) -> Result<Vec<Place>, MapsError> {
    check_status(body)?;

    let Some(results) = body.get("results").and_then(serde_json::Value::as_array) else {
        return Ok(Vec::new());
    };

    Ok(results
        .iter()
        .filter_map(|r| r.get("name").and_then(serde_json::Value::as_str))
        .map(|name| Place {
            name: name.to_string(),
        })
        .collect())
}

/// Parses the first leg of the first route.
///
/// Missing routes, legs, or durations yield `None` fields rather than
/// errors; the caller decides what an absent duration means.
fn parse_directions(body: &serde_json::Value) -> Result<RouteDurations, MapsError> {
    check_status(body)?;

    let Some(leg) = body.pointer("/routes/0/legs/0") else {
        return Ok(RouteDurations::default());
    };

    Ok(RouteDurations {
        duration_secs: leg
            .pointer("/duration/value")
            .and_then(serde_json::Value::as_u64),
        duration_in_traffic_secs: leg
            .pointer("/duration_in_traffic/value")
            .and_then(serde_json::Value::as_u64),
    })
}

/// Parses the address components of the first reverse-geocoding result.
fn parse_reverse_geocode(body: &serde_json::Value) -> Result<Vec<AddressComponent>, MapsError> {
    check_status(body)?;

    let Some(components) = body
        .pointer("/results/0/address_components")
        .and_then(serde_json::Value::as_array)
    else {
        return Ok(Vec::new());
    };

    Ok(components
        .iter()
        .filter_map(|c| {
            let long_name = c.get("long_name")?.as_str()?.to_string();
            let types = c
                .get("types")
                .and_then(serde_json::Value::as_array)
                .map(|ts| {
                    ts.iter()
                        .filter_map(serde_json::Value::as_str)
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default();
            Some(AddressComponent { long_name, types })
        })
        .collect())
}

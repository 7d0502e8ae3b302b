#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for complaint priority classification.
//!
//! Exposes `POST /api/complaints/priority`, which classifies a citizen
//! complaint as High, Medium, or Low priority from its location and issue
//! type, plus liveness (`/api/health`) and maps-provider readiness
//! (`/api/health/upstream`) probes.

pub mod error;
mod handlers;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use janawaaz_maps::GeocodingApi;
use janawaaz_maps::config::MapsConfig;
use janawaaz_maps::google::GoogleMapsClient;
use janawaaz_priority::{PriorityClassifier, PriorityConfig};

/// Shared application state.
pub struct AppState {
    /// The classification pipeline, shared by every worker.
    pub classifier: Arc<PriorityClassifier>,
    /// Geocoder used by the upstream readiness probe.
    pub geocoder: Arc<dyn GeocodingApi>,
}

/// Registers the `/api` routes and JSON error handling.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handlers::json_error))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(handlers::health))
                .route("/health/upstream", web::get().to(handlers::upstream_health))
                .route(
                    "/complaints/priority",
                    web::post().to(handlers::classify_priority),
                ),
        );
}

/// Starts the complaint priority API server.
///
/// Loads the priority policy and maps provider settings, builds the
/// classifier, and starts the Actix-Web HTTP server. The caller is
/// responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Error` if configuration is missing or invalid, or
/// the HTTP server fails to bind or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    log::info!("Loading priority config...");
    let config = PriorityConfig::load().map_err(|e| {
        log::error!("Failed to load priority config: {e}");
        std::io::Error::other(e)
    })?;

    log::info!("Creating maps client...");
    let maps = MapsConfig::from_env()
        .and_then(GoogleMapsClient::new)
        .map(Arc::new)
        .map_err(|e| {
            log::error!("Failed to create maps client: {e}");
            std::io::Error::other(e)
        })?;

    log::info!(
        "Critical keywords: {} (radius {}m), traffic threshold {}",
        config.critical_keywords.join(", "),
        config.search_radius_meters,
        config.traffic_anomaly_threshold
    );

    let state = web::Data::new(AppState {
        classifier: Arc::new(PriorityClassifier::new(
            &config,
            maps.clone(),
            maps.clone(),
            maps.clone(),
        )),
        geocoder: maps,
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure_api)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}

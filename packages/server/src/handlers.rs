//! HTTP handler functions for the complaint priority API.

use actix_web::{HttpRequest, HttpResponse, error::JsonPayloadError, web};
use janawaaz_priority_models::{ComplaintPriorityRequest, Coordinates};
use janawaaz_server_models::{ApiHealth, ApiPriorityRequest, ApiPriorityResponse};

use crate::AppState;
use crate::error::ServerError;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(healthy())
}

/// `GET /api/health/upstream`
///
/// Reverse-geocodes a fixed point to check that the maps provider is
/// reachable and accepts our credentials.
pub async fn upstream_health(state: web::Data<AppState>) -> Result<HttpResponse, ServerError> {
    let probe = Coordinates::new(28.6139, 77.2090)
        .map_err(|e| ServerError::Internal(format!("Invalid probe point: {e}")))?;

    state.geocoder.reverse_geocode(probe).await?;

    Ok(HttpResponse::Ok().json(healthy()))
}

/// `POST /api/complaints/priority`
///
/// Validates the complaint location and issue type, then runs the
/// priority classification pipeline.
pub async fn classify_priority(
    state: web::Data<AppState>,
    body: web::Json<ApiPriorityRequest>,
) -> Result<HttpResponse, ServerError> {
    let request = validate(body.into_inner())?;

    let classifier = state.classifier.clone();
    let coordinates = request.coordinates;
    let (result, request) = tokio::spawn(async move {
        let result = classifier.classify(&request).await;
        (result, request)
    })
    .await
    .map_err(|e| ServerError::Internal(format!("Classification task failed: {e}")))?;

    Ok(HttpResponse::Ok().json(ApiPriorityResponse::new(
        result,
        coordinates,
        request.issue_type,
    )))
}

/// Turns JSON body extraction failures into `400 { "error": ... }`.
pub fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ServerError::Validation(format!("Invalid request body: {err}")).into()
}

fn healthy() -> ApiHealth {
    ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Checks that every field is present and the coordinates are in range.
fn validate(body: ApiPriorityRequest) -> Result<ComplaintPriorityRequest, ServerError> {
    let (Some(latitude), Some(longitude)) = (body.latitude, body.longitude) else {
        return Err(ServerError::Validation(
            "latitude and longitude are required".to_string(),
        ));
    };

    let issue_type = body
        .issue_type
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ServerError::Validation("issueType is required".to_string()))?;

    let coordinates = Coordinates::new(latitude, longitude)
        .map_err(|e| ServerError::Validation(format!("Invalid coordinates: {e}")))?;

    Ok(ComplaintPriorityRequest {
        coordinates,
        issue_type,
    })
}

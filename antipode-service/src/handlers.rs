//! HTTP request handlers for the antipode service.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use antipode::{antipode, Coordinate, PlaceSummary};

use crate::AppState;

/// Query parameters for the antipode endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct AntipodeQuery {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

/// One side of the response: a coordinate and its nearby places.
#[derive(Debug, Serialize, ToSchema)]
pub struct SidePayload {
    /// Latitude of this side.
    pub lat: f64,
    /// Longitude of this side.
    pub lon: f64,
    /// Nearby notable places; empty when nothing was found or the lookup
    /// failed (the two cases are indistinguishable here).
    pub info: Vec<PlaceSummary>,
}

/// Successful antipode response.
#[derive(Debug, Serialize, ToSchema)]
pub struct AntipodeResponse {
    /// The queried coordinate and its nearby places.
    pub origin: SidePayload,
    /// The antipodal coordinate and its nearby places.
    pub antipode: SidePayload,
}

/// Error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Compute the antipode of the given coordinates and describe both points.
///
/// # Query Parameters
///
/// - `lat`: Latitude in decimal degrees
/// - `lon`: Longitude in decimal degrees
///
/// # Returns
///
/// - `200 OK` with the origin and antipode coordinates, each with up to
///   five nearby notable places
/// - `400 Bad Request` if either parameter is missing or non-numeric
#[utoipa::path(
    get,
    path = "/api/antipode",
    params(AntipodeQuery),
    responses(
        (status = 200, description = "Origin and antipode with nearby places", body = AntipodeResponse),
        (status = 400, description = "Missing or non-numeric coordinates", body = ErrorResponse)
    ),
    tag = "antipode"
)]
#[axum::debug_handler]
pub async fn get_antipode(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AntipodeQuery>, QueryRejection>,
) -> impl IntoResponse {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(lat = query.lat, lon = query.lon, "Antipode query");

    let (antipode_lat, antipode_lon) = antipode(query.lat, query.lon);

    // The two lookups run sequentially: origin first, then antipode.
    let origin_info = lookup_or_empty(&state, Coordinate::new(query.lat, query.lon)).await;
    let antipode_info = lookup_or_empty(&state, Coordinate::new(antipode_lat, antipode_lon)).await;

    tracing::info!(
        lat = query.lat,
        lon = query.lon,
        antipode_lat = antipode_lat,
        antipode_lon = antipode_lon,
        origin_places = origin_info.len(),
        antipode_places = antipode_info.len(),
        "Antipode computed"
    );

    (
        StatusCode::OK,
        Json(AntipodeResponse {
            origin: SidePayload {
                lat: query.lat,
                lon: query.lon,
                info: origin_info,
            },
            antipode: SidePayload {
                lat: antipode_lat,
                lon: antipode_lon,
                info: antipode_info,
            },
        }),
    )
        .into_response()
}

/// Run a place lookup, degrading failures to an empty list.
///
/// Upstream errors never fail the request; the caller of the API cannot
/// distinguish a failed lookup from a coordinate with no nearby entries.
async fn lookup_or_empty(state: &AppState, coord: Coordinate) -> Vec<PlaceSummary> {
    match state.lookup.places_near(coord).await {
        Ok(places) => places,
        Err(e) => {
            tracing::warn!(
                lat = coord.lat,
                lon = coord.lon,
                error = %e,
                "Place lookup failed"
            );
            Vec::new()
        }
    }
}

/// Health check endpoint.
///
/// Returns service status and version.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "system"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_antipode_query_deserialize() {
        let json = r#"{"lat": 40.7, "lon": -74.0}"#;
        let query: AntipodeQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.lat, 40.7);
        assert_eq!(query.lon, -74.0);
    }

    #[test]
    fn test_antipode_response_serialize() {
        let response = AntipodeResponse {
            origin: SidePayload {
                lat: 40.7,
                lon: -74.0,
                info: Vec::new(),
            },
            antipode: SidePayload {
                lat: -40.7,
                lon: 106.0,
                info: Vec::new(),
            },
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"origin\""));
        assert!(json.contains("\"antipode\""));
        assert!(json.contains("106"));
    }

    #[test]
    fn test_health_response_serialize() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("0.1.0"));
    }
}

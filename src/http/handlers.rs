//! HTTP handlers for the REST API.
//!
//! Each handler parses and validates query parameters, delegates to the
//! qibla service or an upstream client, and serializes a JSON response.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};

use super::dto::{
    CoordsQuery, HealthResponse, Mosque, PrayerSchedule, PrayerTimesQuery, QiblaResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::services::qibla;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Landing page served at `GET /`.
const INDEX_HTML: &str = include_str!("index.html");

// =============================================================================
// Landing Page & Health Check
// =============================================================================

/// GET /
pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

// =============================================================================
// Qibla Bearing
// =============================================================================

/// GET /api/qibla?lat=..&lng=..
///
/// Compute the great-circle bearing from the caller's coordinates to the
/// Kaaba. Purely local; no upstream call.
pub async fn qibla(Query(query): Query<CoordsQuery>) -> HandlerResult<QiblaResponse> {
    let observer = query
        .observer()
        .ok_or_else(|| AppError::BadRequest("Missing lat/lng".to_string()))?;

    Ok(Json(QiblaResponse {
        bearing_deg: qibla::bearing_to_kaaba(observer),
    }))
}

// =============================================================================
// Nearest Mosque
// =============================================================================

/// GET /api/nearest_mosque?lat=..&lng=..
///
/// Proxy a distance-ranked places search and return the first result. The
/// configured API key is required; without it the request is rejected
/// before any upstream call.
pub async fn nearest_mosque(
    State(state): State<AppState>,
    Query(query): Query<CoordsQuery>,
) -> HandlerResult<Mosque> {
    let observer = query.observer();
    let api_key = state.config.google_maps_api_key.as_deref();
    let (observer, api_key) = match (observer, api_key) {
        (Some(observer), Some(api_key)) => (observer, api_key),
        _ => {
            return Err(AppError::BadRequest(
                "Missing lat/lng or GOOGLE_MAPS_API_KEY".to_string(),
            ))
        }
    };

    let mosque = state
        .places
        .nearest_mosque(api_key, observer)
        .await?
        .ok_or_else(|| AppError::NotFound("No mosques found nearby".to_string()))?;

    Ok(Json(mosque))
}

// =============================================================================
// Prayer Times
// =============================================================================

/// GET /api/prayer_times?lat=..&lng=..&method=2&school=0
///
/// Location-based prayer times from AlAdhan (calculated adhan times).
/// Note: masjid iqama times can differ.
pub async fn prayer_times(
    State(state): State<AppState>,
    Query(query): Query<PrayerTimesQuery>,
) -> HandlerResult<PrayerSchedule> {
    let observer = query
        .coords()
        .observer()
        .ok_or_else(|| AppError::BadRequest("Missing lat/lng".to_string()))?;
    let method = query.method_code().unwrap_or(2); // 2 = ISNA
    let school = query.school_code().unwrap_or(0); // 0 = Shafi, 1 = Hanafi

    let schedule = state.prayer_times.timings(observer, method, school).await?;

    Ok(Json(schedule))
}

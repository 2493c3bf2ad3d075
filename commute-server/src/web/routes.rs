//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use tower_http::services::ServeDir;

use crate::display::build_display;
use crate::motis::{GeocodeMatch, Location, MotisError};
use crate::network::{LineCode, StationId};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `icons_dir` is the path to the static line icon assets.
pub fn create_router(state: AppState, icons_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/geocode", get(geocode))
        .route("/api/lines", get(list_lines))
        .route("/api/lines/:id", get(line_detail))
        .route("/api/plan", get(plan_summaries))
        .route("/api/plan/:index", get(route_detail))
        .nest_service("/icons", ServeDir::new(icons_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Geocode free text to candidate locations.
async fn geocode(
    State(state): State<AppState>,
    Query(query): Query<GeocodeQuery>,
) -> Result<Json<Vec<GeocodeMatch>>, (StatusCode, String)> {
    let matches = state
        .motis
        .client()
        .geocode(&query.text)
        .await
        .map_err(upstream_error)?;

    Ok(Json(matches))
}

/// List all lines.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let lines = state
        .catalog
        .lines()
        .iter()
        .map(LineSummary::from_line)
        .collect();

    Json(LinesResponse { lines })
}

/// One line with its stations and resolved cross-line relations.
async fn line_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LineDetailResponse>, (StatusCode, String)> {
    let code = LineCode::parse(&id)
        .map_err(|_| (StatusCode::NOT_FOUND, "Line not found".to_string()))?;

    let line = state
        .catalog
        .line(code)
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Line not found".to_string()))?;

    Ok(Json(LineDetailResponse::from_line(line, &state.catalog)))
}

/// Plan and summarize the itineraries for a from/to pair.
async fn plan_summaries(
    State(state): State<AppState>,
    Query(query): Query<PlanQuery>,
) -> Result<Json<PlanSummaryResponse>, (StatusCode, String)> {
    let (from, to) = locations_from_query(&query)?;
    let plan = state.motis.plan(&from, &to).await.map_err(upstream_error)?;

    let itineraries = plan
        .itineraries
        .iter()
        .map(ItinerarySummary::from_itinerary)
        .collect();

    Ok(Json(PlanSummaryResponse { itineraries }))
}

/// Normalized display segments for one itinerary.
async fn route_detail(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Query(query): Query<PlanQuery>,
) -> Result<Json<RouteDetailResponse>, (StatusCode, String)> {
    let (from, to) = locations_from_query(&query)?;
    let plan = state.motis.plan(&from, &to).await.map_err(upstream_error)?;

    let itinerary = plan
        .itineraries
        .get(index)
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Route not found".to_string()))?;

    let segments = build_display(&state.catalog, itinerary, &to);

    Ok(Json(RouteDetailResponse {
        start_time: itinerary.start_time.map(|t| t.to_rfc3339()),
        end_time: itinerary.end_time.map(|t| t.to_rfc3339()),
        duration_secs: itinerary.duration,
        transfers: itinerary.transfers,
        segments: segments.iter().map(SegmentResult::from_segment).collect(),
    }))
}

/// Build the origin/destination locations from query parameters.
fn locations_from_query(query: &PlanQuery) -> Result<(Location, Location), (StatusCode, String)> {
    let from = location(
        query.from_lat,
        query.from_lng,
        query.from_name.clone(),
        query.from_id.as_deref(),
    )?;
    let to = location(
        query.to_lat,
        query.to_lng,
        query.to_name.clone(),
        query.to_id.as_deref(),
    )?;
    Ok((from, to))
}

fn location(
    lat: f64,
    lng: f64,
    name: Option<String>,
    id: Option<&str>,
) -> Result<Location, (StatusCode, String)> {
    if !lat.is_finite() || !lng.is_finite() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Invalid route parameters".to_string(),
        ));
    }

    let station = match id {
        Some(id) => Some(StationId::parse(id).map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                "Invalid route parameters".to_string(),
            )
        })?),
        None => None,
    };

    Ok(Location {
        lat,
        lng,
        name: name.filter(|n| !n.is_empty()),
        station,
    })
}

/// Map an upstream engine failure onto a response.
fn upstream_error(err: MotisError) -> (StatusCode, String) {
    let status = match err {
        MotisError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        _ => StatusCode::BAD_GATEWAY,
    };
    (status, "Failed to load route".to_string())
}

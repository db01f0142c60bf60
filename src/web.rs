//! HTTP surface of the viewer: the map page, a JSON check endpoint and a
//! health probe.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::check::BoundaryChecker;
use crate::config::MapConfig;
use crate::geocode::Geocoder;
use crate::models::{BoundaryCheckResult, SchoolRecord};
use crate::render::{build_map, IconMap};

/// Read-only state shared across handlers
pub struct AppState<G> {
    pub checker: BoundaryChecker,
    pub schools: Vec<SchoolRecord>,
    pub icons: IconMap,
    pub map: MapConfig,
    pub geocoder: G,
}

pub fn router<G: Geocoder + 'static>(state: Arc<AppState<G>>) -> Router {
    Router::new()
        .route("/", get(map_handler::<G>))
        .route("/health", get(health_handler::<G>))
        .route("/v1/check", get(check_handler::<G>))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Deserialize)]
struct CheckQueryParams {
    /// Free-form address
    address: Option<String>,
}

impl CheckQueryParams {
    /// The address, or None when missing or blank
    fn address(&self) -> Option<&str> {
        self.address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}

#[derive(Serialize)]
struct CheckResponse {
    #[serde(flatten)]
    result: BoundaryCheckResult,
    message: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    schools: usize,
}

/// Map page; runs a boundary check when `address` is given
async fn map_handler<G: Geocoder>(
    State(state): State<Arc<AppState<G>>>,
    Query(params): Query<CheckQueryParams>,
) -> Result<Html<String>, (StatusCode, String)> {
    let result = match params.address() {
        Some(address) => Some(state.checker.check(&state.geocoder, address).await),
        None => None,
    };

    let page = build_map(
        &state.map,
        state.checker.boundary(),
        &state.schools,
        &state.icons,
        result.as_ref(),
    )
    .and_then(|view| view.render())
    .map_err(|e| {
        tracing::error!("Map rendering failed: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Html(page))
}

/// JSON boundary check
async fn check_handler<G: Geocoder>(
    State(state): State<Arc<AppState<G>>>,
    Query(params): Query<CheckQueryParams>,
) -> Result<Json<CheckResponse>, (StatusCode, String)> {
    let address = params
        .address()
        .ok_or((StatusCode::BAD_REQUEST, "address is required".to_string()))?;

    let result = state.checker.check(&state.geocoder, address).await;
    let message = result.message();
    Ok(Json(CheckResponse { result, message }))
}

async fn health_handler<G: Geocoder>(State(state): State<Arc<AppState<G>>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        schools: state.schools.len(),
    })
}

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde_json::json;
use tracing::warn;

use super::service::{SimulationRequest, SimulationService};
use super::simulator::SimulationError;

/// Router builder exposing the catalog, dashboard and simulation endpoints.
pub fn simulation_router(service: Arc<SimulationService>) -> Router {
    Router::new()
        .route("/api/v1/indicators", get(indicators_handler))
        .route("/api/v1/scenarios", get(scenarios_handler))
        .route("/api/v1/dashboard", get(dashboard_handler))
        .route("/api/v1/simulate", post(simulate_handler))
        .with_state(service)
}

pub(crate) async fn indicators_handler(
    State(service): State<Arc<SimulationService>>,
) -> Response {
    Json(service.indicators()).into_response()
}

pub(crate) async fn scenarios_handler(State(service): State<Arc<SimulationService>>) -> Response {
    Json(service.scenarios()).into_response()
}

pub(crate) async fn dashboard_handler(State(service): State<Arc<SimulationService>>) -> Response {
    Json(service.dashboard()).into_response()
}

pub(crate) async fn simulate_handler(
    State(service): State<Arc<SimulationService>>,
    Json(request): Json<SimulationRequest>,
) -> Response {
    let today = Local::now().date_naive();
    match service.report(&request, today) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error @ SimulationError::UnknownScenario(_)) => {
            warn!(scenario = %request.scenario, "rejected simulation for unknown scenario");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}

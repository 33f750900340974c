use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

use crate::config::SimulationConfig;
use crate::simulation::indicators::{
    CARBON_EMISSIONS, EMPLOYMENT, GDP_GROWTH, INNOVATION_INDEX, LITERACY, MSME_GROWTH,
};
use crate::simulation::{IndicatorSet, PolicySimulator, SimulationService};

pub(super) const TOLERANCE: f64 = 1e-9;

pub(super) fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub(super) fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid start date")
}

pub(super) fn indicator_set(
    gdp_growth: f64,
    employment: f64,
    literacy: f64,
    carbon_emissions: f64,
    innovation_index: f64,
    msme_growth: f64,
) -> IndicatorSet {
    [
        (GDP_GROWTH, gdp_growth),
        (EMPLOYMENT, employment),
        (LITERACY, literacy),
        (CARBON_EMISSIONS, carbon_emissions),
        (INNOVATION_INDEX, innovation_index),
        (MSME_GROWTH, msme_growth),
    ]
    .into_iter()
    .collect()
}

pub(super) fn best_case() -> IndicatorSet {
    indicator_set(10.0, 100.0, 100.0, 0.0, 50.0, 20.0)
}

pub(super) fn baseline() -> IndicatorSet {
    indicator_set(6.8, 94.2, 77.7, 2.65, 36.8, 12.5)
}

pub(super) fn service_with_seed(seed: Option<u64>) -> Arc<SimulationService> {
    let config = SimulationConfig {
        rng_seed: seed,
        ..SimulationConfig::default()
    };
    Arc::new(SimulationService::new(
        Arc::new(PolicySimulator::standard()),
        config,
    ))
}

pub(super) async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    (status, serde_json::from_slice(&body).expect("json payload"))
}

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::advisory::{recommendations, RiskAssessment};
use super::impact::Intensity;
use super::indicators::{Indicator, IndicatorSet};
use super::scenario::ScenarioSummary;
use super::simulator::{PolicySimulator, SimulationError, SimulationOutcome};
use crate::config::SimulationConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub scenario: String,
    #[serde(default)]
    pub intensity: Option<f64>,
}

/// Response shape of a simulation: index values rounded to one decimal, series to two.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub scenario: ScenarioSummary,
    pub intensity: f64,
    pub current_indicators: IndicatorSet,
    pub projected_indicators: IndicatorSet,
    pub current_odi: f64,
    pub projected_odi: f64,
    pub odi_change: f64,
    pub time_series: BTreeMap<String, Vec<f64>>,
    pub months: Vec<String>,
    pub risk_assessment: RiskAssessment,
    pub recommendations: Vec<&'static str>,
}

impl From<SimulationOutcome> for SimulationReport {
    fn from(outcome: SimulationOutcome) -> Self {
        Self {
            scenario: outcome.scenario,
            intensity: outcome.intensity.value(),
            current_indicators: outcome.current_indicators,
            projected_indicators: outcome.projected_indicators,
            current_odi: round1(outcome.current_score),
            projected_odi: round1(outcome.projected_score),
            odi_change: round1(outcome.score_change),
            time_series: outcome.trajectory.series,
            months: outcome.trajectory.months,
            risk_assessment: RiskAssessment::standard(),
            recommendations: recommendations(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub indicators: BTreeMap<&'static str, Indicator>,
    pub current_odi: f64,
    pub scenarios: Vec<ScenarioSummary>,
}

/// Host-facing entry point: applies configured defaults and owns random source creation.
#[derive(Debug, Clone)]
pub struct SimulationService {
    simulator: Arc<PolicySimulator>,
    config: SimulationConfig,
}

impl SimulationService {
    pub fn new(simulator: Arc<PolicySimulator>, config: SimulationConfig) -> Self {
        Self { simulator, config }
    }

    pub fn simulator(&self) -> &PolicySimulator {
        &self.simulator
    }

    /// Seeded when configured, otherwise fresh entropy for every request.
    pub fn rng(&self) -> StdRng {
        match self.config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn run(
        &self,
        request: &SimulationRequest,
        today: NaiveDate,
    ) -> Result<SimulationOutcome, SimulationError> {
        let intensity = request
            .intensity
            .map(Intensity::new)
            .unwrap_or(self.config.default_intensity);
        let mut rng = self.rng();

        let outcome = self
            .simulator
            .simulate(&request.scenario, intensity, today, &mut rng)?;

        info!(
            scenario = outcome.scenario.id,
            intensity = intensity.value(),
            odi_change = outcome.score_change,
            "policy simulation completed"
        );

        Ok(outcome)
    }

    pub fn report(
        &self,
        request: &SimulationRequest,
        today: NaiveDate,
    ) -> Result<SimulationReport, SimulationError> {
        self.run(request, today).map(SimulationReport::from)
    }

    pub fn indicators(&self) -> BTreeMap<&'static str, Indicator> {
        self.simulator
            .indicators()
            .iter()
            .map(|indicator| (indicator.key, indicator.clone()))
            .collect()
    }

    pub fn scenarios(&self) -> Vec<ScenarioSummary> {
        self.simulator.scenarios().summaries()
    }

    pub fn dashboard(&self) -> DashboardView {
        DashboardView {
            indicators: self.indicators(),
            current_odi: round1(self.simulator.current_score()),
            scenarios: self.scenarios(),
        }
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

use std::sync::Arc;

use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use super::impact::{Adjustment, ImpactError, ImpactModel, Intensity};
use super::indicators::{IndicatorCatalog, IndicatorSet};
use super::profile::ProfileTable;
use super::scenario::{ScenarioCatalog, ScenarioSummary};
use super::scoring::ScoringEngine;
use super::trajectory::{Trajectory, TrajectorySynthesizer};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid scenario '{0}'")]
    UnknownScenario(String),
}

impl From<ImpactError> for SimulationError {
    fn from(err: ImpactError) -> Self {
        match err {
            ImpactError::UnknownScenario(id) => SimulationError::UnknownScenario(id),
        }
    }
}

/// Everything one simulation run computes, before any presentation rounding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationOutcome {
    pub scenario: ScenarioSummary,
    pub intensity: Intensity,
    pub current_indicators: IndicatorSet,
    pub projected_indicators: IndicatorSet,
    pub current_score: f64,
    pub projected_score: f64,
    pub score_change: f64,
    pub adjustments: Vec<Adjustment>,
    pub trajectory: Trajectory,
}

/// Wires the catalogs to the scoring, impact and trajectory models.
#[derive(Debug, Clone)]
pub struct PolicySimulator {
    indicators: Arc<IndicatorCatalog>,
    scenarios: Arc<ScenarioCatalog>,
    scoring: ScoringEngine,
    impact: ImpactModel,
    trajectory: TrajectorySynthesizer,
}

impl PolicySimulator {
    pub fn new(
        indicators: IndicatorCatalog,
        scenarios: ScenarioCatalog,
        profiles: ProfileTable,
        trajectory: TrajectorySynthesizer,
    ) -> Self {
        let scenarios = Arc::new(scenarios);
        let profiles = Arc::new(profiles);
        Self {
            indicators: Arc::new(indicators),
            scoring: ScoringEngine::new(profiles.clone()),
            impact: ImpactModel::new(profiles, scenarios.clone()),
            scenarios,
            trajectory,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            IndicatorCatalog::standard(),
            ScenarioCatalog::standard(),
            ProfileTable::standard(),
            TrajectorySynthesizer::default(),
        )
    }

    pub fn indicators(&self) -> &IndicatorCatalog {
        &self.indicators
    }

    pub fn scenarios(&self) -> &ScenarioCatalog {
        &self.scenarios
    }

    pub fn current_score(&self) -> f64 {
        self.scoring.score(&self.indicators.current_values())
    }

    /// Runs a scenario against the catalog's current values.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        scenario: &str,
        intensity: Intensity,
        start: NaiveDate,
        rng: &mut R,
    ) -> Result<SimulationOutcome, SimulationError> {
        let baseline = self.indicators.current_values();
        self.simulate_from(&baseline, scenario, intensity, start, rng)
    }

    /// Runs a scenario against a caller-supplied baseline. The scenario is resolved before
    /// any projection happens.
    pub fn simulate_from<R: Rng + ?Sized>(
        &self,
        baseline: &IndicatorSet,
        scenario: &str,
        intensity: Intensity,
        start: NaiveDate,
        rng: &mut R,
    ) -> Result<SimulationOutcome, SimulationError> {
        let projection = self.impact.project(baseline, scenario, intensity, rng)?;
        let scenario = projection.scenario;
        if projection.is_noop() {
            debug!(scenario = scenario.id, "projection left every indicator unchanged");
        }

        let current_score = self.scoring.score(baseline);
        let projected_score = self.scoring.score(&projection.indicators);
        let trajectory = self
            .trajectory
            .synthesize(baseline, &projection.indicators, start, rng);

        debug!(
            scenario = scenario.id,
            intensity = intensity.value(),
            current_score,
            projected_score,
            "simulation computed"
        );

        Ok(SimulationOutcome {
            scenario,
            intensity,
            current_indicators: baseline.clone(),
            projected_indicators: projection.indicators,
            current_score,
            projected_score,
            score_change: projected_score - current_score,
            adjustments: projection.adjustments,
            trajectory,
        })
    }
}

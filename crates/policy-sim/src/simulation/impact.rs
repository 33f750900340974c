use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::indicators::IndicatorSet;
use super::profile::ProfileTable;
use super::scenario::{Scenario, ScenarioCatalog, ScenarioSummary};

/// Spread of the multiplier applied to every policy effect.
const VARIANCE_LOW: f64 = 0.9;
const VARIANCE_HIGH: f64 = 1.1;

/// Policy strength on a 0-100 scale.
///
/// Construction clamps into range so the diminishing factor is always defined; NaN reads as
/// no intervention at all.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Intensity(f64);

impl Intensity {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Self(Self::MIN);
        }
        Self(raw.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn fraction(self) -> f64 {
        self.0 / Self::MAX
    }

    /// Concave response curve: doubling intensity less than doubles the effect.
    pub fn diminishing_factor(self) -> f64 {
        self.fraction().sqrt()
    }
}

impl From<f64> for Intensity {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Intensity> for f64 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

/// Change applied to a single indicator during a projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjustment {
    pub indicator: &'static str,
    pub factor: f64,
    pub delta: f64,
    pub before: f64,
    pub after: f64,
}

impl Adjustment {
    pub fn changed(&self) -> bool {
        self.after != self.before
    }
}

/// Projected indicator set plus the trail of adjustments that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub scenario: ScenarioSummary,
    pub intensity: Intensity,
    pub indicators: IndicatorSet,
    pub adjustments: Vec<Adjustment>,
}

impl Projection {
    /// True when the scenario left every indicator where it started.
    pub fn is_noop(&self) -> bool {
        !self.adjustments.iter().any(Adjustment::changed)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImpactError {
    #[error("unknown policy scenario '{0}'")]
    UnknownScenario(String),
}

/// Perturbs a baseline indicator set according to a scenario's sensitivity factors.
#[derive(Debug, Clone)]
pub struct ImpactModel {
    profiles: Arc<ProfileTable>,
    scenarios: Arc<ScenarioCatalog>,
}

impl ImpactModel {
    pub fn new(profiles: Arc<ProfileTable>, scenarios: Arc<ScenarioCatalog>) -> Self {
        Self {
            profiles,
            scenarios,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            Arc::new(ProfileTable::standard()),
            Arc::new(ScenarioCatalog::standard()),
        )
    }

    pub fn project<R: Rng + ?Sized>(
        &self,
        baseline: &IndicatorSet,
        scenario: &str,
        intensity: Intensity,
        rng: &mut R,
    ) -> Result<Projection, ImpactError> {
        let scenario = self
            .scenarios
            .get(scenario)
            .ok_or_else(|| ImpactError::UnknownScenario(scenario.to_string()))?;
        Ok(self.apply(baseline, scenario, intensity, rng))
    }

    /// Projects an already-resolved scenario. Factors naming indicators absent from the
    /// baseline are skipped; indicators without a profile are perturbed but not clamped.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        baseline: &IndicatorSet,
        scenario: &Scenario,
        intensity: Intensity,
        rng: &mut R,
    ) -> Projection {
        let mut projected = baseline.clone();
        let mut adjustments = Vec::with_capacity(scenario.factors.len());
        let diminishing = intensity.diminishing_factor();

        for impact in &scenario.factors {
            let Some(slot) = projected.get_mut(impact.indicator) else {
                continue;
            };

            let multiplier = rng.gen_range(VARIANCE_LOW..=VARIANCE_HIGH);
            let delta = impact.factor * diminishing * multiplier;
            let before = *slot;
            let mut after = before + delta;
            if let Some(profile) = self.profiles.get(impact.indicator) {
                after = profile.bounds.clamp(after);
            }
            *slot = after;

            adjustments.push(Adjustment {
                indicator: impact.indicator,
                factor: impact.factor,
                delta,
                before,
                after,
            });
        }

        Projection {
            scenario: scenario.summary(),
            intensity,
            indicators: projected,
            adjustments,
        }
    }
}

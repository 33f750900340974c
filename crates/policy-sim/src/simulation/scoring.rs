use std::sync::Arc;

use serde::Serialize;

use super::indicators::IndicatorSet;
use super::profile::ProfileTable;

/// Normalized score and weighted contribution of one indicator to the index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub indicator: &'static str,
    pub value: f64,
    pub normalized: f64,
    pub weight: f64,
    pub contribution: f64,
}

/// Stateless scorer that folds an indicator set into the composite development index.
///
/// Only indicators with a profile are scored. Profiled indicators missing from the set
/// contribute nothing, so partial sets score deterministically instead of failing.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    profiles: Arc<ProfileTable>,
}

impl ScoringEngine {
    pub fn new(profiles: Arc<ProfileTable>) -> Self {
        Self { profiles }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(ProfileTable::standard()))
    }

    pub fn breakdown(&self, indicators: &IndicatorSet) -> Vec<ScoreComponent> {
        self.profiles
            .iter()
            .filter_map(|profile| {
                let value = indicators.get(profile.key)?;
                let normalized = profile.normalization.apply(value);
                Some(ScoreComponent {
                    indicator: profile.key,
                    value,
                    normalized,
                    weight: profile.weight,
                    contribution: profile.contribution(normalized),
                })
            })
            .collect()
    }

    /// Per-indicator scores on the shared 0-100 scale.
    pub fn normalize(&self, indicators: &IndicatorSet) -> IndicatorSet {
        self.breakdown(indicators)
            .into_iter()
            .map(|component| (component.indicator, component.normalized))
            .collect()
    }

    /// Composite index in [0, 100].
    pub fn score(&self, indicators: &IndicatorSet) -> f64 {
        let raw: f64 = self
            .breakdown(indicators)
            .iter()
            .map(|component| component.contribution)
            .sum();
        raw.max(0.0).min(100.0)
    }
}

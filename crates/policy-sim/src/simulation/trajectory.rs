use std::collections::BTreeMap;
use std::f64::consts::TAU;

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::Serialize;

use super::indicators::IndicatorSet;

pub const DEFAULT_POINT_COUNT: usize = 12;

const SEASONAL_AMPLITUDE: f64 = 0.05;
const SEASONAL_PERIOD: f64 = 12.0;
const NOISE_AMPLITUDE: f64 = 0.02;
/// Month labels advance by a fixed 30 days rather than by calendar month.
const LABEL_STEP_DAYS: i64 = 30;
const LABEL_FORMAT: &str = "%b %Y";

/// Monthly series per indicator with their shared month labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    pub months: Vec<String>,
    pub series: BTreeMap<String, Vec<f64>>,
}

impl Trajectory {
    pub fn get(&self, indicator: &str) -> Option<&[f64]> {
        self.series.get(indicator).map(Vec::as_slice)
    }
}

/// Interpolates from current toward projected values with an annual seasonal cycle and
/// per-point noise layered on top.
#[derive(Debug, Clone, Copy)]
pub struct TrajectorySynthesizer {
    point_count: usize,
}

impl Default for TrajectorySynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_POINT_COUNT)
    }
}

impl TrajectorySynthesizer {
    pub fn new(point_count: usize) -> Self {
        Self { point_count }
    }

    /// Linear progress of `step`; a single-point series sits on the current value.
    pub fn progress(&self, step: usize) -> f64 {
        if self.point_count <= 1 {
            0.0
        } else {
            step as f64 / (self.point_count - 1) as f64
        }
    }

    /// Un-jittered value at `step`. Lands exactly on `current` at the first step and on
    /// `projected` at the last.
    pub fn base(&self, current: f64, projected: f64, step: usize) -> f64 {
        let progress = self.progress(step);
        current * (1.0 - progress) + projected * progress
    }

    pub fn seasonal(step: usize) -> f64 {
        SEASONAL_AMPLITUDE * (TAU * step as f64 / SEASONAL_PERIOD).sin()
    }

    /// Largest relative distance a point may sit from its base.
    pub fn max_jitter() -> f64 {
        SEASONAL_AMPLITUDE + NOISE_AMPLITUDE
    }

    pub fn month_labels(&self, start: NaiveDate) -> Vec<String> {
        (0..self.point_count)
            .map(|step| {
                let date = start + Duration::days(LABEL_STEP_DAYS * step as i64);
                date.format(LABEL_FORMAT).to_string()
            })
            .collect()
    }

    pub fn bases(&self, current: f64, projected: f64) -> Vec<f64> {
        (0..self.point_count)
            .map(|step| self.base(current, projected, step))
            .collect()
    }

    /// Builds a series for every indicator in `current`. An indicator missing from
    /// `projected` stays flat at its current value before jitter.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        current: &IndicatorSet,
        projected: &IndicatorSet,
        start: NaiveDate,
        rng: &mut R,
    ) -> Trajectory {
        let series = current
            .iter()
            .map(|(key, current_value)| {
                let projected_value = projected.get(key).unwrap_or(current_value);
                let values = (0..self.point_count)
                    .map(|step| {
                        let base = self.base(current_value, projected_value, step);
                        let noise = rng.gen_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE);
                        round2(base * (1.0 + Self::seasonal(step) + noise))
                    })
                    .collect();
                (key.to_string(), values)
            })
            .collect();

        Trajectory {
            months: self.month_labels(start),
            series,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

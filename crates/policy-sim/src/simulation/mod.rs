//! Composite development index (ODI) scoring, policy impact projection and monthly
//! trajectory synthesis.
//!
//! Randomness is always supplied by the caller as a [`rand::Rng`], so the scoring path stays
//! pure and the stochastic paths can be pinned with a seeded generator.

pub mod advisory;
pub mod impact;
pub mod indicators;
pub mod profile;
pub mod router;
pub mod scenario;
pub mod scoring;
pub mod service;
mod simulator;
pub mod trajectory;

#[cfg(test)]
mod tests;

pub use advisory::{RiskAssessment, RiskLevel};
pub use impact::{Adjustment, ImpactError, ImpactModel, Intensity, Projection};
pub use indicators::{Indicator, IndicatorCatalog, IndicatorSet};
pub use profile::{Bounds, IndicatorProfile, Normalization, ProfileTable};
pub use router::simulation_router;
pub use scenario::{ImpactFactor, Scenario, ScenarioCatalog, ScenarioSummary};
pub use scoring::{ScoreComponent, ScoringEngine};
pub use service::{DashboardView, SimulationReport, SimulationRequest, SimulationService};
pub use simulator::{PolicySimulator, SimulationError, SimulationOutcome};
pub use trajectory::{Trajectory, TrajectorySynthesizer, DEFAULT_POINT_COUNT};

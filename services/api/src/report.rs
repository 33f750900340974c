use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::Args;
use policy_sim::config::AppConfig;
use policy_sim::error::AppError;
use policy_sim::simulation::{
    IndicatorCatalog, PolicySimulator, ProfileTable, RiskAssessment, ScenarioCatalog,
    SimulationOutcome, SimulationRequest, SimulationService, TrajectorySynthesizer,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct SimulateArgs {
    /// Scenario identifier (see the `scenarios` command)
    #[arg(long)]
    pub(crate) scenario: String,
    /// Policy intensity between 0 and 100 (defaults to SIM_DEFAULT_INTENSITY)
    #[arg(long)]
    pub(crate) intensity: Option<f64>,
    /// Seed the random source for a reproducible projection
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// First month of the trajectory (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) start: Option<NaiveDate>,
}

pub(crate) fn run_simulation(args: SimulateArgs) -> Result<(), AppError> {
    let SimulateArgs {
        scenario,
        intensity,
        seed,
        start,
    } = args;

    let mut config = AppConfig::load()?.simulation;
    if seed.is_some() {
        config.rng_seed = seed;
    }

    let simulator = PolicySimulator::new(
        IndicatorCatalog::standard(),
        ScenarioCatalog::standard(),
        ProfileTable::standard(),
        TrajectorySynthesizer::new(config.trajectory_points),
    );
    let service = SimulationService::new(Arc::new(simulator), config);

    let start = start.unwrap_or_else(|| Local::now().date_naive());
    let outcome = service.run(&SimulationRequest { scenario, intensity }, start)?;

    render_outcome(service.simulator().indicators(), &outcome);
    Ok(())
}

pub(crate) fn run_scenario_listing() -> Result<(), AppError> {
    let catalog = ScenarioCatalog::standard();
    println!("Policy scenarios");
    for scenario in catalog.iter() {
        println!("- {}: {}", scenario.key, scenario.name);
        println!("  {}", scenario.description);
        let factors: Vec<String> = scenario
            .factors
            .iter()
            .map(|impact| format!("{} {:+.1}", impact.indicator, impact.factor))
            .collect();
        println!("  sensitivities: {}", factors.join(", "));
    }
    Ok(())
}

fn render_outcome(catalog: &IndicatorCatalog, outcome: &SimulationOutcome) {
    println!("Policy simulation: {}", outcome.scenario.name);
    println!("Intensity: {:.0}", outcome.intensity.value());
    println!(
        "Development index: {:.1} -> {:.1} ({:+.1})",
        outcome.current_score, outcome.projected_score, outcome.score_change
    );

    println!("\nIndicator projections");
    for indicator in catalog.iter() {
        let current = outcome.current_indicators.get(indicator.key);
        let projected = outcome.projected_indicators.get(indicator.key);
        if let (Some(current), Some(projected)) = (current, projected) {
            println!(
                "- {} ({}): {:.2} -> {:.2} (target {:.2})",
                indicator.name, indicator.unit, current, projected, indicator.target
            );
        }
    }

    if outcome.trajectory.months.is_empty() {
        return;
    }

    println!("\nMonthly trajectory");
    for (step, month) in outcome.trajectory.months.iter().enumerate() {
        let values: Vec<String> = catalog
            .iter()
            .filter_map(|indicator| {
                outcome
                    .trajectory
                    .get(indicator.key)
                    .and_then(|series| series.get(step))
                    .map(|value| format!("{}={value:.2}", indicator.key))
            })
            .collect();
        println!("- {month}: {}", values.join(" "));
    }

    let risk = RiskAssessment::standard();
    println!("\nRisk level: {} ({})", risk.level.label(), risk.factors.join(", "));
}

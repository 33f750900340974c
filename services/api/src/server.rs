use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_simulation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use policy_sim::config::AppConfig;
use policy_sim::error::AppError;
use policy_sim::simulation::{
    IndicatorCatalog, PolicySimulator, ProfileTable, ScenarioCatalog, SimulationService,
    TrajectorySynthesizer,
};
use policy_sim::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let simulator = PolicySimulator::new(
        IndicatorCatalog::standard(),
        ScenarioCatalog::standard(),
        ProfileTable::standard(),
        TrajectorySynthesizer::new(config.simulation.trajectory_points),
    );
    let service = Arc::new(SimulationService::new(
        Arc::new(simulator),
        config.simulation.clone(),
    ));

    let app = with_simulation_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        seeded = config.simulation.rng_seed.is_some(),
        "policy impact simulator ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

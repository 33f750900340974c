use crate::report::{run_scenario_listing, run_simulation, SimulateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use policy_sim::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Policy Impact Simulator",
    about = "Score development indicators and project policy scenarios",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Project a policy scenario and print the index change and monthly trajectory
    Simulate(SimulateArgs),
    /// List the available policy scenarios
    Scenarios,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Simulate(args) => run_simulation(args),
        Command::Scenarios => run_scenario_listing(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["policy-sim"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_simulate_arguments() {
        let cli = Cli::try_parse_from([
            "policy-sim",
            "simulate",
            "--scenario",
            "carbon_tax",
            "--intensity",
            "80",
            "--seed",
            "7",
            "--start",
            "2025-03-01",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Simulate(args)) => {
                assert_eq!(args.scenario, "carbon_tax");
                assert_eq!(args.intensity, Some(80.0));
                assert_eq!(args.seed, Some(7));
                assert!(args.start.is_some());
            }
            other => panic!("expected simulate command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_start_date() {
        let result = Cli::try_parse_from([
            "policy-sim",
            "simulate",
            "--scenario",
            "carbon_tax",
            "--start",
            "03/01/2025",
        ]);
        assert!(result.is_err());
    }
}

use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::simulation::impact::Intensity;
use crate::simulation::trajectory::DEFAULT_POINT_COUNT;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            simulation: SimulationConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Defaults applied to simulation requests.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Used when a request omits the intensity.
    pub default_intensity: Intensity,
    pub trajectory_points: usize,
    /// Fixed seed for reproducible runs; fresh entropy per request when absent.
    pub rng_seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            default_intensity: Intensity::new(50.0),
            trajectory_points: DEFAULT_POINT_COUNT,
            rng_seed: None,
        }
    }
}

impl SimulationConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let default_intensity = match env::var("SIM_DEFAULT_INTENSITY") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .map(Intensity::new)
                .map_err(|_| ConfigError::InvalidIntensity)?,
            Err(_) => defaults.default_intensity,
        };

        let trajectory_points = match env::var("SIM_TRAJECTORY_POINTS") {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(points) if points > 0 => points,
                _ => return Err(ConfigError::InvalidTrajectoryPoints),
            },
            Err(_) => defaults.trajectory_points,
        };

        let rng_seed = match env::var("SIM_RNG_SEED") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed)?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            default_intensity,
            trajectory_points,
            rng_seed,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidIntensity,
    InvalidTrajectoryPoints,
    InvalidSeed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidIntensity => {
                write!(f, "SIM_DEFAULT_INTENSITY must be a number")
            }
            ConfigError::InvalidTrajectoryPoints => {
                write!(f, "SIM_TRAJECTORY_POINTS must be a positive integer")
            }
            ConfigError::InvalidSeed => write!(f, "SIM_RNG_SEED must be a valid u64"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidIntensity
            | ConfigError::InvalidTrajectoryPoints
            | ConfigError::InvalidSeed => None,
        }
    }
}

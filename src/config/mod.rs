use std::env;
use std::fmt;

use crate::workflows::roster::scoring::ScoreWeights;
use crate::workflows::roster::service::DEFAULT_MIN_CONFIDENCE;

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

/// Top-level configuration for the engine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let weights = ScoreWeights {
            name: weight_from_env("APP_NAME_WEIGHT", ScoreWeights::default().name)?,
            phone: weight_from_env("APP_PHONE_WEIGHT", ScoreWeights::default().phone)?,
            year: weight_from_env("APP_YEAR_WEIGHT", ScoreWeights::default().year)?,
        };

        let min_confidence = match env::var("APP_MIN_CONFIDENCE") {
            Ok(raw) => {
                let value = raw
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ConfigError::InvalidThreshold)?;
                if !(0.0..=1.0).contains(&value) {
                    return Err(ConfigError::InvalidThreshold);
                }
                value
            }
            Err(_) => DEFAULT_MIN_CONFIDENCE,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            scoring: ScoringConfig {
                weights,
                min_confidence,
            },
        })
    }
}

fn weight_from_env(name: &'static str, fallback: f64) -> Result<f64, ConfigError> {
    match env::var(name) {
        Ok(raw) => {
            let value = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidWeight { name })?;
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name });
            }
            Ok(value)
        }
        Err(_) => Ok(fallback),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Reconciliation scoring controls: component weights and the confidence
/// floor applied when listing allocation candidates.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub weights: ScoreWeights,
    pub min_confidence: f64,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidWeight { name: &'static str },
    InvalidThreshold,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeight { name } => {
                write!(f, "{} must be a non-negative number", name)
            }
            ConfigError::InvalidThreshold => {
                write!(f, "APP_MIN_CONFIDENCE must be a number between 0 and 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

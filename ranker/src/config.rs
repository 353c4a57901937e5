use std::env;

use thiserror::Error;
use topsis_ranking::{Criteria, Label};

/// Runtime configuration, read from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub telemetry: TelemetryConfig,
    pub labels: Option<Vec<Label>>,
    pub weights: Option<Vec<f64>>,
}

/// Tracing controls.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("RANKER_LABELS must be a comma-separated list of 'benefit' or 'cost': {0}")]
    InvalidLabels(#[source] topsis_ranking::Error),
    #[error("RANKER_WEIGHTS must be a comma-separated list of numbers, got '{0}'")]
    InvalidWeights(String),
    #[error("criteria overrides do not fit the configured criteria: {0}")]
    Criteria(#[source] topsis_ranking::Error),
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let log_level = env::var("RANKER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let labels = env::var("RANKER_LABELS")
            .ok()
            .map(|raw| parse_labels(&raw))
            .transpose()?;
        let weights = env::var("RANKER_WEIGHTS")
            .ok()
            .map(|raw| parse_weights(&raw))
            .transpose()?;

        Ok(Self {
            telemetry: TelemetryConfig { log_level },
            labels,
            weights,
        })
    }

    /// The recruitment criteria with any configured label or weight overrides applied.
    pub fn criteria(&self) -> Result<Criteria, ConfigError> {
        Criteria::recruitment()
            .with_overrides(self.labels.as_deref(), self.weights.as_deref())
            .map_err(ConfigError::Criteria)
    }
}

fn parse_labels(raw: &str) -> Result<Vec<Label>, ConfigError> {
    raw.split(',')
        .map(str::parse::<Label>)
        .collect::<Result<Vec<Label>, _>>()
        .map_err(ConfigError::InvalidLabels)
}

fn parse_weights(raw: &str) -> Result<Vec<f64>, ConfigError> {
    raw.split(',')
        .map(|w| w.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| ConfigError::InvalidWeights(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("RANKER_LOG_LEVEL");
        env::remove_var("RANKER_LABELS");
        env::remove_var("RANKER_WEIGHTS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.labels, None);
        assert_eq!(config.weights, None);
        assert_eq!(config.criteria().expect("criteria"), Criteria::recruitment());
    }

    #[test]
    fn overrides_replace_weights() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RANKER_WEIGHTS", "0.2, 0.2, 0.2, 0.2, 0.2");
        env::set_var("RANKER_LABELS", "benefit,benefit,cost,cost,cost");
        let config = AppConfig::load().expect("config loads");
        let criteria = config.criteria().expect("criteria");
        assert!(criteria.weights().iter().all(|w| w.as_f64() == 0.2));
        assert_eq!(criteria.labels()[2], Label::Cost);
        reset_env();
    }

    #[test]
    fn rejects_unparseable_values() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RANKER_WEIGHTS", "0.3,heavy");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidWeights(_))
        ));
        reset_env();
        env::set_var("RANKER_LABELS", "benefit,neutral");
        assert!(matches!(AppConfig::load(), Err(ConfigError::InvalidLabels(_))));
        reset_env();
    }

    #[test]
    fn weight_count_must_match_criteria() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RANKER_WEIGHTS", "0.5,0.5");
        let config = AppConfig::load().expect("config loads");
        assert!(matches!(
            config.criteria(),
            Err(ConfigError::Criteria(topsis_ranking::Error::ShapeMismatch {
                expected: 5,
                actual: 2,
                ..
            }))
        ));
        reset_env();
    }
}

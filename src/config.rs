use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::core::MatcherConfig;
use crate::models::ScoringWeights;

/// Errors that can occur when loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("matching.pool_size must be at least 1")]
    ZeroPoolSize,
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub pool_size: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_very_important_weight")]
    pub very_important: u32,
    #[serde(default = "default_important_weight")]
    pub important: u32,
    #[serde(default = "default_would_prefer_weight")]
    pub would_prefer: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            very_important: default_very_important_weight(),
            important: default_important_weight(),
            would_prefer: default_would_prefer_weight(),
        }
    }
}

fn default_very_important_weight() -> u32 { 5000 }
fn default_important_weight() -> u32 { 1000 }
fn default_would_prefer_weight() -> u32 { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PROSPECT_)
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PROSPECT_MATCHING__POOL_SIZE -> matching.pool_size
            .add_source(
                Environment::with_prefix("PROSPECT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PROSPECT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.matching.pool_size == Some(0) {
            return Err(SettingsError::ZeroPoolSize);
        }
        Ok(())
    }

    /// Matcher configuration derived from these settings
    pub fn matcher_config(&self) -> MatcherConfig {
        let defaults = MatcherConfig::default();
        MatcherConfig {
            pool_size: self.matching.pool_size.unwrap_or(defaults.pool_size),
            weights: ScoringWeights {
                very_important: self.scoring.weights.very_important,
                important: self.scoring.weights.important,
                would_prefer: self.scoring.weights.would_prefer,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.very_important, 5000);
        assert_eq!(weights.important, 1000);
        assert_eq!(weights.would_prefer, 100);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_matcher_config_defaults() {
        let settings = Settings::default();
        let config = settings.matcher_config();

        assert_eq!(config.pool_size, 4);
        assert_eq!(config.weights.important, 1000);
    }

    #[test]
    fn test_zero_pool_size_rejected() {
        let settings = Settings {
            matching: MatchingSettings { pool_size: Some(0) },
            ..Settings::default()
        };

        assert!(matches!(
            settings.validate(),
            Err(SettingsError::ZeroPoolSize)
        ));
    }
}

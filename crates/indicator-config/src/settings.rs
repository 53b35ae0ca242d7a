//! Configuration structures.

use indicator_core::error::{AppError, AppResult};
use indicator_core::types::Period;
use indicator_engine::{EngineParams, IndicatorEngine};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub indicators: EngineParams,
    #[serde(default)]
    pub data: DataSettings,
}

impl AppConfig {
    /// Engine parameters from the `[indicators]` section.
    pub fn engine_params(&self) -> EngineParams {
        self.indicators
    }

    /// Build an engine, rejecting invalid windows or multipliers.
    pub fn build_engine(&self) -> AppResult<IndicatorEngine> {
        Ok(IndicatorEngine::new(self.engine_params())?)
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> AppResult<String> {
        toml::to_string_pretty(self).map_err(|e| AppError::Serialization(e.to_string()))
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stock-indicators".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Where history comes from and how much of it a request needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub default_period: Period,
    pub min_bars: usize,
    pub data_dir: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            default_period: Period::default(),
            min_bars: 20,
            data_dir: PathBuf::from("data"),
        }
    }
}

//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, DataSettings, LoggingConfig};

use config::{Config, Environment, File};
use indicator_core::error::{AppError, AppResult};
use std::path::Path;

/// Environment prefix for overrides, e.g. `INDICATORS__INDICATORS__RSI_WINDOW=9`.
pub const ENV_PREFIX: &str = "INDICATORS";

/// Load configuration from file and environment.
///
/// A missing file is not an error: defaults apply and environment
/// overrides are still honoured. Callers report the fallback once logging is up.
pub fn load_config(path: &Path) -> AppResult<AppConfig> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Parse configuration from a TOML string.
pub fn parse_config(contents: &str) -> AppResult<AppConfig> {
    toml::from_str(contents).map_err(|e| AppError::Config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicator_core::types::Period;
    use std::fs;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config(Path::new("/nonexistent/indicators.toml")).unwrap();
        assert_eq!(config.indicators, Default::default());
        assert_eq!(config.data.min_bars, 20);
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join("indicator-config-tests");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("custom.toml");
        fs::write(
            &path,
            r#"
[indicators]
rsi_window = 9
bb_k = 2.5

[data]
default_period = "6mo"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.indicators.rsi_window, 9);
        assert_eq!(config.indicators.bb_k, 2.5);
        assert_eq!(config.indicators.sma_slow_window, 50);
        assert_eq!(config.data.default_period, Period::Month6);
    }

    #[test]
    fn test_parse_rejects_bad_period() {
        let err = parse_config("[data]\ndefault_period = \"10y\"\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}

//! Error types for the indicator system.

use chrono::NaiveDate;
use thiserror::Error;

/// Top-level application error.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Historical data errors.
///
/// These belong to the data source side of the pipeline. The engine itself
/// never produces them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No data available for the requested range")]
    NoDataAvailable,

    #[error("Insufficient data: need {required} bars, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Dates must be strictly increasing: {next} follows {previous}")]
    UnorderedDates { previous: NaiveDate, next: NaiveDate },

    #[error("Non-finite price on {0}")]
    NonFinitePrice(NaiveDate),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Indicator construction errors.
///
/// Raised before any computation starts, so no partial output ever exists.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl IndicatorError {
    /// Reject a zero window or span.
    pub fn check_window(name: &str, value: usize) -> Result<usize, IndicatorError> {
        if value == 0 {
            return Err(IndicatorError::InvalidParameter(format!(
                "{} must be greater than 0",
                name
            )));
        }
        Ok(value)
    }

    /// Reject a non-positive or non-finite multiplier.
    pub fn check_multiplier(name: &str, value: f64) -> Result<f64, IndicatorError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(IndicatorError::InvalidParameter(format!(
                "{} must be a positive finite number, got {}",
                name, value
            )));
        }
        Ok(value)
    }
}

/// Result type alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

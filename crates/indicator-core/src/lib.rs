//! Core types and traits for the indicator engine.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (PriceBar, PriceSeries, Period)
//! - Indicator output types (IndicatorRecord, IndicatorValue)
//! - Core traits for indicators and historical data sources

pub mod types;
pub mod traits;
pub mod error;

pub use error::{AppError, AppResult, DataError, IndicatorError};
pub use types::*;
pub use traits::*;

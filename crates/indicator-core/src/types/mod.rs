//! Core data types for the indicator system.

mod indicator;
mod period;
mod price;

pub use indicator::{IndicatorRecord, IndicatorValue, UndefinedReason};
pub use period::Period;
pub use price::{PriceBar, PriceSeries};

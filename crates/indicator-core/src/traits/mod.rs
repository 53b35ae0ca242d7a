//! Core traits for the indicator system.

mod data_source;
mod indicator;

pub use data_source::DataSource;
pub use indicator::{Indicator, MultiOutputIndicator};

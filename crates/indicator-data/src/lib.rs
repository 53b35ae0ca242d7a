//! Historical price series sources.
//!
//! The engine never fetches anything; this crate supplies validated
//! [`PriceSeries`] values from local files.

mod csv_source;
mod validation;

pub use csv_source::CsvDataSource;
pub use validation::{ensure_min_bars, validate_symbol, MIN_BARS};

use chrono::{Duration, NaiveDate};
use indicator_core::error::DataError;
use indicator_core::traits::DataSource;
use indicator_core::types::{Period, PriceSeries};

/// Request the `period` of history ending before `end` from any data source.
pub async fn load_period<S: DataSource + ?Sized>(
    source: &S,
    symbol: &str,
    period: Period,
    end: NaiveDate,
) -> Result<PriceSeries, DataError> {
    let start = period.start_from(end);
    source.historical_series(symbol, start, end).await
}

/// Load `period` of history for `symbol` from a CSV file or directory.
///
/// Without an explicit `end`, the range ends just after the newest bar in the file.
pub async fn load_csv(
    path: &std::path::Path,
    symbol: &str,
    period: Period,
    end: Option<NaiveDate>,
    min_bars: usize,
) -> Result<PriceSeries, DataError> {
    let source = CsvDataSource::resolve(path, symbol)?.with_min_bars(min_bars);
    let end = match end {
        Some(end) => end,
        None => source.latest_date()? + Duration::days(1),
    };
    load_period(&source, symbol, period, end).await
}

//! CSV data source.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use indicator_core::error::DataError;
use indicator_core::traits::DataSource;
use indicator_core::types::{PriceBar, PriceSeries};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::validation::{ensure_min_bars, validate_symbol, MIN_BARS};

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "Datetime", alias = "timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close", default)]
    close: Option<f64>,
    #[serde(rename = "Adj Close", alias = "adj_close", default)]
    adj_close: Option<f64>,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// CSV data source for daily history.
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    path: PathBuf,
    min_bars: usize,
}

impl CsvDataSource {
    /// Create a new CSV data source.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(Self {
            path: path.to_path_buf(),
            min_bars: MIN_BARS,
        })
    }

    /// Locate the file for `symbol`.
    ///
    /// A file path is used as is. In a directory the candidates are
    /// `{symbol}.csv`, `{lower}.csv`, `{symbol}_daily.csv` and `{lower}_daily.csv`.
    pub fn resolve(path: &Path, symbol: &str) -> Result<Self, DataError> {
        if path.is_file() {
            return Self::new(path);
        }

        let symbol = validate_symbol(symbol)?;
        let lower = symbol.to_lowercase();
        let candidates = [
            path.join(format!("{}.csv", symbol)),
            path.join(format!("{}.csv", lower)),
            path.join(format!("{}_daily.csv", symbol)),
            path.join(format!("{}_daily.csv", lower)),
        ];

        candidates
            .iter()
            .find(|candidate| candidate.is_file())
            .map(Self::new)
            .unwrap_or_else(|| Err(DataError::SymbolNotFound(symbol.to_string())))
    }

    /// Override the minimum number of bars a request must return.
    pub fn with_min_bars(mut self, min_bars: usize) -> Self {
        self.min_bars = min_bars;
        self
    }

    /// Path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all bars from the file, sorted by date.
    pub fn load_all(&self) -> Result<Vec<PriceBar>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut bars = Vec::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;
            let date = parse_date(&record.date)?;

            // Adjusted close only stands in when the file has no plain close
            let close = record.close.or(record.adj_close).ok_or_else(|| {
                DataError::ParseError(format!("Missing close price on {}", date))
            })?;

            let bar = PriceBar::new(
                date,
                record.open,
                record.high,
                record.low,
                close,
                parse_volume(record.volume)?,
            );
            if !bar.is_finite() {
                return Err(DataError::ParseError(format!(
                    "Non-finite price on {}",
                    date
                )));
            }
            bars.push(bar);
        }

        bars.sort_by_key(|b| b.date);
        debug!(path = %self.path.display(), bars = bars.len(), "loaded csv");

        Ok(bars)
    }

    /// Date of the newest bar in the file.
    pub fn latest_date(&self) -> Result<NaiveDate, DataError> {
        self.load_all()?
            .last()
            .map(|b| b.date)
            .ok_or(DataError::NoDataAvailable)
    }
}

#[async_trait]
impl DataSource for CsvDataSource {
    async fn historical_series(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, DataError> {
        let symbol = validate_symbol(symbol)?;
        info!("Fetching data for {} from {}", symbol, self.path().display());

        let bars: Vec<PriceBar> = self
            .load_all()?
            .into_iter()
            .filter(|b| b.date >= start && b.date < end)
            .collect();

        info!(
            symbol,
            %start,
            %end,
            bars = bars.len(),
            "filtered bars to requested range"
        );

        ensure_min_bars(bars.len(), self.min_bars)?;
        PriceSeries::new(symbol, bars)
    }

    fn name(&self) -> &str {
        "csv"
    }
}

/// Parse the date formats seen in exported daily history.
fn parse_date(date_str: &str) -> Result<NaiveDate, DataError> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

    for format in formats {
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            return Ok(d);
        }
    }

    // Exchange-local timestamps, e.g. "2024-01-15 00:00:00+05:30"
    if let Ok(dt) = DateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S%:z") {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }

    Err(DataError::ParseError(format!(
        "Could not parse date: {}",
        date_str
    )))
}

/// Volumes are whole shares; fractional parts are dropped.
fn parse_volume(volume: f64) -> Result<u64, DataError> {
    if !volume.is_finite() || volume < 0.0 {
        return Err(DataError::ParseError(format!(
            "Invalid volume: {}",
            volume
        )));
    }
    Ok(volume.trunc() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_csv(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("indicator-data-tests");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn daily_csv(days: u32) -> String {
        let mut csv = String::from("Date,Open,High,Low,Close,Volume\n");
        for d in 1..=days {
            let close = 100.0 + d as f64;
            csv.push_str(&format!(
                "2024-01-{:02},{},{},{},{},{}\n",
                d,
                close - 0.5,
                close + 1.0,
                close - 1.0,
                close,
                1000 * d
            ));
        }
        csv
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-01-15").unwrap(), day(15));
        assert_eq!(parse_date("2024/01/15").unwrap(), day(15));
        assert_eq!(parse_date("01/15/2024").unwrap(), day(15));
        assert_eq!(parse_date("2024-01-15 00:00:00+05:30").unwrap(), day(15));
        assert_eq!(parse_date("2024-01-15 16:00:00").unwrap(), day(15));
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn test_parse_volume() {
        assert_eq!(parse_volume(1500.0).unwrap(), 1500);
        assert_eq!(parse_volume(1500.9).unwrap(), 1500);
        assert!(parse_volume(-1.0).is_err());
        assert!(parse_volume(f64::NAN).is_err());
    }

    #[test]
    fn test_load_all_sorts_by_date() {
        let path = write_csv(
            "unsorted.csv",
            "Date,Open,High,Low,Close,Volume\n\
             2024-01-03,11,12,10,11.5,300\n\
             2024-01-02,10,11,9,10.5,200\n",
        );
        let bars = CsvDataSource::new(&path).unwrap().load_all().unwrap();

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, day(2));
        assert_eq!(bars[1].close, 11.5);
        assert_eq!(bars[1].volume, 300);
    }

    #[test]
    fn test_load_yahoo_export_with_adj_close() {
        let mut csv = String::from("Date,Open,High,Low,Close,Adj Close,Volume\n");
        for d in 1..=25 {
            let close = 100.0 + d as f64;
            csv.push_str(&format!(
                "2024-01-{:02},{},{},{},{},{},{}\n",
                d,
                close,
                close + 1.0,
                close - 1.0,
                close,
                close - 2.5,
                1000
            ));
        }
        let path = write_csv("yahoo_adj.csv", &csv);
        let bars = CsvDataSource::new(&path).unwrap().load_all().unwrap();

        assert_eq!(bars.len(), 25);
        assert_eq!(bars[0].close, 101.0);
        assert_eq!(bars[24].close, 125.0);
    }

    #[test]
    fn test_adj_close_used_without_close() {
        let path = write_csv(
            "adj_only.csv",
            "Date,Open,High,Low,Adj Close,Volume\n\
             2024-01-02,10,11,9,10.25,200\n",
        );
        let bars = CsvDataSource::new(&path).unwrap().load_all().unwrap();
        assert_eq!(bars[0].close, 10.25);

        let path = write_csv(
            "no_close.csv",
            "Date,Open,High,Low,Volume\n\
             2024-01-02,10,11,9,200\n",
        );
        assert!(matches!(
            CsvDataSource::new(&path).unwrap().load_all(),
            Err(DataError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_non_finite_prices_rejected() {
        let csv = daily_csv(25).replace(
            "2024-01-10,109.5,111,109,110,",
            "2024-01-10,109.5,111,109,NaN,",
        );
        let path = write_csv("nan_close.csv", &csv);
        let source = CsvDataSource::new(&path).unwrap();

        let err = source
            .historical_series("TCS.NS", day(1), day(31))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DataError::ParseError("Non-finite price on 2024-01-10".to_string())
        );

        let path = write_csv(
            "inf_high.csv",
            "Date,Open,High,Low,Close,Volume\n\
             2024-01-02,10,inf,9,10,200\n",
        );
        assert!(CsvDataSource::new(&path).unwrap().load_all().is_err());
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            CsvDataSource::new("/nonexistent/prices.csv").unwrap_err(),
            DataError::NoDataAvailable
        );
    }

    #[test]
    fn test_resolve_in_directory() {
        let path = write_csv("infy_daily.csv", &daily_csv(25));
        let dir = path.parent().unwrap();

        let source = CsvDataSource::resolve(dir, "INFY").unwrap();
        assert_eq!(source.path(), path.as_path());

        assert!(matches!(
            CsvDataSource::resolve(dir, "NOPE"),
            Err(DataError::SymbolNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_historical_series_filters_range() {
        let path = write_csv("range.csv", &daily_csv(31));
        let source = CsvDataSource::new(&path).unwrap();

        let series = source
            .historical_series("TCS.NS", day(5), day(30))
            .await
            .unwrap();

        assert_eq!(series.symbol(), "TCS.NS");
        assert_eq!(series.len(), 25);
        assert_eq!(series.first().date, day(5));
        assert_eq!(series.last().date, day(29)); // end is exclusive
    }

    #[tokio::test]
    async fn test_historical_series_rejects_short_result() {
        let path = write_csv("short.csv", &daily_csv(10));
        let source = CsvDataSource::new(&path).unwrap();

        let err = source
            .historical_series("TCS.NS", day(1), day(31))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DataError::InsufficientData {
                required: 20,
                available: 10
            }
        );

        let err = source
            .historical_series("TCS.NS", day(20), day(25))
            .await
            .unwrap_err();
        assert_eq!(err, DataError::NoDataAvailable);
    }

    #[tokio::test]
    async fn test_historical_series_rejects_blank_symbol() {
        let path = write_csv("blank.csv", &daily_csv(25));
        let source = CsvDataSource::new(&path).unwrap();

        let err = source
            .historical_series("  ", day(1), day(31))
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::InvalidSymbol(_)));
    }

    #[tokio::test]
    async fn test_historical_series_rejects_duplicate_dates() {
        let mut csv = daily_csv(22);
        csv.push_str("2024-01-05,1,1,1,1,1\n");
        let path = write_csv("dupes.csv", &csv);
        let source = CsvDataSource::new(&path).unwrap().with_min_bars(5);

        let err = source
            .historical_series("TCS.NS", day(1), day(31))
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::UnorderedDates { .. }));
    }
}

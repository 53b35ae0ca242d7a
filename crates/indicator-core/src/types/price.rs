//! Daily price bars and validated series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// One dated OHLCV observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading day
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: u64,
}

impl PriceBar {
    /// Create a new bar.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// True when open, high, low and close are all finite.
    pub fn is_finite(&self) -> bool {
        [self.open, self.high, self.low, self.close]
            .iter()
            .all(|p| p.is_finite())
    }

    /// Bar carrying the same price in every field.
    ///
    /// Handy when only closes are known.
    pub fn from_close(date: NaiveDate, close: f64) -> Self {
        Self::new(date, close, close, close, close, 0)
    }
}

/// Chronologically ordered, non-empty sequence of bars for one symbol.
///
/// Dates are strictly increasing. The minimum length needed for meaningful
/// indicator windows is a data source concern, not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    symbol: String,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series, checking that it is non-empty, every price is finite and
    /// dates are strictly ascending.
    pub fn new(symbol: impl Into<String>, bars: Vec<PriceBar>) -> Result<Self, DataError> {
        if bars.is_empty() {
            return Err(DataError::NoDataAvailable);
        }

        if let Some(bar) = bars.iter().find(|b| !b.is_finite()) {
            return Err(DataError::NonFinitePrice(bar.date));
        }

        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(DataError::UnorderedDates {
                    previous: pair[0].date,
                    next: pair[1].date,
                });
            }
        }

        Ok(Self {
            symbol: symbol.into(),
            bars,
        })
    }

    /// Symbol the bars belong to.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Get all bars as a slice.
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Oldest bar.
    pub fn first(&self) -> &PriceBar {
        &self.bars[0]
    }

    /// Newest bar.
    pub fn last(&self) -> &PriceBar {
        &self.bars[self.bars.len() - 1]
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Get an iterator over the bars.
    pub fn iter(&self) -> impl Iterator<Item = &PriceBar> {
        self.bars.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_series_accepts_ascending_dates() {
        let series = PriceSeries::new(
            "TCS.NS",
            vec![
                PriceBar::new(day(2), 100.0, 101.0, 99.0, 100.5, 1000),
                PriceBar::new(day(3), 100.5, 102.0, 100.0, 101.5, 2000),
            ],
        )
        .unwrap();

        assert_eq!(series.symbol(), "TCS.NS");
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![100.5, 101.5]);
        assert_eq!(series.first().date, day(2));
        assert_eq!(series.last().date, day(3));
    }

    #[test]
    fn test_series_rejects_empty() {
        let err = PriceSeries::new("AAPL", vec![]).unwrap_err();
        assert_eq!(err, DataError::NoDataAvailable);
    }

    #[test]
    fn test_series_rejects_duplicate_dates() {
        let err = PriceSeries::new(
            "AAPL",
            vec![
                PriceBar::from_close(day(2), 10.0),
                PriceBar::from_close(day(2), 11.0),
            ],
        )
        .unwrap_err();

        assert_eq!(
            err,
            DataError::UnorderedDates {
                previous: day(2),
                next: day(2)
            }
        );
    }

    #[test]
    fn test_series_rejects_descending_dates() {
        let result = PriceSeries::new(
            "AAPL",
            vec![
                PriceBar::from_close(day(5), 10.0),
                PriceBar::from_close(day(4), 11.0),
            ],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_series_rejects_non_finite_prices() {
        let err = PriceSeries::new(
            "TCS.NS",
            vec![
                PriceBar::from_close(day(2), 10.0),
                PriceBar::from_close(day(3), f64::NAN),
                PriceBar::from_close(day(4), 11.0),
            ],
        )
        .unwrap_err();
        assert_eq!(err, DataError::NonFinitePrice(day(3)));

        let mut bar = PriceBar::from_close(day(2), 10.0);
        bar.high = f64::INFINITY;
        assert!(!bar.is_finite());
        assert!(PriceSeries::new("TCS.NS", vec![bar]).is_err());
    }

    #[test]
    fn test_bar_serializes_date_as_iso() {
        let bar = PriceBar::new(day(15), 1.0, 2.0, 0.5, 1.5, 42);
        let json = serde_json::to_string(&bar).unwrap();
        assert!(json.contains("\"date\":\"2024-01-15\""));
        assert!(json.contains("\"volume\":42"));
    }
}

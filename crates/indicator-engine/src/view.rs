//! Plottable views over an enriched series.
//!
//! Each view selects the columns a chart needs. Nothing here draws anything.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::engine::EnrichedSeries;
use crate::simd::minmax_simd;

/// RSI level above which a market is read as overbought.
pub const RSI_OVERBOUGHT: f64 = 70.0;
/// RSI level below which a market is read as oversold.
pub const RSI_OVERSOLD: f64 = 30.0;

/// The four canonical chart views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartView {
    /// Close with fast and slow SMA
    Price,
    /// RSI oscillator with 70/30 reference lines
    Rsi,
    /// MACD, Signal and their histogram
    Macd,
    /// Close inside the Bollinger envelope
    BollingerBands,
}

impl ChartView {
    /// Display title of the view.
    pub fn title(&self) -> &'static str {
        match self {
            ChartView::Price => "Price",
            ChartView::Rsi => "RSI",
            ChartView::Macd => "MACD",
            ChartView::BollingerBands => "Bollinger Bands",
        }
    }
}

impl fmt::Display for ChartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for ChartView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price" => Ok(ChartView::Price),
            "rsi" => Ok(ChartView::Rsi),
            "macd" => Ok(ChartView::Macd),
            "bollinger" | "bollinger bands" | "bollinger_bands" | "bb" => {
                Ok(ChartView::BollingerBands)
            }
            _ => Err(format!("Invalid chart view: {}", s)),
        }
    }
}

/// One labelled line. `None` marks a gap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

impl LineSeries {
    fn from_values(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values: values.into_iter().map(Some).collect(),
        }
    }
}

/// Region filled between two curves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadedRegion {
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Everything a chart needs for one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewData {
    pub view: ChartView,
    pub title: String,
    pub dates: Vec<NaiveDate>,
    pub lines: Vec<LineSeries>,
    /// Horizontal reference levels
    pub reference_lines: Vec<f64>,
    /// Bars drawn around zero
    pub histogram: Option<Vec<f64>>,
    pub shaded: Option<ShadedRegion>,
    /// Fixed vertical range, if the view has one
    pub y_range: Option<(f64, f64)>,
}

impl ViewData {
    /// Select the columns for `view`.
    pub fn extract(series: &EnrichedSeries, view: ChartView) -> Self {
        let params = series.params();
        let dates = series.iter().map(|b| b.bar.date).collect();
        let closes: Vec<f64> = series.iter().map(|b| b.bar.close).collect();

        let mut data = Self {
            view,
            title: format!("{} - {}", series.symbol(), view.title()),
            dates,
            lines: Vec::new(),
            reference_lines: Vec::new(),
            histogram: None,
            shaded: None,
            y_range: None,
        };

        match view {
            ChartView::Price => {
                data.lines = vec![
                    LineSeries::from_values("Close Price", closes),
                    LineSeries::from_values(
                        format!("SMA{}", params.sma_fast_window),
                        series.column(|r| r.sma_fast),
                    ),
                    LineSeries::from_values(
                        format!("SMA{}", params.sma_slow_window),
                        series.column(|r| r.sma_slow),
                    ),
                ];
            }
            ChartView::Rsi => {
                data.lines = vec![LineSeries {
                    label: "RSI".to_string(),
                    values: series.iter().map(|b| b.indicators.rsi.value()).collect(),
                }];
                data.reference_lines = vec![RSI_OVERBOUGHT, RSI_OVERSOLD];
                data.y_range = Some((0.0, 100.0));
            }
            ChartView::Macd => {
                data.lines = vec![
                    LineSeries::from_values("MACD", series.column(|r| r.macd)),
                    LineSeries::from_values("Signal", series.column(|r| r.signal)),
                ];
                data.histogram = Some(series.column(|r| r.histogram()));
            }
            ChartView::BollingerBands => {
                let upper = series.column(|r| r.bb_upper);
                let lower = series.column(|r| r.bb_lower);
                data.lines = vec![
                    LineSeries::from_values("Close", closes),
                    LineSeries::from_values("Upper BB", upper.clone()),
                    LineSeries::from_values("Lower BB", lower.clone()),
                ];
                data.shaded = Some(ShadedRegion { upper, lower });
            }
        }

        data
    }

    /// Vertical extent: the fixed range if set, otherwise the span of all
    /// plotted values including histogram bars.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        if self.y_range.is_some() {
            return self.y_range;
        }

        let mut values: Vec<f64> = self
            .lines
            .iter()
            .flat_map(|line| line.values.iter().flatten().copied())
            .collect();
        if let Some(histogram) = &self.histogram {
            values.extend(histogram);
        }

        minmax_simd(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::IndicatorEngine;
    use chrono::Duration;
    use indicator_core::types::{PriceBar, PriceSeries};

    fn enriched(closes: &[f64]) -> EnrichedSeries {
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| PriceBar::from_close(start + Duration::days(i as i64), c))
            .collect();
        let series = PriceSeries::new("TCS.NS", bars).unwrap();
        IndicatorEngine::default().compute(&series)
    }

    #[test]
    fn test_chart_view_parse() {
        assert_eq!(ChartView::from_str("price").unwrap(), ChartView::Price);
        assert_eq!(ChartView::from_str("RSI").unwrap(), ChartView::Rsi);
        assert_eq!(
            ChartView::from_str("Bollinger Bands").unwrap(),
            ChartView::BollingerBands
        );
        assert_eq!(ChartView::from_str("bb").unwrap(), ChartView::BollingerBands);
        assert!(ChartView::from_str("volume").is_err());
    }

    #[test]
    fn test_price_view() {
        let series = enriched(&[10.0, 12.0, 11.0]);
        let view = ViewData::extract(&series, ChartView::Price);

        assert_eq!(view.title, "TCS.NS - Price");
        let labels: Vec<&str> = view.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Close Price", "SMA20", "SMA50"]);
        assert_eq!(view.lines[0].values, vec![Some(10.0), Some(12.0), Some(11.0)]);
        assert_eq!(view.dates.len(), 3);
        assert_eq!(view.value_range(), Some((10.0, 12.0)));
    }

    #[test]
    fn test_rsi_view_has_gaps_and_references() {
        let series = enriched(&[10.0, 11.0, 12.0]);
        let view = ViewData::extract(&series, ChartView::Rsi);

        assert_eq!(view.lines[0].values[0], None);
        assert_eq!(view.lines[0].values[1], Some(100.0));
        assert_eq!(view.reference_lines, vec![70.0, 30.0]);
        assert_eq!(view.value_range(), Some((0.0, 100.0)));
    }

    #[test]
    fn test_macd_view_histogram() {
        let series = enriched(&[10.0, 11.0, 13.0, 12.0]);
        let view = ViewData::extract(&series, ChartView::Macd);
        let histogram = view.histogram.as_ref().unwrap();

        assert_eq!(histogram.len(), 4);
        for (i, h) in histogram.iter().enumerate() {
            let macd = view.lines[0].values[i].unwrap();
            let signal = view.lines[1].values[i].unwrap();
            assert!((h - (macd - signal)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_bollinger_view_shading() {
        let series = enriched(&[10.0, 11.0, 13.0, 12.0]);
        let view = ViewData::extract(&series, ChartView::BollingerBands);
        let shaded = view.shaded.as_ref().unwrap();

        assert_eq!(view.lines[1].label, "Upper BB");
        assert_eq!(view.lines[2].label, "Lower BB");
        for (u, l) in shaded.upper.iter().zip(shaded.lower.iter()) {
            assert!(u >= l);
        }
    }
}

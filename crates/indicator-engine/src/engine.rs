//! Indicator engine: one call turns a price series into an enriched series.

use indicator_core::error::IndicatorError;
use indicator_core::traits::{Indicator, MultiOutputIndicator};
use indicator_core::types::{IndicatorRecord, PriceBar, PriceSeries};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::momentum::{Macd, Rsi};
use crate::moving_average::Sma;
use crate::volatility::BollingerBands;

/// Windows, spans and band multiplier used by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    /// Fast SMA window
    pub sma_fast_window: usize,
    /// Slow SMA window
    pub sma_slow_window: usize,
    /// Bollinger window
    pub bb_window: usize,
    /// Bollinger standard deviation multiplier
    pub bb_k: f64,
    /// RSI window
    pub rsi_window: usize,
    /// Fast EMA span of MACD
    pub macd_fast_span: usize,
    /// Slow EMA span of MACD
    pub macd_slow_span: usize,
    /// Signal EMA span of MACD
    pub macd_signal_span: usize,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            sma_fast_window: 20,
            sma_slow_window: 50,
            bb_window: 20,
            bb_k: 2.0,
            rsi_window: 14,
            macd_fast_span: 12,
            macd_slow_span: 26,
            macd_signal_span: 9,
        }
    }
}

/// A price bar with its derived indicator values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnrichedBar {
    #[serde(flatten)]
    pub bar: PriceBar,
    #[serde(flatten)]
    pub indicators: IndicatorRecord,
}

/// Output of [`IndicatorEngine::compute`], one entry per input bar in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedSeries {
    symbol: String,
    params: EngineParams,
    bars: Vec<EnrichedBar>,
}

impl EnrichedSeries {
    /// Symbol of the source series.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Parameters the values were computed with.
    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Get the number of bars.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Get all enriched bars as a slice.
    pub fn bars(&self) -> &[EnrichedBar] {
        &self.bars
    }

    /// Get the last enriched bar.
    pub fn last(&self) -> Option<&EnrichedBar> {
        self.bars.last()
    }

    /// Get an iterator over the enriched bars.
    pub fn iter(&self) -> impl Iterator<Item = &EnrichedBar> {
        self.bars.iter()
    }

    /// Extract one indicator column.
    pub fn column<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(&IndicatorRecord) -> f64,
    {
        self.bars.iter().map(|b| f(&b.indicators)).collect()
    }
}

/// Stateless indicator engine.
///
/// Parameters are validated once in [`IndicatorEngine::new`]; after that
/// [`compute`](IndicatorEngine::compute) cannot fail. The engine keeps no state
/// between calls, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    params: EngineParams,
    sma_fast: Sma,
    sma_slow: Sma,
    bollinger: BollingerBands,
    rsi: Rsi,
    macd: Macd,
}

impl IndicatorEngine {
    /// Create an engine, rejecting any non-positive window, span or multiplier.
    pub fn new(params: EngineParams) -> Result<Self, IndicatorError> {
        Ok(Self {
            params,
            sma_fast: Sma::new(params.sma_fast_window)?,
            sma_slow: Sma::new(params.sma_slow_window)?,
            bollinger: BollingerBands::with_params(params.bb_window, params.bb_k)?,
            rsi: Rsi::new(params.rsi_window)?,
            macd: Macd::with_spans(
                params.macd_fast_span,
                params.macd_slow_span,
                params.macd_signal_span,
            )?,
        })
    }

    /// Parameters of this engine.
    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Compute indicator records for a sequence of closes.
    pub fn compute_closes(&self, closes: &[f64]) -> Vec<IndicatorRecord> {
        let sma_fast = self.sma_fast.calculate(closes);
        let sma_slow = self.sma_slow.calculate(closes);
        let bands = self.bollinger.calculate(closes);
        let rsi = self.rsi.calculate(closes);
        let macd = self.macd.calculate(closes);

        (0..closes.len())
            .map(|i| IndicatorRecord {
                sma_fast: sma_fast[i],
                sma_slow: sma_slow[i],
                bb_middle: bands[i].middle,
                bb_upper: bands[i].upper,
                bb_lower: bands[i].lower,
                rsi: rsi[i],
                ema_fast: macd[i].fast_ema,
                ema_slow: macd[i].slow_ema,
                macd: macd[i].macd,
                signal: macd[i].signal,
            })
            .collect()
    }

    /// Compute the enriched series for `series`.
    ///
    /// Input bars are never reordered or deduplicated.
    pub fn compute(&self, series: &PriceSeries) -> EnrichedSeries {
        debug!(
            symbol = series.symbol(),
            bars = series.len(),
            "computing indicators"
        );

        if series.len() <= self.sma_slow.warm_up() {
            debug!(
                bars = series.len(),
                window = self.params.sma_slow_window,
                "series shorter than slow window, values stay in warm-up"
            );
        }

        let records = self.compute_closes(&series.closes());

        let bars = series
            .iter()
            .zip(records)
            .map(|(bar, indicators)| EnrichedBar {
                bar: *bar,
                indicators,
            })
            .collect();

        EnrichedSeries {
            symbol: series.symbol().to_string(),
            params: self.params,
            bars,
        }
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self {
            params: EngineParams::default(),
            sma_fast: Sma { window: 20 },
            sma_slow: Sma { window: 50 },
            bollinger: BollingerBands::default(),
            rsi: Rsi::default(),
            macd: Macd::default(),
        }
    }
}

//! Momentum indicators.

use indicator_core::error::IndicatorError;
use indicator_core::traits::{Indicator, MultiOutputIndicator};
use indicator_core::types::{IndicatorValue, UndefinedReason};
use serde::{Deserialize, Serialize};

use crate::moving_average::Ema;
use crate::simd::price_changes_simd;
use crate::window::trailing_mean;

/// Relative Strength Index (RSI).
///
/// Average gain and average loss are simple means over the trailing window,
/// growing from the first bar like [`Sma`](crate::Sma). The first bar has no
/// predecessor and contributes a change of 0.
///
/// When both averages are 0 the ratio is 0/0 and the point is reported as
/// [`IndicatorValue::Undefined`] rather than forced to a number.
#[derive(Debug, Clone)]
pub struct Rsi {
    window: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// Common windows are 14 (default) or 9.
    pub fn new(window: usize) -> Result<Self, IndicatorError> {
        let window = IndicatorError::check_window("RSI window", window)?;
        Ok(Self { window })
    }

    /// RSI from one pair of averages.
    pub fn from_averages(avg_gain: f64, avg_loss: f64) -> IndicatorValue {
        if avg_loss == 0.0 {
            if avg_gain > 0.0 {
                // RS is +infinity
                IndicatorValue::Defined(100.0)
            } else {
                IndicatorValue::Undefined(UndefinedReason::NoPriceMovement)
            }
        } else {
            IndicatorValue::Defined(100.0 - (100.0 / (1.0 + avg_gain / avg_loss)))
        }
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self { window: 14 }
    }
}

impl Indicator for Rsi {
    type Output = IndicatorValue;

    fn calculate(&self, data: &[f64]) -> Vec<IndicatorValue> {
        let (gains, losses) = price_changes_simd(data);

        let avg_gains = trailing_mean(&gains, self.window);
        let avg_losses = trailing_mean(&losses, self.window);

        avg_gains
            .iter()
            .zip(avg_losses.iter())
            .map(|(&gain, &loss)| Self::from_averages(gain, loss))
            .collect()
    }

    fn window(&self) -> usize {
        self.window
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

/// MACD output for one point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    /// Fast EMA of the input
    pub fast_ema: f64,
    /// Slow EMA of the input
    pub slow_ema: f64,
    /// MACD line (fast EMA - slow EMA)
    pub macd: f64,
    /// Signal line (EMA of MACD)
    pub signal: f64,
    /// Histogram (MACD - Signal)
    pub histogram: f64,
}

/// MACD indicator.
///
/// Uses two EMAs to identify trend direction and momentum. All three EMAs are
/// seeded with their first input, so every point has a value.
#[derive(Debug, Clone)]
pub struct Macd {
    fast: Ema,
    slow: Ema,
    signal: Ema,
}

impl Macd {
    /// Create a new MACD with default spans (12, 26, 9).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MACD with custom spans.
    pub fn with_spans(fast: usize, slow: usize, signal: usize) -> Result<Self, IndicatorError> {
        Ok(Self {
            fast: Ema::new(fast)?,
            slow: Ema::new(slow)?,
            signal: Ema::new(signal)?,
        })
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast: Ema::from_span(12),
            slow: Ema::from_span(26),
            signal: Ema::from_span(9),
        }
    }
}

impl MultiOutputIndicator for Macd {
    type Outputs = MacdOutput;

    fn calculate(&self, data: &[f64]) -> Vec<MacdOutput> {
        let fast_ema = self.fast.calculate(data);
        let slow_ema = self.slow.calculate(data);

        let macd_line: Vec<f64> = fast_ema
            .iter()
            .zip(slow_ema.iter())
            .map(|(f, s)| f - s)
            .collect();

        let signal_line = self.signal.calculate(&macd_line);

        fast_ema
            .into_iter()
            .zip(slow_ema)
            .zip(macd_line)
            .zip(signal_line)
            .map(|(((fast_ema, slow_ema), macd), signal)| MacdOutput {
                fast_ema,
                slow_ema,
                macd,
                signal,
                histogram: macd - signal,
            })
            .collect()
    }

    fn window(&self) -> usize {
        self.slow.window()
    }

    fn name(&self) -> &str {
        "MACD"
    }

    fn warm_up(&self) -> usize {
        0
    }
}

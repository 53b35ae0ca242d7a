//! Moving average indicators.

use indicator_core::error::IndicatorError;
use indicator_core::traits::Indicator;

use crate::window::trailing_mean;

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the last N values. Until N values are
/// available the mean covers every value seen so far, so the first output
/// equals the first input.
#[derive(Debug, Clone)]
pub struct Sma {
    pub(crate) window: usize,
}

impl Sma {
    /// Create a new SMA with the specified window.
    pub fn new(window: usize) -> Result<Self, IndicatorError> {
        let window = IndicatorError::check_window("SMA window", window)?;
        Ok(Self { window })
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        trailing_mean(data, self.window)
    }

    fn window(&self) -> usize {
        self.window
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Exponential Moving Average (EMA).
///
/// Recursive form seeded with the first observation:
/// `EMA[0] = x[0]`, `EMA[i] = a * x[i] + (1 - a) * EMA[i-1]` with `a = 2 / (span + 1)`.
/// Evaluated as `EMA[i-1] + a * (x[i] - EMA[i-1])`, which holds a repeated value exactly.
#[derive(Debug, Clone)]
pub struct Ema {
    span: usize,
    multiplier: f64,
}

impl Ema {
    /// Create a new EMA with the specified span.
    pub fn new(span: usize) -> Result<Self, IndicatorError> {
        let span = IndicatorError::check_window("EMA span", span)?;
        Ok(Self::from_span(span))
    }

    /// Caller guarantees `span > 0`.
    pub(crate) fn from_span(span: usize) -> Self {
        let multiplier = 2.0 / (span as f64 + 1.0);
        Self { span, multiplier }
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        let Some((&first, rest)) = data.split_first() else {
            return vec![];
        };

        let mut result = Vec::with_capacity(data.len());
        result.push(first);

        let mut ema = first;

        for &price in rest {
            ema += self.multiplier * (price - ema);
            result.push(ema);
        }

        result
    }

    fn window(&self) -> usize {
        self.span
    }

    fn name(&self) -> &str {
        "EMA"
    }

    /// The recursive form has no reduced-window phase.
    fn warm_up(&self) -> usize {
        0
    }
}

//! Per-bar indicator output types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a point could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedReason {
    /// Average gain and average loss are both zero over the window (0/0).
    NoPriceMovement,
}

impl fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndefinedReason::NoPriceMovement => write!(f, "no price movement"),
        }
    }
}

/// A value that is either computed or explicitly undefined at its position.
///
/// Serializes as a bare number when defined and as the reason string
/// (e.g. `"no_price_movement"`) when undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndicatorValue {
    Defined(f64),
    Undefined(UndefinedReason),
}

impl IndicatorValue {
    /// The numeric value, if defined.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        match self {
            IndicatorValue::Defined(v) => Some(*v),
            IndicatorValue::Undefined(_) => None,
        }
    }

    #[inline]
    pub fn is_defined(&self) -> bool {
        matches!(self, IndicatorValue::Defined(_))
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        !self.is_defined()
    }
}

impl fmt::Display for IndicatorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorValue::Defined(v) => write!(f, "{:.2}", v),
            IndicatorValue::Undefined(reason) => write!(f, "undefined ({})", reason),
        }
    }
}

/// Derived values for one bar, aligned 1:1 by position with the input series.
///
/// The fast/slow naming follows the engine parameters; with defaults these are
/// SMA20, SMA50, EMA12 and EMA26.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecord {
    /// Fast simple moving average (SMA20)
    pub sma_fast: f64,
    /// Slow simple moving average (SMA50)
    pub sma_slow: f64,
    /// Bollinger middle band
    pub bb_middle: f64,
    /// Bollinger upper band
    pub bb_upper: f64,
    /// Bollinger lower band
    pub bb_lower: f64,
    /// Relative Strength Index, undefined over flat runs
    pub rsi: IndicatorValue,
    /// Fast EMA (EMA12)
    pub ema_fast: f64,
    /// Slow EMA (EMA26)
    pub ema_slow: f64,
    /// MACD line (fast EMA - slow EMA)
    pub macd: f64,
    /// Signal line (EMA of MACD)
    pub signal: f64,
}

impl IndicatorRecord {
    /// MACD histogram (MACD - Signal).
    #[inline]
    pub fn histogram(&self) -> f64 {
        self.macd - self.signal
    }
}

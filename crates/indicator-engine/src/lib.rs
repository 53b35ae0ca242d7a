//! Technical indicator engine for daily price series.
//!
//! This crate provides the indicator computations behind the price views:
//! - Moving averages (SMA, EMA)
//! - Momentum indicators (RSI, MACD)
//! - Volatility indicators (Standard Deviation, Bollinger Bands)
//!
//! Every transform returns one value per input point. Windowed statistics use
//! a growing window until enough points exist, and RSI reports 0/0 points as
//! explicitly undefined. [`IndicatorEngine`] bundles them into one pass over a
//! [`PriceSeries`](indicator_core::PriceSeries).

pub mod engine;
pub mod momentum;
pub mod moving_average;
pub mod simd;
pub mod view;
pub mod volatility;
pub mod window;

pub use engine::{EngineParams, EnrichedBar, EnrichedSeries, IndicatorEngine};
pub use momentum::{Macd, MacdOutput, Rsi};
pub use moving_average::{Ema, Sma};
pub use view::{ChartView, LineSeries, ShadedRegion, ViewData, RSI_OVERBOUGHT, RSI_OVERSOLD};
pub use volatility::{BollingerBands, BollingerOutput, StdDev};

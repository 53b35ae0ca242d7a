//! Volatility indicators.
//!
//! Standard deviation here is the sample standard deviation (divisor n - 1)
//! over the trailing window. A single-point window has a standard deviation
//! of exactly 0, so the first Bollinger point collapses onto the close.

use indicator_core::error::IndicatorError;
use indicator_core::traits::{Indicator, MultiOutputIndicator};
use serde::{Deserialize, Serialize};

use crate::moving_average::Sma;
use crate::simd::{sum_simd, sum_sq_dev_simd};
use crate::window::{is_flat, trailing_windows};

/// Rolling sample standard deviation.
#[derive(Debug, Clone)]
pub struct StdDev {
    window: usize,
}

impl StdDev {
    /// Create a new standard deviation indicator.
    pub fn new(window: usize) -> Result<Self, IndicatorError> {
        let window = IndicatorError::check_window("standard deviation window", window)?;
        Ok(Self { window })
    }

    /// Sample standard deviation of one window.
    fn sample_std(values: &[f64]) -> f64 {
        let n = values.len();
        if n < 2 || is_flat(values) {
            return 0.0;
        }
        let mean = sum_simd(values) / n as f64;
        (sum_sq_dev_simd(values, mean) / (n - 1) as f64).sqrt()
    }
}

impl Indicator for StdDev {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        trailing_windows(data, self.window)
            .map(Self::sample_std)
            .collect()
    }

    fn window(&self) -> usize {
        self.window
    }

    fn name(&self) -> &str {
        "StdDev"
    }
}

/// Bollinger Bands output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerOutput {
    /// Upper band
    pub upper: f64,
    /// Middle band (SMA)
    pub middle: f64,
    /// Lower band
    pub lower: f64,
}

impl BollingerOutput {
    /// Check if price is above upper band.
    pub fn is_overbought(&self, price: f64) -> bool {
        price > self.upper
    }

    /// Check if price is below lower band.
    pub fn is_oversold(&self, price: f64) -> bool {
        price < self.lower
    }
}

/// Bollinger Bands.
///
/// Consists of a middle band (SMA) with upper and lower bands
/// at a specified number of standard deviations.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    sma: Sma,
    std_dev: StdDev,
    k: f64,
}

impl BollingerBands {
    /// Create new Bollinger Bands with default parameters (20, 2.0).
    pub fn new() -> Self {
        Self {
            sma: Sma { window: 20 },
            std_dev: StdDev { window: 20 },
            k: 2.0,
        }
    }

    /// Create Bollinger Bands with custom parameters.
    pub fn with_params(window: usize, k: f64) -> Result<Self, IndicatorError> {
        let k = IndicatorError::check_multiplier("Bollinger k", k)?;
        Ok(Self {
            sma: Sma::new(window)?,
            std_dev: StdDev::new(window)?,
            k,
        })
    }
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiOutputIndicator for BollingerBands {
    type Outputs = BollingerOutput;

    fn calculate(&self, data: &[f64]) -> Vec<BollingerOutput> {
        let middle = self.sma.calculate(data);
        let std_dev = self.std_dev.calculate(data);

        middle
            .into_iter()
            .zip(std_dev)
            .map(|(middle, std_dev)| BollingerOutput {
                upper: middle + self.k * std_dev,
                middle,
                lower: middle - self.k * std_dev,
            })
            .collect()
    }

    fn window(&self) -> usize {
        self.sma.window()
    }

    fn name(&self) -> &str {
        "Bollinger Bands"
    }
}

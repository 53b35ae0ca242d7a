//! Indicator trait definitions.

/// Trait for technical indicators.
///
/// Indicators transform a price sequence into a derived sequence of the
/// same length. Leading points are computed over a growing window until
/// `window` observations are available.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data.
    ///
    /// # Arguments
    /// * `data` - Input data (typically closing prices)
    ///
    /// # Returns
    /// One value per input point
    fn calculate(&self, data: &[f64]) -> Vec<Self::Output>;

    /// Get the nominal window (or span) of the indicator.
    fn window(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Number of leading outputs computed over fewer points than the window.
    fn warm_up(&self) -> usize {
        self.window().saturating_sub(1)
    }
}

/// Multi-output indicator (e.g., Bollinger Bands, MACD).
///
/// Some indicators produce multiple related values per input point.
pub trait MultiOutputIndicator: Send + Sync {
    /// The output type containing multiple values.
    type Outputs;

    /// Calculate indicator values for the given data.
    fn calculate(&self, data: &[f64]) -> Vec<Self::Outputs>;

    /// Get the nominal window of the indicator.
    fn window(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Number of leading outputs computed over fewer points than the window.
    fn warm_up(&self) -> usize {
        self.window().saturating_sub(1)
    }
}

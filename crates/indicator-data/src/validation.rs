//! Upstream checks applied before a series reaches the engine.

use indicator_core::error::DataError;

/// Minimum number of bars for every default indicator window to be meaningful.
pub const MIN_BARS: usize = 20;

/// Reject blank symbols. Returns the trimmed symbol.
pub fn validate_symbol(symbol: &str) -> Result<&str, DataError> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(DataError::InvalidSymbol(
            "Please enter a stock symbol".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Reject empty results and results shorter than `min_bars`.
pub fn ensure_min_bars(available: usize, min_bars: usize) -> Result<(), DataError> {
    if available == 0 {
        return Err(DataError::NoDataAvailable);
    }
    if available < min_bars {
        return Err(DataError::InsufficientData {
            required: min_bars,
            available,
        });
    }
    Ok(())
}

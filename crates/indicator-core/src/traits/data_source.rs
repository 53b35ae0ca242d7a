//! Data source trait definitions.

use crate::error::DataError;
use crate::types::PriceSeries;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for historical daily price sources.
///
/// Implementations are responsible for rejecting unusable results (empty
/// symbol, no rows, too few bars) so the engine only ever sees a
/// well-formed series.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch a historical series.
    ///
    /// # Arguments
    /// * `symbol` - The symbol to fetch
    /// * `start` - First date of the range (inclusive)
    /// * `end` - Last date of the range (exclusive)
    ///
    /// # Returns
    /// A series ordered from oldest to newest
    async fn historical_series(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, DataError>;

    /// Get the data source name.
    fn name(&self) -> &str;
}

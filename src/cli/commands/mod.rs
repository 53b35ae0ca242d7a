//! CLI command implementations.

pub mod compute;
pub mod validate;
pub mod view;

use anyhow::{Context, Result};
use indicator_config::AppConfig;
use indicator_core::types::PriceSeries;
use indicator_data::load_csv;
use tracing::info;

use crate::cli::SeriesArgs;

/// Load and validate the requested history.
pub async fn load_series(args: &SeriesArgs, config: &AppConfig) -> Result<PriceSeries> {
    let data_path = args
        .data
        .clone()
        .unwrap_or_else(|| config.data.data_dir.clone());
    if !data_path.exists() {
        anyhow::bail!(
            "Data path '{}' does not exist. Provide a CSV file or directory containing CSV files (e.g. --data ./data)",
            data_path.display()
        );
    }

    let period = args.period.unwrap_or(config.data.default_period);
    info!(symbol = %args.symbol, %period, "loading history");

    let series = load_csv(
        &data_path,
        &args.symbol,
        period,
        args.end,
        config.data.min_bars,
    )
    .await
    .with_context(|| format!("Failed to load data for {}", args.symbol.trim()))?;

    Ok(series)
}

//! Compute command implementation.

use anyhow::{Context, Result};
use indicator_config::AppConfig;
use indicator_report::IndicatorReport;
use tracing::info;

use super::load_series;
use crate::cli::ComputeArgs;

pub async fn run(args: ComputeArgs, config: &AppConfig) -> Result<()> {
    let engine = config
        .build_engine()
        .context("Invalid indicator settings")?;

    let series = load_series(&args.series, config).await?;
    let enriched = engine.compute(&series);
    info!(
        symbol = enriched.symbol(),
        bars = enriched.len(),
        "indicators computed"
    );

    let output = IndicatorReport::new(&enriched).render(args.output.into())?;
    println!("{}", output);

    // Save if requested
    if let Some(save_path) = &args.save {
        std::fs::write(save_path, &output)
            .with_context(|| format!("Failed to write {}", save_path.display()))?;
        info!("Results saved to {:?}", save_path);
    }

    Ok(())
}

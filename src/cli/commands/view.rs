//! View command implementation.

use anyhow::{Context, Result};
use indicator_config::AppConfig;
use indicator_engine::ViewData;
use indicator_report::render_view;

use super::load_series;
use crate::cli::ViewArgs;

pub async fn run(args: ViewArgs, config: &AppConfig) -> Result<()> {
    let engine = config
        .build_engine()
        .context("Invalid indicator settings")?;

    let series = load_series(&args.series, config).await?;
    let enriched = engine.compute(&series);

    let view = ViewData::extract(&enriched, args.chart);
    println!("{}", render_view(&view));

    Ok(())
}

//! CLI definitions.

pub mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use indicator_core::types::Period;
use indicator_engine::ChartView;
use indicator_report::ReportFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stock-indicators")]
#[command(author, version, about = "Technical indicators over daily stock prices")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the configured level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute indicators for a symbol
    Compute(ComputeArgs),
    /// Print the data behind one chart
    View(ViewArgs),
    /// Validate configuration
    ValidateConfig,
}

/// Which history to load.
#[derive(clap::Args)]
pub struct SeriesArgs {
    /// Stock symbol, e.g. TCS.NS
    #[arg(short, long)]
    pub symbol: String,

    /// CSV file, or a directory holding {symbol}.csv (defaults to the configured data_dir)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Lookback period (1d, 1mo, 3mo, 6mo, 1y, 2y, 5y)
    #[arg(short, long)]
    pub period: Option<Period>,

    /// End of the range, exclusive (YYYY-MM-DD). Defaults to the day after the latest bar
    #[arg(long)]
    pub end: Option<NaiveDate>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Csv => ReportFormat::Csv,
        }
    }
}

#[derive(clap::Args)]
pub struct ComputeArgs {
    #[command(flatten)]
    pub series: SeriesArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Save output to file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub series: SeriesArgs,

    /// Chart to extract (price, rsi, macd, bollinger)
    #[arg(long, default_value = "price")]
    pub chart: ChartView,
}

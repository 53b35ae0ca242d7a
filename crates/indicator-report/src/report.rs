//! Indicator report generation.

use indicator_core::error::{AppError, AppResult};
use indicator_core::types::IndicatorValue;
use indicator_engine::{BollingerOutput, EnrichedBar, EnrichedSeries, RSI_OVERBOUGHT, RSI_OVERSOLD};

/// Output format of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

const CSV_HEADER: [&str; 17] = [
    "date",
    "open",
    "high",
    "low",
    "close",
    "volume",
    "sma_fast",
    "sma_slow",
    "bb_middle",
    "bb_upper",
    "bb_lower",
    "rsi",
    "ema_fast",
    "ema_slow",
    "macd",
    "signal",
    "histogram",
];

/// Report over an enriched series.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorReport<'a> {
    series: &'a EnrichedSeries,
}

impl<'a> IndicatorReport<'a> {
    pub fn new(series: &'a EnrichedSeries) -> Self {
        Self { series }
    }

    /// Render in the requested format.
    pub fn render(&self, format: ReportFormat) -> AppResult<String> {
        match format {
            ReportFormat::Text => Ok(self.summary()),
            ReportFormat::Json => self.to_json(),
            ReportFormat::Csv => self.to_csv(),
        }
    }

    /// Generate a text summary of the latest bar.
    pub fn summary(&self) -> String {
        let mut s = String::new();
        let params = self.series.params();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str("                     INDICATOR REPORT                       \n");
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        let (Some(first), Some(last)) = (self.series.bars().first(), self.series.last()) else {
            s.push_str(&format!("  {}: no bars\n", self.series.symbol()));
            return s;
        };
        let r = &last.indicators;

        s.push_str("SERIES\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  Symbol:              {}\n", self.series.symbol()));
        s.push_str(&format!("  Bars:                {}\n", self.series.len()));
        s.push_str(&format!(
            "  Range:               {} to {}\n",
            first.bar.date, last.bar.date
        ));
        s.push_str(&format!("  Last Close:          {:.2}\n", last.bar.close));
        s.push_str(&format!("  Volume:              {}\n", last.bar.volume));
        s.push('\n');

        s.push_str("TREND\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!(
            "  {:<21}{:.2}\n",
            format!("SMA{}:", params.sma_fast_window),
            r.sma_fast
        ));
        s.push_str(&format!(
            "  {:<21}{:.2}\n",
            format!("SMA{}:", params.sma_slow_window),
            r.sma_slow
        ));
        s.push_str(&format!(
            "  {:<21}{:.2}\n",
            format!("EMA{}:", params.macd_fast_span),
            r.ema_fast
        ));
        s.push_str(&format!(
            "  {:<21}{:.2}\n",
            format!("EMA{}:", params.macd_slow_span),
            r.ema_slow
        ));
        s.push('\n');

        s.push_str("MOMENTUM\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!(
            "  {:<21}{} ({})\n",
            format!("RSI{}:", params.rsi_window),
            r.rsi,
            rsi_zone(r.rsi)
        ));
        s.push_str(&format!("  MACD:                {:.4}\n", r.macd));
        s.push_str(&format!("  Signal:              {:.4}\n", r.signal));
        s.push_str(&format!(
            "  Histogram:           {:.4} ({})\n",
            r.histogram(),
            macd_position(r.histogram())
        ));
        s.push('\n');

        s.push_str("VOLATILITY\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  Upper Band:          {:.2}\n", r.bb_upper));
        s.push_str(&format!("  Middle Band:         {:.2}\n", r.bb_middle));
        s.push_str(&format!("  Lower Band:          {:.2}\n", r.bb_lower));
        s.push_str(&format!("  Close Position:      {}\n", band_position(last)));
        s.push('\n');

        s.push_str("═══════════════════════════════════════════════════════════\n");

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self.series).map_err(|e| AppError::Serialization(e.to_string()))
    }

    /// Export to CSV, one row per bar. Undefined RSI is an empty cell.
    pub fn to_csv(&self) -> AppResult<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER).map_err(csv_error)?;

        for bar in self.series.iter() {
            let r = &bar.indicators;
            let rsi = r.rsi.value().map(|v| v.to_string()).unwrap_or_default();
            writer
                .write_record([
                    bar.bar.date.to_string(),
                    bar.bar.open.to_string(),
                    bar.bar.high.to_string(),
                    bar.bar.low.to_string(),
                    bar.bar.close.to_string(),
                    bar.bar.volume.to_string(),
                    r.sma_fast.to_string(),
                    r.sma_slow.to_string(),
                    r.bb_middle.to_string(),
                    r.bb_upper.to_string(),
                    r.bb_lower.to_string(),
                    rsi,
                    r.ema_fast.to_string(),
                    r.ema_slow.to_string(),
                    r.macd.to_string(),
                    r.signal.to_string(),
                    r.histogram().to_string(),
                ])
                .map_err(csv_error)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| AppError::Serialization(e.to_string()))
    }
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::Serialization(e.to_string())
}

fn rsi_zone(rsi: IndicatorValue) -> &'static str {
    match rsi.value() {
        Some(v) if v > RSI_OVERBOUGHT => "overbought",
        Some(v) if v < RSI_OVERSOLD => "oversold",
        Some(_) => "neutral",
        None => "n/a",
    }
}

fn macd_position(histogram: f64) -> &'static str {
    if histogram > 0.0 {
        "MACD above signal"
    } else if histogram < 0.0 {
        "MACD below signal"
    } else {
        "MACD on signal"
    }
}

fn band_position(bar: &EnrichedBar) -> &'static str {
    let r = &bar.indicators;
    let bands = BollingerOutput {
        upper: r.bb_upper,
        middle: r.bb_middle,
        lower: r.bb_lower,
    };
    if bands.is_overbought(bar.bar.close) {
        "above upper band"
    } else if bands.is_oversold(bar.bar.close) {
        "below lower band"
    } else {
        "inside bands"
    }
}

//! Logging setup and report output.

mod logging;
mod report;
mod table;

pub use logging::setup_logging;
pub use report::{IndicatorReport, ReportFormat};
pub use table::render_view;

//! Plain-text rendering of chart views.

use indicator_engine::ViewData;

const DATE_WIDTH: usize = 12;
const COLUMN_WIDTH: usize = 14;

fn cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:>width$.2}", v, width = COLUMN_WIDTH),
        None => format!("{:>width$}", "-", width = COLUMN_WIDTH),
    }
}

/// Render a view as a table, one row per date. Gaps print as `-`.
pub fn render_view(view: &ViewData) -> String {
    let mut s = String::new();

    s.push_str(&format!("{}\n", view.title));

    let mut header = format!("{:<width$}", "Date", width = DATE_WIDTH);
    for line in &view.lines {
        header.push_str(&format!("{:>width$}", line.label, width = COLUMN_WIDTH));
    }
    if view.histogram.is_some() {
        header.push_str(&format!("{:>width$}", "Histogram", width = COLUMN_WIDTH));
    }
    s.push_str(&header);
    s.push('\n');
    s.push_str(&"─".repeat(header.chars().count()));
    s.push('\n');

    for (i, date) in view.dates.iter().enumerate() {
        s.push_str(&format!("{:<width$}", date.to_string(), width = DATE_WIDTH));
        for line in &view.lines {
            s.push_str(&cell(line.values.get(i).copied().flatten()));
        }
        if let Some(histogram) = &view.histogram {
            s.push_str(&cell(histogram.get(i).copied()));
        }
        s.push('\n');
    }

    if !view.reference_lines.is_empty() {
        let levels: Vec<String> = view
            .reference_lines
            .iter()
            .map(|v| format!("{:.0}", v))
            .collect();
        s.push_str(&format!("Reference levels: {}\n", levels.join(", ")));
    }
    if let Some((lo, hi)) = view.value_range() {
        s.push_str(&format!("Range: {:.2} .. {:.2}\n", lo, hi));
    }

    s
}

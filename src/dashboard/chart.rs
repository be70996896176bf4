use std::fmt::Write;

/// Cells the largest bar occupies; everything else scales down from it.
const MAX_BAR_WIDTH: usize = 40;

/// Render labeled values as rows of proportional horizontal bars.
pub fn bar_chart(rows: &[(String, f64)]) -> String {
    let max = rows.iter().map(|&(_, v)| v).fold(0.0_f64, f64::max);
    let label_width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, value) in rows {
        let cells = if max > 0.0 {
            ((value / max) * MAX_BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = "█".repeat(cells);
        let _ = writeln!(
            out,
            "  {label:<label_width$}  {bar:<MAX_BAR_WIDTH$}  {}",
            format_value(*value)
        );
    }
    out
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

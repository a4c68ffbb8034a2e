use super::common;
use crate::Result;
use crate::ranking::Ranking;
use crate::series::factor::FactorRow;
use crate::series::time::TrendSeries;
use core::fmt::Write;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

/// Widest a value bar gets; narrower terminals shrink it further.
const MAX_BAR_WIDTH: usize = 40;

/// Render a trend series as a year-per-line text chart.
pub fn time_series<W: Write>(title: &str, variable_label: &str, series: &TrendSeries, use_colors: bool, writer: &mut W) -> Result<()> {
    write_title(writer, &format!("{title} — {variable_label}"), use_colors)?;

    let width = bar_width();
    for point in &series.points {
        let bar = bar(point.value, series.domain.min, series.domain.max, width);
        let value = common::format_score(point.value);
        if use_colors {
            writeln!(writer, "  {}  {}  {}", point.year, value.bold(), bar.blue())?;
        } else {
            writeln!(writer, "  {}  {value}  {bar}", point.year)?;
        }
    }

    writeln!(writer)?;
    writeln!(
        writer,
        "  y-axis {} to {}, ticks every {:.2}",
        common::format_score(series.domain.min),
        common::format_score(series.domain.max),
        crate::series::axis::TICK_STEP
    )?;

    Ok(())
}

/// Render a top/bottom ranking with the group average marked below it.
pub fn ranking<W: Write>(
    variable_label: &str,
    region_label: &str,
    year: &str,
    ranking: &Ranking,
    average: Option<f64>,
    use_colors: bool,
    writer: &mut W,
) -> Result<()> {
    write_title(writer, &format!("Top and Bottom Performers in {variable_label}"), use_colors)?;
    writeln!(writer, "{region_label} — {year}")?;
    writeln!(writer)?;

    if ranking.split == 0 {
        writeln!(writer, "  Not enough ranked countries to split into top and bottom performers.")?;
        return Ok(());
    }

    let width = bar_width();
    let name_width = ranking
        .top
        .iter()
        .chain(&ranking.bottom)
        .map(|e| e.country.len())
        .max()
        .unwrap_or(0);

    writeln!(writer, "  Top {}", ranking.split)?;
    for entry in &ranking.top {
        // Ranked bars share the fixed [0, 1] score scale, unlike trend bars.
        let bar = bar(entry.value, 0.0, 1.0, width);
        let value = common::format_score(entry.value);
        if use_colors {
            writeln!(writer, "    {:<name_width$}  {value}  {}", entry.country, bar.blue())?;
        } else {
            writeln!(writer, "    {:<name_width$}  {value}  {bar}", entry.country)?;
        }
    }

    writeln!(writer, "  {}", "─".repeat(name_width + width + 10))?;

    writeln!(writer, "  Bottom {}", ranking.split)?;
    for entry in &ranking.bottom {
        let bar = bar(entry.value, 0.0, 1.0, width);
        let value = common::format_score(entry.value);
        if use_colors {
            writeln!(writer, "    {:<name_width$}  {value}  {}", entry.country, bar.red())?;
        } else {
            writeln!(writer, "    {:<name_width$}  {value}  {bar}", entry.country)?;
        }
    }

    if let Some(avg) = average {
        writeln!(writer)?;
        writeln!(writer, "  {region_label} Avg: {}", common::format_score(avg))?;
    }

    Ok(())
}

/// Render factor rows as an aligned table. `percent` switches the value
/// format from two-decimal scores to whole percentages.
pub fn factor_rows<W: Write>(
    title: &str,
    columns: &[String],
    rows: &[FactorRow],
    percent: bool,
    use_colors: bool,
    writer: &mut W,
) -> Result<()> {
    write_title(writer, title, use_colors)?;

    if rows.is_empty() {
        writeln!(writer, "  Nothing selected to display.")?;
        return Ok(());
    }

    let format_value: fn(f64) -> String = if percent { common::format_percent } else { common::format_score };
    let label_width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
    let column_width = columns.iter().map(String::len).max().unwrap_or(0).max(6);

    write!(writer, "  {:<label_width$}", "")?;
    for column in columns {
        write!(writer, "  {column:>column_width$}")?;
    }
    writeln!(writer)?;

    for row in rows {
        write!(writer, "  {:<label_width$}", row.label)?;
        for value in &row.values {
            let formatted = format_value(*value);
            if use_colors {
                write!(writer, "  {:>column_width$}", formatted.bold())?;
            } else {
                write!(writer, "  {formatted:>column_width$}")?;
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn write_title<W: Write>(writer: &mut W, title: &str, use_colors: bool) -> Result<()> {
    if use_colors {
        writeln!(writer, "{}", title.bold())?;
    } else {
        writeln!(writer, "{title}")?;
    }
    Ok(())
}

/// Get the terminal width, defaulting to 80 if not detectable
fn get_terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| w as usize)
}

fn bar_width() -> usize {
    // Leave room for the year/country column, the value, and padding.
    MAX_BAR_WIDTH.min(get_terminal_width().saturating_sub(30).max(10))
}

fn bar(value: f64, low: f64, high: f64, width: usize) -> String {
    let span = high - low;
    let fraction = if span <= f64::EPSILON {
        0.0
    } else {
        ((value - low) / span).clamp(0.0, 1.0)
    };
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "fraction is clamped to [0, 1] and width is small"
    )]
    let filled = (fraction * width as f64).round() as usize;
    "█".repeat(filled)
}

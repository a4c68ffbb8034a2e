use crate::config::ChartPalette;
use crate::dataset::VariableKey;
use crate::ranking::Ranking;
use crate::series::factor::FactorRow;
use crate::series::time::TrendSeries;
use serde_json::{Value, json};

/// Build the JSON document for a trend series.
///
/// Carries everything a renderer needs to redraw the chart exactly:
/// points, the derived axis domain with its ticks, and the line color.
#[must_use]
pub fn time_series(title: &str, variable: VariableKey, series: &TrendSeries, palette: &ChartPalette) -> Value {
    json!({
        "chart": "timeseries",
        "title": title,
        "variable": variable,
        "label": variable.label(),
        "points": series.points,
        "domain": series.domain,
        "colors": {
            "line": palette.line.hex(),
            "axis": palette.axis.hex(),
            "grid": palette.grid.hex(),
        },
    })
}

/// Build the JSON document for a top/bottom ranking.
#[must_use]
pub fn ranking(
    variable: VariableKey,
    region_label: &str,
    year: &str,
    ranking: &Ranking,
    average: Option<f64>,
    palette: &ChartPalette,
) -> Value {
    json!({
        "chart": "topbottom",
        "variable": variable,
        "label": variable.label(),
        "region": region_label,
        "year": year,
        "split": ranking.split,
        "top": ranking.top,
        "bottom": ranking.bottom,
        "average": average,
        "colors": {
            "top": palette.top.hex(),
            "bottom": palette.bottom.hex(),
            "average_line": palette.muted.hex(),
        },
    })
}

/// Build the JSON document for radar rows: one series per selected year.
#[must_use]
pub fn radar(subject_label: &str, years: &[String], rows: &[FactorRow], palette: &ChartPalette) -> Value {
    let year_colors: serde_json::Map<String, Value> = years
        .iter()
        .filter_map(|year| palette.year_colors.get(year).map(|color| (year.clone(), json!(color.hex()))))
        .collect();

    json!({
        "chart": "radar",
        "subject": subject_label,
        "years": years,
        "rows": rows,
        "colors": year_colors,
    })
}

/// Build the JSON document for a factor comparison: one series per
/// compared subject, colors cycled from the comparison palette.
#[must_use]
pub fn comparison(year: &str, region_label: &str, subjects: &[String], rows: &[FactorRow], palette: &ChartPalette) -> Value {
    let colors: Vec<String> = subjects
        .iter()
        .enumerate()
        .filter_map(|(index, _)| {
            let cycled = index.checked_rem(palette.comparison.len())?;
            palette.comparison.get(cycled).map(|color| color.hex())
        })
        .collect();

    json!({
        "chart": "factors",
        "year": year,
        "region": region_label,
        "subjects": subjects,
        "rows": rows,
        "colors": colors,
    })
}

//! Y-axis domain derivation for trend charts.

use serde::Serialize;

/// Padding added below the smallest and above the largest value before
/// snapping to the tick grid.
pub const DOMAIN_PAD: f64 = 0.06;

/// Distance between ticks; the domain bounds snap outward to this grid.
pub const TICK_STEP: f64 = 0.02;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
    /// Every tick from `min` to `max` inclusive, rounded to 2 decimals.
    pub ticks: Vec<f64>,
}

/// Derive the Y-axis domain for a set of series values.
///
/// The bounds are the value range padded by [`DOMAIN_PAD`] and snapped
/// outward to the [`TICK_STEP`] grid, so the plotted line never touches
/// the chart edge and the tick labels land on even hundredths. Returns
/// `None` for empty input.
#[must_use]
pub fn derive(values: &[f64]) -> Option<AxisDomain> {
    let first = *values.first()?;
    let (low, high) = values.iter().fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    let min = ((low - DOMAIN_PAD) * 50.0).floor() / 50.0;
    let max = ((high + DOMAIN_PAD) * 50.0).ceil() / 50.0;

    let mut ticks = Vec::new();
    let mut tick = min;
    // The epsilon keeps the final tick from dropping off the end when the
    // accumulated steps land a hair above `max`.
    while tick <= max + 1e-3 {
        ticks.push((tick * 100.0).round() / 100.0);
        tick += TICK_STEP;
    }

    Some(AxisDomain { min, max, ticks })
}

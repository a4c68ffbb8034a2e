//! Score aggregation
//!
//! The single averaging policy every aggregate in the tool goes through:
//! records without a value for the requested variable are excluded, and
//! an empty remainder yields `None` rather than zero so callers can tell
//! "no data" apart from a genuine zero score. Whether the result is a
//! regional or a global average is decided entirely by which records the
//! caller passes in; this module is region-agnostic.

use crate::dataset::{Record, VariableKey};

/// Arithmetic mean of the given variable over the records that carry it.
///
/// Returns `None` when no record has a value for the variable, including
/// for empty input.
#[must_use]
pub fn average<'a, I>(records: I, variable: VariableKey) -> Option<f64>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut sum = 0.0_f64;
    let mut count = 0_u32;

    for record in records {
        if let Some(value) = record.score(variable) {
            sum += value;
            count += 1;
        }
    }

    if count == 0 { None } else { Some(sum / f64::from(count)) }
}

/// Round to 3 decimal places, the stored precision of the dataset and of
/// derived aggregate points.
#[must_use]
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

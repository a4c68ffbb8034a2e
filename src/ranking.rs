//! Top/bottom performer ranking
//!
//! Splits the countries that have a value for a variable into the best
//! and worst performers. The split size is `min(5, floor(valid / 2))`,
//! which keeps the two halves disjoint and caps each at five entries;
//! with fewer than two valid countries both halves are empty. When the
//! valid count is odd the median country lands in neither half.
//!
//! Ties keep their input order: the sort is stable, so two countries with
//! equal scores rank in the order their records appear in the dataset.

use crate::dataset::{Record, VariableKey};
use serde::Serialize;

/// Maximum number of entries on each side of the split.
pub const SPLIT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry {
    pub country: String,
    pub value: f64,
    /// Position within its half. A display key for consumers, never a
    /// ranking input.
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub top: Vec<RankEntry>,
    pub bottom: Vec<RankEntry>,
    /// Number of entries in each half.
    pub split: usize,
}

/// Rank records by the given variable, descending.
///
/// Records without a value for the variable do not participate.
#[must_use]
pub fn rank<'a, I>(records: I, variable: VariableKey) -> Ranking
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut valid: Vec<(&Record, f64)> = records
        .into_iter()
        .filter_map(|record| record.score(variable).map(|value| (record, value)))
        .collect();

    // Stable sort: equal values retain their input order.
    valid.sort_by(|a, b| b.1.total_cmp(&a.1));

    let split = SPLIT_LIMIT.min(valid.len() / 2);

    let entry = |(index, &(record, value)): (usize, &(&Record, f64))| RankEntry {
        country: record.country.clone(),
        value,
        index,
    };

    let top = valid[..split].iter().enumerate().map(entry).collect();
    let bottom = valid[valid.len() - split..].iter().enumerate().map(entry).collect();

    Ranking { top, bottom, split }
}

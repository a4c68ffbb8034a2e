//! Per-factor rows for radar and comparison charts.

use super::Subject;
use crate::dataset::{Record, RegionFilter, VariableKey};
use crate::stats;
use serde::Serialize;

/// The eight factor keys in index order, the default variable set for
/// factor charts.
pub const FACTOR_KEYS: [VariableKey; 8] = [
    VariableKey::F1,
    VariableKey::F2,
    VariableKey::F3,
    VariableKey::F4,
    VariableKey::F5,
    VariableKey::F6,
    VariableKey::F7,
    VariableKey::F8,
];

/// One chart row: a variable with one value per column. Columns are years
/// for radar charts and compared subjects for comparison charts; either
/// way, a missing score contributes 0.0 so every row stays rectangular.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorRow {
    pub variable: VariableKey,
    pub label: &'static str,
    pub values: Vec<f64>,
}

/// Build radar rows: one row per variable, one value per selected year.
///
/// Aggregate values are year-scoped averages rounded to 3 decimals;
/// country values are the stored scores unrounded. Missing data becomes
/// 0.0 in both cases, keeping a vertex on every radar axis.
#[must_use]
pub fn radar<'a, I>(records: I, subject: &Subject, region: &RegionFilter, variables: &[VariableKey], years: &[String]) -> Vec<FactorRow>
where
    I: IntoIterator<Item = &'a Record>,
{
    let scoped: Vec<&Record> = match subject {
        Subject::Aggregate => records.into_iter().filter(|r| region.matches(&r.region)).collect(),
        Subject::Country(country) => records.into_iter().filter(|r| r.country == *country).collect(),
    };

    variables
        .iter()
        .map(|&variable| {
            let values = years
                .iter()
                .map(|year| match subject {
                    Subject::Aggregate => {
                        let group = scoped.iter().copied().filter(|r| r.year == *year);
                        stats::average(group, variable).map_or(0.0, stats::round3)
                    }
                    Subject::Country(_) => scoped
                        .iter()
                        .find(|r| r.year == *year)
                        .and_then(|r| r.score(variable))
                        .unwrap_or(0.0),
                })
                .collect();

            FactorRow {
                variable,
                label: variable.label(),
                values,
            }
        })
        .collect()
}

/// Build comparison rows: one row per variable, one value per subject,
/// all for a single year.
///
/// Unlike [`radar`], aggregate values stay at full precision here; the
/// comparison chart formats them as percentages at render time.
#[must_use]
pub fn comparison<'a, I>(records: I, subjects: &[Subject], region: &RegionFilter, year: &str, variables: &[VariableKey]) -> Vec<FactorRow>
where
    I: IntoIterator<Item = &'a Record>,
{
    let year_rows: Vec<&Record> = records.into_iter().filter(|r| r.year == year).collect();

    variables
        .iter()
        .map(|&variable| {
            let values = subjects
                .iter()
                .map(|subject| match subject {
                    Subject::Aggregate => {
                        let group = year_rows.iter().copied().filter(|r| region.matches(&r.region));
                        stats::average(group, variable).unwrap_or(0.0)
                    }
                    Subject::Country(country) => year_rows
                        .iter()
                        .find(|r| r.country == *country)
                        .and_then(|r| r.score(variable))
                        .unwrap_or(0.0),
                })
                .collect();

            FactorRow {
                variable,
                label: variable.label(),
                values,
            }
        })
        .collect()
}

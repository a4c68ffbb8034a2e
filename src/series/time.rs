//! Per-year trend series.

use super::Subject;
use super::axis::{self, AxisDomain};
use crate::dataset::{Record, RegionFilter, VariableKey};
use crate::stats;
use serde::Serialize;
use std::collections::BTreeMap;

/// Earliest edition year that participates in trend series. The index
/// methodology changed ahead of this edition, so older scores are not
/// comparable and never plotted.
pub const MIN_TREND_YEAR: u16 = 2019;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub year: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    /// Points in ascending year order. Years without a usable value are
    /// absent; there is no interpolation or zero fill here.
    pub points: Vec<SeriesPoint>,
    pub domain: AxisDomain,
}

/// Result of building a trend series.
///
/// `NoData` and `TooShort` are distinct on purpose: the first means there
/// was nothing to average, the second that there is history but not
/// enough of it to draw a trend line. Neither is an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesOutcome {
    NoData,
    /// Exactly one usable point; carried so callers can say which year.
    TooShort(Vec<SeriesPoint>),
    Renderable(TrendSeries),
}

/// Build the per-year series for a subject and variable.
///
/// For [`Subject::Aggregate`], records are scoped by the region filter,
/// grouped by year, and averaged; each point stores the 3-decimal rounded
/// mean, and years where no record carries the variable are omitted. For
/// a country, the points are that country's own stored values and the
/// region filter does not apply: the region selection only scopes
/// averages and country listings, never a country's own history.
#[must_use]
pub fn build<'a, I>(records: I, subject: &Subject, variable: VariableKey, region: &RegionFilter) -> SeriesOutcome
where
    I: IntoIterator<Item = &'a Record>,
{
    let points = match subject {
        Subject::Aggregate => aggregate_points(records, variable, region),
        Subject::Country(country) => country_points(records, variable, country),
    };

    if points.is_empty() {
        return SeriesOutcome::NoData;
    }
    if points.len() < 2 {
        return SeriesOutcome::TooShort(points);
    }

    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let Some(domain) = axis::derive(&values) else {
        return SeriesOutcome::NoData;
    };

    SeriesOutcome::Renderable(TrendSeries { points, domain })
}

fn in_trend_window(year: &str) -> bool {
    year.parse::<u16>().is_ok_and(|y| y >= MIN_TREND_YEAR)
}

fn aggregate_points<'a, I>(records: I, variable: VariableKey, region: &RegionFilter) -> Vec<SeriesPoint>
where
    I: IntoIterator<Item = &'a Record>,
{
    // BTreeMap keys give the ascending year order for free.
    let mut by_year: BTreeMap<&str, Vec<&Record>> = BTreeMap::new();
    for record in records {
        if region.matches(&record.region) && in_trend_window(&record.year) {
            by_year.entry(record.year.as_str()).or_default().push(record);
        }
    }

    by_year
        .into_iter()
        .filter_map(|(year, group)| {
            stats::average(group, variable).map(|mean| SeriesPoint {
                year: year.to_string(),
                value: stats::round3(mean),
            })
        })
        .collect()
}

fn country_points<'a, I>(records: I, variable: VariableKey, country: &str) -> Vec<SeriesPoint>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut rows: Vec<(&str, f64)> = records
        .into_iter()
        .filter(|r| r.country == country && in_trend_window(&r.year))
        .filter_map(|r| r.score(variable).map(|value| (r.year.as_str(), value)))
        .collect();

    rows.sort_by(|a, b| a.0.cmp(b.0));
    rows.into_iter()
        .map(|(year, value)| SeriesPoint {
            year: year.to_string(),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RecordStore;

    fn store(json: &str) -> RecordStore {
        RecordStore::parse(json).unwrap().0
    }

    fn years_of(points: &[SeriesPoint]) -> Vec<&str> {
        points.iter().map(|p| p.year.as_str()).collect()
    }

    #[test]
    fn test_country_series_skips_missing_years_without_interpolating() {
        let store = store(
            r#"[
                {"country": "Chile", "year": "2019", "region": "Latin America and Caribbean", "roli": 0.68},
                {"country": "Chile", "year": "2020", "region": "Latin America and Caribbean", "roli": null},
                {"country": "Chile", "year": "2021", "region": "Latin America and Caribbean", "roli": 0.66}
            ]"#,
        );
        let outcome = build(store.records(), &Subject::Country("Chile".to_string()), VariableKey::Roli, &RegionFilter::Global);
        let SeriesOutcome::Renderable(series) = outcome else {
            panic!("expected a renderable series");
        };
        assert_eq!(years_of(&series.points), vec!["2019", "2021"]);
        assert_eq!(series.points[0].value, 0.68);
        assert_eq!(series.points[1].value, 0.66);
    }

    #[test]
    fn test_country_series_is_sorted_by_year_regardless_of_input_order() {
        let store = store(
            r#"[
                {"country": "Chile", "year": "2023", "region": "Latin America and Caribbean", "roli": 0.64},
                {"country": "Chile", "year": "2019", "region": "Latin America and Caribbean", "roli": 0.68},
                {"country": "Chile", "year": "2021", "region": "Latin America and Caribbean", "roli": 0.66}
            ]"#,
        );
        let outcome = build(store.records(), &Subject::Country("Chile".to_string()), VariableKey::Roli, &RegionFilter::Global);
        let SeriesOutcome::Renderable(series) = outcome else {
            panic!("expected a renderable series");
        };
        assert_eq!(years_of(&series.points), vec!["2019", "2021", "2023"]);
    }

    #[test]
    fn test_years_before_the_trend_window_are_excluded() {
        let store = store(
            r#"[
                {"country": "Chile", "year": "2015", "region": "Latin America and Caribbean", "roli": 0.70},
                {"country": "Chile", "year": "2019", "region": "Latin America and Caribbean", "roli": 0.68},
                {"country": "Chile", "year": "2020", "region": "Latin America and Caribbean", "roli": 0.67}
            ]"#,
        );
        let outcome = build(store.records(), &Subject::Country("Chile".to_string()), VariableKey::Roli, &RegionFilter::Global);
        let SeriesOutcome::Renderable(series) = outcome else {
            panic!("expected a renderable series");
        };
        assert_eq!(years_of(&series.points), vec!["2019", "2020"]);
    }

    #[test]
    fn test_aggregate_omits_years_with_no_valid_records() {
        let store = store(
            r#"[
                {"country": "A", "year": "2019", "region": "South Asia", "f1": 0.4},
                {"country": "B", "year": "2019", "region": "South Asia", "f1": 0.6},
                {"country": "A", "year": "2020", "region": "South Asia", "f1": null},
                {"country": "B", "year": "2020", "region": "South Asia"},
                {"country": "A", "year": "2021", "region": "South Asia", "f1": 0.5},
                {"country": "B", "year": "2021", "region": "South Asia", "f1": 0.7}
            ]"#,
        );
        let outcome = build(store.records(), &Subject::Aggregate, VariableKey::F1, &RegionFilter::Global);
        let SeriesOutcome::Renderable(series) = outcome else {
            panic!("expected a renderable series");
        };
        // 2020 had records but no values, so it is absent, not zero.
        assert_eq!(years_of(&series.points), vec!["2019", "2021"]);
        assert_eq!(series.points[0].value, 0.5);
        assert_eq!(series.points[1].value, 0.6);
    }

    #[test]
    fn test_aggregate_points_are_rounded_to_three_decimals() {
        let store = store(
            r#"[
                {"country": "A", "year": "2019", "region": "South Asia", "roli": 0.1},
                {"country": "B", "year": "2019", "region": "South Asia", "roli": 0.2},
                {"country": "C", "year": "2019", "region": "South Asia", "roli": 0.2},
                {"country": "A", "year": "2020", "region": "South Asia", "roli": 0.3},
                {"country": "B", "year": "2020", "region": "South Asia", "roli": 0.4}
            ]"#,
        );
        let outcome = build(store.records(), &Subject::Aggregate, VariableKey::Roli, &RegionFilter::Global);
        let SeriesOutcome::Renderable(series) = outcome else {
            panic!("expected a renderable series");
        };
        // (0.1 + 0.2 + 0.2) / 3 stored as 0.167 exactly.
        assert_eq!(series.points[0].value, 0.167);
        assert_eq!(series.points[1].value, 0.35);
    }

    #[test]
    fn test_aggregate_respects_the_region_filter() {
        let store = store(
            r#"[
                {"country": "A", "year": "2019", "region": "South Asia", "roli": 0.2},
                {"country": "B", "year": "2019", "region": "Sub-Saharan Africa", "roli": 0.8},
                {"country": "A", "year": "2020", "region": "South Asia", "roli": 0.4},
                {"country": "B", "year": "2020", "region": "Sub-Saharan Africa", "roli": 0.6}
            ]"#,
        );
        let region = RegionFilter::from_arg("South Asia");
        let outcome = build(store.records(), &Subject::Aggregate, VariableKey::Roli, &region);
        let SeriesOutcome::Renderable(series) = outcome else {
            panic!("expected a renderable series");
        };
        assert_eq!(series.points[0].value, 0.2);
        assert_eq!(series.points[1].value, 0.4);
    }

    #[test]
    fn test_country_series_ignores_the_region_filter() {
        let store = store(
            r#"[
                {"country": "Chile", "year": "2019", "region": "Latin America and Caribbean", "roli": 0.68},
                {"country": "Chile", "year": "2020", "region": "Latin America and Caribbean", "roli": 0.67}
            ]"#,
        );
        let mismatched = RegionFilter::from_arg("South Asia");
        let outcome = build(store.records(), &Subject::Country("Chile".to_string()), VariableKey::Roli, &mismatched);
        assert!(matches!(outcome, SeriesOutcome::Renderable(_)));
    }

    #[test]
    fn test_single_point_is_too_short_not_no_data() {
        let store = store(r#"[{"country": "Chile", "year": "2025", "region": "Latin America and Caribbean", "roli": 0.66}]"#);
        let outcome = build(store.records(), &Subject::Country("Chile".to_string()), VariableKey::Roli, &RegionFilter::Global);
        let SeriesOutcome::TooShort(points) = outcome else {
            panic!("expected a too-short outcome");
        };
        assert_eq!(years_of(&points), vec!["2025"]);
    }

    #[test]
    fn test_no_usable_values_is_no_data() {
        let store = store(
            r#"[
                {"country": "Chile", "year": "2019", "region": "Latin America and Caribbean", "roli": null},
                {"country": "Chile", "year": "2020", "region": "Latin America and Caribbean"}
            ]"#,
        );
        let outcome = build(store.records(), &Subject::Country("Chile".to_string()), VariableKey::Roli, &RegionFilter::Global);
        assert_eq!(outcome, SeriesOutcome::NoData);

        let empty = RecordStore::default();
        let outcome = build(empty.records(), &Subject::Aggregate, VariableKey::Roli, &RegionFilter::Global);
        assert_eq!(outcome, SeriesOutcome::NoData);
    }

    #[test]
    fn test_renderable_series_carries_a_domain_around_its_values() {
        let store = store(
            r#"[
                {"country": "Chile", "year": "2019", "region": "Latin America and Caribbean", "roli": 0.6},
                {"country": "Chile", "year": "2020", "region": "Latin America and Caribbean", "roli": 0.7}
            ]"#,
        );
        let outcome = build(store.records(), &Subject::Country("Chile".to_string()), VariableKey::Roli, &RegionFilter::Global);
        let SeriesOutcome::Renderable(series) = outcome else {
            panic!("expected a renderable series");
        };
        assert!(series.domain.min <= 0.6);
        assert!(series.domain.max >= 0.7);
    }

    #[test]
    fn test_unparseable_years_never_reach_a_series() {
        let store = store(
            r#"[
                {"country": "Chile", "year": "n/a", "region": "Latin America and Caribbean", "roli": 0.9},
                {"country": "Chile", "year": "2019", "region": "Latin America and Caribbean", "roli": 0.68},
                {"country": "Chile", "year": "2020", "region": "Latin America and Caribbean", "roli": 0.67}
            ]"#,
        );
        let outcome = build(store.records(), &Subject::Country("Chile".to_string()), VariableKey::Roli, &RegionFilter::Global);
        let SeriesOutcome::Renderable(series) = outcome else {
            panic!("expected a renderable series");
        };
        assert_eq!(years_of(&series.points), vec!["2019", "2020"]);
    }
}

//! End-to-end coverage: load a dataset file the way the CLI does, then
//! derive every chart array from it.

use roli_dash::dataset::{RecordStore, RegionFilter, VariableKey, by_region, by_year};
use roli_dash::ranking::rank;
use roli_dash::series::factor::{self, FACTOR_KEYS};
use roli_dash::series::time::{self, SeriesOutcome};
use roli_dash::series::{Subject, axis};
use roli_dash::stats;
use camino::Utf8Path;
use std::fs;

fn fixture_json() -> String {
    let mut rows = Vec::new();

    // Eleven countries with full 2025 data, three regions.
    let countries = [
        ("Denmark", "EU, EFTA, and North America", 0.90),
        ("Norway", "EU, EFTA, and North America", 0.89),
        ("Finland", "EU, EFTA, and North America", 0.87),
        ("Germany", "EU, EFTA, and North America", 0.83),
        ("Chile", "Latin America and Caribbean", 0.66),
        ("Uruguay", "Latin America and Caribbean", 0.71),
        ("Brazil", "Latin America and Caribbean", 0.53),
        ("India", "South Asia", 0.50),
        ("Nepal", "South Asia", 0.52),
        ("Bangladesh", "South Asia", 0.39),
        ("Sri Lanka", "South Asia", 0.48),
    ];
    for (country, region, roli) in countries {
        rows.push(format!(
            r#"{{"country": "{country}", "year": "2025", "region": "{region}", "roli": {roli}, "f1": {f1}}}"#,
            f1 = roli + 0.01
        ));
    }

    // Denmark history with a gap in 2020 and a pre-window year.
    for (year, roli) in [("2016", 0.92), ("2019", 0.91), ("2021", 0.90), ("2024", 0.90)] {
        rows.push(format!(
            r#"{{"country": "Denmark", "year": "{year}", "region": "EU, EFTA, and North America", "roli": {roli}}}"#
        ));
    }

    // A malformed stub the loader must skip.
    rows.push(r#"{"country": "", "year": "2025", "region": "South Asia"}"#.to_string());

    format!("[{}]", rows.join(","))
}

fn load_fixture() -> RecordStore {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roli_data.json");
    fs::write(&path, fixture_json()).unwrap();
    RecordStore::load(Utf8Path::from_path(&path).unwrap()).unwrap()
}

#[test]
fn load_then_filter_then_average() {
    let store = load_fixture();
    assert_eq!(store.len(), 15, "the malformed stub must not load");

    let year_rows = by_year(store.records(), "2025");
    assert_eq!(year_rows.len(), 11);

    let region = RegionFilter::from_arg("South Asia");
    let region_rows = by_region(year_rows, &region);
    assert_eq!(region_rows.len(), 4);

    let avg = stats::average(region_rows, VariableKey::Roli).unwrap();
    assert!((avg - (0.50 + 0.52 + 0.39 + 0.48) / 4.0).abs() < 1e-9);
}

#[test]
fn ranking_over_eleven_valid_entries() {
    let store = load_fixture();
    let rows = by_year(store.records(), "2025");
    let ranking = rank(rows.iter().copied(), VariableKey::Roli);

    assert_eq!(ranking.split, 5);
    assert_eq!(ranking.top.len(), 5);
    assert_eq!(ranking.bottom.len(), 5);
    assert_eq!(ranking.top[0].country, "Denmark");
    assert_eq!(ranking.bottom[4].country, "Bangladesh");

    // The median country of eleven is in neither half.
    let median = "Chile";
    assert!(ranking.top.iter().chain(&ranking.bottom).all(|e| e.country != median));
}

#[test]
fn country_trend_omits_the_gap_year_and_the_pre_window_year() {
    let store = load_fixture();
    let outcome = time::build(
        store.records(),
        &Subject::Country("Denmark".to_string()),
        VariableKey::Roli,
        &RegionFilter::Global,
    );

    let SeriesOutcome::Renderable(series) = outcome else {
        panic!("expected a renderable series");
    };
    let years: Vec<&str> = series.points.iter().map(|p| p.year.as_str()).collect();
    assert_eq!(years, vec!["2019", "2021", "2024", "2025"]);

    // Axis domain law over the derived values.
    let values: Vec<f64> = series.points.iter().map(|p| p.value).collect();
    let low = values.iter().copied().fold(f64::INFINITY, f64::min);
    let high = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert!(series.domain.min <= low);
    assert!(series.domain.max >= high);
    let steps = (series.domain.max - series.domain.min) / axis::TICK_STEP;
    assert!((steps - steps.round()).abs() < 1e-9);
}

#[test]
fn aggregate_trend_averages_each_year() {
    let store = load_fixture();
    let region = RegionFilter::from_arg("EU, EFTA, and North America");
    let outcome = time::build(store.records(), &Subject::Aggregate, VariableKey::Roli, &region);

    let SeriesOutcome::Renderable(series) = outcome else {
        panic!("expected a renderable series");
    };

    // 2019/2021/2024 have only Denmark; 2025 averages the four EU rows.
    let years: Vec<&str> = series.points.iter().map(|p| p.year.as_str()).collect();
    assert_eq!(years, vec!["2019", "2021", "2024", "2025"]);
    assert_eq!(series.points[0].value, 0.91);
    let expected_2025 = stats::round3((0.90 + 0.89 + 0.87 + 0.83) / 4.0);
    assert_eq!(series.points[3].value, expected_2025);
}

#[test]
fn factor_rows_cover_every_factor_for_each_subject() {
    let store = load_fixture();
    let subjects = [Subject::Aggregate, Subject::Country("Denmark".to_string())];
    let region = RegionFilter::Global;
    let rows = factor::comparison(store.records(), &subjects, &region, "2025", &FACTOR_KEYS);

    assert_eq!(rows.len(), FACTOR_KEYS.len());
    for row in &rows {
        assert_eq!(row.values.len(), subjects.len());
    }

    // f1 is present in the fixture, the other factors zero-fill.
    assert!(rows[0].values[1] > 0.0);
    assert_eq!(rows[1].values[1], 0.0);
}

#[test]
fn derivations_are_idempotent() {
    let store = load_fixture();
    let rows = by_year(store.records(), "2025");

    assert_eq!(
        stats::average(rows.iter().copied(), VariableKey::Roli),
        stats::average(rows.iter().copied(), VariableKey::Roli)
    );
    assert_eq!(rank(rows.iter().copied(), VariableKey::Roli), rank(rows.iter().copied(), VariableKey::Roli));

    let subject = Subject::Country("Denmark".to_string());
    assert_eq!(
        time::build(store.records(), &subject, VariableKey::Roli, &RegionFilter::Global),
        time::build(store.records(), &subject, VariableKey::Roli, &RegionFilter::Global)
    );
}

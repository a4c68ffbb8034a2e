use super::Record;

/// Canonical region names as they appear in the dataset.
pub const REGIONS: [&str; 7] = [
    "East Asia and Pacific",
    "Eastern Europe and Central Asia",
    "EU, EFTA, and North America",
    "Latin America and Caribbean",
    "Middle East and North Africa",
    "South Asia",
    "Sub-Saharan Africa",
];

/// Region selection: either one named region, or `Global`, which matches
/// every record (the identity filter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionFilter {
    Global,
    Region(String),
}

impl RegionFilter {
    /// Build a filter from user input; the literal `global` (any case)
    /// means no region restriction.
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        if value.eq_ignore_ascii_case("global") {
            Self::Global
        } else {
            Self::Region(value.to_string())
        }
    }

    #[must_use]
    pub fn matches(&self, region: &str) -> bool {
        match self {
            Self::Global => true,
            Self::Region(name) => name == region,
        }
    }

    /// Human-readable name for titles and report headers
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Global => "Global",
            Self::Region(name) => name,
        }
    }
}

/// Keep records from the given edition year.
pub fn by_year<'a, I>(records: I, year: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().filter(|r| r.year == year).collect()
}

/// Keep records whose region matches the filter. `Global` returns the
/// input unchanged apart from collection.
pub fn by_region<'a, I>(records: I, region: &RegionFilter) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().filter(|r| region.matches(&r.region)).collect()
}

/// Keep records for one country.
pub fn by_country<'a, I>(records: I, country: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().filter(|r| r.country == country).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RecordStore;

    fn sample() -> RecordStore {
        let (store, skipped) = RecordStore::parse(
            r#"[
                {"country": "Denmark", "year": "2025", "region": "EU, EFTA, and North America", "roli": 0.9},
                {"country": "Denmark", "year": "2024", "region": "EU, EFTA, and North America", "roli": 0.9},
                {"country": "Nepal", "year": "2025", "region": "South Asia", "roli": 0.52},
                {"country": "India", "year": "2025", "region": "South Asia", "roli": 0.5}
            ]"#,
        )
        .unwrap();
        assert_eq!(skipped, 0);
        store
    }

    #[test]
    fn test_by_year_selects_matching_rows() {
        let store = sample();
        let rows = by_year(store.records(), "2025");
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.year == "2025"));
    }

    #[test]
    fn test_by_year_with_no_match_is_empty_not_an_error() {
        let store = sample();
        assert!(by_year(store.records(), "1999").is_empty());
    }

    #[test]
    fn test_global_region_filter_is_the_identity() {
        let store = sample();
        let rows = by_region(store.records(), &RegionFilter::Global);
        assert_eq!(rows.len(), store.len());
        for (filtered, original) in rows.iter().zip(store.records()) {
            assert!(core::ptr::eq(*filtered, original));
        }
    }

    #[test]
    fn test_named_region_filter() {
        let store = sample();
        let rows = by_region(store.records(), &RegionFilter::from_arg("South Asia"));
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.region == "South Asia"));
    }

    #[test]
    fn test_by_country() {
        let store = sample();
        let rows = by_country(store.records(), "Denmark");
        assert_eq!(rows.len(), 2);
        assert!(by_country(store.records(), "Atlantis").is_empty());
    }

    #[test]
    fn test_filters_compose_in_either_order() {
        let store = sample();
        let region = RegionFilter::from_arg("South Asia");
        let year_then_region = by_region(by_year(store.records(), "2025"), &region);
        let region_then_year = by_year(by_region(store.records(), &region), "2025");
        assert_eq!(year_then_region, region_then_year);
        assert_eq!(year_then_region.len(), 2);
    }

    #[test]
    fn test_from_arg_recognizes_global_case_insensitively() {
        assert_eq!(RegionFilter::from_arg("global"), RegionFilter::Global);
        assert_eq!(RegionFilter::from_arg("Global"), RegionFilter::Global);
        assert_eq!(RegionFilter::from_arg("South Asia"), RegionFilter::Region("South Asia".to_string()));
    }

    #[test]
    fn test_labels() {
        assert_eq!(RegionFilter::Global.label(), "Global");
        assert_eq!(RegionFilter::from_arg("South Asia").label(), "South Asia");
    }
}

use super::Record;
use crate::Result;
use camino::Utf8Path;
use log::warn;
use ohno::IntoAppError;
use std::fs;

/// The full dataset held in memory for the life of the process.
///
/// Loaded once from the prepared JSON file and never mutated afterwards;
/// every derived structure (filters, averages, rankings, series) is
/// freshly allocated from these rows on demand.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Load the dataset from a JSON file
    ///
    /// Rows that fail to parse or lack a country, year, or region are
    /// skipped rather than failing the load; the data-preparation step
    /// occasionally leaves such stubs behind and they carry no scores.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON array.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading dataset from {path}"))?;
        let (store, skipped) = Self::parse(&text).into_app_err_with(|| format!("parsing dataset from {path}"))?;

        if skipped > 0 {
            warn!("skipped {skipped} malformed record(s) while loading {path}");
        }

        Ok(store)
    }

    /// Parse the dataset from JSON text, returning the store and the
    /// number of rows that were skipped as malformed.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON array.
    pub fn parse(text: &str) -> Result<(Self, usize)> {
        let rows: Vec<serde_json::Value> = serde_json::from_str(text).into_app_err("dataset must be a JSON array of records")?;

        let mut records = Vec::with_capacity(rows.len());
        let mut skipped = 0_usize;
        for row in rows {
            match serde_json::from_value::<Record>(row) {
                Ok(record) if !record.country.is_empty() && !record.year.is_empty() && !record.region.is_empty() => {
                    records.push(record);
                }
                _ => skipped += 1,
            }
        }

        Ok((Self { records }, skipped))
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct country names, sorted
    #[must_use]
    pub fn countries(&self) -> Vec<&str> {
        self.distinct(|r| &r.country)
    }

    /// Distinct edition years, sorted
    #[must_use]
    pub fn years(&self) -> Vec<&str> {
        self.distinct(|r| &r.year)
    }

    /// Distinct region names, sorted
    #[must_use]
    pub fn regions(&self) -> Vec<&str> {
        self.distinct(|r| &r.region)
    }

    fn distinct(&self, field: impl Fn(&Record) -> &String) -> Vec<&str> {
        let mut values: Vec<&str> = self.records.iter().map(|r| field(r).as_str()).collect();
        values.sort_unstable();
        values.dedup();
        values
    }
}

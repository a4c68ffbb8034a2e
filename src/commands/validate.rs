use camino::Utf8PathBuf;
use clap::Parser;
use ohno::{IntoAppError, app_err};
use roli_dash::Result;
use roli_dash::dataset::{REGIONS, RecordStore, VariableKey};
use std::collections::{HashMap, HashSet};
use std::fs;
use strum::IntoEnumIterator;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the dataset JSON file to check
    #[arg(value_name = "PATH", env = "ROLI_DATA")]
    pub data: Utf8PathBuf,
}

/// Check a dataset file against the contract the charts rely on: one
/// record per (country, year), scores within `[0, 1]`, canonical region
/// names, and one region per country.
pub fn validate_dataset(args: &ValidateArgs) -> Result<()> {
    let text = fs::read_to_string(&args.data).into_app_err_with(|| format!("reading dataset from {}", args.data))?;
    let (store, skipped) = RecordStore::parse(&text).into_app_err_with(|| format!("parsing dataset from {}", args.data))?;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if skipped > 0 {
        warnings.push(format!("{skipped} record(s) are missing country, year, or region and would be skipped"));
    }

    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut region_of: HashMap<&str, &str> = HashMap::new();

    for record in store.records() {
        if !seen.insert((record.country.as_str(), record.year.as_str())) {
            errors.push(format!("duplicate record for {} in {}", record.country, record.year));
        }

        match region_of.get(record.country.as_str()) {
            Some(&region) if region != record.region => {
                errors.push(format!(
                    "{} appears in both '{region}' and '{}'; a country's region must not change across years",
                    record.country, record.region
                ));
            }
            Some(_) => {}
            None => {
                let _ = region_of.insert(&record.country, &record.region);
            }
        }

        for key in VariableKey::iter() {
            if let Some(value) = record.score(key)
                && (!value.is_finite() || !(0.0..=1.0).contains(&value))
            {
                errors.push(format!("{} {} has {key} = {value}, outside [0, 1]", record.country, record.year));
            }
        }

        if record.year.len() != 4 || record.year.parse::<u16>().is_err() {
            warnings.push(format!("{} has a non-standard year '{}'", record.country, record.year));
        }
    }

    for region in store.regions() {
        if !REGIONS.contains(&region) {
            warnings.push(format!("region '{region}' is not a canonical region name"));
        }
    }

    for warning in &warnings {
        eprintln!("warning: {warning}");
    }
    for error in &errors {
        eprintln!("error: {error}");
    }

    if errors.is_empty() {
        println!("{}: {} records OK ({} warning(s))", args.data, store.len(), warnings.len());
        Ok(())
    } else {
        Err(app_err!("{} failed validation with {} error(s)", args.data, errors.len()))
    }
}

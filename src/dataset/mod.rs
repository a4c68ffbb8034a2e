//! Dataset loading and selection
//!
//! This module owns the in-memory record store and everything needed to
//! slice it: the `Record` row type with its closed set of score keys, the
//! one-shot JSON loader, and the pure filter functions commands compose
//! before handing rows to the aggregation and series layers.
//!
//! # Implementation Model
//!
//! A [`Record`] is one (country, year) row carrying a region and up to 53
//! optional scores. Scores are addressed through the [`VariableKey`] enum
//! rather than by string lookup, so a typo is a compile error and every
//! key maps to an `Option<f64>` via [`Record::score`]. The static
//! [`VARIABLE_DEFINITIONS`] table pairs each key with its display label
//! and grouping, in presentation order.
//!
//! [`RecordStore`] loads the prepared dataset once and is immutable from
//! then on. The filter functions ([`by_year`], [`by_region`],
//! [`by_country`]) are total: an unmatched filter yields an empty vector,
//! never an error, and filters over disjoint fields compose in any order.

mod filter;
mod record;
mod store;
mod variable;

pub use filter::{REGIONS, RegionFilter, by_country, by_region, by_year};
pub use record::Record;
pub use store::RecordStore;
pub use variable::{VARIABLE_DEFINITIONS, VariableCategory, VariableDef, VariableKey};

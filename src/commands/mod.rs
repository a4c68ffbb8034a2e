//! Command-line interface for roli-dash
//!
//! Each chart mode of the dashboard is one subcommand here, plus the
//! supporting surfaces: dataset summary and validation, variable listing,
//! and config generation. Every command follows the same pattern: load
//! config and dataset, derive the requested arrays through the library's
//! pure functions, and hand the result to the report generators.

mod common;
mod factors;
mod init;
mod radar;
mod summary;
mod timeseries;
mod top_bottom;
mod validate;
mod variables;

pub use factors::{FactorsArgs, chart_factors};
pub use init::{InitArgs, init_config};
pub use radar::{RadarArgs, chart_radar};
pub use summary::{SummaryArgs, summarize_dataset};
pub use timeseries::{TimeSeriesArgs, chart_time_series};
pub use top_bottom::{TopBottomArgs, chart_top_bottom};
pub use validate::{ValidateArgs, validate_dataset};
pub use variables::list_variables;

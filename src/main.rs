//! A tool to explore and chart World Justice Project Rule of Law Index data.
//!
//! # Overview
//!
//! `roli-dash` reads the prepared Rule of Law Index dataset (one JSON
//! record per country and edition year, carrying the overall index, the
//! eight factor scores, and the forty-four sub-factor scores) and derives
//! the arrays behind each chart of the companion dashboard: per-year trend
//! series, top/bottom performer rankings, radar rows, and multi-country
//! factor comparisons. Results render as text on the console or export as
//! CSV and JSON for downstream charting.
//!
//! # Quick Start
//!
//! ```bash
//! roli-dash summary --data roli_data.json
//! roli-dash timeseries --data roli_data.json --country Denmark
//! ```
//!
//! # Basic Usage
//!
//! **Trend for a country, or for a regional/global average:**
//! ```bash
//! roli-dash timeseries --country Denmark --variable roli
//! roli-dash timeseries --region "South Asia" --variable f2
//! roli-dash timeseries --variable sf41            # global average
//! ```
//!
//! **Top and bottom performers in a year:**
//! ```bash
//! roli-dash top-bottom --variable roli --year 2025
//! roli-dash top-bottom --region "Sub-Saharan Africa" --variable f3
//! ```
//!
//! **Radar rows across years:**
//! ```bash
//! roli-dash radar --country Chile --years 2019,2022,2025
//! roli-dash radar --factors f1,f4,f7 --years 2024,2025
//! ```
//!
//! **Factor comparison at one year:**
//! ```bash
//! roli-dash factors --countries Denmark,Chile --average --year 2025
//! ```
//!
//! # Report Output
//!
//! Console output is shown by default. `--csv PATH` and `--json PATH`
//! write the derived values to files instead; the JSON form includes the
//! axis domain and the chart palette so a renderer can redraw the chart
//! exactly.
//!
//! # Dataset and Configuration
//!
//! The dataset path comes from `--data`, the `ROLI_DATA` environment
//! variable, or the `data` entry of an optional config file
//! (`roli.toml`/`roli.yml`/`roli.yaml`/`roli.json`, or `--config PATH`).
//! The config also carries the default year and region, and the chart
//! palette. Generate a commented starting point with:
//!
//! ```bash
//! roli-dash init
//! ```
//!
//! Check a dataset against the data contract with:
//!
//! ```bash
//! roli-dash validate roli_data.json
//! ```

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use roli_dash::Result;

mod commands;

use crate::commands::{
    FactorsArgs, InitArgs, RadarArgs, SummaryArgs, TimeSeriesArgs, TopBottomArgs, ValidateArgs, chart_factors, chart_radar,
    chart_time_series, chart_top_bottom, init_config, list_variables, summarize_dataset, validate_dataset,
};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "roli-dash", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Chart a per-year trend for a country or a regional average
    Timeseries(Box<TimeSeriesArgs>),
    /// Rank the top and bottom performers for a variable in a year
    TopBottom(Box<TopBottomArgs>),
    /// Build per-factor series across years for a radar chart
    Radar(Box<RadarArgs>),
    /// Compare factor scores across countries for one year
    Factors(Box<FactorsArgs>),
    /// List every variable key with its display label
    Variables,
    /// Show dataset coverage: record, country, region, and year counts
    Summary(Box<SummaryArgs>),
    /// Check a dataset file against the data contract
    Validate(ValidateArgs),
    /// Generate a default configuration file
    Init(InitArgs),
}

fn main() -> Result<()> {
    match &Cli::parse().command {
        Command::Timeseries(args) => chart_time_series(args),
        Command::TopBottom(args) => chart_top_bottom(args),
        Command::Radar(args) => chart_radar(args),
        Command::Factors(args) => chart_factors(args),
        Command::Variables => list_variables(),
        Command::Summary(args) => summarize_dataset(args),
        Command::Validate(args) => validate_dataset(args),
        Command::Init(args) => init_config(args),
    }
}

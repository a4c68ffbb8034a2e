//! Common plumbing shared by the chart commands.

use camino::Utf8PathBuf;
use clap::Args;
use clap::ValueEnum;
use ohno::{IntoAppError, app_err};
use roli_dash::Result;
use roli_dash::config::Config;
use roli_dash::dataset::{RecordStore, RegionFilter, VariableKey};
use roli_dash::series::Subject;
use std::env;
use std::fs;

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

/// Common arguments shared by the chart commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to the prepared dataset JSON file
    #[arg(long, value_name = "PATH", env = "ROLI_DATA")]
    pub data: Option<Utf8PathBuf>,

    /// Path to configuration file [default: one of roli.[toml|yml|yaml|json] ]
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Output the derived table to a CSV file instead of to the terminal
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub csv: Option<Utf8PathBuf>,

    /// Output the derived data to a JSON file instead of to the terminal
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,
}

#[derive(Debug)]
pub struct Common {
    pub store: RecordStore,
    pub config: Config,
    pub csv: Option<Utf8PathBuf>,
    pub json: Option<Utf8PathBuf>,
    color: ColorMode,
}

impl Common {
    /// Create a new Common processor with logger, config, and dataset
    ///
    /// # Errors
    ///
    /// Returns an error if the config or the dataset cannot be loaded
    pub fn new(args: &CommonArgs) -> Result<Self> {
        Self::init_logging(args.log_level);

        let current_dir = env::current_dir().into_app_err("unable to determine the current directory")?;
        let base_dir = Utf8PathBuf::from_path_buf(current_dir).map_err(|p| app_err!("current directory {} is not UTF-8", p.display()))?;

        let (config, warnings) = Config::load(&base_dir, args.config.as_ref())?;

        // Print warnings if any
        if !warnings.is_empty() {
            eprintln!("\n⚠️  Configuration validation warnings:");
            for warning in &warnings {
                eprintln!("   {warning}");
            }
            eprintln!();
        }

        let data_path = args
            .data
            .clone()
            .or_else(|| config.data.clone())
            .ok_or_else(|| app_err!("no dataset given; pass --data, set ROLI_DATA, or add `data` to the configuration file"))?;

        let store = RecordStore::load(&data_path)?;

        Ok(Self {
            store,
            config,
            csv: args.csv.clone(),
            json: args.json.clone(),
            color: args.color,
        })
    }

    /// Initialize logger based on log level
    fn init_logging(log_level: LogLevel) {
        if log_level == LogLevel::None {
            return;
        }

        let level = match log_level {
            LogLevel::None => return, // Already checked above, but being explicit
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        let env = env_logger::Env::default().filter_or("RUST_LOG", level);

        env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
            .init();
    }

    /// Region filter from the command flag, falling back to the config default
    #[must_use]
    pub fn region_filter(&self, flag: Option<&str>) -> RegionFilter {
        RegionFilter::from_arg(flag.unwrap_or(&self.config.region))
    }

    /// Edition year from the command flag, falling back to the config default
    #[must_use]
    pub fn year<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.unwrap_or(&self.config.year)
    }

    /// Whether console output should be shown (no file report requested)
    #[must_use]
    pub fn console_wanted(&self) -> bool {
        self.csv.is_none() && self.json.is_none()
    }

    #[must_use]
    pub fn use_colors(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                use std::io::{IsTerminal, stdout};
                stdout().is_terminal()
            }
        }
    }

    /// Write a generated CSV report if `--csv` was requested
    pub fn save_csv(&self, text: &str) -> Result<()> {
        if let Some(path) = &self.csv {
            fs::write(path, text).into_app_err_with(|| format!("writing CSV report to {path}"))?;
        }
        Ok(())
    }

    /// Write a generated JSON report if `--json` was requested
    pub fn save_json(&self, document: &serde_json::Value) -> Result<()> {
        if let Some(path) = &self.json {
            let text = serde_json::to_string_pretty(document)?;
            fs::write(path, text).into_app_err_with(|| format!("writing JSON report to {path}"))?;
        }
        Ok(())
    }
}

/// Parse a variable key argument, with a pointer at the listing command
/// on failure.
pub fn parse_variable(value: &str) -> Result<VariableKey, String> {
    value
        .parse()
        .map_err(|_| format!("unknown variable key '{value}' (run `roli-dash variables` to list keys)"))
}

/// Title form used by trend and radar charts: the country name, "Global
/// Average", or "South Asia — Regional Average".
#[must_use]
pub fn subject_title(subject: &Subject, region: &RegionFilter) -> String {
    match subject {
        Subject::Country(country) => country.clone(),
        Subject::Aggregate => match region {
            RegionFilter::Global => "Global Average".to_string(),
            RegionFilter::Region(name) => format!("{name} — Regional Average"),
        },
    }
}

/// Compact form used in legends and comparison columns: the country name,
/// "Global Average", or "South Asia Average".
#[must_use]
pub fn subject_label(subject: &Subject, region: &RegionFilter) -> String {
    match subject {
        Subject::Country(country) => country.clone(),
        Subject::Aggregate => match region {
            RegionFilter::Global => "Global Average".to_string(),
            RegionFilter::Region(name) => format!("{name} Average"),
        },
    }
}

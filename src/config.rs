//! Tool configuration
//!
//! An optional config file supplies defaults the CLI would otherwise need
//! on every invocation (dataset path, edition year, region) plus the
//! chart palette handed to downstream renderers through the JSON report.
//! All fields are optional; unspecified fields fall back to the embedded
//! defaults.

use crate::Result;
use crate::dataset::REGIONS;
use camino::{Utf8Path, Utf8PathBuf};
use core::fmt;
use ohno::{IntoAppError, app_err};
use palette::Srgb;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fs;
use std::io;

/// The default configuration YAML content, embedded from `default_config.yml`
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../default_config.yml");

/// Edition year used when neither the CLI nor the config names one.
pub const ACTIVE_YEAR: &str = "2025";

/// An sRGB color serialized as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub Srgb<u8>);

impl Color {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    /// Lowercase `#rrggbb` form
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0.red, self.0.green, self.0.blue)
    }

    fn parse_hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let channel = |range| u8::from_str_radix(digits.get(range)?, 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse_hex(&text).ok_or_else(|| D::Error::custom(format!("expected a #rrggbb hex color, got '{text}'")))
    }
}

const fn default_top() -> Color {
    Color::new(0x00, 0x3b, 0x88)
}

const fn default_bottom() -> Color {
    Color::new(0xfa, 0x4d, 0x57)
}

const fn default_line() -> Color {
    Color::new(0x18, 0x18, 0x78)
}

const fn default_axis() -> Color {
    Color::new(0x51, 0x4e, 0x4b)
}

const fn default_grid() -> Color {
    Color::new(0xbd, 0xbd, 0xbd)
}

const fn default_text() -> Color {
    Color::new(0x1a, 0x1a, 0x1a)
}

const fn default_muted() -> Color {
    Color::new(0x6b, 0x6b, 0x6b)
}

const fn default_divider() -> Color {
    Color::new(0x33, 0x33, 0x33)
}

const fn default_background() -> Color {
    Color::new(0xf8, 0xf7, 0xf4)
}

fn default_year_colors() -> BTreeMap<String, Color> {
    let mut map = BTreeMap::new();
    let _ = map.insert("2019".to_string(), Color::new(0x95, 0xa3, 0xa6));
    let _ = map.insert("2020".to_string(), Color::new(0x7f, 0x8c, 0x8d));
    let _ = map.insert("2021".to_string(), Color::new(0x34, 0x49, 0x5e));
    let _ = map.insert("2022".to_string(), Color::new(0x29, 0x80, 0xb9));
    let _ = map.insert("2023".to_string(), Color::new(0x8e, 0x44, 0xad));
    let _ = map.insert("2024".to_string(), Color::new(0x27, 0xae, 0x60));
    let _ = map.insert("2025".to_string(), Color::new(0x00, 0x3b, 0x88));
    map
}

fn default_comparison() -> Vec<Color> {
    vec![
        Color::new(0x00, 0x3b, 0x88),
        Color::new(0x27, 0xae, 0x60),
        Color::new(0x8e, 0x44, 0xad),
        Color::new(0xe6, 0x7e, 0x22),
        Color::new(0xc0, 0x39, 0x2b),
    ]
}

/// Colors passed through to renderers so chart styling stays consistent
/// across export formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartPalette {
    #[serde(default = "default_top")]
    pub top: Color,

    #[serde(default = "default_bottom")]
    pub bottom: Color,

    #[serde(default = "default_line")]
    pub line: Color,

    #[serde(default = "default_axis")]
    pub axis: Color,

    #[serde(default = "default_grid")]
    pub grid: Color,

    #[serde(default = "default_text")]
    pub text: Color,

    #[serde(default = "default_muted")]
    pub muted: Color,

    #[serde(default = "default_divider")]
    pub divider: Color,

    #[serde(default = "default_background")]
    pub background: Color,

    /// Line color per edition year for radar charts
    #[serde(default = "default_year_colors")]
    pub year_colors: BTreeMap<String, Color>,

    /// Series colors for factor comparison charts, cycled in order
    #[serde(default = "default_comparison")]
    pub comparison: Vec<Color>,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            top: default_top(),
            bottom: default_bottom(),
            line: default_line(),
            axis: default_axis(),
            grid: default_grid(),
            text: default_text(),
            muted: default_muted(),
            divider: default_divider(),
            background: default_background(),
            year_colors: default_year_colors(),
            comparison: default_comparison(),
        }
    }
}

fn default_year() -> String {
    ACTIVE_YEAR.to_string()
}

fn default_region() -> String {
    "global".to_string()
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dataset file used when `--data` is not passed
    #[serde(default)]
    pub data: Option<Utf8PathBuf>,

    /// Edition year used when `--year` is not passed
    #[serde(default = "default_year")]
    pub year: String,

    /// Region used when `--region` is not passed (`global` or a canonical region name)
    #[serde(default = "default_region")]
    pub region: String,

    #[serde(default)]
    pub palette: ChartPalette,
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<(Self, Vec<String>)> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading roli-dash configuration from {path}"))?;
            (path.clone(), text)
        } else {
            let candidates = [
                base_dir.join("roli.toml"),
                base_dir.join("roli.yml"),
                base_dir.join("roli.yaml"),
                base_dir.join("roli.json"),
            ];

            let mut found = None;
            for path in &candidates {
                match fs::read_to_string(path) {
                    Ok(text) => {
                        found = Some((path.clone(), text));
                        break;
                    }
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_app_err_with(|| format!("reading roli-dash configuration from {path}")),
                }
            }

            let Some(result) = found else {
                return Ok((Self::default(), Vec::new()));
            };
            result
        };

        let extension = final_path.extension().unwrap_or_default();
        let config: Self = match extension {
            "toml" => toml::from_str(&text).into_app_err_with(|| format!("parsing TOML configuration from {final_path}"))?,
            "yml" | "yaml" => serde_yaml::from_str(&text).into_app_err_with(|| format!("parsing YAML configuration from {final_path}"))?,
            "json" => serde_json::from_str(&text).into_app_err_with(|| format!("parsing JSON configuration from {final_path}"))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        let mut warnings = Vec::new();
        config.validate(&mut warnings);
        Ok((config, warnings))
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save(&self, output_path: &Utf8Path) -> Result<()> {
        let extension = output_path.extension().unwrap_or_default();
        let text = match extension {
            "toml" => {
                toml::to_string_pretty(self).into_app_err_with(|| format!("serializing configuration to TOML for saving to {output_path}"))?
            }
            "yml" | "yaml" => serde_yaml::to_string(self)
                .into_app_err_with(|| format!("serializing configuration to YAML for saving to {output_path}"))?,
            "json" => serde_json::to_string_pretty(self)
                .into_app_err_with(|| format!("serializing configuration to JSON for saving to {output_path}"))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        fs::write(output_path, text).into_app_err_with(|| format!("writing configuration to {output_path}"))?;
        Ok(())
    }

    /// Save the default configuration to a file, preserving comments for YAML format
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default_with_comments(output_path: &Utf8Path) -> Result<()> {
        let extension = output_path.extension().unwrap_or_default();

        if matches!(extension, "yml" | "yaml") {
            // Write the raw default content so its comments survive.
            fs::write(output_path, DEFAULT_CONFIG_YAML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
            Ok(())
        } else {
            Self::default().save(output_path)
        }
    }

    /// Validate the configuration, collecting non-fatal problems
    fn validate(&self, warnings: &mut Vec<String>) {
        if !self.region.eq_ignore_ascii_case("global") && !REGIONS.contains(&self.region.as_str()) {
            warnings.push(format!("region '{}' is not a canonical region name", self.region));
        }

        if self.year.len() != 4 || self.year.parse::<u16>().is_err() {
            warnings.push(format!("year '{}' is not a four-digit year", self.year));
        }

        if self.palette.comparison.is_empty() {
            warnings.push("palette.comparison must list at least one color".to_string());
        }

        for year in self.palette.year_colors.keys() {
            if year.parse::<u16>().is_err() {
                warnings.push(format!("palette.year_colors key '{year}' is not a year"));
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        serde_yaml::from_str(DEFAULT_CONFIG_YAML).expect("default_config.yml should be valid YAML that deserializes to Config")
    }
}

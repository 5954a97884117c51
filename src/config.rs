use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use almanako::Holiday;
use almanako::islamic::LeapYearRule;

/// Configuration file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG: &str = "almanako.toml";

/// Top-level Almanako configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanakoConfig {
    /// Time zone for moon quarter dates, in minutes east of UTC.
    #[serde(default)]
    pub utc_offset_minutes: i32,

    /// Islamic leap year rule, e.g. "west-islamic".
    #[serde(default = "default_leap_rule")]
    pub islamic_leap_rule: String,

    /// Holiday listing settings.
    #[serde(default)]
    pub holidays: HolidaysToml,
}

impl Default for AlmanakoConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            islamic_leap_rule: default_leap_rule(),
            holidays: HolidaysToml::default(),
        }
    }
}

fn default_leap_rule() -> String {
    LeapYearRule::default().name().to_string()
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct HolidaysToml {
    /// Year listed when `--year` is absent.
    #[serde(default)]
    pub year: Option<i32>,
    /// Holidays listed, in order; all of them when absent.
    #[serde(default)]
    pub list: Option<Vec<String>>,
}

impl AlmanakoConfig {
    pub fn leap_rule(&self) -> Result<LeapYearRule> {
        self.islamic_leap_rule
            .parse()
            .context("invalid islamic_leap_rule in config")
    }

    pub fn holiday_list(&self) -> Result<Vec<Holiday>> {
        match &self.holidays.list {
            None => Ok(Holiday::ALL.to_vec()),
            Some(names) => names
                .iter()
                .map(|name| name.parse().context("invalid [holidays].list in config"))
                .collect(),
        }
    }
}

/// Load the config at `path`, or [`DEFAULT_CONFIG`] if present, or the
/// defaults otherwise.
pub fn load(path: Option<&Path>) -> Result<AlmanakoConfig> {
    let path = match path {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG).is_file() => Path::new(DEFAULT_CONFIG),
        None => {
            debug!("no config file, using defaults");
            return Ok(AlmanakoConfig::default());
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config: AlmanakoConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse config TOML: {}", path.display()))?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

use crate::accumulator::Width;
use crate::error::Error;
use crate::{muted_error, weak_error};
use serde::Deserialize;
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

/// Raw representation of a configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    width: Option<String>,
    breakdown: Option<bool>,
    color: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Width of the integers used for input parsing and arithmetic.
    pub width: Width,
    /// Print each accumulator result before the combined one.
    pub breakdown: bool,
    /// Colorize output labels (only if stdout is a terminal).
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Width::default(),
            breakdown: false,
            color: true,
        }
    }
}

impl TryFrom<ConfigFile> for Config {
    type Error = Error;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let default = Config::default();
        let width = match file.width {
            None => default.width,
            Some(w) => Width::from_str(&w).map_err(|_| Error::UnknownWidth(w))?,
        };
        Ok(Self {
            width,
            breakdown: file.breakdown.unwrap_or(default.breakdown),
            color: file.color.unwrap_or(default.color),
        })
    }
}

impl Config {
    const DEFAULT_PATH: &'static str = ".config/trisum/config.toml";

    /// Parse configuration from a TOML document.
    pub fn from_toml(data: &str) -> Result<Self, Error> {
        let file: ConfigFile = toml::de::from_str(data)?;
        file.try_into()
    }

    /// Load configuration from file. Return [`None`] on errors.
    ///
    /// If `path` is not set, the file is searched in the user home directory and
    /// its absence is not reported.
    pub fn from_file(path: Option<&Path>) -> Option<Self> {
        let data = match path {
            None => {
                let path = home::home_dir()?.join(Self::DEFAULT_PATH);
                muted_error!(read_to_string(path))?
            }
            Some(path) => weak_error!(read_to_string(path), "config file unavailable:")?,
        };

        weak_error!(Self::from_toml(&data), "invalid config:")
    }
}

//! Layered run configuration.
//!
//! Values are plain `key -> string` pairs collected from, lowest priority
//! first, the built-in defaults, a YAML file, `RANKER_*` environment variables
//! and command-line flags. [`ConfigLayers::resolve`] validates the merged
//! values into a typed [`RankerConfig`].

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::points::PointsPolicy;

pub const ENV_PREFIX: &str = "RANKER_";
pub const CONFIG_FILENAME: &str = "league-ranker.yaml";

pub const KEY_CONFIG_PATH: &str = "config_path";
pub const KEY_STRICT_PARSE: &str = "strict_parse";
pub const KEY_VERBOSE: &str = "verbose";
pub const KEY_LOG_LEVEL: &str = "log_level";
pub const KEY_POINTS_WIN: &str = "points_win";
pub const KEY_POINTS_LOSS: &str = "points_loss";
pub const KEY_POINTS_DRAW: &str = "points_draw";

pub type ConfigValues = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid points configuration: '{key}' = '{value}' is not a non-negative integer")]
    InvalidPoints { key: String, value: String },
    #[error("invalid boolean for '{key}': '{value}'")]
    InvalidBool { key: String, value: String },
    #[error("invalid log level: '{0}'")]
    InvalidLogLevel(String),
    #[error("could not read config file '{}'", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file '{}'", path.display())]
    InvalidFile {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankerConfig {
    pub strict_parse: bool,
    pub verbose: bool,
    pub log_level: LevelFilter,
    pub points: PointsPolicy,
    /// File the values were read from, if any.
    pub config_path: Option<PathBuf>,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            strict_parse: false,
            verbose: false,
            log_level: LevelFilter::Error,
            points: PointsPolicy::default(),
            config_path: None,
        }
    }
}

impl RankerConfig {
    /// Build a config from merged values; missing keys keep their defaults.
    pub fn from_values(values: &ConfigValues) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            strict_parse: get_bool(values, KEY_STRICT_PARSE)?.unwrap_or(defaults.strict_parse),
            verbose: get_bool(values, KEY_VERBOSE)?.unwrap_or(defaults.verbose),
            log_level: match values.get(KEY_LOG_LEVEL) {
                Some(raw) => parse_log_level(raw)?,
                None => defaults.log_level,
            },
            points: PointsPolicy {
                win: get_points(values, KEY_POINTS_WIN)?.unwrap_or(defaults.points.win),
                loss: get_points(values, KEY_POINTS_LOSS)?.unwrap_or(defaults.points.loss),
                draw: get_points(values, KEY_POINTS_DRAW)?.unwrap_or(defaults.points.draw),
            },
            config_path: values.get(KEY_CONFIG_PATH).map(PathBuf::from),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigLayers {
    file: ConfigValues,
    env: ConfigValues,
    cli: ConfigValues,
}

impl ConfigLayers {
    pub fn with_file(mut self, values: ConfigValues) -> Self {
        self.file = values;
        self
    }

    pub fn with_env(mut self, values: ConfigValues) -> Self {
        self.env = values;
        self
    }

    pub fn with_cli(mut self, values: ConfigValues) -> Self {
        self.cli = values;
        self
    }

    /// Explicitly requested config file; the file layer never names itself.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.cli
            .get(KEY_CONFIG_PATH)
            .or_else(|| self.env.get(KEY_CONFIG_PATH))
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }

    pub fn merged(&self) -> ConfigValues {
        let mut out = ConfigValues::new();
        for layer in [&self.file, &self.env, &self.cli] {
            out.extend(layer.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        out
    }

    pub fn resolve(&self) -> Result<RankerConfig, ConfigError> {
        RankerConfig::from_values(&self.merged())
    }
}

/// Resolve the full configuration for a run from the process environment,
/// the config file it points at (or one found in the search dirs) and `cli`.
pub fn load(cli: ConfigValues) -> Result<RankerConfig, ConfigError> {
    let layers = ConfigLayers::default()
        .with_env(env_values(env::vars()))
        .with_cli(cli);

    let path = match layers.config_path() {
        Some(path) => Some(path),
        None => search_config_file(&default_search_dirs()),
    };
    let layers = match &path {
        Some(path) => layers.with_file(load_config_file(path)?),
        None => layers,
    };

    let mut config = layers.resolve()?;
    config.config_path = path;
    Ok(config)
}

/// Pick out `RANKER_*` variables, keyed by their lower-cased suffix.
pub fn env_values<I>(vars: I) -> ConfigValues
where
    I: IntoIterator<Item = (String, String)>,
{
    vars.into_iter()
        .filter_map(|(key, val)| {
            let upper = key.to_ascii_uppercase();
            let name = upper.strip_prefix(ENV_PREFIX)?;
            if name.is_empty() {
                return None;
            }
            Some((name.to_ascii_lowercase(), val))
        })
        .collect()
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    config: Option<BTreeMap<String, serde_yaml::Value>>,
}

/// Parse the `config:` mapping of a YAML config file into string values.
pub fn parse_config_yaml(raw: &str) -> Result<ConfigValues, serde_yaml::Error> {
    if raw.trim().is_empty() {
        return Ok(ConfigValues::new());
    }
    let file: Option<ConfigFile> = serde_yaml::from_str(raw)?;
    let mut out = ConfigValues::new();
    for (key, value) in file.and_then(|f| f.config).unwrap_or_default() {
        let text = match value {
            serde_yaml::Value::Bool(b) => b.to_string(),
            serde_yaml::Value::Number(n) => n.to_string(),
            serde_yaml::Value::String(s) => s,
            _ => continue,
        };
        out.insert(key.to_ascii_lowercase(), text);
    }
    Ok(out)
}

pub fn load_config_file(path: &Path) -> Result<ConfigValues, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::MissingFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_yaml(&raw).map_err(|source| ConfigError::InvalidFile {
        path: path.to_path_buf(),
        source,
    })
}

pub fn search_config_file(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|path| path.is_file())
}

/// Current directory, then `~/.ranker/`.
pub fn default_search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        dirs.push(cwd);
    }
    if let Ok(home) = env::var("HOME")
        && !home.trim().is_empty()
    {
        dirs.push(PathBuf::from(home).join(".ranker"));
    }
    dirs
}

pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn parse_log_level(raw: &str) -> Result<LevelFilter, ConfigError> {
    let trimmed = raw.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "warning" => Ok(LevelFilter::Warn),
        "critical" => Ok(LevelFilter::Error),
        _ => LevelFilter::from_str(trimmed)
            .map_err(|_| ConfigError::InvalidLogLevel(trimmed.to_string())),
    }
}

fn get_bool(values: &ConfigValues, key: &str) -> Result<Option<bool>, ConfigError> {
    let Some(raw) = values.get(key) else {
        return Ok(None);
    };
    parse_bool(raw)
        .map(Some)
        .ok_or_else(|| ConfigError::InvalidBool {
            key: key.to_string(),
            value: raw.clone(),
        })
}

fn get_points(values: &ConfigValues, key: &str) -> Result<Option<u32>, ConfigError> {
    let Some(raw) = values.get(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u32>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidPoints {
            key: key.to_string(),
            value: raw.clone(),
        })
}

//! Configuration types and loading for the trainflow toolkit.
//!
//! The main entry point is [`TrainflowConfig`], which represents the contents
//! of `.trainflow/config.yaml`. The file is read as-is with [`load_config`]
//! and written with [`save_config`]; [`load_effective_config`] layers
//! `TRAINFLOW_*` environment variables on top for the values the CLI uses.

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File name of the configuration inside the `.trainflow/` directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Prefix of environment variables that override file values.
pub const ENV_PREFIX: &str = "TRAINFLOW_";

/// Keys accepted by [`TrainflowConfig::get`] and [`TrainflowConfig::set`].
pub const KEYS: &[&str] = &[
    "author",
    "sport-type",
    "default-tags",
    "output-dir",
    "indent",
    "xml-declaration",
    "json",
];

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("failed to read config file")]
    ReadError(#[from] std::io::Error),

    /// The configuration file contained invalid YAML.
    #[error("failed to parse config file")]
    ParseError(#[from] serde_yaml::Error),

    /// A layer of the effective configuration (file or environment) held
    /// an invalid value.
    #[error("invalid configuration")]
    LayerError(#[from] Box<figment::Error>),

    /// The `.trainflow/` directory was not found.
    #[error("no .trainflow directory found (run 'trainflow init' first)")]
    ConfigDirNotFound,

    /// The key is not one of [`KEYS`].
    #[error("unknown configuration key '{0}'")]
    UnknownKey(String),

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue {
        /// The configuration key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Contents of `.trainflow/config.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TrainflowConfig {
    /// Author stamped on newly created workout files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Sport type for new files.
    #[serde(default = "default_sport_type")]
    pub sport_type: String,

    /// Comma-separated tags added to new files.
    #[serde(default)]
    pub default_tags: String,

    /// Directory new and formatted files are written to when no explicit
    /// destination is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Spaces per nesting level in written files.
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Whether written files start with an XML declaration.
    #[serde(default)]
    pub xml_declaration: bool,

    /// Default to JSON output.
    #[serde(default)]
    pub json: bool,
}

impl Default for TrainflowConfig {
    fn default() -> Self {
        Self {
            author: None,
            sport_type: default_sport_type(),
            default_tags: String::new(),
            output_dir: None,
            indent: default_indent(),
            xml_declaration: false,
            json: false,
        }
    }
}

fn default_sport_type() -> String {
    "bike".to_string()
}

fn default_indent() -> usize {
    4
}

// ---------------------------------------------------------------------------
// Helper methods on TrainflowConfig
// ---------------------------------------------------------------------------

impl TrainflowConfig {
    /// Return default tags as a vector of trimmed, non-empty strings.
    ///
    /// The `default-tags` field in the YAML is a comma-separated string.
    pub fn default_tags(&self) -> Vec<String> {
        parse_comma_list(&self.default_tags)
    }

    /// Read a value by its YAML key. Unset optional values read as `None`.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = match key {
            "author" => self.author.clone(),
            "sport-type" => Some(self.sport_type.clone()),
            "default-tags" => Some(self.default_tags.clone()),
            "output-dir" => self.output_dir.as_ref().map(|p| p.display().to_string()),
            "indent" => Some(self.indent.to_string()),
            "xml-declaration" => Some(self.xml_declaration.to_string()),
            "json" => Some(self.json.to_string()),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        Ok(value)
    }

    /// Set a value by its YAML key. An empty value clears optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "author" => self.author = non_empty(value),
            "sport-type" => {
                if value.trim().is_empty() {
                    return Err(invalid(key, "sport type cannot be empty"));
                }
                self.sport_type = value.trim().to_string();
            }
            "default-tags" => self.default_tags = value.to_string(),
            "output-dir" => self.output_dir = non_empty(value).map(PathBuf::from),
            "indent" => {
                self.indent = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid(key, "expected a non-negative integer"))?;
            }
            "xml-declaration" => self.xml_declaration = parse_bool(key, value)?,
            "json" => self.json = parse_bool(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

/// Parse a comma-separated string into a vector of trimmed, non-empty strings.
fn parse_comma_list(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(invalid(key, "expected true or false")),
    }
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load configuration from `config.yaml` inside the given `.trainflow/`
/// directory, exactly as stored on disk.
///
/// If the file does not exist, a default [`TrainflowConfig`] is returned.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
/// or [`ConfigError::ParseError`] if it contains invalid YAML.
pub fn load_config(config_dir: &Path) -> Result<TrainflowConfig> {
    let config_path = config_dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        return Ok(TrainflowConfig::default());
    }

    let content = std::fs::read_to_string(&config_path)?;

    // An empty file is valid and yields default config.
    if content.trim().is_empty() {
        return Ok(TrainflowConfig::default());
    }

    let config: TrainflowConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load the effective configuration: defaults, then `config.yaml` from
/// `config_dir` (when given and non-empty), then `TRAINFLOW_*` environment
/// variables (`TRAINFLOW_SPORT_TYPE` overrides `sport-type`).
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file cannot be read, or
/// [`ConfigError::LayerError`] if any layer holds an invalid value.
pub fn load_effective_config(config_dir: Option<&Path>) -> Result<TrainflowConfig> {
    let mut figment = Figment::from(Serialized::defaults(TrainflowConfig::default()));

    if let Some(config_dir) = config_dir {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() && !std::fs::read_to_string(&config_path)?.trim().is_empty() {
            debug!(path = %config_path.display(), "loading config file");
            figment = figment.merge(Yaml::file(&config_path));
        }
    }

    figment = figment.merge(
        Env::prefixed(ENV_PREFIX)
            .ignore(&["dir"])
            .map(|key| key.as_str().to_ascii_lowercase().replace('_', "-").into()),
    );

    let config = figment.extract().map_err(Box::new)?;
    Ok(config)
}

/// Save configuration to `config.yaml` inside the given `.trainflow/`
/// directory.
///
/// The directory is created if it does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] on I/O failure or
/// [`ConfigError::ParseError`] if serialization fails.
pub fn save_config(config_dir: &Path, config: &TrainflowConfig) -> Result<()> {
    std::fs::create_dir_all(config_dir)?;

    let config_path = config_dir.join(CONFIG_FILE_NAME);
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(config_path, yaml)?;
    Ok(())
}

/// Set a single key in `config.yaml`, leaving every other entry as stored.
///
/// The new value is validated on its own, so a file that no longer loads
/// (an invalid value under this or another key) can still be repaired. An
/// empty value for an optional key removes the entry.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownKey`] or [`ConfigError::InvalidValue`] for
/// a bad key or value, [`ConfigError::ParseError`] if the file is not YAML,
/// and [`ConfigError::ReadError`] on I/O failure.
pub fn set_config_value(config_dir: &Path, key: &str, value: &str) -> Result<()> {
    let mut checked = TrainflowConfig::default();
    checked.set(key, value)?;
    let Value::Mapping(fields) = serde_yaml::to_value(&checked)? else {
        return Err(invalid(key, "configuration is not a mapping"));
    };

    let config_path = config_dir.join(CONFIG_FILE_NAME);
    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };
    let mut stored = match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(stored) => stored,
        Value::Null => Mapping::new(),
        _ => return Err(invalid(key, "config.yaml does not hold a mapping")),
    };

    match fields.get(key) {
        Some(new_value) => {
            stored.insert(Value::from(key), new_value.clone());
        }
        None => {
            stored.remove(key);
        }
    }
    debug!(path = %config_path.display(), key, "updating config file");

    std::fs::create_dir_all(config_dir)?;
    std::fs::write(config_path, serde_yaml::to_string(&stored)?)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Application configuration layered from defaults, a TOML file and the environment.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Directory under the user's config directory holding `config.toml`.
pub const CONFIG_DIR: &str = "handicap";
/// Configuration file name.
pub const CONFIG_FILE: &str = "config.toml";
/// Prefix for environment overrides, e.g. `HANDICAP_DATASET_PATH`.
pub const ENV_PREFIX: &str = "HANDICAP";

const DEFAULT_DATASET_PATH: &str = "data/course_data.json";
const DEFAULT_LOG_DIR: &str = "logs";

const DEFAULT_CONFIG: &str = r#"# Handicap calculator configuration.
# Every key can be overridden with an environment variable, e.g. HANDICAP_DATASET_PATH.

# Course data JSON (club, categories, tees and handicap tables).
dataset_path = "data/course_data.json"

# Directory for log files.
log_dir = "logs"

# Category preselected in the course table view.
# default_category = "Herren"
"#;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path of the course dataset.
    pub dataset_path: PathBuf,
    /// Directory receiving log files.
    pub log_dir: PathBuf,
    /// Category preselected in dataset views.
    #[serde(default)]
    pub default_category: Option<String>,
}

impl AppConfig {
    /// Load from the default config file location and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(config_path())
    }

    /// Load from a specific config file (which may be absent) and the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        load_layers(path.as_ref(), Environment::with_prefix(ENV_PREFIX))
    }
}

fn load_layers(path: &Path, environment: Environment) -> Result<AppConfig> {
    let settings = Config::builder()
        .set_default("dataset_path", DEFAULT_DATASET_PATH)?
        .set_default("log_dir", DEFAULT_LOG_DIR)?
        .add_source(
            File::from(path.to_path_buf())
                .format(FileFormat::Toml)
                .required(false),
        )
        .add_source(environment)
        .build()
        .with_context(|| format!("failed to read configuration {}", path.display()))?;

    settings
        .try_deserialize()
        .with_context(|| format!("invalid configuration in {}", path.display()))
}

/// Default location of the configuration file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

/// Write the default configuration file if none exists yet.
///
/// Returns whether a file was written.
pub fn ensure_default_config() -> Result<bool> {
    ensure_default_config_at(config_path())
}

/// Write the default configuration to `path` unless it already exists.
pub fn ensure_default_config_at(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write default config {}", path.display()))?;
    Ok(true)
}

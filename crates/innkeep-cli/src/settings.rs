//! Layered configuration
//!
//! Precedence, lowest first:
//! 1. Built-in defaults
//! 2. TOML file (`--config`, else `innkeep.toml` when present)
//! 3. Environment variables, `INNKEEP__` prefix, `__` between keys
//!    (e.g. `INNKEEP__STORE__DATA_DIR`); a `.env` file is loaded first
//! 4. Command line flags

use config::{Config, Environment, File, FileFormat};
use innkeep_store::StoreConfig;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Config file consulted when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "innkeep.toml";

const ENV_PREFIX: &str = "INNKEEP";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("configuration file path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub store: StoreConfig,
    pub log_profile: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            log_profile: "development".to_string(),
        }
    }
}

/// Values given on the command line; `None` leaves lower layers in charge
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub database: Option<String>,
    pub log_profile: Option<String>,
}

/// Load settings from every layer
///
/// An explicit `--config` file must exist; the default one is optional.
pub fn load(overrides: &Overrides) -> Result<Settings, SettingsError> {
    // Missing .env is the common case
    let _ = dotenvy::dotenv();
    load_with_env(overrides, Environment::with_prefix(ENV_PREFIX))
}

fn load_with_env(overrides: &Overrides, env: Environment) -> Result<Settings, SettingsError> {
    let defaults = Settings::default();

    let (config_path, required) = match &overrides.config {
        Some(path) => (path.clone(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    let config_path = config_path
        .to_str()
        .ok_or_else(|| SettingsError::NonUtf8Path(config_path.clone()))?
        .to_string();

    let data_dir_override = match &overrides.data_dir {
        Some(dir) => Some(
            dir.to_str()
                .ok_or_else(|| SettingsError::NonUtf8Path(dir.clone()))?
                .to_string(),
        ),
        None => None,
    };

    let config = Config::builder()
        .set_default(
            "store.data_dir",
            defaults.store.data_dir.to_string_lossy().into_owned(),
        )?
        .set_default("store.database", defaults.store.database)?
        .set_default("store.busy_timeout_ms", defaults.store.busy_timeout_ms)?
        .set_default("log_profile", defaults.log_profile)?
        .add_source(File::new(&config_path, FileFormat::Toml).required(required))
        .add_source(
            env.prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR),
        )
        .set_override_option("store.data_dir", data_dir_override)?
        .set_override_option("store.database", overrides.database.clone())?
        .set_override_option("log_profile", overrides.log_profile.clone())?
        .build()?;

    Ok(config.try_deserialize()?)
}

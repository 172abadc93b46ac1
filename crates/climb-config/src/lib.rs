//! # climb-config
//!
//! Layered configuration loading for climblog using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CLIMBLOG_*` prefix, `__` as separator)
//! 2. Working-directory `climblog.toml`
//! 3. User-level `~/.config/climblog/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `CLIMBLOG_STORE__PATH` -> `store.path`,
//! `CLIMBLOG_GENERAL__CONFIRM_DESTRUCTIVE` -> `general.confirm_destructive`.
//!
//! # Usage
//!
//! ```no_run
//! use climb_config::ClimbConfig;
//!
//! let config = ClimbConfig::load_with_dotenv().expect("config");
//! println!("store: {}", config.store.path.display());
//! ```

mod error;
mod general;
mod store;

pub use error::ConfigError;
pub use general::{GeneralConfig, PrintFormat};
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the project-local config file.
pub const LOCAL_CONFIG_FILE: &str = "climblog.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "CLIMBLOG_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClimbConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ClimbConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`ClimbConfig::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// See [`ClimbConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Working-directory config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("climblog").join("config.toml"))
    }
}

//! # dcc-config
//!
//! Layered configuration loading for Digital Career Compass using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DCC_*` prefix, `__` as separator)
//! 2. Project-level `.dcc/config.toml`
//! 3. User-level `~/.config/dcc/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DCC_DATABASE__URL` -> `database.url`,
//! `DCC_GENERAL__TECH_STACK_TOP` -> `general.tech_stack_top`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use dcc_config::DccConfig;
//!
//! let config = DccConfig::load_with_dotenv().expect("config");
//! if config.database.is_remote() {
//!     println!("Remote database: {}", config.database.url);
//! }
//! ```

mod database;
mod error;
mod general;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DccConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl DccConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`. Use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top or extract directly.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".dcc/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("DCC_").split("__"))
    }

    /// Reject values that would make every read fail or every page empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.retry_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.retry_attempts",
                reason: "must be at least 1".into(),
            });
        }
        if self.database.retry_max_delay_ms < self.database.retry_base_delay_ms {
            return Err(ConfigError::InvalidValue {
                field: "database.retry_max_delay_ms",
                reason: "must not be smaller than retry_base_delay_ms".into(),
            });
        }
        if !self.database.is_remote() && self.database.path.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path",
                reason: "required when no remote url and auth_token are set".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dcc").join("config.toml"))
    }
}

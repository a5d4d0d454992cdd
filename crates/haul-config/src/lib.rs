//! # haul-config
//!
//! Layered configuration loading for Haul using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HAUL_*` prefix, `__` as separator)
//! 2. Project-level `.haul/config.toml`
//! 3. User-level `~/.config/haul/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HAUL_DATABASE__PATH` -> `database.path`,
//! `HAUL_ORIGIN__CITY` -> `origin.city`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use haul_config::HaulConfig;
//!
//! let config = HaulConfig::load_with_dotenv().expect("config");
//! println!("log level: {}", config.logging.level);
//! ```

mod database;
mod error;
mod general;
mod log;
mod origin;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use log::LogConfig;
pub use origin::OriginConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project state directory.
pub const PROJECT_DIR: &str = ".haul";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HaulConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LogConfig,
    #[serde(default)]
    pub origin: OriginConfig,
}

impl HaulConfig {
    /// Load configuration from all sources (TOML files + environment variables),
    /// resolving the project-local file relative to the current directory.
    ///
    /// Does NOT call `dotenvy` -- use [`HaulConfig::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_for_project(Path::new("."))
    }

    /// Load configuration using `project_root/.haul/config.toml` as the
    /// project-local layer.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` on parse or type errors.
    pub fn load_for_project(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` like [`HaulConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("HAUL_").split("__"))
    }

    /// Path to the project-local config file.
    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_DIR).join("config.toml")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("haul").join("config.toml"))
    }

    /// Resolve the database file for a project: the configured path if set
    /// (relative paths are taken from the project root), otherwise
    /// `.haul/haul.db` under the project root.
    #[must_use]
    pub fn database_path(&self, project_root: &Path) -> PathBuf {
        if self.database.path.is_empty() {
            project_root.join(PROJECT_DIR).join("haul.db")
        } else {
            project_root.join(&self.database.path)
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit",
                reason: "must be greater than zero".into(),
            });
        }
        self.logging.validate()
    }
}

//! Logging configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

fn default_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Default tracing level when neither `HAUL_LOG` nor `--verbose`/`--quiet`
    /// is given.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LogConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if LEVELS.contains(&self.level.to_ascii_lowercase().as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: format!("expected one of {}", LEVELS.join(", ")),
            })
        }
    }
}

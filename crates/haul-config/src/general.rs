//! Settings shared by every command.

use serde::{Deserialize, Serialize};

const DEFAULT_LIMIT: u32 = 50;

const fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Rows printed by list commands when neither `--limit` nor a
    /// per-command limit is given.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
        }
    }
}

//! Database location configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file. Empty means `.haul/haul.db` in the
    /// project root.
    #[serde(default)]
    pub path: String,
}

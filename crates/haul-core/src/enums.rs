//! Enumerated freight domains.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// PackingGroup
// ---------------------------------------------------------------------------

/// Hazardous-materials severity tier. `I` is the most dangerous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PackingGroup {
    I,
    II,
    III,
}

impl PackingGroup {
    /// Return the roman-numeral form used in storage and on shipping papers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
        }
    }
}

impl fmt::Display for PackingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackingGroup {
    type Err = CoreError;

    /// Accepts `I`/`II`/`III` in any case, an optional `PG` prefix, and the
    /// arabic digits `1`-`3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let bare = upper
            .strip_prefix("PG")
            .map_or(upper.as_str(), str::trim_start);
        match bare {
            "I" | "1" => Ok(Self::I),
            "II" | "2" => Ok(Self::II),
            "III" | "3" => Ok(Self::III),
            _ => Err(CoreError::Validation(format!("unknown packing group '{s}'"))),
        }
    }
}

//! Typed NMFC freight class.
//!
//! Classifications keep the freight class as the text the user entered. When
//! a number is needed (booking, rating) the text is converted with
//! [`FreightClass::from_str`]: trim, parse as a decimal, and require an exact
//! match against one of the 18 NMFC classes. No rounding to the nearest class.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// The NMFC classes in tenths, lowest to highest.
const CLASSES_TENTHS: [u16; 18] = [
    500, 550, 600, 650, 700, 775, 850, 925, 1000, 1100, 1250, 1500, 1750, 2000, 2500, 3000, 4000,
    5000,
];

/// One of the 18 NMFC freight classes, stored in tenths (`77.5` is `775`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FreightClass(u16);

impl FreightClass {
    /// All valid classes in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        CLASSES_TENTHS.iter().copied().map(Self)
    }

    /// Class value in tenths.
    #[must_use]
    pub const fn tenths(self) -> u16 {
        self.0
    }

    /// Class value as a number, e.g. `92.5`.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl fmt::Display for FreightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 10;
        match self.0 % 10 {
            0 => write!(f, "{whole}"),
            frac => write!(f, "{whole}.{frac}"),
        }
    }
}

impl FromStr for FreightClass {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || CoreError::Validation(format!("'{s}' is not an NMFC freight class"));

        let (whole, frac) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        // Only one significant fractional digit exists in the class table;
        // trailing zeros ("77.50") are accepted.
        let frac = frac.trim_end_matches('0');
        if frac.len() > 1 {
            return Err(invalid());
        }
        let whole: u16 = whole.parse().map_err(|_| invalid())?;
        let tenths = whole
            .checked_mul(10)
            .and_then(|w| w.checked_add(frac.parse::<u16>().unwrap_or(0)))
            .ok_or_else(invalid)?;

        if CLASSES_TENTHS.contains(&tenths) {
            Ok(Self(tenths))
        } else {
            Err(invalid())
        }
    }
}

impl TryFrom<String> for FreightClass {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FreightClass> for String {
    fn from(value: FreightClass) -> Self {
        value.to_string()
    }
}

//! Season keys as printed by Basketball Reference (`2008-09`).

use crate::error::{RtsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a season label.
///
/// Stores the start year; the `YY` suffix is always derived from it, so two
/// keys compare equal exactly when they name the same season. Ordering is
/// chronological.
///
/// # Examples
///
/// ```rust
/// use nba_rts::SeasonKey;
///
/// let season: SeasonKey = "2008-09".parse().unwrap();
/// assert_eq!(season.start_year(), 2008);
/// assert_eq!(season.end_year(), 2009);
/// assert_eq!(season.to_string(), "2008-09");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeasonKey(u16);

impl SeasonKey {
    pub fn from_start_year(start_year: u16) -> Self {
        Self(start_year)
    }

    pub fn start_year(&self) -> u16 {
        self.0
    }

    pub fn end_year(&self) -> u16 {
        self.0.saturating_add(1)
    }
}

impl fmt::Display for SeasonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0, self.end_year() % 100)
    }
}

impl FromStr for SeasonKey {
    type Err = RtsError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || RtsError::InvalidSeason {
            value: s.to_string(),
        };

        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        if start.len() != 4 || end.len() != 2 {
            return Err(invalid());
        }
        if !start.bytes().chain(end.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let start_year: u16 = start.parse()?;
        let end_suffix: u16 = end.parse()?;
        if (start_year + 1) % 100 != end_suffix {
            return Err(invalid());
        }

        Ok(Self(start_year))
    }
}

impl TryFrom<String> for SeasonKey {
    type Error = RtsError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SeasonKey> for String {
    fn from(season: SeasonKey) -> Self {
        season.to_string()
    }
}

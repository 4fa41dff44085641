//! URL scheme of basketball-reference.com.
//!
//! Player pages live at `/players/{l}/{slug}.html` where the slug is the
//! first five letters of the last name, the first two letters of the first
//! name and a two digit disambiguator. This tool always guesses `01`, so two
//! players sharing a slug prefix resolve to whoever was registered first, and
//! short or unusual names may miss entirely. Treat the lookup as a heuristic.

use crate::{
    bref::names::normalize_name_part,
    cli::types::{Phase, SeasonKey},
    error::RtsError,
    Result,
};
use std::fmt;

/// Production host.
pub const BREF_BASE_URL: &str = "https://www.basketball-reference.com";

/// URL slug identifying a player page, e.g. `doncilu01`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerSlug(String);

impl PlayerSlug {
    pub fn from_name(first_name: &str, last_name: &str) -> Result<Self> {
        let first = normalize_name_part(first_name);
        let last = normalize_name_part(last_name);

        if last.is_empty() {
            return Err(RtsError::InvalidName {
                value: last_name.to_string(),
            });
        }
        if first.is_empty() {
            return Err(RtsError::InvalidName {
                value: first_name.to_string(),
            });
        }

        // Normalized names are ASCII, so byte slicing is safe.
        let last_part = &last[..last.len().min(5)];
        let first_part = &first[..first.len().min(2)];
        Ok(Self(format!("{last_part}{first_part}01")))
    }

    /// Directory letter: first letter of the last name.
    pub fn initial(&self) -> char {
        self.0.chars().next().unwrap_or('_')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Builds page URLs against a configurable host (tests point it at a mock server).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrefUrls {
    base: String,
}

impl BrefUrls {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn player_page(&self, slug: &PlayerSlug) -> String {
        format!("{}/players/{}/{}.html", self.base, slug.initial(), slug)
    }

    /// League summary page for a season. The site labels seasons by the
    /// year they end in, so 2008-09 lives at `NBA_2009.html`.
    pub fn league_page(&self, season: SeasonKey, phase: Phase) -> String {
        format!(
            "{}/{}/NBA_{}.html",
            self.base,
            phase.league_path(),
            season.end_year()
        )
    }
}

impl Default for BrefUrls {
    fn default() -> Self {
        Self::new(BREF_BASE_URL)
    }
}

//! Competition phase: regular season or postseason.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of the year a statistic belongs to.
///
/// The phase picks the player table, the league page URL and the column of
/// the league average store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Regular,
    Postseason,
}

impl Phase {
    pub const ALL: [Phase; 2] = [Phase::Regular, Phase::Postseason];

    /// Column holding this phase's league average in `league_averages`.
    pub fn column(&self) -> &'static str {
        match self {
            Phase::Regular => "regular_season_ts",
            Phase::Postseason => "playoffs_ts",
        }
    }

    /// Path segment of the league summary page for this phase.
    pub fn league_path(&self) -> &'static str {
        match self {
            Phase::Regular => "leagues",
            Phase::Postseason => "playoffs",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Regular => "regular",
            Phase::Postseason => "postseason",
        };
        write!(f, "{}", s)
    }
}

/// Phase selection for the cache warm-up command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PhaseFilter {
    Regular,
    Postseason,
    #[default]
    Both,
}

impl PhaseFilter {
    pub fn phases(&self) -> Vec<Phase> {
        match self {
            PhaseFilter::Regular => vec![Phase::Regular],
            PhaseFilter::Postseason => vec![Phase::Postseason],
            PhaseFilter::Both => Phase::ALL.to_vec(),
        }
    }
}

//! Data models for the storage layer

use crate::cli::types::{Phase, SeasonKey};
use serde::{Deserialize, Serialize};

/// One row of `league_averages`: both phases of a season, either may be unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueAverageRow {
    pub season: SeasonKey,
    pub regular_season_ts: Option<f64>,
    pub playoffs_ts: Option<f64>,
}

impl LeagueAverageRow {
    pub fn value(&self, phase: Phase) -> Option<f64> {
        match phase {
            Phase::Regular => self.regular_season_ts,
            Phase::Postseason => self.playoffs_ts,
        }
    }
}

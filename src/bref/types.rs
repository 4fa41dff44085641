use serde::Serialize;
use std::collections::BTreeMap;

use crate::cli::types::{Phase, SeasonKey};


/// One season row of a player's advanced stats table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerSeasonStat {
    pub season: SeasonKey,
    #[serde(rename = "playerTS")]
    pub player_statistic: f64,
}

/// Which advanced stats table to read from a player page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatTable {
    RegularAdvanced,
    PostseasonAdvanced,
}

impl StatTable {
    /// Table ids to try, current layout first.
    pub fn table_ids(&self) -> &'static [&'static str] {
        match self {
            StatTable::RegularAdvanced => &["advanced"],
            StatTable::PostseasonAdvanced => &["advanced_post", "playoffs_advanced"],
        }
    }
}

/// Both advanced tables of a player page, oldest season first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerPage {
    pub regular: Vec<PlayerSeasonStat>,
    pub postseason: Vec<PlayerSeasonStat>,
}

impl PlayerPage {
    pub fn rows(&self, phase: Phase) -> &[PlayerSeasonStat] {
        match phase {
            Phase::Regular => &self.regular,
            Phase::Postseason => &self.postseason,
        }
    }
}

/// A player's season statistic next to the league average for that season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MergedSeasonRecord {
    #[serde(skip_serializing)]
    pub season: SeasonKey,
    #[serde(rename = "playerTS")]
    pub player_statistic: f64,
    #[serde(rename = "leagueAverageTS")]
    pub league_average: f64,
}

impl MergedSeasonRecord {
    pub fn new(stat: PlayerSeasonStat, league_average: f64) -> Self {
        Self {
            season: stat.season,
            player_statistic: stat.player_statistic,
            league_average,
        }
    }

    /// Relative true shooting in percentage points (player minus league).
    pub fn relative(&self) -> f64 {
        (self.player_statistic - self.league_average) * 100.0
    }
}

/// Season-indexed merged records for one phase.
pub type SeasonSeries = BTreeMap<SeasonKey, MergedSeasonRecord>;

/// Result of a player lookup. A phase that was not requested stays `None`;
/// a requested phase with no rows is an empty map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeasonData {
    pub regular_season_data: Option<SeasonSeries>,
    pub postseason_data: Option<SeasonSeries>,
}

impl PlayerSeasonData {
    pub fn series(&self, phase: Phase) -> Option<&SeasonSeries> {
        match phase {
            Phase::Regular => self.regular_season_data.as_ref(),
            Phase::Postseason => self.postseason_data.as_ref(),
        }
    }

    pub fn set_series(&mut self, phase: Phase, series: SeasonSeries) {
        match phase {
            Phase::Regular => self.regular_season_data = Some(series),
            Phase::Postseason => self.postseason_data = Some(series),
        }
    }
}

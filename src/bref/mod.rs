//! Basketball Reference: URL scheme, page extraction and league averages.

pub mod extract;
pub mod names;
pub mod resolver;
pub mod types;
pub mod urls;

pub use extract::{extract_league_average, extract_player_page, extract_season_stats};
pub use resolver::LeagueAverageResolver;
pub use types::{MergedSeasonRecord, PlayerPage, PlayerSeasonData, PlayerSeasonStat, StatTable};
pub use urls::{BrefUrls, PlayerSlug};

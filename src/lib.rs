//! NBA Relative True Shooting Library
//!
//! Pairs a player's season-by-season true shooting percentage (TS%) from
//! Basketball Reference with the league-wide average for the same season and
//! phase, caching league averages in a local SQLite database.
//!
//! ## Features
//!
//! - **Serial Request Queue**: one upstream request at a time with a cooldown
//!   between requests, so the site does not throttle us
//! - **Table Extraction**: reads advanced stats tables, including the ones the
//!   site ships inside HTML comments
//! - **League Average Cache**: each `(season, phase)` average is fetched once
//!   and then served from SQLite
//! - **Merged Output**: per-season player TS%, league TS% and relative TS%
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_rts::{pipeline::LivePipeline, PipelineConfig};
//!
//! # async fn example() -> nba_rts::Result<()> {
//! let config = PipelineConfig::resolve(None, None)?;
//! let pipeline = LivePipeline::from_config(&config)?;
//!
//! let data = pipeline
//!     .get_player_season_data("Luka", "Dončić", true, true)
//!     .await?;
//! println!("{}", serde_json::to_string_pretty(&data)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NBA_RTS_DB_PATH=/path/to/nbarts.db
//! export NBA_RTS_QUEUE_DELAY_MS=1500
//! ```

pub mod bref;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod pipeline;
pub mod storage;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use bref::types::{MergedSeasonRecord, PlayerSeasonData, PlayerSeasonStat};
pub use cli::types::{Phase, SeasonKey};
pub use config::{PipelineConfig, DB_PATH_ENV_VAR, QUEUE_DELAY_ENV_VAR};
pub use error::{Result, RtsError};
pub use pipeline::SeasonDataPipeline;

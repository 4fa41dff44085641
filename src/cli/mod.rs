//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{PhaseFilter, SeasonKey};

/// Options shared by every command.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// SQLite database path (or set `NBA_RTS_DB_PATH` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Pause between upstream requests in milliseconds (or set `NBA_RTS_QUEUE_DELAY_MS`).
    #[clap(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Debug-level logging on stderr (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Player true shooting per season next to the league average.
    ///
    /// Fetches the player's Basketball Reference page once and resolves each
    /// season's league average from the local cache, fetching only on a miss.
    PlayerTs {
        /// Player first name (accents are fine).
        #[clap(long, short = 'f')]
        first_name: String,

        /// Player last name (accents are fine).
        #[clap(long, short = 'l')]
        last_name: String,

        /// Include regular season data. With neither flag both phases are included.
        #[clap(long)]
        regular: bool,

        /// Include postseason data. With neither flag both phases are included.
        #[clap(long)]
        postseason: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Resolve and cache league averages for a range of seasons.
    LeagueAverages {
        /// First season (e.g. 1996-97).
        #[clap(long)]
        from: SeasonKey,

        /// Last season, inclusive. Defaults to `--from`.
        #[clap(long)]
        to: Option<SeasonKey>,

        /// Which phase to resolve.
        #[clap(long, value_enum, default_value_t = PhaseFilter::Both)]
        phase: PhaseFilter,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show the league averages currently stored in the cache.
    CachedAverages {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Delete every cached average instead of listing them.
        #[clap(long)]
        clear: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "nba-rts",
    about = "NBA relative true shooting from Basketball Reference"
)]
pub struct NbaRts {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from Basketball Reference (through the local cache)
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}

//! League average read and upsert operations

use super::{models::*, schema::StatsDatabase};
use crate::{
    cli::types::{Phase, SeasonKey},
    Result,
};
use rusqlite::{params, OptionalExtension, Row};

/// Persistent cache of league averages keyed by season, one column per phase.
///
/// Implementations must keep the two phases independent: writing one phase
/// never clears or overwrites the other.
pub trait LeagueAverageStore: Send + Sync {
    /// Stored average for `(season, phase)`, `None` when never resolved.
    fn league_average(&self, season: SeasonKey, phase: Phase) -> Result<Option<f64>>;

    /// Record the average for `(season, phase)`, leaving the other phase as is.
    fn upsert_league_average(&self, season: SeasonKey, phase: Phase, value: f64) -> Result<()>;
}

impl LeagueAverageStore for StatsDatabase {
    fn league_average(&self, season: SeasonKey, phase: Phase) -> Result<Option<f64>> {
        let conn = self.conn()?;
        // Column names come from `Phase::column`, never from input.
        let sql = format!(
            "SELECT {} FROM league_averages WHERE season = ?",
            phase.column()
        );
        let value: Option<Option<f64>> = conn
            .query_row(&sql, params![season.to_string()], |row| row.get(0))
            .optional()?;
        Ok(value.flatten())
    }

    fn upsert_league_average(&self, season: SeasonKey, phase: Phase, value: f64) -> Result<()> {
        let column = phase.column();
        let sql = format!(
            "INSERT INTO league_averages (season, {column})
             VALUES (?1, ?2)
             ON CONFLICT(season) DO UPDATE SET {column} = excluded.{column}"
        );
        self.conn()?
            .execute(&sql, params![season.to_string(), value])?;
        Ok(())
    }
}

impl StatsDatabase {
    /// Every stored season, oldest first.
    pub fn list_league_averages(&self) -> Result<Vec<LeagueAverageRow>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT season, regular_season_ts, playoffs_ts
             FROM league_averages
             ORDER BY season",
        )?;

        let rows = stmt.query_map([], |row| Self::row_to_league_average(row))?;

        let mut out = Vec::new();
        for row in rows {
            let (season, regular_season_ts, playoffs_ts) = row?;
            // Rows written by other tools may carry labels we cannot parse.
            let Ok(season) = season.parse::<SeasonKey>() else {
                continue;
            };
            out.push(LeagueAverageRow {
                season,
                regular_season_ts,
                playoffs_ts,
            });
        }
        Ok(out)
    }

    /// Number of seasons with at least one stored phase.
    pub fn count_seasons(&self) -> Result<u64> {
        let count: i64 = self.conn()?.query_row(
            "SELECT COUNT(*) FROM league_averages
             WHERE regular_season_ts IS NOT NULL OR playoffs_ts IS NOT NULL",
            [],
            |row| row.get(0),
        )?;
        Ok(count.max(0) as u64)
    }

    /// Delete all cached averages.
    pub fn clear_league_averages(&self) -> Result<usize> {
        Ok(self.conn()?.execute("DELETE FROM league_averages", [])?)
    }

    fn row_to_league_average(row: &Row) -> rusqlite::Result<(String, Option<f64>, Option<f64>)> {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?))
    }
}

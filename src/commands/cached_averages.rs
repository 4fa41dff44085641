//! Cached league averages listing command implementation

use crate::{storage::StatsDatabase, Result};

use super::format_pct;

/// Print (or clear) the contents of the league average cache.
pub fn handle_cached_averages(db: &StatsDatabase, as_json: bool, clear: bool) -> Result<()> {
    if clear {
        let removed = db.clear_league_averages()?;
        println!("✓ Removed {removed} cached seasons"); // tarpaulin::skip
        return Ok(());
    }

    let rows = db.list_league_averages()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?); // tarpaulin::skip
        return Ok(());
    }

    for row in &rows {
        // tarpaulin::skip - console output
        println!(
            "{}  regular {:>6}  playoffs {:>6}",
            row.season,
            row.regular_season_ts.map(format_pct).unwrap_or_else(|| "-".into()),
            row.playoffs_ts.map(format_pct).unwrap_or_else(|| "-".into()),
        );
    }
    println!("{} seasons cached in database", db.count_seasons()?);

    Ok(())
}

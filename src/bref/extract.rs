//! Extraction of true shooting figures from Basketball Reference markup.
//!
//! Several player tables (the postseason ones in particular) are shipped
//! inside `<!-- ... -->` and only un-commented by client-side script. The
//! comment markers are removed from the whole document before parsing; where
//! exactly the wrapping happens varies between page layouts.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::{
    bref::types::{PlayerPage, PlayerSeasonStat, StatTable},
    cli::types::SeasonKey,
    error::RtsError,
    Result,
};

#[cfg(test)]
mod tests;

/// `data-stat` attribute of the true shooting cell.
pub const TS_STAT: &str = "ts_pct";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| RtsError::Parse {
        message: format!("invalid selector '{css}': {e}"),
    })
}

fn cell_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Remove every comment delimiter so commented-out tables become regular markup.
pub fn strip_comment_markers(raw: &str) -> String {
    raw.replace("<!--", "").replace("-->", "")
}

/// Parse a finite decimal such as `.544` or `0.61`; blanks and text yield `None`.
pub fn parse_stat(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Read the season rows of one advanced table from a raw player page.
///
/// A missing table is not an error: it yields an empty list (a player who
/// never reached the postseason has no postseason table).
pub fn extract_season_stats(raw: &str, table: StatTable) -> Result<Vec<PlayerSeasonStat>> {
    let document = Html::parse_document(&strip_comment_markers(raw));
    season_stats(&document, table)
}

/// Read both advanced tables from a raw player page, parsing the markup once.
pub fn extract_player_page(raw: &str) -> Result<PlayerPage> {
    let document = Html::parse_document(&strip_comment_markers(raw));
    Ok(PlayerPage {
        regular: season_stats(&document, StatTable::RegularAdvanced)?,
        postseason: season_stats(&document, StatTable::PostseasonAdvanced)?,
    })
}

fn season_stats(document: &Html, table: StatTable) -> Result<Vec<PlayerSeasonStat>> {
    let row_sel = selector("tbody tr")?;
    let season_sel = selector(r#"th[data-stat="year_id"], th[data-stat="season"]"#)?;
    let link_sel = selector("a")?;
    let stat_sel = selector(&format!(r#"td[data-stat="{TS_STAT}"]"#))?;

    let mut table_el = None;
    for id in table.table_ids() {
        if let Some(el) = document.select(&selector(&format!("table#{id}"))?).next() {
            table_el = Some(el);
            break;
        }
    }
    let Some(table_el) = table_el else {
        debug!(?table, "Table not present on page");
        return Ok(Vec::new());
    };

    let mut seen = HashSet::new();
    let mut stats = Vec::new();
    let mut row_count = 0usize;

    for row in table_el.select(&row_sel) {
        if row.value().classes().any(|c| c == "thead") {
            continue;
        }
        row_count += 1;

        let Some(season_cell) = row.select(&season_sel).next() else {
            continue;
        };
        // The label is normally a link; fall back to the cell text.
        let label = season_cell
            .select(&link_sel)
            .next()
            .map(cell_text)
            .unwrap_or_else(|| cell_text(season_cell));
        let Ok(season) = label.parse::<SeasonKey>() else {
            continue;
        };

        let Some(value) = row
            .select(&stat_sel)
            .next()
            .and_then(|cell| parse_stat(&cell_text(cell)))
        else {
            continue;
        };

        // Multi-team seasons list the combined row first, then one row per team.
        if seen.insert(season) {
            stats.push(PlayerSeasonStat {
                season,
                player_statistic: value,
            });
        }
    }

    debug!(?table, rows = row_count, seasons = stats.len(), "Extracted table");
    Ok(stats)
}

fn first_footer_value(markup: &str, footer_sel: &Selector) -> Option<String> {
    Html::parse_document(markup)
        .select(footer_sel)
        .next()
        .map(cell_text)
}

/// Read the league-wide true shooting figure from a league summary page.
///
/// Looks for the first footer cell of the stat, first in the page as served
/// and then with comment markers stripped.
pub fn extract_league_average(raw: &str) -> Result<f64> {
    let footer_sel = selector(&format!(r#"tfoot tr td[data-stat="{TS_STAT}"]"#))?;

    let text = first_footer_value(raw, &footer_sel)
        .or_else(|| first_footer_value(&strip_comment_markers(raw), &footer_sel))
        .ok_or_else(|| RtsError::Parse {
            message: "league average footer cell not found".to_string(),
        })?;

    parse_stat(&text).ok_or_else(|| RtsError::Parse {
        message: format!("league average '{text}' is not a number"),
    })
}

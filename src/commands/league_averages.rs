//! League average cache warm-up command implementation

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    bref::resolver::LeagueAverageResolver,
    cli::types::{Phase, PhaseFilter, SeasonKey},
    core::http::PageFetcher,
    error::RtsError,
    storage::LeagueAverageStore,
    Result,
};

use super::format_pct;

/// What happened to one `(season, phase)` during a warm-up run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WarmupOutcome {
    Resolved { value: f64 },
    /// The site has no page for it (e.g. playoffs not played yet).
    Missing,
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarmupEntry {
    pub season: SeasonKey,
    pub phase: Phase,
    #[serde(flatten)]
    pub outcome: WarmupOutcome,
}

/// Resolve every season from `from` to `to` (inclusive) for `phases`.
///
/// Seasons already cached cost nothing; a failed season is recorded and the
/// run moves on.
pub async fn warm_league_averages<F, S>(
    resolver: &LeagueAverageResolver<F, S>,
    from: SeasonKey,
    to: SeasonKey,
    phases: &[Phase],
) -> Result<Vec<WarmupEntry>>
where
    F: PageFetcher + 'static,
    S: LeagueAverageStore,
{
    if to < from {
        return Err(RtsError::Parse {
            message: format!("season range ends ({to}) before it starts ({from})"),
        });
    }

    let mut entries = Vec::new();
    for year in from.start_year()..=to.start_year() {
        let season = SeasonKey::from_start_year(year);
        for &phase in phases {
            let outcome = match resolver.resolve(season, phase).await {
                Ok(value) => WarmupOutcome::Resolved { value },
                Err(RtsError::NotFound { url }) => {
                    info!(%season, %phase, %url, "No league page, skipping");
                    WarmupOutcome::Missing
                }
                Err(e) => {
                    warn!(%season, %phase, error = %e, "League average not resolved");
                    WarmupOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };
            entries.push(WarmupEntry {
                season,
                phase,
                outcome,
            });
        }
    }

    Ok(entries)
}

/// Warm the cache for a season range and print one line per season/phase.
pub async fn handle_league_averages<F, S>(
    resolver: &LeagueAverageResolver<F, S>,
    from: SeasonKey,
    to: Option<SeasonKey>,
    phase: PhaseFilter,
    as_json: bool,
) -> Result<()>
where
    F: PageFetcher + 'static,
    S: LeagueAverageStore,
{
    let to = to.unwrap_or(from);
    let entries = warm_league_averages(resolver, from, to, &phase.phases()).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&entries)?); // tarpaulin::skip
        return Ok(());
    }

    for entry in &entries {
        // tarpaulin::skip - console output
        let detail = match &entry.outcome {
            WarmupOutcome::Resolved { value } => format!("✓ {}", format_pct(*value)),
            WarmupOutcome::Missing => "- no data".to_string(),
            WarmupOutcome::Failed { error } => format!("✗ {error}"),
        };
        println!("{} {:<10} {}", entry.season, entry.phase, detail);
    }

    let resolved = entries
        .iter()
        .filter(|e| matches!(e.outcome, WarmupOutcome::Resolved { .. }))
        .count();
    println!("Resolved {resolved} of {} season/phase pairs", entries.len());

    Ok(())
}

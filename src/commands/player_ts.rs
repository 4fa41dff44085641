//! Player true shooting command implementation

use std::fmt::Write as _;

use crate::{
    bref::types::PlayerSeasonData,
    cli::types::Phase,
    core::http::PageFetcher,
    pipeline::SeasonDataPipeline,
    storage::LeagueAverageStore,
    Result,
};

use super::{format_pct, format_points, requested_phases};

/// Parameters of a `get player-ts` run.
#[derive(Debug, Clone)]
pub struct PlayerTsParams {
    pub first_name: String,
    pub last_name: String,
    pub regular: bool,
    pub postseason: bool,
    pub as_json: bool,
}

/// Look up a player and print the merged seasons.
pub async fn handle_player_ts<F, S>(
    pipeline: &SeasonDataPipeline<F, S>,
    params: PlayerTsParams,
) -> Result<()>
where
    F: PageFetcher + 'static,
    S: LeagueAverageStore,
{
    let (want_regular, want_postseason) = requested_phases(params.regular, params.postseason);

    let data = pipeline
        .get_player_season_data(
            &params.first_name,
            &params.last_name,
            want_regular,
            want_postseason,
        )
        .await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&data)?); // tarpaulin::skip
    } else {
        let name = format!("{} {}", params.first_name, params.last_name);
        print!("{}", render_text(&name, &data)); // tarpaulin::skip
    }

    Ok(())
}

/// Human-readable table, one section per requested phase.
pub fn render_text(player: &str, data: &PlayerSeasonData) -> String {
    let mut out = String::new();

    for phase in Phase::ALL {
        let Some(series) = data.series(phase) else {
            continue;
        };
        let title = match phase {
            Phase::Regular => "Regular season",
            Phase::Postseason => "Postseason",
        };
        let _ = writeln!(out, "{player} - {title}");

        if series.is_empty() {
            let _ = writeln!(out, "  no seasons with league average data");
            continue;
        }

        let _ = writeln!(out, "  {:<8} {:>8} {:>8} {:>8}", "Season", "TS%", "League", "rTS");
        for (season, record) in series {
            let _ = writeln!(
                out,
                "  {:<8} {:>8} {:>8} {:>8}",
                season.to_string(),
                format_pct(record.player_statistic),
                format_pct(record.league_average),
                format_points(record.relative()),
            );
        }
    }

    out
}

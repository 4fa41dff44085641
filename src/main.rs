//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nba_rts::{
    cli::{Commands, GetCmd, NbaRts},
    commands::{
        cached_averages::handle_cached_averages,
        league_averages::handle_league_averages,
        player_ts::{handle_player_ts, PlayerTsParams},
    },
    pipeline::LivePipeline,
    storage::StatsDatabase,
    PipelineConfig, RtsError,
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout carries command output.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_filter = if verbose { "nba_rts=debug" } else { "nba_rts=info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {e}"))
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = NbaRts::parse();
    init_tracing(app.global.verbose)?;

    let result = match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::PlayerTs {
                first_name,
                last_name,
                regular,
                postseason,
                json,
            } => {
                let config = PipelineConfig::resolve(app.global.db, app.global.delay_ms)?;
                debug!(?config, "Resolved configuration");
                let pipeline = LivePipeline::from_config(&config)
                    .with_context(|| format!("opening {}", config.db_path.display()))?;

                handle_player_ts(
                    &pipeline,
                    PlayerTsParams {
                        first_name,
                        last_name,
                        regular,
                        postseason,
                        as_json: json,
                    },
                )
                .await
            }

            GetCmd::LeagueAverages {
                from,
                to,
                phase,
                json,
            } => {
                let config =
                    PipelineConfig::resolve_for_warmup(app.global.db, app.global.delay_ms)?;
                debug!(?config, "Resolved configuration");
                let pipeline = LivePipeline::from_config(&config)
                    .with_context(|| format!("opening {}", config.db_path.display()))?;

                handle_league_averages(pipeline.resolver(), from, to, phase, json).await
            }

            GetCmd::CachedAverages { json, clear } => {
                let config = PipelineConfig::resolve(app.global.db, app.global.delay_ms)?;
                let db = StatsDatabase::open(&config.db_path)
                    .with_context(|| format!("opening {}", config.db_path.display()))?;

                handle_cached_averages(&db, json, clear)
            }
        },
    };

    if let Err(e) = result {
        report_failure(&e);
        std::process::exit(1);
    }

    Ok(())
}

/// Classified message and status on stderr, details in the log.
fn report_failure(e: &RtsError) {
    error!(error = %e, status = e.status_code(), "Command failed");
    eprintln!("Error ({}): {}", e.status_code(), e.user_message());
}

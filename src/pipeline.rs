//! Fetch, extract and merge a player's true shooting seasons.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    bref::{
        extract::extract_player_page,
        resolver::LeagueAverageResolver,
        types::{MergedSeasonRecord, PlayerSeasonData, SeasonSeries},
        urls::{BrefUrls, PlayerSlug},
    },
    cli::types::Phase,
    config::PipelineConfig,
    core::{
        http::{HttpFetcher, PageFetcher},
        queue::RequestQueue,
    },
    error::RtsError,
    storage::{LeagueAverageStore, StatsDatabase},
    Result,
};


/// Pipeline wired to the live site and the on-disk store.
pub type LivePipeline = SeasonDataPipeline<HttpFetcher, StatsDatabase>;

/// Orchestrates one player lookup: a single queued page fetch, then one
/// league average per season and requested phase.
pub struct SeasonDataPipeline<F, S> {
    queue: Arc<RequestQueue>,
    fetcher: Arc<F>,
    resolver: LeagueAverageResolver<F, S>,
    urls: BrefUrls,
}

impl<F, S> SeasonDataPipeline<F, S>
where
    F: PageFetcher + 'static,
    S: LeagueAverageStore,
{
    /// Both the player page and the league pages share `queue`.
    pub fn new(queue: Arc<RequestQueue>, fetcher: Arc<F>, store: Arc<S>, urls: BrefUrls) -> Self {
        let resolver = LeagueAverageResolver::new(
            store,
            Arc::clone(&queue),
            Arc::clone(&fetcher),
            urls.clone(),
        );
        Self {
            queue,
            fetcher,
            resolver,
            urls,
        }
    }

    pub fn resolver(&self) -> &LeagueAverageResolver<F, S> {
        &self.resolver
    }

    /// Merged per-season data for the requested phases.
    ///
    /// Player page failures are fatal and classified (`PlayerNotFound`,
    /// `RateLimited`, `Upstream`). A season whose league average cannot be
    /// resolved is logged and left out.
    pub async fn get_player_season_data(
        &self,
        first_name: &str,
        last_name: &str,
        want_regular: bool,
        want_postseason: bool,
    ) -> Result<PlayerSeasonData> {
        let full_name = format!("{first_name} {last_name}");
        let slug = PlayerSlug::from_name(first_name, last_name).map_err(|e| {
            warn!(player = %full_name, error = %e, "Name cannot form a player page slug");
            e.classify_player_page(&full_name)
        })?;
        let url = self.urls.player_page(&slug);
        info!(player = %full_name, %url, "Fetching player page");

        let fetcher = Arc::clone(&self.fetcher);
        let page_url = url.clone();
        let raw = self
            .queue
            .enqueue(move || async move { fetcher.fetch_page(&page_url).await })
            .await
            .map_err(|e| {
                let classified = e.classify_player_page(&full_name);
                error!(player = %full_name, %url, error = %classified, "Player page fetch failed");
                classified
            })?;

        let page = extract_player_page(&raw).map_err(|e| RtsError::Upstream {
            message: e.to_string(),
        })?;

        let requested = Phase::ALL.into_iter().filter(|phase| match phase {
            Phase::Regular => want_regular,
            Phase::Postseason => want_postseason,
        });

        let mut data = PlayerSeasonData::default();
        for phase in requested {
            let mut series = SeasonSeries::new();
            for stat in page.rows(phase) {
                match self.resolver.resolve(stat.season, phase).await {
                    Ok(average) => {
                        series.insert(stat.season, MergedSeasonRecord::new(*stat, average));
                    }
                    Err(e) => {
                        warn!(
                            season = %stat.season,
                            %phase,
                            error = %e,
                            "Dropping season without league average"
                        );
                    }
                }
            }
            info!(
                player = %full_name,
                %phase,
                rows = page.rows(phase).len(),
                merged = series.len(),
                "Merged seasons"
            );
            data.set_series(phase, series);
        }

        Ok(data)
    }
}

impl LivePipeline {
    /// Open the store and build the HTTP client described by `config`.
    ///
    /// Must be called inside a Tokio runtime (the queue spawns its worker).
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.user_agent, config.request_timeout)?;
        let store = StatsDatabase::open(&config.db_path)?;
        Ok(Self::new(
            Arc::new(RequestQueue::new(config.cooldown)),
            Arc::new(fetcher),
            Arc::new(store),
            BrefUrls::new(config.base_url.clone()),
        ))
    }
}

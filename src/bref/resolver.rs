//! Cache-or-fetch lookup of league-wide true shooting averages.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    bref::{extract::extract_league_average, urls::BrefUrls},
    cli::types::{Phase, SeasonKey},
    core::{http::PageFetcher, queue::RequestQueue},
    storage::LeagueAverageStore,
    Result,
};


/// Resolves `(season, phase)` league averages, hitting the network at most
/// once per pair for the lifetime of the store.
pub struct LeagueAverageResolver<F, S> {
    store: Arc<S>,
    queue: Arc<RequestQueue>,
    fetcher: Arc<F>,
    urls: BrefUrls,
}

impl<F, S> LeagueAverageResolver<F, S>
where
    F: PageFetcher + 'static,
    S: LeagueAverageStore,
{
    pub fn new(store: Arc<S>, queue: Arc<RequestQueue>, fetcher: Arc<F>, urls: BrefUrls) -> Self {
        Self {
            store,
            queue,
            fetcher,
            urls,
        }
    }

    /// Return the stored average, or fetch, persist and return it.
    pub async fn resolve(&self, season: SeasonKey, phase: Phase) -> Result<f64> {
        // 1) Try the store
        if let Some(value) = self.store.league_average(season, phase)? {
            info!(%season, %phase, value, "Cache hit");
            return Ok(value);
        }

        // 2) Queued fetch of the season summary page
        let url = self.urls.league_page(season, phase);
        info!(%season, %phase, %url, pending = self.queue.pending(), "Cache miss, fetching");

        let fetcher = Arc::clone(&self.fetcher);
        let page_url = url.clone();
        let raw = self
            .queue
            .enqueue(move || async move { fetcher.fetch_page(&page_url).await })
            .await?;

        // 3) Footer cell
        let value = extract_league_average(&raw)?;

        // 4) Persist only this phase's column
        self.store.upsert_league_average(season, phase, value)?;
        debug!(%season, %phase, value, "Stored league average");

        Ok(value)
    }
}

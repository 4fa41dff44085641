//! In-process fakes shared by unit tests.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;

use crate::{
    bref::{resolver::LeagueAverageResolver, urls::BrefUrls},
    core::{
        http::{check_status, PageFetcher},
        queue::RequestQueue,
    },
    storage::StatsDatabase,
    Result,
};

pub const TEST_BASE: &str = "http://bref.test";

/// Canned responses keyed by URL. Unknown URLs answer 404.
#[derive(Default)]
pub struct FakeFetcher {
    pages: Mutex<HashMap<String, (u16, String)>>,
    calls: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn page(&self, url: impl Into<String>, body: impl Into<String>) {
        self.pages.lock().unwrap().insert(url.into(), (200, body.into()));
    }

    pub fn status(&self, url: impl Into<String>, status: u16) {
        self.pages
            .lock()
            .unwrap()
            .insert(url.into(), (status, String::new()));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        self.calls.lock().unwrap().push(url.to_string());
        let (status, body) = self
            .pages
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or((404, String::new()));
        let status = reqwest::StatusCode::from_u16(status).unwrap();
        check_status(url, status)?;
        Ok(body)
    }
}

pub fn test_urls() -> BrefUrls {
    BrefUrls::new(TEST_BASE)
}

pub fn test_queue() -> Arc<RequestQueue> {
    Arc::new(RequestQueue::new(Duration::from_millis(1)))
}

/// League summary page whose footer carries `value` (e.g. ".544").
pub fn league_page(value: &str) -> String {
    format!(
        r#"<html><body><table id="advanced-team">
        <tbody><tr><th data-stat="team">Team</th><td data-stat="ts_pct">.600</td></tr></tbody>
        <tfoot><tr><th data-stat="team">League Average</th><td data-stat="ts_pct">{value}</td></tr></tfoot>
        </table></body></html>"#
    )
}

pub fn resolver(
    fetcher: Arc<FakeFetcher>,
    store: Arc<StatsDatabase>,
) -> LeagueAverageResolver<FakeFetcher, StatsDatabase> {
    LeagueAverageResolver::new(store, test_queue(), fetcher, test_urls())
}

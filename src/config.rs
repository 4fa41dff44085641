//! Runtime configuration: defaults, environment overrides and CLI flags.
//!
//! Precedence is CLI flag, then environment variable, then built-in default.

use std::{path::PathBuf, time::Duration};

use crate::{
    bref::urls::BREF_BASE_URL,
    core::{
        cache::default_database_path,
        http::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT},
        queue::DEFAULT_COOLDOWN,
    },
    error::RtsError,
    Result,
};

/// Overrides the SQLite database location.
pub const DB_PATH_ENV_VAR: &str = "NBA_RTS_DB_PATH";

/// Overrides the pause between upstream requests, in milliseconds.
pub const QUEUE_DELAY_ENV_VAR: &str = "NBA_RTS_QUEUE_DELAY_MS";

/// Cooldown used by the bulk cache warm-up, which issues many requests in a row.
pub const WARMUP_COOLDOWN: Duration = Duration::from_millis(2000);

/// Everything needed to build a fetch/cache/merge pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub base_url: String,
    pub cooldown: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
    pub db_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            base_url: BREF_BASE_URL.to_string(),
            cooldown: DEFAULT_COOLDOWN,
            request_timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            db_path: default_database_path(),
        }
    }
}

impl PipelineConfig {
    /// Build a config from CLI flags, falling back to the environment.
    pub fn resolve(db_path: Option<PathBuf>, delay_ms: Option<u64>) -> Result<Self> {
        Self::resolve_with_env(
            db_path,
            delay_ms,
            DEFAULT_COOLDOWN,
            std::env::var(DB_PATH_ENV_VAR).ok(),
            std::env::var(QUEUE_DELAY_ENV_VAR).ok(),
        )
    }

    /// Same as [`PipelineConfig::resolve`] but with the slower bulk cooldown
    /// when no delay is configured.
    pub fn resolve_for_warmup(db_path: Option<PathBuf>, delay_ms: Option<u64>) -> Result<Self> {
        Self::resolve_with_env(
            db_path,
            delay_ms,
            WARMUP_COOLDOWN,
            std::env::var(DB_PATH_ENV_VAR).ok(),
            std::env::var(QUEUE_DELAY_ENV_VAR).ok(),
        )
    }

    fn resolve_with_env(
        db_path: Option<PathBuf>,
        delay_ms: Option<u64>,
        default_cooldown: Duration,
        env_db_path: Option<String>,
        env_delay_ms: Option<String>,
    ) -> Result<Self> {
        let mut config = Self {
            cooldown: default_cooldown,
            ..Self::default()
        };

        if let Some(path) = db_path.or_else(|| env_db_path.map(PathBuf::from)) {
            config.db_path = path;
        }

        let delay_ms = match (delay_ms, env_delay_ms) {
            (Some(ms), _) => Some(ms),
            (None, Some(raw)) => Some(raw.trim().parse::<u64>().map_err(|e| RtsError::Parse {
                message: format!("{QUEUE_DELAY_ENV_VAR}='{raw}': {e}"),
            })?),
            (None, None) => None,
        };
        if let Some(ms) = delay_ms {
            config.cooldown = Duration::from_millis(ms);
        }

        Ok(config)
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

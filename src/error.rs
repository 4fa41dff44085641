//! Error types for the NBA relative true shooting CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, RtsError>;

#[derive(Error, Debug)]
pub enum RtsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Page not found: {url}")]
    NotFound { url: String },

    #[error("Rate limited by upstream while fetching {url}")]
    RateLimited { url: String },

    #[error("Upstream returned HTTP {status} for {url}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("Failed to parse upstream page: {message}")]
    Parse { message: String },

    #[error("Invalid season '{value}', expected YYYY-YY (e.g. 2008-09)")]
    InvalidSeason { value: String },

    #[error("Name '{value}' has no letters left after normalization")]
    InvalidName { value: String },

    #[error("Request queue is no longer running")]
    QueueClosed,

    #[error("Queued task aborted before producing a result")]
    TaskAborted,

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Upstream error: {message}")]
    Upstream { message: String },
}

impl RtsError {
    /// HTTP status the boundary layer reports for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            RtsError::PlayerNotFound { .. }
            | RtsError::NotFound { .. }
            | RtsError::InvalidName { .. } => 404,
            RtsError::RateLimited { .. } => 429,
            _ => 500,
        }
    }

    /// Message shown to the user for a classified failure.
    pub fn user_message(&self) -> &'static str {
        match self.status_code() {
            404 => "Player not found. Please check the entered names.",
            429 => "Too many requests. Please try again later.",
            _ => "An error occurred while fetching data.",
        }
    }

    /// Reclassify a failure of the player-page fetch for the boundary layer.
    ///
    /// 404 and a name that cannot form a page slug become `PlayerNotFound`,
    /// 429 stays `RateLimited`, everything else collapses into `Upstream`.
    pub fn classify_player_page(self, name: &str) -> RtsError {
        match self {
            RtsError::NotFound { .. } | RtsError::InvalidName { .. } => {
                RtsError::PlayerNotFound {
                    name: name.to_string(),
                }
            }
            RtsError::RateLimited { url } => RtsError::RateLimited { url },
            other => RtsError::Upstream {
                message: other.to_string(),
            },
        }
    }
}

//! Core utilities shared by the pipeline and the commands
//!
//! - `cache`: cache directory locations
//! - `http`: page fetching and status classification
//! - `queue`: the serial, rate-limited request queue

pub mod cache;
pub mod http;
pub mod queue;

// Re-export commonly used items for convenience
pub use cache::default_database_path;
pub use http::{HttpFetcher, PageFetcher};
pub use queue::RequestQueue;

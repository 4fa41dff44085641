//! Storage layer for league averages
//!
//! This module provides a thin abstraction over the SQLite database:
//! - `models`: Data structures
//! - `schema`: Database connection and table bootstrap
//! - `queries`: The `LeagueAverageStore` trait and its SQLite implementation

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use queries::LeagueAverageStore;
pub use schema::StatsDatabase;

//! Type-safe wrappers and enums for season and phase data.

pub mod phase;
pub mod season;

pub use phase::{Phase, PhaseFilter};
pub use season::SeasonKey;

//! Command implementations for the NBA relative true shooting CLI

pub mod cached_averages;
pub mod league_averages;
pub mod player_ts;


/// Phases to request for a player lookup as `(regular, postseason)`.
///
/// Asking for neither means asking for both.
pub fn requested_phases(regular: bool, postseason: bool) -> (bool, bool) {
    if !regular && !postseason {
        (true, true)
    } else {
        (regular, postseason)
    }
}

/// Format a 0-1 rate as a percentage with one decimal, e.g. `0.544` -> `54.4%`.
pub fn format_pct(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Format a percentage-point difference with an explicit sign, e.g. `+6.6`.
pub fn format_points(value: f64) -> String {
    format!("{value:+.1}")
}

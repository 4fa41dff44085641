//! Cache directory locations

use std::path::PathBuf;

/// Directory under the user's cache dir holding everything this tool persists.
///
/// Path: ~/.cache/nba-rts (or the platform equivalent)
pub fn cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("nba-rts")
}

/// Path: ~/.cache/nba-rts/nbarts.db
pub fn default_database_path() -> PathBuf {
    cache_root().join("nbarts.db")
}

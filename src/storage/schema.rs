//! Database connection and table bootstrap

use crate::{error::RtsError, Result};
use rusqlite::Connection;
use std::{
    path::Path,
    sync::{Mutex, MutexGuard},
};
use tracing::debug;

/// SQLite-backed store of league-wide true shooting averages.
///
/// The connection sits behind a mutex so one instance can be shared (via
/// `Arc`) between the resolver and the commands.
pub struct StatsDatabase {
    pub(crate) conn: Mutex<Connection>,
}

impl StatsDatabase {
    /// Open (or create) the database at `path` and make sure the table exists.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the cache directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA busy_timeout = 5000;")?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.initialize_schema()?;
        debug!(path = %path.display(), "Opened league average database");
        Ok(db)
    }

    /// Ephemeral database, mostly for tests.
    pub fn new_in_memory() -> Result<Self> {
        let db = Self {
            conn: Mutex::new(Connection::open_in_memory()?),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Acquire the connection, reporting a poisoned lock as a storage error.
    pub(crate) fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| RtsError::Storage {
            message: "database connection lock poisoned".to_string(),
        })
    }

    /// Create `league_averages` if it is missing. No migrations are attempted.
    ///
    /// Queries only touch `season` and the two phase columns, so a table
    /// created by other tools with extra columns keeps working.
    pub(crate) fn initialize_schema(&self) -> Result<()> {
        self.conn()?.execute(
            "CREATE TABLE IF NOT EXISTS league_averages (
                season TEXT PRIMARY KEY,
                regular_season_ts REAL,
                playoffs_ts REAL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;
        Ok(())
    }
}

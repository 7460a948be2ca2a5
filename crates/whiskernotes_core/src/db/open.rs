//! Connection bootstrap for the notes database.
//!
//! # Responsibility
//! - Open SQLite connections against a local database file.
//! - Run schema setup/migration before returning a usable connection.
//!
//! # Invariants
//! - Returned connections have the schema fully ensured.
//! - Open failures are fatal; no retry is attempted here.

use super::migrations::ensure_schema;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the notes database file and ensures the schema is current.
///
/// # Side effects
/// - Creates the database file on first use.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start");

    let conn = match raw_open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err);
        }
    };

    match ensure_schema(&conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error duration_ms={} error_code=db_migrate_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens a connection without touching the schema.
///
/// Used by per-operation connections after `open_db` has already ensured the
/// schema once for the same path.
pub(crate) fn raw_open(path: impl AsRef<Path>) -> DbResult<Connection> {
    let conn = Connection::open(path)?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(conn)
}

// src/db/helpers.rs

use crate::db::Database;
use crate::error::AppError;
use rusqlite::{Connection, Transaction};
use std::sync::{Arc, Mutex};

/// Execute a read-only database operation with lock handling and error logging.
///
/// # Example
/// ```ignore
/// with_connection(&db, "load categories", |conn| {
///     Ok(Category::find_all(conn)?)
/// })
/// ```
pub fn with_connection<F, T>(db: &Arc<Mutex<Database>>, operation: &str, f: F) -> Result<T, AppError>
where
    F: FnOnce(&Connection) -> Result<T, AppError>,
{
    let db = db.lock().map_err(|e| {
        log::error!("Failed to acquire database lock for {operation}: {e}");
        AppError::LockPoisoned
    })?;

    f(db.connection()).map_err(|e| {
        log::error!("Failed to {operation}: {e}");
        e
    })
}

/// Execute a mutating operation inside a transaction.
///
/// The transaction commits when `f` returns `Ok` and rolls back when it
/// returns `Err` (dropping an uncommitted `Transaction` rolls it back).
pub fn with_transaction<F, T>(db: &Arc<Mutex<Database>>, operation: &str, f: F) -> Result<T, AppError>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, AppError>,
{
    let mut db = db.lock().map_err(|e| {
        log::error!("Failed to acquire database lock for {operation}: {e}");
        AppError::LockPoisoned
    })?;

    let tx = db.connection_mut().transaction()?;
    match f(&tx) {
        Ok(value) => {
            tx.commit()?;
            Ok(value)
        }
        Err(e) => {
            log::error!("Failed to {operation}, rolling back: {e}");
            Err(e)
        }
    }
}

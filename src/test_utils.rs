//! Shared test utilities.
//!
//! This module provides common setup functions used across test modules.

#![cfg(test)]

use crate::db::{migrations, Database};
use crate::models::{Category, Item};
use tempfile::{tempdir, TempDir};

/// Create a temporary test database with migrations applied.
///
/// Returns a tuple of (Database, TempDir). The TempDir must be kept alive
/// for the duration of the test to prevent the database file from being deleted.
pub fn setup_test_db() -> (Database, TempDir) {
    let dir = tempdir().expect("Failed to create temp directory for test DB");
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).expect("Failed to open test database");
    migrations::run(db.connection()).expect("Failed to run migrations on test DB");
    (db, dir)
}

/// Build an unsaved category value for pure aggregation tests.
pub fn category(id: i64, description: &str, priority: i64) -> Category {
    Category { id, description: description.to_string(), priority }
}

/// Build an unsaved item value for pure aggregation tests.
pub fn item(id: i64, name: &str, quantity: f64, price: f64, category_id: i64) -> Item {
    Item { id, quantity, name: name.to_string(), price, done: false, category_id }
}

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod listing;
pub mod models;
pub mod server;
#[cfg(test)]
mod test_utils;
pub mod validation;
pub mod web;

use crate::config::Config;
use crate::db::{migrations, Database};
use crate::error::InitError;
use crate::server::Server;
use crate::web::AppContext;
use log::info;
use std::sync::{Arc, Mutex};

/// Open (or create) the database, apply migrations and serve requests
/// until the process is stopped.
pub fn run(config: &Config) -> Result<(), InitError> {
    if let Some(parent) = config.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(InitError::DataDirCreation)?;
    }

    let db = Database::open(&config.db_path).map_err(InitError::DatabaseOpen)?;
    migrations::run(db.connection()).map_err(InitError::Migration)?;
    info!("Using database {}", config.db_path.display());

    let ctx = AppContext::new(Arc::new(Mutex::new(db)));
    let server = Server::bind(&config.bind, ctx)?;
    info!("Listening on http://{}", config.bind);

    server.run();
    Ok(())
}

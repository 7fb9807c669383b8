use crate::constants::{DB_FILE_NAME, DEFAULT_BIND_ADDR};
use crate::error::InitError;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Local shopping-list manager
#[derive(Debug, Parser)]
#[command(name = "basket")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    /// SQLite database file (defaults to the platform data directory)
    #[arg(long)]
    pub database: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind: String,
    pub db_path: PathBuf,
}

impl Cli {
    pub fn into_config(self) -> Result<Config, InitError> {
        let db_path = match self.database {
            Some(path) => path,
            None => default_db_path()?,
        };
        Ok(Config { bind: self.bind, db_path })
    }
}

/// `<data dir>/data.db`, creating the data directory if needed.
pub fn default_db_path() -> Result<PathBuf, InitError> {
    let proj_dirs = ProjectDirs::from("org", "basket", "basket").ok_or(InitError::NoProjectDirs)?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir).map_err(InitError::DataDirCreation)?;
    Ok(data_dir.join(DB_FILE_NAME))
}

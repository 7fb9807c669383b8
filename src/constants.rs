// src/constants.rs

/// Address the server binds to when none is given on the command line
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// File name of the SQLite database inside the data directory
pub const DB_FILE_NAME: &str = "data.db";

/// Maximum category description length
pub const MAX_CATEGORY_DESCRIPTION_LEN: usize = 50;

/// Maximum item name length
pub const MAX_ITEM_NAME_LEN: usize = 120;

/// Largest form body the server reads; bigger requests get 413
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

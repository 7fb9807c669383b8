use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("'{name}' already exists")]
    AlreadyExists { name: String },

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Lock poisoned")]
    LockPoisoned,

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status the request boundary answers with for this error
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::AlreadyExists { .. } => 409,
            AppError::NotFound { .. } => 404,
            AppError::InvalidInput { .. } => 400,
            AppError::Database(_) | AppError::LockPoisoned | AppError::Internal(_) => 500,
        }
    }

    /// Replace a UNIQUE violation with `AlreadyExists` for the given value.
    pub fn on_unique_violation(self, name: &str) -> Self {
        if let AppError::Database(db_err) = &self {
            if is_unique_violation(db_err) {
                return AppError::AlreadyExists { name: name.to_string() };
            }
        }
        self
    }

    /// Replace a FOREIGN KEY violation with `NotFound` for the referenced entity.
    pub fn on_fk_violation(self, entity: &'static str) -> Self {
        if let AppError::Database(db_err) = &self {
            if is_fk_violation(db_err) {
                return AppError::NotFound { entity };
            }
        }
        self
    }
}

/// Error type for startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("Could not determine project directories")]
    NoProjectDirs,

    #[error("Could not create data directory: {0}")]
    DataDirCreation(std::io::Error),

    #[error("Failed to open database: {0}")]
    DatabaseOpen(rusqlite::Error),

    #[error("Failed to run database migrations: {0}")]
    Migration(rusqlite::Error),

    #[error("Failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },
}

/// Check if a rusqlite error is a UNIQUE constraint violation
pub fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(e, rusqlite::Error::SqliteFailure(err, _)
        if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE)
}

/// Check if a rusqlite error is a FOREIGN KEY constraint violation
pub fn is_fk_violation(e: &rusqlite::Error) -> bool {
    matches!(e, rusqlite::Error::SqliteFailure(err, _)
        if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY)
}

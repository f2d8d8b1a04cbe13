//! Error type shared by the task store and the entity layer.
//!
//! Store operations return [`TaskError`]; the command layer lifts it into
//! `anyhow::Error` with `?`. Engine errors that do not fall into one of the
//! named kinds are carried unmodified in [`TaskError::Storage`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// The database file could not be opened or the `tasks` table could not be
    /// inspected or created.
    #[error("Task storage is unavailable at {}: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Task with ID {0} not found")]
    NotFound(u32),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error(transparent)]
    Storage(#[from] rusqlite::Error),
}

pub type Result<T, E = TaskError> = std::result::Result<T, E>;

use crate::libs::error::{Result, TaskError};
use crate::msg_debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "tasks.db";

const SELECT_TABLE: &str = "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1 LIMIT 1";

pub struct Db {
    pub conn: Connection,
    pub path: PathBuf,
}

impl Db {
    /// Opens (or creates) the database file inside `dir`.
    pub fn open(dir: &Path) -> Result<Db> {
        let path = dir.join(DB_FILE_NAME);
        msg_debug!(format!("Opening database at {}", path.display()));
        let conn = Connection::open(&path).map_err(|source| TaskError::StorageUnavailable { path: path.clone(), source })?;

        Ok(Db { conn, path })
    }

    /// Looks the table up in the schema catalog.
    pub fn table_exists(&self, name: &str) -> Result<bool> {
        self.conn
            .query_row(SELECT_TABLE, params![name], |_| Ok(()))
            .optional()
            .map(|found| found.is_some())
            .map_err(|source| self.unavailable(source))
    }

    pub fn unavailable(&self, source: rusqlite::Error) -> TaskError {
        TaskError::StorageUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}

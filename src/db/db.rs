use crate::libs::data_storage::DataStorage;
use rusqlite::Connection;
use thiserror::Error;

pub const DB_FILE_NAME: &str = "tomo.db";

/// Failure at the durable-store seam.
///
/// Everything above the `db` modules treats the store as a capability
/// that can become unavailable as a whole; individual statement errors
/// are folded into the same variant because the caller's recovery is
/// identical (report, keep in-memory state untouched).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable: {0}")]
    Unavailable(#[from] rusqlite::Error),
    #[error("storage path is inaccessible: {0}")]
    Inaccessible(#[from] std::io::Error),
}

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db, StoreError> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn = Connection::open(db_file_path)?;

        Ok(Db { conn })
    }
}

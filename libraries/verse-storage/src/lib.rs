//! Verse - Durable Position Storage
//!
//! A `redb`-backed implementation of [`verse_core::storage::KeyValueStore`]
//! for deployments without a browser `localStorage`. Listening positions
//! survive restarts; the playback layer stays unaware of the backend.
//!
//! Writes follow the store contract and never fail the caller: a storage
//! error is logged and the write dropped, since losing one position tick is
//! harmless.
//!
//! # Example
//!
//! ```rust,no_run
//! use verse_storage::PositionDb;
//! use verse_core::storage::KeyValueStore;
//!
//! let mut db = PositionDb::open("positions.redb").unwrap();
//! db.set("track-7-time", "42.5");
//! assert_eq!(db.get("track-7-time").as_deref(), Some("42.5"));
//! ```

#![forbid(unsafe_code)]

use redb::{Database, ReadableTable, TableDefinition};
use std::path::Path;
use thiserror::Error;
use verse_core::storage::KeyValueStore;

const POSITIONS: TableDefinition<&str, &str> = TableDefinition::new("positions");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// The database could not be opened or created
    #[error("failed to open position database: {0}")]
    Open(#[from] redb::DatabaseError),
}

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Durable key-value store over a single-file `redb` database
pub struct PositionDb {
    db: Database,
}

impl PositionDb {
    /// Open (or create) the database at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Database::create(path)?;
        Ok(Self { db })
    }
}

impl KeyValueStore for PositionDb {
    fn get(&self, key: &str) -> Option<String> {
        let txn = match self.db.begin_read() {
            Ok(txn) => txn,
            Err(err) => {
                tracing::warn!(%err, "position read transaction failed");
                return None;
            }
        };
        // The table does not exist until the first write
        let table = match txn.open_table(POSITIONS) {
            Ok(table) => table,
            Err(redb::TableError::TableDoesNotExist(_)) => return None,
            Err(err) => {
                tracing::warn!(%err, "position table open failed");
                return None;
            }
        };
        match table.get(key) {
            Ok(value) => value.map(|guard| guard.value().to_string()),
            Err(err) => {
                tracing::warn!(%err, key, "position read failed");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let write = || -> std::result::Result<(), redb::Error> {
            let txn = self.db.begin_write()?;
            {
                let mut table = txn.open_table(POSITIONS)?;
                table.insert(key, value)?;
            }
            txn.commit()?;
            Ok(())
        };
        if let Err(err) = write() {
            tracing::warn!(%err, key, "position write dropped");
        }
    }
}

//! Key-value slot contracts and implementations.
//!
//! # Responsibility
//! - Provide a local-storage style `get/set/remove` by string key.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `write_slot` replaces the whole value for a key.
//! - Reading an absent key returns `Ok(None)`, not an error.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from slot reads/writes and note (de)serialization.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Connection schema lacks the slot table.
    MissingRequiredTable(&'static str),
    /// Stored slot value is not a valid note array.
    Corrupt(serde_json::Error),
    /// Note collection could not be encoded.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "slot repository requires table `{table}`")
            }
            Self::Corrupt(err) => write!(f, "stored notes are not valid JSON: {err}"),
            Self::Encode(err) => write!(f, "failed to encode notes: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MissingRequiredTable(_) => None,
            Self::Corrupt(err) | Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Local-storage style slot access.
pub trait SlotRepository {
    /// Reads the raw value stored under `key`.
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>>;
    /// Replaces the raw value stored under `key`.
    fn write_slot(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Removes `key`; absent keys are not an error.
    fn remove_slot(&self, key: &str) -> StoreResult<()>;
}

impl<T: SlotRepository + ?Sized> SlotRepository for &T {
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).write_slot(key, value)
    }

    fn remove_slot(&self, key: &str) -> StoreResult<()> {
        (**self).remove_slot(key)
    }
}

/// SQLite-backed slot repository over the `local_storage` table.
pub struct SqliteSlotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `MissingRequiredTable` when migrations were not applied.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = 'local_storage'
            );",
            [],
            |row| row.get(0),
        )?;
        if exists != 1 {
            return Err(StoreError::MissingRequiredTable("local_storage"));
        }
        Ok(Self { conn })
    }
}

impl SlotRepository for SqliteSlotRepository<'_> {
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_slot(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO local_storage (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_slot(&self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM local_storage WHERE key = ?1;", [key])?;
        Ok(())
    }
}

/// Process-local slot repository, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct InMemorySlotRepository {
    slots: RefCell<HashMap<String, String>>,
}

impl InMemorySlotRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotRepository for InMemorySlotRepository {
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> StoreResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_slot(&self, key: &str) -> StoreResult<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemorySlotRepository, SlotRepository, SqliteSlotRepository, StoreError};
    use crate::db::open_db_in_memory;
    use rusqlite::Connection;

    #[test]
    fn sqlite_slot_overwrites_and_removes() {
        let conn = open_db_in_memory().unwrap();
        let repo = SqliteSlotRepository::try_new(&conn).unwrap();

        assert_eq!(repo.read_slot("notes").unwrap(), None);
        repo.write_slot("notes", "[]").unwrap();
        repo.write_slot("notes", "[1]").unwrap();
        assert_eq!(repo.read_slot("notes").unwrap().as_deref(), Some("[1]"));

        repo.remove_slot("notes").unwrap();
        repo.remove_slot("notes").unwrap();
        assert_eq!(repo.read_slot("notes").unwrap(), None);
    }

    #[test]
    fn sqlite_slot_requires_migrated_connection() {
        let conn = Connection::open_in_memory().unwrap();
        let err = SqliteSlotRepository::try_new(&conn)
            .err()
            .expect("unmigrated connection must be rejected");
        assert!(matches!(err, StoreError::MissingRequiredTable("local_storage")));
    }

    #[test]
    fn memory_slots_are_independent_by_key() {
        let repo = InMemorySlotRepository::new();
        repo.write_slot("a", "1").unwrap();
        repo.write_slot("b", "2").unwrap();
        assert_eq!(repo.read_slot("a").unwrap().as_deref(), Some("1"));
        assert_eq!(repo.read_slot("b").unwrap().as_deref(), Some("2"));
    }
}

mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

use crate::error::{Error, Result};
use crate::models::UserData;

/// Persistence boundary for the session aggregate. `save` is invoked by the
/// store after every successful mutation (write-through, no batching);
/// `load` once at startup. `clear` empties the slot on reset.
pub trait StateStore {
    fn save(&mut self, data: &UserData) -> Result<()>;
    fn load(&mut self) -> Result<Option<UserData>>;
    fn clear(&mut self) -> Result<()>;
}

/// SQLite-backed adapter: the whole aggregate is serialized to one JSON
/// document and kept in a single-slot key-value table. SQLite's journal
/// gives the atomic-replace behavior a crash mid-write must not break.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        let mut store = Self { conn };
        store.migrate()?;
        log::info!("opened state database at {}", path.display());
        Ok(store)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database - apply full schema
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn schema_version(&self) -> Result<i32> {
        Ok(self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })?)
    }
}

impl StateStore for SqliteStore {
    fn save(&mut self, data: &UserData) -> Result<()> {
        let payload = serde_json::to_string(data)?;
        let updated_at = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        self.conn.execute(
            "INSERT INTO app_state (slot, payload, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(slot) DO UPDATE SET payload = ?2, updated_at = ?3",
            params![schema::STATE_SLOT, payload, updated_at],
        )?;
        Ok(())
    }

    fn load(&mut self) -> Result<Option<UserData>> {
        let result = self.conn.query_row(
            "SELECT payload FROM app_state WHERE slot = ?1",
            params![schema::STATE_SLOT],
            |row| row.get::<_, String>(0),
        );
        match result {
            Ok(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&mut self) -> Result<()> {
        self.conn.execute(
            "DELETE FROM app_state WHERE slot = ?1",
            params![schema::STATE_SLOT],
        )?;
        Ok(())
    }
}

/// In-memory adapter for tests and ephemeral sessions. Goes through the
/// same serde path as the SQLite adapter, so a round trip exercises the
/// full document shape.
#[derive(Default)]
pub struct MemoryStore {
    payload: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn save(&mut self, data: &UserData) -> Result<()> {
        self.payload = Some(serde_json::to_string(data)?);
        Ok(())
    }

    fn load(&mut self) -> Result<Option<UserData>> {
        match &self.payload {
            Some(payload) => Ok(Some(serde_json::from_str(payload)?)),
            None => Ok(None),
        }
    }

    fn clear(&mut self) -> Result<()> {
        self.payload = None;
        Ok(())
    }
}

/// Platform data directory for the on-disk database.
pub fn default_db_path() -> Result<PathBuf> {
    let proj_dirs =
        directories::ProjectDirs::from("com", "budgetbook", "Budgetbook").ok_or(Error::DataDir)?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;
    Ok(data_dir.join("budgetbook.db"))
}

//! redb-based document storage
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `documents` | document key | JSON bytes | 站点文档 (设置/菜单/管理员) |
//!
//! 每个文档占用一个固定 key，整个 JSON blob 一次写入。
//! 原子单位是完整文档：并发写入不做协调，最后写入者获胜。
//!
//! # Durability
//!
//! redb 默认 `Durability::Immediate`：`commit()` 返回即已落盘，
//! copy-on-write + 原子指针交换保证断电后文件仍处于一致状态。

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for persisted documents: key = document name, value = JSON bytes
const DOCUMENTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("documents");

/// 站点设置文档 key
pub const SITE_SETTINGS_KEY: &str = "pepper_chicken_site_settings";

/// 菜品目录 key
pub const MEALS_KEY: &str = "pepper_chicken_meals";

/// 管理员档案 key
pub const ADMIN_PROFILE_KEY: &str = "pepper_chicken_admin_profile";

/// 活动日志 key
pub const ADMIN_ACTIVITIES_KEY: &str = "pepper_chicken_admin_activities";

/// 登录状态标志 key
pub const ADMIN_SESSION_KEY: &str = "pepper_chicken_admin_session";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Document storage backed by redb
#[derive(Clone)]
pub struct SiteStorage {
    db: Arc<Database>,
}

impl SiteStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(DOCUMENTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(DOCUMENTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Read and deserialize the document under the given key
    ///
    /// Returns `Ok(None)` when the key holds nothing.
    pub fn read_as<T: serde::de::DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DOCUMENTS_TABLE)?;

        match table.get(key)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Serialize and store a document under the given key, replacing any
    /// previous value in one write transaction
    pub fn write_as<T: serde::Serialize>(&self, key: &str, doc: &T) -> StorageResult<()> {
        let bytes = serde_json::to_vec(doc)?;
        self.write_raw(key, &bytes)
    }

    /// Raw bytes under the given key, if any
    pub fn read_raw(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DOCUMENTS_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    /// Store raw bytes under the given key
    ///
    /// Production paths go through [`write_as`]; this exists so tests and
    /// diagnostics can seed arbitrary (including corrupt) content.
    pub fn write_raw(&self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(DOCUMENTS_TABLE)?;
            table.insert(key, bytes)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Remove the document under the given key, returning whether it existed
    pub fn delete_document(&self, key: &str) -> StorageResult<bool> {
        let write_txn = self.db.begin_write()?;
        let existed = {
            let mut table = write_txn.open_table(DOCUMENTS_TABLE)?;
            table.remove(key)?.is_some()
        };
        write_txn.commit()?;
        Ok(existed)
    }
}

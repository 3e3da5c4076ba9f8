use crate::models::MatchRecord;
use crate::services::postgres::{PostgresClient, PostgresError};
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors raised by the match store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] PostgresError),
}

/// Process-local match storage, lost on restart
#[derive(Debug, Default)]
pub struct MemoryMatchStore {
    records: RwLock<Vec<MatchRecord>>,
}

impl MemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, user_id: &str, target_id: &str) -> bool {
        let mut records = self.records.write().await;
        if records
            .iter()
            .any(|r| r.user_id == user_id && r.target_id == target_id)
        {
            return false;
        }

        records.push(MatchRecord {
            user_id: user_id.to_string(),
            target_id: target_id.to_string(),
            matched_at: chrono::Utc::now(),
        });
        true
    }

    pub async fn remove(&self, user_id: &str, target_id: &str) -> bool {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| !(r.user_id == user_id && r.target_id == target_id));
        records.len() != before
    }

    pub async fn list(&self, user_id: &str) -> Vec<MatchRecord> {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }
}

/// Match storage backend selected at startup
pub enum MatchStore {
    Memory(MemoryMatchStore),
    Postgres(PostgresClient),
}

impl MatchStore {
    pub fn in_memory() -> Self {
        MatchStore::Memory(MemoryMatchStore::new())
    }

    /// Record a match; `Ok(false)` means the pair already existed
    pub async fn create(&self, user_id: &str, target_id: &str) -> Result<bool, StoreError> {
        match self {
            MatchStore::Memory(store) => Ok(store.create(user_id, target_id).await),
            MatchStore::Postgres(pg) => Ok(pg.create_match(user_id, target_id).await?),
        }
    }

    /// Remove a match; `Ok(false)` means there was nothing to remove
    pub async fn remove(&self, user_id: &str, target_id: &str) -> Result<bool, StoreError> {
        match self {
            MatchStore::Memory(store) => Ok(store.remove(user_id, target_id).await),
            MatchStore::Postgres(pg) => Ok(pg.remove_match(user_id, target_id).await?),
        }
    }

    /// Matches made by `user_id`, in the order they were made
    pub async fn list(&self, user_id: &str) -> Result<Vec<MatchRecord>, StoreError> {
        match self {
            MatchStore::Memory(store) => Ok(store.list(user_id).await),
            MatchStore::Postgres(pg) => Ok(pg.list_matches(user_id).await?),
        }
    }

    pub async fn health_check(&self) -> Result<bool, StoreError> {
        match self {
            MatchStore::Memory(_) => Ok(true),
            MatchStore::Postgres(pg) => Ok(pg.health_check().await?),
        }
    }
}

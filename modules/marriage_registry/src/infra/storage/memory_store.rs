use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::infra::storage::entity::UserRecord;
use crate::infra::storage::store::{StoreError, UserStore};

/// Volatile store used by tests and the `--mock` server mode.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<UserRecord>>,
    saves: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            saves: AtomicUsize::new(0),
        }
    }

    /// Copy of the current content.
    pub async fn records(&self) -> Vec<UserRecord> {
        self.records.read().await.clone()
    }

    /// Number of completed `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn load(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn save(&self, records: &[UserRecord]) -> Result<(), StoreError> {
        *self.records.write().await = records.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

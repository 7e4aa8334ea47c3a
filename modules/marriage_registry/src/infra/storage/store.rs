use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::infra::storage::entity::UserRecord;

/// Failures of the backing store. None of them is recoverable by the caller.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access user store at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("user store at {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode user records: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Whole-file persistence for user records.
///
/// `load` returns every record in stored order; `save` replaces the entire
/// content. There is no partial write and no journaling.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn load(&self) -> Result<Vec<UserRecord>, StoreError>;
    async fn save(&self, records: &[UserRecord]) -> Result<(), StoreError>;
}

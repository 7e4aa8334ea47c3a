use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::infra::storage::entity::UserRecord;
use crate::infra::storage::store::{StoreError, UserStore};

/// User store backed by a single JSON array on disk.
///
/// A missing or empty file reads as an empty store. Saves write a sibling
/// temp file and rename it over the target, so readers never observe a
/// truncated array.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "users.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<UserRecord>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "User store absent, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_err(e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, records: &[UserRecord]) -> Result<(), StoreError> {
        let mut bytes = if self.pretty {
            serde_json::to_vec_pretty(records)
        } else {
            serde_json::to_vec(records)
        }
        .map_err(StoreError::Encode)?;
        bytes.push(b'\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_err(e))?;
        }

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| self.io_err(e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_err(e))?;

        debug!(path = %self.path.display(), count = records.len(), "User store saved");
        Ok(())
    }
}

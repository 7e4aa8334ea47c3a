use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::validator::ValidationLimits;

/// Configuration for the marriage_registry module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarriageRegistryConfig {
    /// User store file; a relative path is resolved against the server home dir.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Write the store as indented JSON.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
    #[serde(default = "default_max_place_length")]
    pub max_place_length: usize,
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

impl Default for MarriageRegistryConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            pretty: default_pretty(),
            max_name_length: default_max_name_length(),
            max_place_length: default_max_place_length(),
            min_password_length: default_min_password_length(),
        }
    }
}

impl MarriageRegistryConfig {
    pub fn resolve_store_path(&self, home_dir: &Path) -> PathBuf {
        if self.store_path.is_absolute() {
            self.store_path.clone()
        } else {
            home_dir.join(&self.store_path)
        }
    }

    pub fn limits(&self) -> ValidationLimits {
        ValidationLimits {
            max_name_length: self.max_name_length,
            max_place_length: self.max_place_length,
            min_password_length: self.min_password_length,
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("database/users.json")
}

fn default_pretty() -> bool {
    true
}

fn default_max_name_length() -> usize {
    ValidationLimits::default().max_name_length
}

fn default_max_place_length() -> usize {
    ValidationLimits::default().max_place_length
}

fn default_min_password_length() -> usize {
    ValidationLimits::default().min_password_length
}

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use super::KeyValueStore;
use crate::errors::AppError;

/// Single-file JSON backend. The whole map is rewritten on every mutation,
/// which is fine at this scale (two keys).
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Opens the store, loading any existing file. A missing file starts
    /// empty; an unreadable one is discarded with a warning rather than
    /// failing startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(err) => {
                    warn!("Discarding corrupt state file {}: {err}", path.display());
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        JsonFileStore {
            path,
            entries: RwLock::new(entries),
        }
    }

    async fn flush(&self, entries: &HashMap<String, String>) -> Result<(), AppError> {
        let raw = serde_json::to_string_pretty(entries).map_err(|e| AppError::Store(e.to_string()))?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| AppError::Store(format!("writing {}: {e}", self.path.display())))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        self.flush(&entries).await
    }
}

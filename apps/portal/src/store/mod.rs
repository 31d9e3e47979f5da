//! Local key-value persistence. The shell stores exactly two things: the
//! serialized session identity and the theme preference tag.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::errors::AppError;

/// Key under which the serialized identity snapshot lives.
pub const SESSION_KEY: &str = "portal.session.identity";
/// Key under which the theme preference tag lives.
pub const THEME_KEY: &str = "portal.ui.theme";

/// Minimal durable string map. Carried as `Arc<dyn KeyValueStore>` so the
/// backend can be swapped without touching the session code.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    async fn remove(&self, key: &str) -> Result<(), AppError>;
}

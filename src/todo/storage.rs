//! Storage for the todo list.
//!
//! The whole collection is read on every request and written back in full on
//! every mutation. [`FileStore`] keeps it in a pretty-printed JSON file;
//! [`MemoryStore`] keeps it in memory for tests and embedding.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use super::error::TodoError;
use super::types::Todo;

/// Whole-collection load and save.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Read the full collection.
    async fn load(&self) -> Result<Vec<Todo>, TodoError>;

    /// Replace the full collection.
    async fn save(&self, todos: &[Todo]) -> Result<(), TodoError>;
}

/// A todo list kept in a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory and an empty list if the file is absent.
    ///
    /// Returns `true` when a new file was written.
    pub async fn ensure_exists(&self) -> Result<bool, TodoError> {
        if fs::try_exists(&self.path).await? {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        self.save(&[]).await?;
        Ok(true)
    }
}

#[async_trait]
impl TodoStore for FileStore {
    async fn load(&self) -> Result<Vec<Todo>, TodoError> {
        let content = fs::read_to_string(&self.path).await?;
        let todos: Vec<Todo> = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), count = todos.len(), "Loaded todos");
        Ok(todos)
    }

    async fn save(&self, todos: &[Todo]) -> Result<(), TodoError> {
        let content = serde_json::to_string_pretty(todos)?;
        fs::write(&self.path, content).await?;
        debug!(path = %self.path.display(), count = todos.len(), "Saved todos");
        Ok(())
    }
}

/// A todo list held in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    todos: Mutex<Vec<Todo>>,
}

impl MemoryStore {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos: Mutex::new(todos),
        }
    }

    /// Copy of the currently stored collection.
    pub async fn snapshot(&self) -> Vec<Todo> {
        self.todos.lock().await.clone()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.snapshot().await)
    }

    async fn save(&self, todos: &[Todo]) -> Result<(), TodoError> {
        *self.todos.lock().await = todos.to_vec();
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;

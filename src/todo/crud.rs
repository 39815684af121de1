//! Load-modify-save operations over the todo list.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use super::error::TodoError;
use super::id::{next_id, parse_id, position_of, renumber};
use super::storage::TodoStore;
use super::types::{Todo, TodoPayload};

/// CRUD operations over an injected [`TodoStore`].
///
/// Mutations hold `write_lock` across load and save so concurrent writers
/// cannot overwrite each other's changes.
pub struct TodoService {
    store: Arc<dyn TodoStore>,
    write_lock: Mutex<()>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Every todo, in stored order.
    pub async fn list(&self) -> Result<Vec<Todo>, TodoError> {
        self.store.load().await
    }

    /// Append a todo with the next free id.
    pub async fn create(&self, payload: TodoPayload) -> Result<Todo, TodoError> {
        let text = payload.into_text()?;

        let _guard = self.write_lock.lock().await;
        let mut todos = self.store.load().await?;
        let todo = Todo::new(next_id(&todos), text);
        todos.push(todo.clone());
        self.store.save(&todos).await?;

        debug!(id = todo.id, "Created todo");
        Ok(todo)
    }

    /// Replace the text of the todo addressed by `raw_id`.
    pub async fn update(&self, raw_id: &str, payload: TodoPayload) -> Result<Todo, TodoError> {
        let text = payload.into_text()?;

        let _guard = self.write_lock.lock().await;
        let mut todos = self.store.load().await?;
        let todo = position_of(&todos, parse_id(raw_id))
            .and_then(|index| todos.get_mut(index))
            .ok_or_else(|| TodoError::not_found(raw_id))?;
        todo.text = text;
        let updated = todo.clone();
        self.store.save(&todos).await?;

        debug!(id = updated.id, "Updated todo");
        Ok(updated)
    }

    /// Remove the todo addressed by `raw_id` and renumber the rest from 1.
    ///
    /// Returns the removed todo with the id it had before removal.
    pub async fn delete(&self, raw_id: &str) -> Result<Todo, TodoError> {
        let _guard = self.write_lock.lock().await;
        let mut todos = self.store.load().await?;
        let index = position_of(&todos, parse_id(raw_id))
            .ok_or_else(|| TodoError::not_found(raw_id))?;
        let removed = todos.remove(index);
        renumber(&mut todos);
        self.store.save(&todos).await?;

        debug!(id = removed.id, remaining = todos.len(), "Deleted todo");
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "crud_tests.rs"]
mod tests;

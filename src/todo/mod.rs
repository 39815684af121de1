//! The todo list domain: items, validation, storage and CRUD operations.

pub mod crud;
pub mod error;
pub mod id;
pub mod storage;
pub mod types;

pub use crud::TodoService;
pub use error::TodoError;
pub use id::{next_id, parse_id, position_of, renumber};
pub use storage::{FileStore, MemoryStore, TodoStore};
pub use types::{Todo, TodoPayload};

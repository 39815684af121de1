// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod config;
pub mod cors;
pub mod logging;
pub mod server;
pub mod todo;

// Re-export commonly used types
pub use config::{load_config, DaemonConfig, Overrides, Settings};
pub use server::request_log::{RequestLog, RequestLogLayer};
pub use server::{build_app, build_router, AppState};
pub use todo::{FileStore, MemoryStore, Todo, TodoError, TodoPayload, TodoService, TodoStore};

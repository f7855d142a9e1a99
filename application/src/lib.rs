//! Application layer for jsctx
//!
//! This crate contains the project context use case, port definitions, the
//! built-in cache handlers and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod handlers;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ProjectOptions;
pub use handlers::{EnvironmentHandler, LintConfigHandler};
pub use ports::{
    file_store::{FileStore, StoreError},
    project_handler::{HandlerContext, ProjectHandler},
};
pub use use_cases::project_context::{ProjectContext, UpdateFileError};

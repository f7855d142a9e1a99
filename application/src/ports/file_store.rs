//! File Store port
//!
//! Defines the interface for reading and writing the host's file tree.
//! Locations are opaque strings owned by the store; folder locations end
//! with `/`.

use async_trait::async_trait;
use jsctx_domain::FileMetadata;
use thiserror::Error;

/// Errors that can occur during file store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Unsupported: {0}")]
    Unsupported(String),
}

/// Port for the host's file tree
///
/// This port defines how the application layer reaches project files.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Read the contents of a file.
    ///
    /// Returns `Ok(None)` when nothing exists at `location`.
    async fn read(&self, location: &str) -> Result<Option<String>, StoreError>;

    /// Read the metadata of a file or folder, including its parents.
    ///
    /// Returns `Ok(None)` when nothing exists at `location`.
    async fn read_metadata(&self, location: &str) -> Result<Option<FileMetadata>, StoreError>;

    /// Replace the contents of an existing file.
    async fn write(&self, location: &str, contents: &str) -> Result<(), StoreError>;

    /// Create an empty file named `name` inside the folder `parent`.
    async fn create_file(&self, parent: &str, name: &str) -> Result<FileMetadata, StoreError>;

    /// List the direct children of a folder.
    async fn fetch_children(&self, location: &str) -> Result<Vec<FileMetadata>, StoreError>;

    /// Find the project owning `location`.
    ///
    /// A project is the nearest enclosing folder holding one of `markers`.
    /// Stores without a notion of projects keep the default, which makes
    /// the caller fall back to its own resolution.
    async fn get_project(
        &self,
        location: &str,
        markers: &[&str],
    ) -> Result<Option<String>, StoreError> {
        let _ = markers;
        Err(StoreError::Unsupported(format!(
            "project lookup for {}",
            location
        )))
    }
}

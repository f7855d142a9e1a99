//! File store adapters
//!
//! Implementations of the [`FileStore`](jsctx_application::FileStore) port.

mod local;

pub use local::LocalFileStore;

//! Port definitions
//!
//! Ports define the interfaces the application layer depends on. The file
//! store is implemented by adapters in the infrastructure layer; project
//! handlers are implemented here and by embedders.

pub mod file_store;
pub mod project_handler;

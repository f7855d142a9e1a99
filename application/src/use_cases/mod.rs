//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod project_context;
pub(crate) mod shared;

//! Application-level configuration.
//!
//! - [`ProjectOptions`] - how the project root is resolved

pub mod project_options;

pub use project_options::{DEFAULT_ROOT, ProjectOptions};

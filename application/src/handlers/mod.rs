//! Built-in project handlers
//!
//! - [`LintConfigHandler`] - lint and formatting configuration
//! - [`EnvironmentHandler`] - computed environment and ECMAScript level

pub mod environment;
pub mod lint;

pub use environment::EnvironmentHandler;
pub use lint::LintConfigHandler;

use crate::ports::project_handler::ProjectHandler;
use std::sync::Arc;

/// Handlers every project context starts with, in notification order.
pub fn builtin() -> Vec<Arc<dyn ProjectHandler>> {
    vec![Arc::new(LintConfigHandler), Arc::new(EnvironmentHandler)]
}

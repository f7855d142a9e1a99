//! Project resolution options.
//!
//! [`ProjectOptions`] controls how [`ProjectContext`](crate::use_cases::project_context::ProjectContext)
//! picks a project root when the store cannot name one.

use jsctx_domain::ProjectRoot;
use serde::{Deserialize, Serialize};

/// Root used when nothing better is known.
pub const DEFAULT_ROOT: &str = "/file/";

/// Options for project root resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOptions {
    /// Root adopted when the active file has no parents, or when probing
    /// finds no project file. `None` leaves the context without a project.
    pub default_root: Option<ProjectRoot>,
    /// Probe project files under the file's parents before falling back.
    ///
    /// Hosts that serve a plain local filesystem have no project lookup of
    /// their own, so the nearest folder holding a marker wins.
    pub filesystem_host: bool,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            default_root: Some(ProjectRoot::new(DEFAULT_ROOT)),
            filesystem_host: false,
        }
    }
}

impl ProjectOptions {
    // ==================== Builder Methods ====================

    pub fn with_default_root(mut self, root: Option<ProjectRoot>) -> Self {
        self.default_root = root;
        self
    }

    pub fn with_filesystem_host(mut self, enabled: bool) -> Self {
        self.filesystem_host = enabled;
        self
    }
}

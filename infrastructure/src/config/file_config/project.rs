//! Project resolution configuration from TOML (`[project]` section)

use jsctx_application::config::{DEFAULT_ROOT, ProjectOptions};
use jsctx_domain::ProjectRoot;
use serde::{Deserialize, Serialize};

/// Raw project configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProjectConfig {
    /// Root adopted when a file has no parents or probing finds nothing
    pub default_root: String,
    /// Probe project files under the parents instead of adopting the
    /// outermost parent
    pub filesystem_host: bool,
}

impl Default for FileProjectConfig {
    fn default() -> Self {
        Self {
            default_root: DEFAULT_ROOT.to_string(),
            filesystem_host: false,
        }
    }
}

impl FileProjectConfig {
    /// Convert to the application-level [`ProjectOptions`]
    pub fn to_project_options(&self) -> ProjectOptions {
        ProjectOptions::default()
            .with_default_root(Some(ProjectRoot::new(self.default_root.trim())))
            .with_filesystem_host(self.filesystem_host)
    }
}

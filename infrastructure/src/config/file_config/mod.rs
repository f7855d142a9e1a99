//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod project;

pub use output::{FileOutputConfig, FileOutputFormat};
pub use project::FileProjectConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("project.default_root cannot be empty")]
    EmptyDefaultRoot,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Project resolution settings
    pub project: FileProjectConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.project.default_root.trim().is_empty() {
            return Err(ConfigValidationError::EmptyDefaultRoot);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_default_root_rejected() {
        let config: FileConfig = toml::from_str("[project]\ndefault_root = \"  \"\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyDefaultRoot)
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: FileConfig = toml::from_str("[project]\nfilesystem_host = true\n").unwrap();
        assert_eq!(config.project.default_root, "/file/");
        assert!(config.project.filesystem_host);
        assert!(config.output.color);
    }
}

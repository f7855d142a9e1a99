//! Configuration resolution
//!
//! Parses the configuration files other tools consume (lint, formatting,
//! type inference, package manifest) into structured values and merges
//! configuration fragments.
//!
//! # Example
//!
//! ```
//! use jsctx_domain::config::{merge, parse_lint_config};
//! use jsctx_domain::project::ProjectFile;
//! use serde_json::json;
//!
//! let values = parse_lint_config(ProjectFile::EslintrcYml, "env:\n  mocha: true\n").unwrap();
//! assert_eq!(values, json!({"env": {"mocha": true}}));
//!
//! let mut tern = json!({"libs": ["ecma5"]});
//! merge(&json!({"libs": ["browser"]}), &mut tern);
//! assert_eq!(tern["libs"], json!(["ecma5", "browser"]));
//! ```

pub mod merge;
mod output_format;
pub mod parsing;

pub use merge::{defaults_for, merge, to_pretty_json};
pub use output_format::OutputFormat;
pub use parsing::{
    ESLINT_CONFIG_KEY, parse_formatting_config, parse_json, parse_lint_config, parse_yaml,
};

use crate::project::FileHandle;
use serde::Serialize;
use serde_json::Value;

/// A configuration file together with the values parsed from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigEntry {
    /// The file the values came from.
    pub file: FileHandle,
    /// Parsed values.
    pub values: Value,
}

impl ConfigEntry {
    pub fn new(file: FileHandle, values: Value) -> Self {
        Self { file, values }
    }

    /// Short name of the source file.
    pub fn source(&self) -> &str {
        &self.file.short_name
    }
}

//! Configuration file loading for jsctx
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `JSCTX_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./jsctx.toml` or `./.jsctx.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/jsctx/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat, FileProjectConfig,
};
pub use loader::ConfigLoader;

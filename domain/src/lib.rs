//! Domain layer for jsctx
//!
//! This crate contains the value types and pure algorithms behind the
//! JavaScript project context. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Project files
//!
//! A project is identified by its root folder. Configuration consumed by
//! other tools lives directly under the root: lint configuration
//! (`.eslintrc*`, `package.json#eslintConfig`), formatting configuration
//! (`.jsbeautifyrc`) and type inference configuration (`.tern-project`).
//!
//! ## Environment inference
//!
//! The runtime a project targets (browser, node, es6, amd, ...) is guessed
//! from whichever of those files exist, later and more specific sources
//! overriding earlier ones.
//!
//! ## Content assist
//!
//! Keyword, statement template and member proposals for a JavaScript buffer.

pub mod assist;
pub mod change;
pub mod config;
pub mod core;
pub mod environment;
pub mod project;

// Re-export commonly used types
pub use assist::{JavaScriptContentAssist, LinkedPosition, Proposal};
pub use change::{
    ChangeKind, CreatedEntry, DeletedEntry, FileChangeBatch, FileEvent, FileMetadata,
    InputChanged, MovedEntry,
};
pub use config::{ConfigEntry, OutputFormat};
pub use core::error::DomainError;
pub use environment::{ConfigSource, EcmaLevel, EnvFlags, EnvironmentGuess};
pub use project::{ConfigCache, FileHandle, ProjectFile, ProjectRoot, short_name};

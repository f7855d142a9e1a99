//! Project module
//!
//! Names the configuration files and folders of a JavaScript project and
//! the value types used while tracking the active project:
//!
//! - [`ProjectFile`] - Enum of recognized file and folder names
//! - [`ProjectRoot`] - Location of the active project, always ending in `/`
//! - [`FileHandle`] - A fetched file with its contents
//! - [`ConfigCache`] - Configuration derived from those files

pub mod entities;
pub mod value_objects;

pub use entities::ConfigCache;
pub use value_objects::{FileHandle, ProjectFile, ProjectRoot, short_name};

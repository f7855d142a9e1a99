//! Output formatting
//!
//! - [`formatter::OutputFormatter`] - one method per printable result
//! - [`console::ConsoleFormatter`] - colored text
//! - [`json::JsonFormatter`] - pretty-printed JSON

pub mod console;
pub mod formatter;
pub mod json;

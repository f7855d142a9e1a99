//! ECMAScript language level of a project

use crate::config::parse_json;
use crate::project::ProjectFile;
use serde::Serialize;
use serde_json::Value;

/// ECMAScript edition a project is written against.
///
/// Only editions 5 through 7 are recognized; anything else falls back to
/// [`EcmaLevel::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EcmaLevel(u8);

impl EcmaLevel {
    pub const MIN: u8 = 5;
    pub const MAX: u8 = 7;
    pub const DEFAULT: EcmaLevel = EcmaLevel(6);

    /// Returns the level if `version` is within the recognized range.
    pub fn new(version: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&version)
            .then_some(Self(version))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Reads `ecmaVersion` from `.tern-project` contents.
    ///
    /// Malformed contents, a missing key or an out-of-range version all
    /// yield the default.
    pub fn from_tern_project(contents: &str) -> Self {
        parse_json(ProjectFile::TernProject.file_name(), contents)
            .ok()
            .and_then(|v| v.get("ecmaVersion").and_then(Value::as_f64))
            .filter(|v| v.fract() == 0.0)
            .and_then(|v| u8::try_from(v as i64).ok())
            .and_then(Self::new)
            .unwrap_or(Self::DEFAULT)
    }
}

impl Default for EcmaLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for EcmaLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        assert!(EcmaLevel::new(4).is_none());
        assert_eq!(EcmaLevel::new(5).map(|l| l.value()), Some(5));
        assert_eq!(EcmaLevel::new(7).map(|l| l.value()), Some(7));
        assert!(EcmaLevel::new(8).is_none());
    }

    #[test]
    fn test_from_tern_project() {
        assert_eq!(
            EcmaLevel::from_tern_project(r#"{"ecmaVersion":6,"libs":["ecma6"]}"#).value(),
            6
        );
        assert_eq!(EcmaLevel::from_tern_project(r#"{"ecmaVersion":5}"#).value(), 5);
        assert_eq!(EcmaLevel::from_tern_project(r#"{"ecmaVersion":7}"#).value(), 7);
    }

    #[test]
    fn test_out_of_range_defaults() {
        assert_eq!(EcmaLevel::from_tern_project(r#"{"ecmaVersion":9}"#), EcmaLevel::DEFAULT);
        assert_eq!(EcmaLevel::from_tern_project(r#"{"ecmaVersion":3}"#), EcmaLevel::DEFAULT);
        assert_eq!(EcmaLevel::from_tern_project(r#"{"ecmaVersion":-1}"#), EcmaLevel::DEFAULT);
    }

    #[test]
    fn test_malformed_defaults() {
        assert_eq!(EcmaLevel::from_tern_project("{"), EcmaLevel::DEFAULT);
        assert_eq!(EcmaLevel::from_tern_project("{}"), EcmaLevel::DEFAULT);
        assert_eq!(
            EcmaLevel::from_tern_project(r#"{"ecmaVersion":"6"}"#),
            EcmaLevel::DEFAULT
        );
    }
}

//! Parsing of project configuration files
//!
//! Every recognized configuration format is parsed into a
//! [`serde_json::Value`] so downstream code handles JSON and YAML sources
//! alike. Which parser applies is decided by the file name:
//!
//! | File                          | Parser                                  |
//! |-------------------------------|-----------------------------------------|
//! | `.eslintrc`, `.eslintrc.json` | strict JSON                             |
//! | `.eslintrc.yaml`, `.yml`      | YAML                                    |
//! | `package.json`                | JSON, only the `eslintConfig` section   |
//! | `.eslintrc.js`                | never parsed                            |
//! | `.jsbeautifyrc`               | strict JSON                             |

use crate::core::error::DomainError;
use crate::core::string::truncate;
use crate::project::ProjectFile;
use serde_json::Value;

/// Section of `package.json` carrying embedded lint configuration.
pub const ESLINT_CONFIG_KEY: &str = "eslintConfig";

const EXCERPT_LEN: usize = 80;

/// Parses `contents` as strict JSON.
pub fn parse_json(file: &str, contents: &str) -> Result<Value, DomainError> {
    serde_json::from_str(contents).map_err(|e| DomainError::InvalidJson {
        file: file.to_string(),
        message: format!("{} (near {:?})", e, truncate(contents, EXCERPT_LEN)),
    })
}

/// Parses `contents` as a single YAML document.
pub fn parse_yaml(file: &str, contents: &str) -> Result<Value, DomainError> {
    serde_yaml::from_str(contents).map_err(|e| DomainError::InvalidYaml {
        file: file.to_string(),
        message: e.to_string(),
    })
}

/// Parses lint configuration according to the file's format.
///
/// Only a non-empty object counts as usable configuration; anything else
/// is reported as [`DomainError::EmptyConfig`].
pub fn parse_lint_config(file: ProjectFile, contents: &str) -> Result<Value, DomainError> {
    let name = file.file_name();
    let values = match file {
        ProjectFile::Eslintrc | ProjectFile::EslintrcJson => parse_json(name, contents)?,
        ProjectFile::EslintrcYaml | ProjectFile::EslintrcYml => parse_yaml(name, contents)?,
        ProjectFile::PackageJson => {
            let mut manifest = parse_json(name, contents)?;
            match manifest.get_mut(ESLINT_CONFIG_KEY).map(Value::take) {
                Some(section @ Value::Object(_)) => section,
                _ => Value::Null,
            }
        }
        ProjectFile::EslintrcJs => return Err(DomainError::Unevaluable(name.to_string())),
        _ => Value::Null,
    };
    usable(name, values)
}

/// Parses `.jsbeautifyrc` contents.
pub fn parse_formatting_config(contents: &str) -> Result<Value, DomainError> {
    let name = ProjectFile::Jsbeautifyrc.file_name();
    usable(name, parse_json(name, contents)?)
}

fn usable(file: &str, values: Value) -> Result<Value, DomainError> {
    match &values {
        Value::Object(map) if !map.is_empty() => Ok(values),
        _ => Err(DomainError::EmptyConfig {
            file: file.to_string(),
        }),
    }
}

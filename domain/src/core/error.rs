//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid JSON in {file}: {message}")]
    InvalidJson { file: String, message: String },

    #[error("Invalid YAML in {file}: {message}")]
    InvalidYaml { file: String, message: String },

    #[error("{0} cannot be evaluated as configuration")]
    Unevaluable(String),

    #[error("{file} has no usable configuration")]
    EmptyConfig { file: String },
}

impl DomainError {
    /// Check if this error means the file simply carried nothing usable,
    /// as opposed to being malformed
    pub fn is_empty_config(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyConfig { .. } | DomainError::Unevaluable(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_json_display() {
        let error = DomainError::InvalidJson {
            file: ".eslintrc".to_string(),
            message: "EOF while parsing".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid JSON in .eslintrc: EOF while parsing");
    }

    #[test]
    fn test_is_empty_config_check() {
        assert!(
            DomainError::EmptyConfig {
                file: "package.json".to_string()
            }
            .is_empty_config()
        );
        assert!(DomainError::Unevaluable(".eslintrc.js".to_string()).is_empty_config());
        assert!(
            !DomainError::InvalidYaml {
                file: ".eslintrc.yml".to_string(),
                message: "bad".to_string()
            }
            .is_empty_config()
        );
    }
}

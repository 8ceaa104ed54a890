//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid log file name '{name}': {reason}")]
    InvalidLogName { name: String, reason: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_log_name_display() {
        let error = DomainError::InvalidLogName {
            name: "a/b".to_string(),
            reason: "must not contain a path separator",
        };
        assert_eq!(
            error.to_string(),
            "Invalid log file name 'a/b': must not contain a path separator"
        );
    }
}

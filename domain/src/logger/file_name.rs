//! Daily file naming.

use crate::core::error::DomainError;
use chrono::NaiveDate;

/// Daily log file name format (`yyyyMMdd.txt`).
pub const DAILY_FILE_FORMAT: &str = "%Y%m%d.txt";

/// The file every unnamed write on `date` goes to.
pub fn daily_file_name(date: NaiveDate) -> String {
    date.format(DAILY_FILE_FORMAT).to_string()
}

/// Check that an explicit name is a plain file name.
pub fn validate_log_name(name: &str) -> Result<&str, DomainError> {
    let invalid = |reason| DomainError::InvalidLogName {
        name: name.to_string(),
        reason,
    };

    if name.trim().is_empty() {
        return Err(invalid("must not be blank"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("must not contain a path separator"));
    }
    if name == "." || name == ".." {
        return Err(invalid("must name a file"));
    }
    Ok(name)
}

/// Explicit name if given, otherwise the daily name for `date`.
pub fn resolve_file_name(explicit: Option<&str>, date: NaiveDate) -> Result<String, DomainError> {
    match explicit {
        Some(name) => validate_log_name(name).map(str::to_string),
        None => Ok(daily_file_name(date)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_daily_file_name() {
        assert_eq!(daily_file_name(may_first()), "20240501.txt");
    }

    #[test]
    fn test_resolve_prefers_explicit_name() {
        assert_eq!(
            resolve_file_name(Some("app.txt"), may_first()).unwrap(),
            "app.txt"
        );
        assert_eq!(resolve_file_name(None, may_first()).unwrap(), "20240501.txt");
    }

    #[test]
    fn test_rejects_separators_and_blank_names() {
        assert!(validate_log_name("../escape.txt").is_err());
        assert!(validate_log_name("dir\\file.txt").is_err());
        assert!(validate_log_name("  ").is_err());
        assert!(validate_log_name("..").is_err());
        assert!(validate_log_name("20240430.txt").is_ok());
    }
}

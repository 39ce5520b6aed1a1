use thiserror::Error;

/// Errors surfaced by a [`StorageGateway`](super::StorageGateway).
///
/// Backends classify their native failures into these variants so callers
/// never have to inspect error text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Errors that can occur when decoding a [`Row`](super::Row).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("Missing column: {0}")]
    MissingColumn(String),
    #[error("Column {column} has type {found}, expected {expected}")]
    UnexpectedType {
        column: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("Invalid value in column {column}: {reason}")]
    InvalidValue { column: String, reason: String },
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_display() {
        let error = StorageError::UniqueViolation {
            constraint: "members.email".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unique constraint violated: members.email"
        );
    }

    #[test]
    fn test_connection_failed_display() {
        let error = StorageError::ConnectionFailed("unable to open database file".to_string());
        assert_eq!(
            error.to_string(),
            "Connection failed: unable to open database file"
        );
    }

    #[test]
    fn test_other_display() {
        let error = StorageError::Other("disk I/O error".to_string());
        assert_eq!(error.to_string(), "Storage error: disk I/O error");
    }

    #[test]
    fn test_row_error_display() {
        let error = RowError::InvalidValue {
            column: "joined_date".to_string(),
            reason: "premature end of input".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value in column joined_date: premature end of input"
        );
    }
}

//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `StorageError` from `roster_core::storage`.
//! Constraint failures are classified by extended result code, never by message text.

use roster_core::storage::StorageError;

/// Pulls the constraint target out of SQLite's message,
/// e.g. `UNIQUE constraint failed: members.email` -> `members.email`.
fn constraint_target(message: Option<&str>) -> String {
    message
        .and_then(|m| m.rsplit_once(": "))
        .map(|(_, target)| target.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Maps a rusqlite error to a StorageError.
///
/// # Error Mapping
///
/// - `SQLITE_CONSTRAINT_UNIQUE` → `StorageError::UniqueViolation`
/// - `SQLITE_CONSTRAINT_PRIMARYKEY` → `StorageError::UniqueViolation`
/// - `SQLITE_CANTOPEN` → `StorageError::ConnectionFailed`
/// - All other errors → `StorageError::Other`
fn map_rusqlite_error(err: &rusqlite::Error) -> StorageError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, message)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
        {
            StorageError::UniqueViolation {
                constraint: constraint_target(message.as_deref()),
            }
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            StorageError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        _ => StorageError::Other(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a StorageError.
///
/// This is the main entry point for error mapping in async code.
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error) -> StorageError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err),
        tokio_rusqlite::Error::Close(_) => {
            StorageError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => StorageError::Other(err.to_string()),
    }
}

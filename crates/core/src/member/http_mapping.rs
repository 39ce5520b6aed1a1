//! Pure functions for mapping member errors to HTTP status codes.

use super::MemberError;

/// Maps a [`MemberError`] to an HTTP status code.
///
/// - `MissingRequiredFields`, `NoFieldsToUpdate` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `EmailTaken` -> 409 (Conflict)
/// - `Storage` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use roster_core::member::{member_error_to_status_code, MemberError};
///
/// assert_eq!(member_error_to_status_code(&MemberError::EmailTaken), 409);
/// ```
pub fn member_error_to_status_code(error: &MemberError) -> u16 {
    match error {
        MemberError::MissingRequiredFields => 400,
        MemberError::NoFieldsToUpdate => 400,
        MemberError::NotFound => 404,
        MemberError::EmailTaken => 409,
        MemberError::Storage(_) => 500,
    }
}

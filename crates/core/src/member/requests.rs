//! API request types for member operations.
//!
//! Pure data types with no I/O. Empty strings are treated as absent fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::MemberError;
use super::types::{MemberChanges, NewMember};
use crate::serde::deserialize_optional_string;

/// Request payload for creating a member.
///
/// Both fields are optional at the type level so a missing field produces a
/// [`MemberError::MissingRequiredFields`] instead of a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMemberRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
}

impl CreateMemberRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Checks that both fields are present and builds the row to insert.
    pub fn into_new_member(self, joined_date: NaiveDate) -> Result<NewMember, MemberError> {
        match (self.name, self.email) {
            (Some(name), Some(email)) => Ok(NewMember {
                name,
                email,
                joined_date,
            }),
            _ => Err(MemberError::MissingRequiredFields),
        }
    }
}

/// Request payload for updating a member. At least one field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMemberRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
}

impl UpdateMemberRequest {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn into_changes(self) -> Result<MemberChanges, MemberError> {
        let changes = MemberChanges {
            name: self.name,
            email: self.email,
        };
        if changes.is_empty() {
            return Err(MemberError::NoFieldsToUpdate);
        }
        Ok(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    #[test]
    fn test_create_request_into_new_member() {
        let member = CreateMemberRequest::new("David Brown", "david@example.com")
            .into_new_member(day())
            .unwrap();

        assert_eq!(member.name, "David Brown");
        assert_eq!(member.email, "david@example.com");
        assert_eq!(member.joined_date, day());
    }

    #[test]
    fn test_create_request_missing_email() {
        let request: CreateMemberRequest =
            serde_json::from_str(r#"{"name": "David Brown"}"#).unwrap();
        assert_eq!(
            request.into_new_member(day()),
            Err(MemberError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_create_request_blank_name() {
        let request: CreateMemberRequest =
            serde_json::from_str(r#"{"name": "", "email": "david@example.com"}"#).unwrap();
        assert_eq!(
            request.into_new_member(day()),
            Err(MemberError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_create_request_whitespace_name_is_present() {
        let request: CreateMemberRequest =
            serde_json::from_str(r#"{"name": "   ", "email": "ws@example.com"}"#).unwrap();
        let member = request.into_new_member(day()).unwrap();

        assert_eq!(member.name, "   ");
        assert_eq!(member.email, "ws@example.com");
    }

    #[test]
    fn test_create_request_does_not_check_email_format() {
        let member = CreateMemberRequest::new("Eve", "not-an-email")
            .into_new_member(day())
            .unwrap();
        assert_eq!(member.email, "not-an-email");
    }

    #[test]
    fn test_update_request_requires_a_field() {
        let request: UpdateMemberRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.into_changes(), Err(MemberError::NoFieldsToUpdate));
    }

    #[test]
    fn test_update_request_empty_fields_count_as_missing() {
        let request: UpdateMemberRequest =
            serde_json::from_str(r#"{"name": "", "email": ""}"#).unwrap();
        assert_eq!(request.into_changes(), Err(MemberError::NoFieldsToUpdate));
    }

    #[test]
    fn test_update_request_whitespace_name_is_applied() {
        let request: UpdateMemberRequest = serde_json::from_str(r#"{"name": "   "}"#).unwrap();
        assert_eq!(
            request.into_changes(),
            Ok(MemberChanges {
                name: Some("   ".to_string()),
                email: None,
            })
        );
    }

    #[test]
    fn test_update_request_single_field() {
        let changes = UpdateMemberRequest::default()
            .with_email("alice@new.example.com")
            .into_changes()
            .unwrap();

        assert_eq!(changes.name, None);
        assert_eq!(changes.email.as_deref(), Some("alice@new.example.com"));
    }

    #[test]
    fn test_update_request_ignores_joined_date() {
        let request: UpdateMemberRequest =
            serde_json::from_str(r#"{"name": "Alice", "joined_date": "1999-01-01"}"#).unwrap();
        let changes = request.into_changes().unwrap();
        assert_eq!(
            changes,
            MemberChanges {
                name: Some("Alice".to_string()),
                email: None,
            }
        );
    }
}

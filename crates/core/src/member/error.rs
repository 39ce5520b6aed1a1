use std::fmt;

use thiserror::Error;

/// The store operation that failed, used to phrase generic faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberAction {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl fmt::Display for MemberAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            MemberAction::List => "fetch members",
            MemberAction::Get => "fetch member",
            MemberAction::Create => "create member",
            MemberAction::Update => "update member",
            MemberAction::Delete => "delete member",
        };
        f.write_str(verb)
    }
}

/// Failures returned by member operations.
///
/// The display strings are what clients see. Storage detail is kept out of
/// them and only logged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MemberError {
    #[error("Name and email are required")]
    MissingRequiredFields,
    #[error("At least one field (name or email) is required")]
    NoFieldsToUpdate,
    #[error("Member not found")]
    NotFound,
    #[error("Email already exists")]
    EmailTaken,
    #[error("Failed to {0}")]
    Storage(MemberAction),
}

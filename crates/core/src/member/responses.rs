//! JSON envelopes returned by the members API.
//!
//! Every body carries a `success` flag. Successful bodies add a payload,
//! failed ones add an `error` string.

use serde::{Deserialize, Serialize};

use super::types::Member;

pub const MEMBER_CREATED: &str = "Member created successfully";
pub const MEMBER_UPDATED: &str = "Member updated successfully";
pub const MEMBER_DELETED: &str = "Member deleted successfully";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberListResponse {
    pub success: bool,
    pub members: Vec<Member>,
}

impl MemberListResponse {
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            success: true,
            members,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub success: bool,
    pub member: Member,
}

impl MemberResponse {
    pub fn new(member: Member) -> Self {
        Self {
            success: true,
            member,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberCreatedResponse {
    pub success: bool,
    pub message: String,
    pub id: i64,
}

impl MemberCreatedResponse {
    pub fn new(id: i64) -> Self {
        Self {
            success: true,
            message: MEMBER_CREATED.to_string(),
            id,
        }
    }
}

/// Confirmation body for update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

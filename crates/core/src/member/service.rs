//! Member operations.
//!
//! Each operation validates its input, issues exactly one statement through
//! the [`StorageGateway`], and classifies the outcome as a [`MemberError`].
//! The service holds no per-request state.

use std::sync::Arc;

use crate::clock::Clock;
use crate::storage::{RowError, StorageError, StorageGateway};

use super::error::{MemberAction, MemberError};
use super::queries;
use super::requests::{CreateMemberRequest, UpdateMemberRequest};
use super::types::Member;

#[derive(Clone)]
pub struct MemberService {
    gateway: Arc<dyn StorageGateway>,
    clock: Arc<dyn Clock>,
}

impl MemberService {
    pub fn new(gateway: Arc<dyn StorageGateway>, clock: Arc<dyn Clock>) -> Self {
        Self { gateway, clock }
    }

    /// All members, most recently joined first.
    pub async fn list(&self) -> Result<Vec<Member>, MemberError> {
        let rows = self
            .gateway
            .query(queries::list_members())
            .await
            .map_err(|e| storage_fault(MemberAction::List, e))?;

        rows.iter()
            .map(Member::from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| decode_fault(MemberAction::List, e))
    }

    /// The member with the given id. Non-numeric ids are simply not found.
    pub async fn get(&self, id: &str) -> Result<Member, MemberError> {
        let rows = self
            .gateway
            .query(queries::get_member(id))
            .await
            .map_err(|e| storage_fault(MemberAction::Get, e))?;

        let row = rows.first().ok_or(MemberError::NotFound)?;
        Member::from_row(row).map_err(|e| decode_fault(MemberAction::Get, e))
    }

    /// Inserts a member dated today and returns its new id.
    pub async fn create(&self, request: CreateMemberRequest) -> Result<i64, MemberError> {
        let member = request.into_new_member(self.clock.today())?;

        let summary = self
            .gateway
            .execute(queries::insert_member(&member))
            .await
            .map_err(|e| write_fault(MemberAction::Create, e))?;

        tracing::info!(
            member_id = summary.last_insert_id,
            email = %member.email,
            "Created member"
        );

        Ok(summary.last_insert_id)
    }

    /// Applies the supplied fields to an existing member.
    pub async fn update(&self, id: &str, request: UpdateMemberRequest) -> Result<(), MemberError> {
        let changes = request.into_changes()?;
        let statement = queries::update_member(id, &changes)?;

        let summary = self
            .gateway
            .execute(statement)
            .await
            .map_err(|e| write_fault(MemberAction::Update, e))?;

        if summary.rows_affected == 0 {
            return Err(MemberError::NotFound);
        }

        tracing::info!(member_id = %id, "Updated member");
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), MemberError> {
        let summary = self
            .gateway
            .execute(queries::delete_member(id))
            .await
            .map_err(|e| storage_fault(MemberAction::Delete, e))?;

        if summary.rows_affected == 0 {
            return Err(MemberError::NotFound);
        }

        tracing::info!(member_id = %id, "Deleted member");
        Ok(())
    }
}

fn storage_fault(action: MemberAction, error: StorageError) -> MemberError {
    tracing::error!(%action, error = %error, "Storage error");
    MemberError::Storage(action)
}

fn decode_fault(action: MemberAction, error: RowError) -> MemberError {
    tracing::error!(%action, error = %error, "Failed to decode member row");
    MemberError::Storage(action)
}

/// Like [`storage_fault`], but a uniqueness violation becomes a conflict.
/// The only unique column a write can collide on is `email`.
fn write_fault(action: MemberAction, error: StorageError) -> MemberError {
    match error {
        StorageError::UniqueViolation { constraint } => {
            tracing::warn!(%action, %constraint, "Email already exists");
            MemberError::EmailTaken
        }
        other => storage_fault(action, other),
    }
}

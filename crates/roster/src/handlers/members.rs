//! Member CRUD handlers.
//!
//! Thin adapters between axum and [`MemberService`](roster_core::member::MemberService):
//! extract the path and body, call the operation, wrap the result in the
//! JSON envelope.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use roster_core::member::{
    CreateMemberRequest, MemberCreatedResponse, MemberListResponse, MemberResponse,
    MessageResponse, UpdateMemberRequest, MEMBER_DELETED, MEMBER_UPDATED,
};

use crate::{handlers::ApiError, state::AppState};

/// List all members (GET /api/members).
pub async fn list_members(
    State(state): State<AppState>,
) -> Result<Json<MemberListResponse>, ApiError> {
    let members = state.members.list().await?;
    Ok(Json(MemberListResponse::new(members)))
}

/// Get a single member by ID (GET /api/members/{id}).
pub async fn get_member(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MemberResponse>, ApiError> {
    let Path(id) = path?;
    let member = state.members.get(&id).await?;
    Ok(Json(MemberResponse::new(member)))
}

/// Create a new member (POST /api/members).
pub async fn create_member(
    State(state): State<AppState>,
    payload: Result<Json<CreateMemberRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MemberCreatedResponse>), ApiError> {
    let Json(payload) = payload?;
    tracing::debug!(payload = ?payload, "Received create member request");

    let id = state.members.create(payload).await?;

    Ok((StatusCode::CREATED, Json(MemberCreatedResponse::new(id))))
}

/// Update a member by ID (PUT /api/members/{id}).
pub async fn update_member(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateMemberRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    state.members.update(&id, payload).await?;

    Ok(Json(MessageResponse::new(MEMBER_UPDATED)))
}

/// Delete a member by ID (DELETE /api/members/{id}).
pub async fn delete_member(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    state.members.delete(&id).await?;
    Ok(Json(MessageResponse::new(MEMBER_DELETED)))
}

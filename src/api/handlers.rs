//! HTTP Request Handlers
//!
//! Axum handlers mapping the service results onto the wire format.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::models::{
    requests::{
        CreateUserRequest, LoginRequest, LoginResponse, MessageResponse, UpdateUserRequest,
        UserListResponse,
    },
    user::User,
};
use crate::service::{AuthService, TokenService, UserService};
use crate::utils::error::ApiResult;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub auth_service: Arc<AuthService>,
    pub token_service: Arc<TokenService>,
}

/// POST /login — verify credentials and return a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response = state.auth_service.login(request).await?;
    Ok(Json(response))
}

/// POST / — create a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    state.user_service.create_user(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully")),
    ))
}

/// GET / — list all users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(UserListResponse {
        count: users.len(),
        users,
    }))
}

/// GET /:id — fetch a single user
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.get_user_by_id(id).await?;
    Ok(Json(user))
}

/// PUT /:id — replace a user's mutable fields
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state.user_service.update_user(id, request).await?;
    Ok(Json(MessageResponse::new("User updated successfully")))
}

/// DELETE /:id — remove a user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    state.user_service.delete_user(id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

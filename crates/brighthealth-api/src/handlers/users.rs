//! User record handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use brighthealth_core::types::PageRequest;

use crate::dto::request::UpdateUserRequest;
use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::{ActiveUser, ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    ActiveUser(caller): ActiveUser,
    ApiQuery(page): ApiQuery<PageRequest>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.user_service.list_users(&caller, page).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    ActiveUser(caller): ActiveUser,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.get_user(&caller, id).await?;
    Ok(Json(user.into()))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    ActiveUser(caller): ActiveUser,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    req.validate()?;
    let user = state
        .user_service
        .update_user(&caller, id, req.into())
        .await?;
    Ok(Json(user.into()))
}

//! Auth handlers: token, register, me.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use crate::dto::request::{LoginForm, RegisterRequest};
use crate::dto::response::{TokenResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{ActiveUser, ApiForm, ApiJson};
use crate::state::AppState;

/// POST /auth/token
pub async fn token(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    form.validate()?;
    let token = state.auth_flow.login(&form.username, &form.password).await?;
    Ok(Json(token.into()))
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    req.validate()?;
    let user = state.auth_flow.register(req.into()).await?;
    Ok(Json(user.into()))
}

/// GET /auth/me
pub async fn me(ActiveUser(user): ActiveUser) -> Json<UserResponse> {
    Json(user.into())
}

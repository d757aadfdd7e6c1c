//! Bearer token extractors: resolve the `Authorization` header to a user.

use axum::RequestPartsExt;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use brighthealth_auth::session::{INVALID_TOKEN, SessionResolver};
use brighthealth_core::error::AppError;
use brighthealth_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// The user named by a valid bearer token, active or not.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// The user named by a valid bearer token whose account is active.
#[derive(Debug, Clone)]
pub struct ActiveUser(pub User);

impl std::ops::Deref for CurrentUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::Deref for ActiveUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Pulls the raw bearer token out of the request headers.
///
/// A missing or malformed header fails exactly like a bad token.
async fn bearer_token(parts: &mut Parts) -> Result<String, ApiError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AppError::unauthorized(INVALID_TOKEN))?;
    Ok(bearer.token().to_string())
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).await?;
        let user = state.session_resolver.resolve(&token).await?;
        Ok(CurrentUser(user))
    }
}

impl FromRequestParts<AppState> for ActiveUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        let user = SessionResolver::require_active(user)?;
        Ok(ActiveUser(user))
    }
}

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::auth::{self, CurrentUser};
use crate::error::ApiError;

/// Auth guard for JSON routes.
///
/// Pulls the operator identity out of the session and hands it to the
/// handler; without one the request short-circuits into a structured 401.
/// Session presence is the whole check: no expiry or token validation here,
/// the session layer owns lifetime.
pub struct RequireAuth(pub CurrentUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or_else(|| ApiError::unauthorized("User not authenticated."))?;

        let user = auth::current_user(session)
            .await
            .ok_or_else(|| ApiError::unauthorized("User not authenticated."))?;

        Ok(Self(user))
    }
}

/// Auth guard for page routes: unauthenticated requests bounce to the
/// login page at `/` instead of receiving a JSON error.
pub struct RequirePage(pub CurrentUser);

pub struct PageRedirect;

impl IntoResponse for PageRedirect {
    fn into_response(self) -> Response {
        Redirect::to("/").into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequirePage
where
    S: Send + Sync,
{
    type Rejection = PageRedirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts.extensions.get::<Session>().ok_or(PageRedirect)?;
        let user = auth::current_user(session).await.ok_or(PageRedirect)?;
        Ok(Self(user))
    }
}

use axum::Json;
use serde_json::{json, Value};
use tower_sessions::Session;

use crate::auth;
use crate::error::ApiError;

/// POST /logout - destroy the session and drop the cookie.
pub async fn logout(session: Session) -> Result<Json<Value>, ApiError> {
    auth::destroy(&session).await.map_err(|e| {
        tracing::error!("session destroy failed: {}", e);
        ApiError::internal_server_error("Logout failed. Please try again later.")
    })?;

    Ok(Json(json!({ "message": "Logout successful!" })))
}

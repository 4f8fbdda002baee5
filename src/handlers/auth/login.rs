use axum::{extract::State, Json};
use bson::doc;
use serde::Deserialize;
use serde_json::{json, Value};
use tower_sessions::Session;

use crate::auth::{self, password, CurrentUser};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /login - authenticate an operator and establish the session.
///
/// Unknown username and wrong password are deliberately the same outcome,
/// so the endpoint cannot be used to enumerate operator accounts.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let user = state
        .stores
        .admins()
        .find_one(doc! { "username": &payload.username })
        .await?;

    let Some(user) = user else {
        return Err(ApiError::unauthorized("Invalid username or password."));
    };

    if !password::verify_password(&payload.password, &user.password) {
        return Err(ApiError::unauthorized("Invalid username or password."));
    }

    auth::establish(
        &session,
        CurrentUser { id: user.id.to_hex(), username: user.username.clone() },
    )
    .await?;

    tracing::info!(username = %user.username, "operator logged in");

    Ok(Json(json!({ "status": "success", "message": "Login successful!" })))
}

use axum::{extract::State, Json};
use bson::{doc, oid::ObjectId};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// GET /fetchUser - return the logged-in operator's own account.
pub async fn fetch_user(
    State(state): State<AppState>,
    RequireAuth(current): RequireAuth,
) -> Result<Json<Value>, ApiError> {
    let id = ObjectId::parse_str(&current.id)?;
    let user = state
        .stores
        .admins()
        .find_one(doc! { "_id": id })
        .await?
        .ok_or_else(|| ApiError::not_found("User not found."))?;

    // AdminUser's serializer drops the password hash
    Ok(Json(json!({ "status": true, "user": user })))
}

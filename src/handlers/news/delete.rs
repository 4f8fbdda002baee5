use axum::extract::{Path, State};
use axum::Json;
use bson::{doc, oid::ObjectId};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// DELETE /deleteNews/:newsId - remove one news item by id.
///
/// Deleting an id that matches nothing is a 404, not a silent success.
pub async fn delete_news(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(news_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = ObjectId::parse_str(&news_id)?;

    let result = state.stores.news().delete_one(doc! { "_id": id }).await?;
    if result.deleted_count == 0 {
        return Err(ApiError::not_found("News not found."));
    }

    Ok(Json(json!({ "status": true, "message": "News deleted successfully!" })))
}

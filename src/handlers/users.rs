use axum::{extract::State, Json};
use bson::{doc, Document};
use futures::TryStreamExt;
use serde_json::Value;

use crate::error::ApiError;
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// GET /allusers - list every subscription document.
///
/// Subscriptions are owned by the platform side; the admin panel only
/// displays them, so the documents pass through in relaxed extended JSON
/// rather than being forced into a schema this service would have to chase.
pub async fn allusers(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<Json<Vec<Value>>, ApiError> {
    let docs: Vec<Document> = state
        .stores
        .subscriptions()
        .find(doc! {})
        .await?
        .try_collect()
        .await?;

    let out = docs
        .into_iter()
        .map(|d| bson::Bson::Document(d).into_relaxed_extjson())
        .collect();

    Ok(Json(out))
}

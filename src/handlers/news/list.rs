use axum::{extract::State, Json};
use bson::doc;
use futures::TryStreamExt;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::{NewsDoc, NewsView};
use crate::state::AppState;

/// GET /getNews - all news items, newest first.
pub async fn get_news(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let items: Vec<NewsDoc> = state
        .stores
        .news()
        .find(doc! {})
        .sort(doc! { "newsDate": -1 })
        .await?
        .try_collect()
        .await?;

    let news: Vec<NewsView> = items.into_iter().map(Into::into).collect();

    Ok(Json(json!({ "status": true, "news": news })))
}

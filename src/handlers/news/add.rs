use std::path::Path;

use axum::extract::{Multipart, State};
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::config;
use crate::error::ApiError;
use crate::middleware::RequireAuth;
use crate::models::NewsDoc;
use crate::state::AppState;
use crate::upload;

/// POST /addNews - multipart form with newsImage, newsHeading, newsDescription.
///
/// The image is persisted first; only its generated filename enters the
/// document. A failed insert after a successful write leaves an orphaned
/// file behind, which is acceptable for a single-operator admin panel.
pub async fn add_news(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let form = upload::parse_news_upload(multipart).await?;

    let filename = upload::store_image(
        Path::new(&config::config().uploads.news_dir),
        &form.image_name,
        &form.image_bytes,
    )
    .await?;

    let doc = NewsDoc {
        id: None,
        heading: form.heading,
        description: form.description,
        image: filename,
        date: Utc::now(),
    };

    state.stores.news().insert_one(doc).await?;

    Ok(Json(json!({ "status": true, "message": "News added successfully!" })))
}

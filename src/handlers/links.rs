use axum::{extract::State, Json};
use bson::doc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::RequireAuth;
use crate::models::LinkPlatform;
use crate::state::AppState;

/// GET /fetchLinks - the public community links shown on the front page.
///
/// Both platforms are equally required; a missing document for either one
/// means the links were never provisioned.
pub async fn fetch_links(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let links = state.stores.links();

    let whatsapp = links
        .find_one(doc! { "platform": LinkPlatform::Whatsapp.as_str() })
        .await?;
    let telegram = links
        .find_one(doc! { "platform": LinkPlatform::Telegram.as_str() })
        .await?;

    match (whatsapp, telegram) {
        (Some(w), Some(t)) => Ok(Json(json!({
            "whatsapplink": w.link,
            "telegramlink": t.link,
        }))),
        _ => Err(ApiError::not_found("Links not configured.")),
    }
}

#[derive(Debug, Deserialize)]
pub struct EditLinksRequest {
    #[serde(rename = "whatsappLink")]
    pub whatsapp_link: String,
    #[serde(rename = "telegramLink")]
    pub telegram_link: String,
}

/// POST /editLinks - replace both community links.
///
/// Each platform is a keyed upsert, so the one-document-per-platform
/// invariant holds even when the collection starts out empty. The two
/// writes are independent; there is no multi-document transaction here.
pub async fn edit_links(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Json(payload): Json<EditLinksRequest>,
) -> Result<Json<Value>, ApiError> {
    let links = state.stores.links();

    links
        .update_one(
            doc! { "platform": LinkPlatform::Whatsapp.as_str() },
            doc! { "$set": { "link": &payload.whatsapp_link } },
        )
        .upsert(true)
        .await?;

    links
        .update_one(
            doc! { "platform": LinkPlatform::Telegram.as_str() },
            doc! { "$set": { "link": &payload.telegram_link } },
        )
        .upsert(true)
        .await?;

    Ok(Json(json!({ "status": true, "message": "Links updated successfully!" })))
}

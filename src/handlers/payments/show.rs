use axum::extract::{Path, State};
use axum::Json;
use bson::{doc, oid::ObjectId};

use crate::error::ApiError;
use crate::middleware::RequireAuth;
use crate::models::PaymentView;
use crate::state::AppState;

/// GET /investments/:investId - show a single payment by id.
pub async fn investment_show(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(invest_id): Path<String>,
) -> Result<Json<PaymentView>, ApiError> {
    let id = ObjectId::parse_str(&invest_id)?;

    let payment = state
        .stores
        .payments()
        .find_one(doc! { "_id": id })
        .await?
        .ok_or_else(|| ApiError::not_found("Payment not found"))?;

    Ok(Json(payment.into()))
}

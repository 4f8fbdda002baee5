use axum::extract::{Path, Query, State};
use axum::Json;
use bson::{doc, oid::ObjectId};
use chrono::Utc;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::RequireAuth;
use crate::models::PaymentStatus;
use crate::state::AppState;

use super::StatusQuery;

/// PUT /investmentControl/:investId?status= - drive a payment through the
/// transition table.
///
/// The requested status must have a row in the table (today only
/// `active` -> `resolved`); anything else is a 400 and the document is
/// untouched. The payment is read first so a missing id answers 404 before
/// any state question.
pub async fn investment_control(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(invest_id): Path<String>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<Value>, ApiError> {
    let id = ObjectId::parse_str(&invest_id)?;
    let requested: PaymentStatus = query
        .required()?
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid status"))?;

    let payments = state.stores.payments();
    let payment = payments
        .find_one(doc! { "_id": id })
        .await?
        .ok_or_else(|| ApiError::not_found("Payment not found"))?;

    let Some(next) = PaymentStatus::transition_for(requested) else {
        return Err(ApiError::bad_request("Invalid status"));
    };

    let resolve_date = Utc::now();
    payments
        .update_one(
            doc! { "_id": id },
            doc! { "$set": {
                "status": next.as_str(),
                "resolveDate": bson::DateTime::from_chrono(resolve_date),
            }},
        )
        .await?;

    tracing::info!(
        payment = %id,
        from = payment.status.as_str(),
        to = next.as_str(),
        "payment transitioned"
    );

    Ok(Json(json!({ "message": "Payment resolved successfully" })))
}

use axum::extract::{Query, State};
use axum::Json;
use bson::doc;
use futures::TryStreamExt;

use crate::error::ApiError;
use crate::middleware::RequireAuth;
use crate::models::{Payment, PaymentView};
use crate::state::AppState;

use super::StatusQuery;

/// GET /payments/status?status= - list payments in one lifecycle state.
///
/// An empty result set is a normal 200 with an empty array.
pub async fn payments_by_status(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(query): Query<StatusQuery>,
) -> Result<Json<Vec<PaymentView>>, ApiError> {
    let status = query.required()?;

    let payments: Vec<Payment> = state
        .stores
        .payments()
        .find(doc! { "status": status })
        .await?
        .try_collect()
        .await?;

    Ok(Json(payments.into_iter().map(Into::into).collect()))
}

//! Ticket handlers
//!
//! Endpoint for buying park tickets.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::domain::entities::{PurchaseRequest, PurchaseResult};
use crate::domain::ports::{Notifier, OpeningCalendar, PaymentInitiator, UserDirectory};
use crate::error::AppError;
use crate::AppState;

/// POST /tickets/purchase
///
/// Buy tickets for a group of visitors. Rule violations come back as
/// 400 `{"error": "..."}`.
pub async fn purchase_tickets<U, C, P, N>(
    State(state): State<AppState<U, C, P, N>>,
    payload: Result<Json<PurchaseRequest>, JsonRejection>,
) -> Result<Json<PurchaseResult>, AppError>
where
    U: UserDirectory + 'static,
    C: OpeningCalendar + 'static,
    P: PaymentInitiator + 'static,
    N: Notifier + ?Sized + 'static,
{
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let result = state.ticketing_service.buy_tickets(&request).await?;

    Ok(Json(result))
}

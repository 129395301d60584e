//! Transfer handlers

use crate::api::response::{ApiError, Envelope};
use crate::api::state::AppState;
use crate::core::TransferRequest;
use crate::types::{LedgerError, TransferStatus};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for creating a transfer
///
/// Fields are optional so that an incomplete body yields the service's own
/// missing-fields message rather than a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransferBody {
    pub from_account_id: Option<String>,
    pub to_account_id: Option<String>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
}

/// Create a transfer
///
/// Validation happens synchronously in the engine; on success the queued
/// transfer is returned immediately with a 201 while settlement runs in the
/// background.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateTransferBody>,
) -> Result<impl IntoResponse, ApiError> {
    let request = match (
        body.from_account_id,
        body.to_account_id,
        body.amount,
        body.description,
    ) {
        (Some(from_account_id), Some(to_account_id), Some(amount), Some(description)) => {
            TransferRequest {
                from_account_id,
                to_account_id,
                amount,
                description,
            }
        }
        _ => return Err(LedgerError::MissingRequiredFields.into()),
    };

    let transfer = state.engine.create_transfer(request)?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(
            transfer,
            "Transfer created successfully and queued for processing.",
        )),
    ))
}

/// Status projection returned by the polling endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferStatusView {
    pub transfer_id: String,
    pub status: TransferStatus,
    pub from_account_id: String,
    pub to_account_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    /// Explicitly null until the transfer settles
    pub processed_at: Option<DateTime<Utc>>,
    /// Rough settle time while the transfer is in flight, null once terminal
    pub estimated_completion_time: Option<DateTime<Utc>>,
}

/// Get the status of a transfer
pub async fn status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let transfer = state
        .store
        .transfer(&id)
        .ok_or_else(|| LedgerError::transfer_not_found(&id))?;

    let estimated_completion_time = if transfer.status.is_terminal() {
        None
    } else {
        let config = state.engine.config();
        let remaining = config.queue_delay + config.settle_delay;
        Some(Utc::now() + Duration::milliseconds(remaining.as_millis() as i64))
    };

    Ok(Json(Envelope::new(TransferStatusView {
        transfer_id: transfer.id,
        status: transfer.status,
        from_account_id: transfer.from_account_id,
        to_account_id: transfer.to_account_id,
        amount: transfer.amount,
        currency: transfer.currency,
        created_at: transfer.created_at,
        processed_at: transfer.processed_at,
        estimated_completion_time,
    })))
}

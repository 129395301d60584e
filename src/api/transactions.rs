//! Transaction handlers

use crate::api::response::{ApiError, Envelope};
use crate::api::state::AppState;
use crate::types::LedgerError;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

/// Get one transaction by id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let transaction = state
        .store
        .transaction(&id)
        .ok_or_else(|| LedgerError::transaction_not_found(&id))?;
    Ok(Json(Envelope::new(transaction)))
}

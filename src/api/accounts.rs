//! Account handlers

use crate::api::response::{ApiError, Envelope};
use crate::api::state::AppState;
use crate::core::query::{self, StatementFormat, StatementQuery};
use crate::io::render_statement_csv;
use crate::types::LedgerError;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

/// List all accounts
pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    let accounts = state.store.accounts();
    let count = accounts.len();
    Json(Envelope::with_count(accounts, count))
}

/// Get one account by id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let account = state
        .store
        .account(&id)
        .ok_or_else(|| LedgerError::account_not_found(&id))?;
    Ok(Json(Envelope::new(account)))
}

/// Get the balance view for an account
pub async fn balance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let view = query::balance_view(&state.store, &id)?;
    Ok(Json(Envelope::new(view)))
}

/// Query-string filters for the transaction history
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// List an account's transactions with optional filters
pub async fn transactions(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<HistoryParams>,
) -> Result<impl IntoResponse, ApiError> {
    let listed = query::transaction_history(
        &state.store,
        &id,
        params.from,
        params.to,
        params.kind.as_deref(),
    )?;

    // The history payload echoes the applied filters alongside the usual
    // envelope fields, so it is shaped ad hoc here.
    let count = listed.len();
    Ok(Json(json!({
        "success": true,
        "data": listed,
        "count": count,
        "filters": {
            "from": params.from,
            "to": params.to,
            "type": params.kind,
        },
        "timestamp": Utc::now(),
    })))
}

/// Query-string parameters for a statement
#[derive(Debug, Deserialize)]
pub struct StatementParams {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub format: Option<String>,
}

/// Generate an account statement over a required date window
///
/// The `csv` format renders the transaction table as `text/csv`; `json`
/// and `pdf` return the JSON payload tagged with the chosen format.
pub async fn statement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<StatementParams>,
) -> Result<Response, ApiError> {
    let statement_query = StatementQuery {
        from: params.from,
        to: params.to,
        format: params.format,
    };
    let statement = query::statement(&state.store, &id, &statement_query)?;

    if statement.format == StatementFormat::Csv {
        let body = render_statement_csv(&statement)?;
        return Ok(([(header::CONTENT_TYPE, "text/csv")], body).into_response());
    }

    let message = format!("Statement generated in {} format.", statement.format);
    Ok(Json(Envelope::with_message(statement, message)).into_response())
}

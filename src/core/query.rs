//! Read-side projections over the ledger store
//!
//! This module derives the balance view, the filtered transaction history,
//! and the statement aggregation. Nothing here mutates the store.

use crate::core::ledger::{LedgerStore, TransactionFilter};
use crate::types::{
    Account, AccountStatus, AccountType, LedgerError, Transaction, TransactionType,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

/// Current-balance projection for one account
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceView {
    pub account_id: String,
    pub account_number: String,
    pub balance: Decimal,
    pub currency: String,
    /// For credit accounts this is the absolute value of the stored
    /// negative-as-owed balance; for all others it equals the balance
    pub available_balance: Decimal,
    pub status: AccountStatus,
    /// The account's last mutation time
    pub as_of: DateTime<Utc>,
}

/// Output selector for a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementFormat {
    Json,
    Pdf,
    Csv,
}

impl std::fmt::Display for StatementFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StatementFormat::Json => "json",
            StatementFormat::Pdf => "pdf",
            StatementFormat::Csv => "csv",
        };
        f.write_str(s)
    }
}

impl FromStr for StatementFormat {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(StatementFormat::Json),
            "pdf" => Ok(StatementFormat::Pdf),
            "csv" => Ok(StatementFormat::Csv),
            other => Err(LedgerError::invalid_statement_format(other)),
        }
    }
}

/// Inclusive date window of a statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementPeriod {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Aggregates over a statement window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementSummary {
    pub total_debits: Decimal,
    pub total_credits: Decimal,
    /// Always `total_credits - total_debits`
    pub net_change: Decimal,
    pub transaction_count: usize,
}

/// A generated account statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    pub account_id: String,
    pub account_number: String,
    pub account_type: AccountType,
    pub customer_name: String,
    pub statement_period: StatementPeriod,
    /// Derived as `closing - net_change`. This is an approximation: any
    /// activity on the account outside the requested window after the
    /// window's end shifts the true opening balance.
    pub opening_balance: Decimal,
    pub closing_balance: Decimal,
    pub currency: String,
    pub summary: StatementSummary,
    pub transactions: Vec<Transaction>,
    pub generated_at: DateTime<Utc>,
    pub format: StatementFormat,
}

/// Parameters for a statement request, as parsed by the transport layer
#[derive(Debug, Clone, Default)]
pub struct StatementQuery {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    /// Raw format selector; `None` means `json`
    pub format: Option<String>,
}

/// Build the balance view for an account
///
/// # Errors
///
/// Returns `LedgerError::AccountNotFound` if the id does not resolve.
pub fn balance_view(store: &LedgerStore, account_id: &str) -> Result<BalanceView, LedgerError> {
    let account = store
        .account(account_id)
        .ok_or_else(|| LedgerError::account_not_found(account_id))?;

    Ok(BalanceView {
        available_balance: available_balance(&account),
        account_id: account.id,
        account_number: account.account_number,
        balance: account.balance,
        currency: account.currency,
        status: account.status,
        as_of: account.updated_at,
    })
}

/// Derive the spendable balance for an account
fn available_balance(account: &Account) -> Decimal {
    match account.account_type {
        AccountType::Credit => account.balance.abs(),
        AccountType::Checking | AccountType::Savings => account.balance,
    }
}

/// List an account's transactions with validated filters
///
/// The `kind` filter arrives as a raw string from the request; values
/// outside the allowed set are rejected before the store is consulted.
///
/// # Errors
///
/// * `LedgerError::AccountNotFound` if the account id does not resolve
/// * `LedgerError::InvalidTransactionType` for an unrecognized kind filter
pub fn transaction_history(
    store: &LedgerStore,
    account_id: &str,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
    kind: Option<&str>,
) -> Result<Vec<Transaction>, LedgerError> {
    if store.account(account_id).is_none() {
        return Err(LedgerError::account_not_found(account_id));
    }

    let kind = kind.map(TransactionType::from_str).transpose()?;
    let filter = TransactionFilter { from, to, kind };
    Ok(store.account_transactions(account_id, &filter))
}

/// Generate a statement for an account over a required date window
///
/// Totals consider only debit- and credit-typed transactions; legacy
/// transfer-tagged entries are listed and counted but carry no direction.
///
/// # Errors
///
/// * `LedgerError::AccountNotFound` if the account id does not resolve
/// * `LedgerError::MissingStatementRange` if either date bound is absent
/// * `LedgerError::InvalidStatementFormat` for an unrecognized format
pub fn statement(
    store: &LedgerStore,
    account_id: &str,
    query: &StatementQuery,
) -> Result<Statement, LedgerError> {
    let account = store
        .account(account_id)
        .ok_or_else(|| LedgerError::account_not_found(account_id))?;

    let (from, to) = match (query.from, query.to) {
        (Some(from), Some(to)) => (from, to),
        _ => return Err(LedgerError::MissingStatementRange),
    };

    let format = match query.format.as_deref() {
        Some(raw) => raw.parse::<StatementFormat>()?,
        None => StatementFormat::Json,
    };

    let filter = TransactionFilter {
        from: Some(from),
        to: Some(to),
        kind: None,
    };
    let transactions = store.account_transactions(account_id, &filter);

    let total_debits: Decimal = transactions
        .iter()
        .filter(|txn| txn.kind == TransactionType::Debit)
        .map(|txn| txn.amount)
        .sum();
    let total_credits: Decimal = transactions
        .iter()
        .filter(|txn| txn.kind == TransactionType::Credit)
        .map(|txn| txn.amount)
        .sum();
    let net_change = total_credits - total_debits;

    Ok(Statement {
        account_id: account.id,
        account_number: account.account_number,
        account_type: account.account_type,
        customer_name: account.customer_name,
        statement_period: StatementPeriod { from, to },
        opening_balance: account.balance - net_change,
        closing_balance: account.balance,
        currency: account.currency,
        summary: StatementSummary {
            total_debits,
            total_credits,
            net_change,
            transaction_count: transactions.len(),
        },
        transactions,
        generated_at: Utc::now(),
        format,
    })
}

//! Transaction-related types for the accounts service
//!
//! A transaction is an immutable record of a balance-affecting event on a
//! single account. Transactions form an append-only log; nothing updates or
//! deletes them once written.

use crate::types::LedgerError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of transaction recorded in the ledger
///
/// `Debit` and `Credit` are emitted by the transfer engine when a transfer
/// settles. `Transfer` only appears in historical seed data and remains a
/// valid history filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Funds leaving the account
    Debit,
    /// Funds entering the account
    Credit,
    /// Legacy tag carried by seeded transfer records
    Transfer,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionType::Debit => "debit",
            TransactionType::Credit => "credit",
            TransactionType::Transfer => "transfer",
        };
        f.write_str(s)
    }
}

impl FromStr for TransactionType {
    type Err = LedgerError;

    /// Parse a history filter value
    ///
    /// Anything outside `debit`, `credit`, `transfer` is a validation
    /// failure whose message lists the allowed values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debit" => Ok(TransactionType::Debit),
            "credit" => Ok(TransactionType::Credit),
            "transfer" => Ok(TransactionType::Transfer),
            other => Err(LedgerError::invalid_transaction_type(other)),
        }
    }
}

/// Link from a settled transfer's transactions back to the transfer
///
/// Present only on the pair of records a transfer produces; ordinary
/// transactions carry no metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferMetadata {
    /// Identifier of the originating transfer
    pub transfer_id: String,
    /// Source account of the transfer
    pub from_account: String,
    /// Destination account of the transfer
    pub to_account: String,
}

/// An immutable ledger entry for one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Ledger identifier, e.g. `txn_5001`
    pub id: String,

    /// Account this entry belongs to
    pub account_id: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Positive magnitude of the event; the `kind` carries the direction
    pub amount: Decimal,

    pub currency: String,

    pub description: String,

    /// Snapshot of the account balance immediately after this entry applied
    pub balance_after: Decimal,

    pub created_at: DateTime<Utc>,

    /// Transfer linkage, present only on transfer-derived entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TransferMetadata>,
}

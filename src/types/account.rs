//! Account-related types for the accounts service
//!
//! This module defines the Account structure and its classification enums.
//! Accounts are seeded at startup and only their balance and update
//! timestamp change afterwards, exclusively through the ledger store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product type of an account
///
/// Credit accounts store their balance negative-as-owed, which changes how
/// the available balance is derived in the balance view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
    Credit,
}

/// Lifecycle status of an account
///
/// Transfers require both participating accounts to be `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
    Frozen,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
            AccountStatus::Frozen => "frozen",
        };
        f.write_str(s)
    }
}

/// A customer account held in the ledger
///
/// The `balance` is signed: credit accounts carry the amount owed as a
/// negative number. `updated_at` is refreshed on every balance mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Ledger identifier, e.g. `acc_1001`
    pub id: String,

    /// External account number shown to customers
    pub account_number: String,

    pub account_type: AccountType,

    /// Owning customer reference
    pub customer_id: String,

    pub customer_name: String,

    /// Current signed balance
    ///
    /// Mutated only by the transfer engine through the ledger store's
    /// exclusive mutation point.
    pub balance: Decimal,

    /// ISO 4217 currency code
    pub currency: String,

    pub status: AccountStatus,

    pub created_at: DateTime<Utc>,

    /// Refreshed whenever the balance changes
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Whether the account may participate in a transfer
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}

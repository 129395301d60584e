//! Error types for the accounts service
//!
//! This module defines all failures the core can report to a caller.
//! Errors fall into three groups:
//!
//! - **Not found**: an account, transaction, or transfer identifier did not
//!   resolve. Source and destination lookups during transfer validation are
//!   reported distinctly so callers know which side failed.
//! - **Validation**: a request was rejected before any state changed
//!   (same-account transfer, non-positive amount, inactive account,
//!   insufficient funds, bad filter or format value, missing date range).
//! - **Internal**: a balance adjustment could not be applied. Recorded on
//!   the owning transfer rather than surfaced, since settlement has no
//!   waiting caller.
//!
//! The HTTP layer maps these onto status codes; the core never produces
//! transport framing itself.

use crate::types::account::AccountStatus;
use rust_decimal::Decimal;
use thiserror::Error;

/// Coarse classification used by the transport layer to pick a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Internal,
}

/// Main error type for ledger, engine, and query operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// An account identifier did not resolve
    #[error("Account with ID {id} not found.")]
    AccountNotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// The source side of a transfer request did not resolve
    #[error("Source account with ID {id} not found.")]
    SourceAccountNotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// The destination side of a transfer request did not resolve
    #[error("Destination account with ID {id} not found.")]
    DestinationAccountNotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// A transaction identifier did not resolve
    #[error("Transaction with ID {id} not found.")]
    TransactionNotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// A transfer identifier did not resolve
    #[error("Transfer with ID {id} not found.")]
    TransferNotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// A transfer request named the same account on both sides
    #[error("Cannot transfer to the same account.")]
    SameAccountTransfer {
        /// The account named on both sides
        id: String,
    },

    /// A transfer request carried a zero or negative amount
    #[error("Amount must be a positive number greater than 0.")]
    NonPositiveAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// A transfer request was missing one of its required fields
    #[error("Missing required fields: fromAccountId, toAccountId, amount, description.")]
    MissingRequiredFields,

    /// A transfer referenced an account that is not active
    #[error("Both accounts must be active to perform a transfer.")]
    AccountNotActive {
        /// The offending account
        id: String,
        /// Its current status
        status: AccountStatus,
    },

    /// The source account cannot cover the requested amount
    #[error("Insufficient funds in source account: available {available}, requested {requested}")]
    InsufficientFunds {
        /// The source account
        id: String,
        /// Balance at validation time
        available: Decimal,
        /// Requested transfer amount
        requested: Decimal,
    },

    /// A history filter named a transaction type outside the allowed set
    #[error("Invalid transaction type. Must be one of: debit, credit, transfer.")]
    InvalidTransactionType {
        /// The rejected filter value
        value: String,
    },

    /// A statement request named a format outside the allowed set
    #[error("Invalid format. Must be one of: json, pdf, csv.")]
    InvalidStatementFormat {
        /// The rejected format value
        value: String,
    },

    /// A statement request omitted one or both date bounds
    #[error("Both from and to date parameters are required.")]
    MissingStatementRange,

    /// Applying a balance delta overflowed the decimal range
    #[error("Arithmetic overflow adjusting balance for account {id}")]
    BalanceOverflow {
        /// The account whose adjustment failed
        id: String,
    },

    /// Rendering a statement to CSV failed
    #[error("Failed to render statement CSV: {message}")]
    CsvRender {
        /// Description of the underlying write failure
        message: String,
    },
}

impl LedgerError {
    /// Classify this error for transport mapping
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::AccountNotFound { .. }
            | LedgerError::SourceAccountNotFound { .. }
            | LedgerError::DestinationAccountNotFound { .. }
            | LedgerError::TransactionNotFound { .. }
            | LedgerError::TransferNotFound { .. } => ErrorKind::NotFound,
            LedgerError::SameAccountTransfer { .. }
            | LedgerError::NonPositiveAmount { .. }
            | LedgerError::MissingRequiredFields
            | LedgerError::AccountNotActive { .. }
            | LedgerError::InsufficientFunds { .. }
            | LedgerError::InvalidTransactionType { .. }
            | LedgerError::InvalidStatementFormat { .. }
            | LedgerError::MissingStatementRange => ErrorKind::Validation,
            LedgerError::BalanceOverflow { .. } | LedgerError::CsvRender { .. } => {
                ErrorKind::Internal
            }
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an AccountNotFound error
    pub fn account_not_found(id: &str) -> Self {
        LedgerError::AccountNotFound { id: id.to_string() }
    }

    /// Create a SourceAccountNotFound error
    pub fn source_account_not_found(id: &str) -> Self {
        LedgerError::SourceAccountNotFound { id: id.to_string() }
    }

    /// Create a DestinationAccountNotFound error
    pub fn destination_account_not_found(id: &str) -> Self {
        LedgerError::DestinationAccountNotFound { id: id.to_string() }
    }

    /// Create a TransactionNotFound error
    pub fn transaction_not_found(id: &str) -> Self {
        LedgerError::TransactionNotFound { id: id.to_string() }
    }

    /// Create a TransferNotFound error
    pub fn transfer_not_found(id: &str) -> Self {
        LedgerError::TransferNotFound { id: id.to_string() }
    }

    /// Create a SameAccountTransfer error
    pub fn same_account_transfer(id: &str) -> Self {
        LedgerError::SameAccountTransfer { id: id.to_string() }
    }

    /// Create a NonPositiveAmount error
    pub fn non_positive_amount(amount: Decimal) -> Self {
        LedgerError::NonPositiveAmount { amount }
    }

    /// Create an AccountNotActive error
    pub fn account_not_active(id: &str, status: AccountStatus) -> Self {
        LedgerError::AccountNotActive {
            id: id.to_string(),
            status,
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(id: &str, available: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            id: id.to_string(),
            available,
            requested,
        }
    }

    /// Create an InvalidTransactionType error
    pub fn invalid_transaction_type(value: &str) -> Self {
        LedgerError::InvalidTransactionType {
            value: value.to_string(),
        }
    }

    /// Create an InvalidStatementFormat error
    pub fn invalid_statement_format(value: &str) -> Self {
        LedgerError::InvalidStatementFormat {
            value: value.to_string(),
        }
    }

    /// Create a BalanceOverflow error
    pub fn balance_overflow(id: &str) -> Self {
        LedgerError::BalanceOverflow { id: id.to_string() }
    }
}

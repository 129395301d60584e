//! Accounts Service Library
//! # Overview
//!
//! This library provides an in-memory demonstration banking API: accounts,
//! transactions, and inter-account transfers over HTTP, with transfers
//! settling asynchronously after a short clearing delay.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, Transfer, errors)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - The authoritative store and its mutation primitives
//!   - [`core::engine`] - Transfer validation and delayed settlement
//!   - [`core::query`] - Read-side projections (balance, history, statement)
//! - [`io`] - Statement CSV rendering
//! - [`api`] - Axum router, handlers, and the API-key gate
//!
//! # Transfer Lifecycle
//!
//! A transfer request is validated synchronously and rejected outright on
//! any failure. An accepted transfer is recorded as `queued` and returned
//! immediately; a background task then advances it to `processing` and
//! finally settles it, debiting the source, crediting the destination, and
//! appending a linked debit/credit transaction pair. Callers poll the
//! transfer's status to observe progress.

// Module declarations
pub mod api;
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{
    BalanceView, EngineConfig, LedgerStore, Statement, StatementFormat, StatementQuery,
    TransactionFilter, TransferEngine, TransferRequest,
};
pub use crate::types::{
    Account, AccountStatus, AccountType, LedgerError, Transaction, TransactionType, Transfer,
    TransferMetadata, TransferStatus,
};

//! Core business logic module
//!
//! This module contains the service's core components:
//! - `ledger` - The authoritative in-memory store and its mutation primitives
//! - `engine` - Transfer validation and delayed settlement
//! - `query` - Read-side projections (balance view, history, statements)
//! - `seed` - The fixed bootstrap data set

pub mod engine;
pub mod ledger;
pub mod query;
mod seed;

pub use engine::{EngineConfig, TransferEngine, TransferRequest};
pub use ledger::{LedgerStore, TransactionFilter};
pub use query::{BalanceView, Statement, StatementFormat, StatementQuery};

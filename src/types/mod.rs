//! Types module
//!
//! Contains core data structures used throughout the service.
//! This module organizes types into logical submodules:
//! - `account`: Account record and its classification enums
//! - `transaction`: Append-only ledger entries and their metadata
//! - `transfer`: Transfer record and lifecycle states
//! - `error`: Error taxonomy for ledger, engine, and query operations

pub mod account;
pub mod error;
pub mod transaction;
pub mod transfer;

pub use account::{Account, AccountStatus, AccountType};
pub use error::{ErrorKind, LedgerError};
pub use transaction::{Transaction, TransactionType, TransferMetadata};
pub use transfer::{Transfer, TransferStatus};

//! Transfer engine: validation and delayed settlement
//!
//! This module provides the `TransferEngine`, which accepts transfer
//! requests against the ledger store and drives each accepted transfer
//! through its asynchronous lifecycle.
//!
//! # Design
//!
//! Creation is synchronous and fully validated: a request that fails any
//! check is rejected immediately and never reaches the `Queued` state. An
//! accepted transfer is inserted as `Queued` and handed to a spawned tokio
//! task that sleeps through two configurable delays, moving the transfer to
//! `Processing` after the first and settling it after the second. Callers
//! poll the transfer's status to observe progress; nothing blocks.
//!
//! # Settlement
//!
//! Settlement re-reads both accounts at execution time. If either has
//! disappeared the transfer is marked `Failed` with no balance effects.
//! Otherwise the source is debited and the destination credited through the
//! store's exclusive mutation point, and a debit/credit transaction pair is
//! appended, each carrying its account's post-mutation balance and a
//! metadata link back to the transfer.
//!
//! # Concurrency
//!
//! Each transfer settles on its own task and mutates only its own two
//! accounts; per-account mutation is serialized by the store's entry locks,
//! so concurrently settling transfers neither block nor corrupt each other.

use crate::core::ledger::LedgerStore;
use crate::types::{
    Account, LedgerError, Transaction, TransactionType, Transfer, TransferMetadata, TransferStatus,
};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

/// Timing configuration for the two-stage completion
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Delay before a queued transfer moves to `Processing`
    pub queue_delay: Duration,
    /// Further delay before a processing transfer settles
    pub settle_delay: Duration,
}

impl Default for EngineConfig {
    /// Default clearing delays: 500ms to start processing, 1000ms to settle
    fn default() -> Self {
        Self {
            queue_delay: Duration::from_millis(500),
            settle_delay: Duration::from_millis(1000),
        }
    }
}

/// An inbound transfer request, already parsed by the transport layer
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub from_account_id: String,
    pub to_account_id: String,
    pub amount: Decimal,
    pub description: String,
}

/// Validates transfer requests and drives accepted transfers to settlement
///
/// The engine is cheap to clone and safe to share across tasks; all state
/// lives in the `Arc`-shared ledger store.
#[derive(Debug, Clone)]
pub struct TransferEngine {
    store: Arc<LedgerStore>,
    config: EngineConfig,
}

impl TransferEngine {
    /// Create an engine over the given store with the given delays
    pub fn new(store: Arc<LedgerStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// The engine's timing configuration
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Validate and accept a transfer request
    ///
    /// Runs the full pre-flight check synchronously. On success the transfer
    /// is recorded as `Queued`, a settlement task is spawned, and the queued
    /// record is returned so the caller can report it immediately.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// * `LedgerError::MissingRequiredFields` - empty description
    /// * `LedgerError::NonPositiveAmount` - amount is zero or negative
    /// * `LedgerError::SameAccountTransfer` - both sides name one account
    /// * `LedgerError::SourceAccountNotFound` / `DestinationAccountNotFound`
    /// * `LedgerError::AccountNotActive` - either account is not active
    /// * `LedgerError::InsufficientFunds` - source balance below the amount
    pub fn create_transfer(&self, request: TransferRequest) -> Result<Transfer, LedgerError> {
        let source = self.validate(&request)?;

        let transfer = Transfer {
            id: new_transfer_id(),
            from_account_id: request.from_account_id,
            to_account_id: request.to_account_id,
            amount: request.amount,
            currency: source.currency,
            description: request.description,
            status: TransferStatus::Queued,
            created_at: Utc::now(),
            processed_at: None,
        };
        self.store.insert_transfer(transfer.clone());

        info!(
            transfer_id = %transfer.id,
            from = %transfer.from_account_id,
            to = %transfer.to_account_id,
            amount = %transfer.amount,
            "transfer accepted and queued"
        );

        tokio::spawn(Self::advance(
            Arc::clone(&self.store),
            transfer.id.clone(),
            self.config,
        ));

        Ok(transfer)
    }

    /// Run the pre-flight validation, returning the source account snapshot
    ///
    /// The source snapshot supplies the currency for the new transfer.
    fn validate(&self, request: &TransferRequest) -> Result<Account, LedgerError> {
        if request.description.trim().is_empty() {
            return Err(LedgerError::MissingRequiredFields);
        }

        if request.amount <= Decimal::ZERO {
            return Err(LedgerError::non_positive_amount(request.amount));
        }

        if request.from_account_id == request.to_account_id {
            return Err(LedgerError::same_account_transfer(&request.from_account_id));
        }

        let source = self
            .store
            .account(&request.from_account_id)
            .ok_or_else(|| LedgerError::source_account_not_found(&request.from_account_id))?;
        let destination = self
            .store
            .account(&request.to_account_id)
            .ok_or_else(|| LedgerError::destination_account_not_found(&request.to_account_id))?;

        if !source.is_active() {
            return Err(LedgerError::account_not_active(&source.id, source.status));
        }
        if !destination.is_active() {
            return Err(LedgerError::account_not_active(
                &destination.id,
                destination.status,
            ));
        }

        if source.balance < request.amount {
            return Err(LedgerError::insufficient_funds(
                &source.id,
                source.balance,
                request.amount,
            ));
        }

        Ok(source)
    }

    /// Drive one transfer through its two delayed transitions
    ///
    /// Sleeps the queue delay, marks the transfer `Processing`, sleeps the
    /// settle delay, then settles. A transfer never skips `Processing`.
    async fn advance(store: Arc<LedgerStore>, transfer_id: String, config: EngineConfig) {
        tokio::time::sleep(config.queue_delay).await;

        if let Err(e) = store.update_transfer(&transfer_id, |transfer| {
            transfer.status = TransferStatus::Processing;
        }) {
            warn!(transfer_id = %transfer_id, error = %e, "transfer vanished before processing");
            return;
        }
        info!(transfer_id = %transfer_id, "transfer processing");

        tokio::time::sleep(config.settle_delay).await;
        Self::settle(&store, &transfer_id);
    }

    /// Apply a transfer's balance effects and record the outcome
    ///
    /// Observes the latest account state at execution time. A missing
    /// account, or a failed balance adjustment, marks the transfer `Failed`;
    /// the failure is recorded on the transfer rather than raised, since no
    /// caller is waiting at this point.
    fn settle(store: &LedgerStore, transfer_id: &str) {
        let Some(transfer) = store.transfer(transfer_id) else {
            warn!(transfer_id = %transfer_id, "transfer vanished before settlement");
            return;
        };

        let accounts = store
            .account(&transfer.from_account_id)
            .zip(store.account(&transfer.to_account_id));
        let outcome = match accounts {
            Some((source, destination)) => {
                Self::apply_settlement(store, &transfer, &source, &destination)
            }
            None => Err(LedgerError::account_not_found(&transfer.from_account_id)),
        };

        match outcome {
            Ok(()) => {
                info!(transfer_id = %transfer_id, amount = %transfer.amount, "transfer processed");
            }
            Err(e) => {
                let _ = store.update_transfer(transfer_id, |transfer| {
                    transfer.status = TransferStatus::Failed;
                });
                warn!(transfer_id = %transfer_id, error = %e, "transfer failed");
            }
        }
    }

    /// Debit, credit, and record the transaction pair
    fn apply_settlement(
        store: &LedgerStore,
        transfer: &Transfer,
        source: &Account,
        destination: &Account,
    ) -> Result<(), LedgerError> {
        let source_balance = store.mutate_balance(&source.id, -transfer.amount)?;
        let destination_balance = store.mutate_balance(&destination.id, transfer.amount)?;

        let metadata = TransferMetadata {
            transfer_id: transfer.id.clone(),
            from_account: source.id.clone(),
            to_account: destination.id.clone(),
        };

        store.append_transaction(Transaction {
            id: new_transaction_id(),
            account_id: source.id.clone(),
            kind: TransactionType::Debit,
            amount: transfer.amount,
            currency: transfer.currency.clone(),
            description: format!("Transfer to {}", destination.account_number),
            balance_after: source_balance,
            created_at: Utc::now(),
            metadata: Some(metadata.clone()),
        });
        store.append_transaction(Transaction {
            id: new_transaction_id(),
            account_id: destination.id.clone(),
            kind: TransactionType::Credit,
            amount: transfer.amount,
            currency: transfer.currency.clone(),
            description: format!("Transfer from {}", source.account_number),
            balance_after: destination_balance,
            created_at: Utc::now(),
            metadata: Some(metadata),
        });

        store.update_transfer(&transfer.id, |transfer| {
            transfer.status = TransferStatus::Processed;
            transfer.processed_at = Some(Utc::now());
        })
    }
}

/// Generate a collision-resistant transfer identifier
fn new_transfer_id() -> String {
    format!("tfr_{}", Uuid::new_v4().simple())
}

/// Generate a collision-resistant transaction identifier
fn new_transaction_id() -> String {
    format!("txn_{}", Uuid::new_v4().simple())
}

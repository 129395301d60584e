//! Ledger store: the authoritative in-memory collections
//!
//! This module provides the `LedgerStore`, which owns the accounts, the
//! append-only transaction log, and the transfers. All reads return cloned
//! snapshots; all writes go through a small set of `pub(crate)` primitives
//! so that only the transfer engine can reach the mutation side.
//!
//! # Thread Safety
//!
//! Accounts and transfers live in `DashMap`s, giving fine-grained per-entry
//! locking: settlement tasks for different transfers mutate different
//! accounts without contending, while two tasks touching the same account
//! are serialized by the entry lock. The transaction log is an
//! `RwLock<Vec<_>>` because it is append-only and ordered; appends take the
//! write lock briefly, listings take the read lock.

use crate::core::seed;
use crate::types::{Account, LedgerError, Transaction, TransactionType, Transfer};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_decimal::Decimal;
use std::sync::RwLock;

/// Optional constraints applied when listing an account's transactions
///
/// Date bounds are inclusive on both ends. A `kind` constraint matches
/// exactly one transaction type.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Keep transactions created at or after this instant
    pub from: Option<DateTime<Utc>>,
    /// Keep transactions created at or before this instant
    pub to: Option<DateTime<Utc>>,
    /// Keep transactions of exactly this kind
    pub kind: Option<TransactionType>,
}

/// Authoritative store for accounts, transactions, and transfers
///
/// One instance is created at process start (usually seeded) and shared
/// behind an `Arc` by the transfer engine, the query layer, and the HTTP
/// state. Nothing is ever deleted.
#[derive(Debug, Default)]
pub struct LedgerStore {
    /// Accounts by ledger identifier
    accounts: DashMap<String, Account>,

    /// Append-only transaction log, in insertion order
    transactions: RwLock<Vec<Transaction>>,

    /// Transfers by ledger identifier
    transfers: DashMap<String, Transfer>,
}

impl LedgerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with the fixed bootstrap data set
    ///
    /// The seed holds three accounts (checking, savings, and a credit
    /// account with a negative balance), ten historical transactions, and
    /// one already-processed transfer.
    pub fn seeded() -> Self {
        let store = Self::new();
        for account in seed::accounts() {
            store.accounts.insert(account.id.clone(), account);
        }
        {
            let mut log = store
                .transactions
                .write()
                .expect("transaction log poisoned");
            log.extend(seed::transactions());
        }
        for transfer in seed::transfers() {
            store.transfers.insert(transfer.id.clone(), transfer);
        }
        store
    }

    /// Look up an account by id
    ///
    /// Returns a snapshot clone, or `None` if the id does not resolve.
    pub fn account(&self, id: &str) -> Option<Account> {
        self.accounts.get(id).map(|entry| entry.value().clone())
    }

    /// Snapshot of all accounts, ordered by id for deterministic output
    pub fn accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        accounts
    }

    /// Look up a transaction by id
    pub fn transaction(&self, id: &str) -> Option<Transaction> {
        self.transactions
            .read()
            .expect("transaction log poisoned")
            .iter()
            .find(|txn| txn.id == id)
            .cloned()
    }

    /// Look up a transfer by id
    pub fn transfer(&self, id: &str) -> Option<Transfer> {
        self.transfers.get(id).map(|entry| entry.value().clone())
    }

    /// List an account's transactions, filtered and newest-first
    ///
    /// Applies the filter's inclusive date bounds and exact kind match,
    /// then sorts by creation time descending. An unknown account id simply
    /// yields an empty list; existence checks belong to the caller.
    pub fn account_transactions(
        &self,
        account_id: &str,
        filter: &TransactionFilter,
    ) -> Vec<Transaction> {
        let log = self.transactions.read().expect("transaction log poisoned");
        let mut matched: Vec<Transaction> = log
            .iter()
            .filter(|txn| txn.account_id == account_id)
            .filter(|txn| filter.from.is_none_or(|from| txn.created_at >= from))
            .filter(|txn| filter.to.is_none_or(|to| txn.created_at <= to))
            .filter(|txn| filter.kind.is_none_or(|kind| txn.kind == kind))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matched
    }

    /// Append a transaction to the end of the log
    ///
    /// The log is never renumbered or deduplicated; callers are responsible
    /// for id uniqueness.
    pub(crate) fn append_transaction(&self, transaction: Transaction) {
        self.transactions
            .write()
            .expect("transaction log poisoned")
            .push(transaction);
    }

    /// Apply a signed delta to an account balance
    ///
    /// This is the exclusive mutation point for balances: a debit passes a
    /// negative delta, a credit a positive one. The adjustment uses checked
    /// arithmetic and refreshes the account's `updated_at`.
    ///
    /// # Returns
    ///
    /// The balance immediately after the mutation, which settlement uses as
    /// the `balance_after` snapshot for the derived transaction.
    ///
    /// # Errors
    ///
    /// * `LedgerError::AccountNotFound` if the id does not resolve
    /// * `LedgerError::BalanceOverflow` if the adjustment leaves the
    ///   representable decimal range
    pub(crate) fn mutate_balance(&self, id: &str, delta: Decimal) -> Result<Decimal, LedgerError> {
        let mut entry = self
            .accounts
            .get_mut(id)
            .ok_or_else(|| LedgerError::account_not_found(id))?;
        let account = entry.value_mut();

        let new_balance = account
            .balance
            .checked_add(delta)
            .ok_or_else(|| LedgerError::balance_overflow(id))?;

        account.balance = new_balance;
        account.updated_at = Utc::now();
        Ok(new_balance)
    }

    /// Insert a newly created transfer
    pub(crate) fn insert_transfer(&self, transfer: Transfer) {
        self.transfers.insert(transfer.id.clone(), transfer);
    }

    /// Update a transfer in place using a closure
    ///
    /// The closure runs while the entry lock is held, so a status change
    /// and its accompanying timestamp land atomically.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::TransferNotFound` if the id does not resolve.
    pub(crate) fn update_transfer<F>(&self, id: &str, f: F) -> Result<(), LedgerError>
    where
        F: FnOnce(&mut Transfer),
    {
        let mut entry = self
            .transfers
            .get_mut(id)
            .ok_or_else(|| LedgerError::transfer_not_found(id))?;
        f(entry.value_mut());
        Ok(())
    }

    /// Drop an account, simulating it disappearing mid-settlement
    #[cfg(test)]
    pub(crate) fn remove_account(&self, id: &str) {
        self.accounts.remove(id);
    }

    /// Force an account status, for exercising the active-account checks
    #[cfg(test)]
    pub(crate) fn set_account_status(&self, id: &str, status: crate::types::AccountStatus) {
        if let Some(mut entry) = self.accounts.get_mut(id) {
            entry.value_mut().status = status;
        }
    }
}

//! Fixed bootstrap data set
//!
//! The service starts with three accounts, ten historical transactions, and
//! one already-processed transfer. The two transfer-linked transactions in
//! the history carry the legacy `transfer` tag; newly settled transfers
//! record a debit/credit pair instead.

use crate::types::{
    Account, AccountStatus, AccountType, Transaction, TransactionType, Transfer, TransferMetadata,
    TransferStatus,
};
use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;

/// Parse a fixed RFC 3339 seed timestamp
fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("seed timestamp literal")
        .with_timezone(&Utc)
}

/// The three bootstrap accounts
pub(crate) fn accounts() -> Vec<Account> {
    vec![
        Account {
            id: "acc_1001".to_string(),
            account_number: "1234567890".to_string(),
            account_type: AccountType::Checking,
            customer_id: "cust_001".to_string(),
            customer_name: "Alice Johnson".to_string(),
            balance: dec!(15000.00),
            currency: "CAD".to_string(),
            status: AccountStatus::Active,
            created_at: ts("2024-01-15T10:00:00Z"),
            updated_at: ts("2024-10-20T14:30:00Z"),
        },
        Account {
            id: "acc_1002".to_string(),
            account_number: "0987654321".to_string(),
            account_type: AccountType::Savings,
            customer_id: "cust_002".to_string(),
            customer_name: "Bob Smith".to_string(),
            balance: dec!(45000.00),
            currency: "CAD".to_string(),
            status: AccountStatus::Active,
            created_at: ts("2024-02-10T09:00:00Z"),
            updated_at: ts("2024-10-21T08:15:00Z"),
        },
        Account {
            id: "acc_1003".to_string(),
            account_number: "5555666677".to_string(),
            account_type: AccountType::Credit,
            customer_id: "cust_003".to_string(),
            customer_name: "Carol White".to_string(),
            // Credit balances are stored negative-as-owed
            balance: dec!(-2500.00),
            currency: "CAD".to_string(),
            status: AccountStatus::Active,
            created_at: ts("2024-03-05T11:30:00Z"),
            updated_at: ts("2024-10-22T16:45:00Z"),
        },
    ]
}

/// The ten bootstrap transactions, in log order
pub(crate) fn transactions() -> Vec<Transaction> {
    let tfr_7001 = TransferMetadata {
        transfer_id: "tfr_7001".to_string(),
        from_account: "acc_1001".to_string(),
        to_account: "acc_1002".to_string(),
    };

    vec![
        Transaction {
            id: "txn_5001".to_string(),
            account_id: "acc_1001".to_string(),
            kind: TransactionType::Credit,
            amount: dec!(5000.00),
            currency: "CAD".to_string(),
            description: "Salary deposit".to_string(),
            balance_after: dec!(15000.00),
            created_at: ts("2024-10-01T09:00:00Z"),
            metadata: None,
        },
        Transaction {
            id: "txn_5002".to_string(),
            account_id: "acc_1001".to_string(),
            kind: TransactionType::Debit,
            amount: dec!(150.00),
            currency: "CAD".to_string(),
            description: "Grocery store purchase".to_string(),
            balance_after: dec!(14850.00),
            created_at: ts("2024-10-05T14:30:00Z"),
            metadata: None,
        },
        Transaction {
            id: "txn_5003".to_string(),
            account_id: "acc_1002".to_string(),
            kind: TransactionType::Credit,
            amount: dec!(10000.00),
            currency: "CAD".to_string(),
            description: "Investment deposit".to_string(),
            balance_after: dec!(45000.00),
            created_at: ts("2024-10-03T10:15:00Z"),
            metadata: None,
        },
        Transaction {
            id: "txn_5004".to_string(),
            account_id: "acc_1002".to_string(),
            kind: TransactionType::Debit,
            amount: dec!(500.00),
            currency: "CAD".to_string(),
            description: "ATM withdrawal".to_string(),
            balance_after: dec!(44500.00),
            created_at: ts("2024-10-07T16:20:00Z"),
            metadata: None,
        },
        Transaction {
            id: "txn_5005".to_string(),
            account_id: "acc_1003".to_string(),
            kind: TransactionType::Debit,
            amount: dec!(1200.00),
            currency: "CAD".to_string(),
            description: "Electronics purchase".to_string(),
            balance_after: dec!(-2500.00),
            created_at: ts("2024-10-02T11:45:00Z"),
            metadata: None,
        },
        Transaction {
            id: "txn_5006".to_string(),
            account_id: "acc_1003".to_string(),
            kind: TransactionType::Credit,
            amount: dec!(500.00),
            currency: "CAD".to_string(),
            description: "Payment received".to_string(),
            balance_after: dec!(-2000.00),
            created_at: ts("2024-10-08T13:00:00Z"),
            metadata: None,
        },
        Transaction {
            id: "txn_5007".to_string(),
            account_id: "acc_1001".to_string(),
            kind: TransactionType::Transfer,
            amount: dec!(300.00),
            currency: "CAD".to_string(),
            description: "Transfer to savings".to_string(),
            balance_after: dec!(14550.00),
            created_at: ts("2024-10-10T10:00:00Z"),
            metadata: Some(tfr_7001.clone()),
        },
        Transaction {
            id: "txn_5008".to_string(),
            account_id: "acc_1002".to_string(),
            kind: TransactionType::Transfer,
            amount: dec!(300.00),
            currency: "CAD".to_string(),
            description: "Transfer from checking".to_string(),
            balance_after: dec!(44800.00),
            created_at: ts("2024-10-10T10:00:01Z"),
            metadata: Some(tfr_7001),
        },
        Transaction {
            id: "txn_5009".to_string(),
            account_id: "acc_1001".to_string(),
            kind: TransactionType::Debit,
            amount: dec!(75.50),
            currency: "CAD".to_string(),
            description: "Restaurant payment".to_string(),
            balance_after: dec!(14474.50),
            created_at: ts("2024-10-15T19:30:00Z"),
            metadata: None,
        },
        Transaction {
            id: "txn_5010".to_string(),
            account_id: "acc_1002".to_string(),
            kind: TransactionType::Credit,
            amount: dec!(1500.00),
            currency: "CAD".to_string(),
            description: "Interest payment".to_string(),
            balance_after: dec!(46300.00),
            created_at: ts("2024-10-20T00:00:00Z"),
            metadata: None,
        },
    ]
}

/// The single bootstrap transfer, already processed
pub(crate) fn transfers() -> Vec<Transfer> {
    vec![Transfer {
        id: "tfr_7001".to_string(),
        from_account_id: "acc_1001".to_string(),
        to_account_id: "acc_1002".to_string(),
        amount: dec!(300.00),
        currency: "CAD".to_string(),
        description: "Transfer to savings".to_string(),
        status: TransferStatus::Processed,
        created_at: ts("2024-10-10T09:59:55Z"),
        processed_at: Some(ts("2024-10-10T10:00:00Z")),
    }]
}

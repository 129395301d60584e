//! Transfer-related types for the accounts service
//!
//! A transfer tracks a request to move funds between two accounts through
//! an asynchronous lifecycle. Creation is validated synchronously; the
//! balance effects settle later on a timer-driven task.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a transfer
///
/// Valid progressions are `Queued -> Processing -> Processed` and
/// `Queued -> Processing -> Failed`. A transfer never skips `Processing`,
/// and the two terminal states are immutable once reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    /// Accepted and waiting for the queue delay to elapse
    Queued,
    /// Past the queue delay, waiting for settlement
    Processing,
    /// Balances mutated and the transaction pair recorded
    Processed,
    /// A referenced account disappeared before settlement
    Failed,
}

impl TransferStatus {
    /// Whether this state admits no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransferStatus::Processed | TransferStatus::Failed)
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransferStatus::Queued => "queued",
            TransferStatus::Processing => "processing",
            TransferStatus::Processed => "processed",
            TransferStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// A funds movement between two accounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// Ledger identifier, e.g. `tfr_7001`
    pub id: String,

    pub from_account_id: String,

    pub to_account_id: String,

    /// Positive amount moved from source to destination
    pub amount: Decimal,

    pub currency: String,

    pub description: String,

    pub status: TransferStatus,

    pub created_at: DateTime<Utc>,

    /// Set when the transfer reaches `Processed`; absent until then
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::queued(TransferStatus::Queued, false)]
    #[case::processing(TransferStatus::Processing, false)]
    #[case::processed(TransferStatus::Processed, true)]
    #[case::failed(TransferStatus::Failed, true)]
    fn test_terminal_states(#[case] status: TransferStatus, #[case] terminal: bool) {
        assert_eq!(status.is_terminal(), terminal);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransferStatus::Processing).unwrap(),
            "\"processing\""
        );
    }

    #[test]
    fn test_processed_at_omitted_until_set() {
        let transfer = Transfer {
            id: "tfr_1".to_string(),
            from_account_id: "acc_1".to_string(),
            to_account_id: "acc_2".to_string(),
            amount: Decimal::new(30000, 2),
            currency: "CAD".to_string(),
            description: "Rent".to_string(),
            status: TransferStatus::Queued,
            created_at: Utc::now(),
            processed_at: None,
        };

        let json = serde_json::to_value(&transfer).unwrap();
        assert!(json.get("processedAt").is_none());
        assert_eq!(json["fromAccountId"], "acc_1");
        assert_eq!(json["status"], "queued");
    }
}

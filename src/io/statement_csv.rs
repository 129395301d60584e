//! CSV rendering for account statements
//!
//! Writes a statement's transaction table in CSV form with columns:
//! date, id, type, description, amount, currency, balanceAfter.
//! Rendering is pure (writes into any `Write`) for easy testing.

use crate::core::query::Statement;
use crate::types::LedgerError;
use std::io::Write;

/// Write a statement's transactions as CSV
///
/// Emits a header row followed by one row per transaction, in the
/// statement's own order (newest first).
///
/// # Arguments
///
/// * `statement` - The generated statement to render
/// * `output` - Writer receiving the CSV bytes
///
/// # Errors
///
/// Returns `LedgerError::CsvRender` if writing fails.
pub fn write_statement_csv(
    statement: &Statement,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record([
            "date",
            "id",
            "type",
            "description",
            "amount",
            "currency",
            "balanceAfter",
        ])
        .map_err(|e| LedgerError::CsvRender {
            message: e.to_string(),
        })?;

    for txn in &statement.transactions {
        writer
            .write_record([
                txn.created_at.to_rfc3339().as_str(),
                txn.id.as_str(),
                txn.kind.to_string().as_str(),
                txn.description.as_str(),
                txn.amount.to_string().as_str(),
                txn.currency.as_str(),
                txn.balance_after.to_string().as_str(),
            ])
            .map_err(|e| LedgerError::CsvRender {
                message: e.to_string(),
            })?;
    }

    writer.flush().map_err(|e| LedgerError::CsvRender {
        message: e.to_string(),
    })?;

    Ok(())
}

/// Render a statement's transactions to a CSV string
///
/// Convenience wrapper over [`write_statement_csv`] for transport layers
/// that need the whole document in memory.
pub fn render_statement_csv(statement: &Statement) -> Result<String, LedgerError> {
    let mut buffer = Vec::new();
    write_statement_csv(statement, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| LedgerError::CsvRender {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::{statement, StatementQuery};
    use crate::core::LedgerStore;
    use chrono::{TimeZone, Utc};

    fn seeded_statement() -> Statement {
        let store = LedgerStore::seeded();
        let query = StatementQuery {
            from: Some(Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0).unwrap()),
            to: Some(Utc.with_ymd_and_hms(2024, 10, 31, 0, 0, 0).unwrap()),
            format: Some("csv".to_string()),
        };
        statement(&store, "acc_1001", &query).unwrap()
    }

    #[test]
    fn test_header_plus_row_per_transaction() {
        let statement = seeded_statement();

        let rendered = render_statement_csv(&statement).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 1 + statement.transactions.len());
        assert_eq!(
            lines[0],
            "date,id,type,description,amount,currency,balanceAfter"
        );
    }

    #[test]
    fn test_rows_carry_transaction_fields() {
        let statement = seeded_statement();

        let rendered = render_statement_csv(&statement).unwrap();

        // Newest transaction in the window comes first
        let first_row = rendered.lines().nth(1).unwrap();
        assert!(first_row.contains("txn_5009"));
        assert!(first_row.contains("debit"));
        assert!(first_row.contains("75.50"));
        assert!(first_row.contains("14474.50"));
    }

    #[test]
    fn test_empty_window_renders_header_only() {
        let store = LedgerStore::seeded();
        let query = StatementQuery {
            from: Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()),
            to: Some(Utc.with_ymd_and_hms(2023, 1, 31, 0, 0, 0).unwrap()),
            format: Some("csv".to_string()),
        };
        let statement = statement(&store, "acc_1001", &query).unwrap();

        let rendered = render_statement_csv(&statement).unwrap();
        assert_eq!(rendered.lines().count(), 1);
    }
}

//! I/O module
//!
//! Handles CSV output.
//!
//! # Components
//!
//! - `statement_csv` - Statement rendering for the `csv` output format

pub mod statement_csv;

pub use statement_csv::{render_statement_csv, write_statement_csv};

//! # Ledger Reconcile
//!
//! Reconciliation of two independently recorded transaction lists, such as a
//! company's books and the matching bank statement.
//!
//! ## Features
//!
//! - **One-day tolerance**: a record matches a counterpart dated the previous
//!   day, the same day, or the next day, tried in that order
//! - **Exact field matching**: category, amount and description must be equal
//!   as text
//! - **At-most-once pairing**: every record is paired with at most one record
//!   from the other side, duplicates included
//! - **Summaries**: matched and missing totals computed with decimal arithmetic
//! - **Source abstraction**: records can come from any `RecordSource`
//!
//! ## Quick Start
//!
//! ```rust
//! use ledger_reconcile::reconcile_rows;
//!
//! let books = vec![vec!["2020-12-04", "Tech", "16.00", "Bitbucket"]];
//! let bank = vec![vec!["2020-12-03", "Tech", "16.00", "Bitbucket"]];
//!
//! let (books_out, bank_out) = reconcile_rows(&books, &bank).unwrap();
//! assert_eq!(books_out[0][4], "FOUND");
//! assert_eq!(bank_out[0][4], "FOUND");
//! ```

pub mod reconciliation;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use reconciliation::*;
pub use traits::*;
pub use types::*;

//! Traits for record sources and validation rules

use crate::types::*;

/// Supplier of transaction records for one side of a reconciliation
///
/// This trait keeps the reconciler independent of where records live
/// (CSV exports, bank APIs, a database, in-memory fixtures, etc.).
pub trait RecordSource {
    /// Load every record, in the order the source recorded them
    fn records(&self) -> ReconcileResult<Vec<TransactionRecord>>;
}

/// Trait for implementing custom record validation rules
pub trait RecordValidator: Send + Sync {
    /// Validate a record before it takes part in matching
    fn validate_record(&self, record: &TransactionRecord) -> ReconcileResult<()>;
}

/// Validator that accepts every well-formed record
pub struct DefaultRecordValidator;

impl RecordValidator for DefaultRecordValidator {
    fn validate_record(&self, _record: &TransactionRecord) -> ReconcileResult<()> {
        Ok(())
    }
}

//! Validation utilities

use bigdecimal::BigDecimal;
use std::str::FromStr;

use crate::traits::*;
use crate::types::*;

/// Parse raw rows for one side, failing on the first malformed row
pub fn parse_rows<R, S>(side: Side, rows: &[R]) -> ReconcileResult<Vec<TransactionRecord>>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    rows.iter()
        .enumerate()
        .map(|(position, row)| {
            TransactionRecord::from_fields(row.as_ref()).map_err(|e| e.at(side, position))
        })
        .collect()
}

/// Parse an amount string as a decimal number
pub fn parse_amount(amount: &str) -> ReconcileResult<BigDecimal> {
    BigDecimal::from_str(amount.trim())
        .map_err(|_| ReconcileError::InvalidAmount(format!("\"{}\" is not a number", amount)))
}

/// Validate that a category is usable
pub fn validate_category(category: &str) -> ReconcileResult<()> {
    if category.trim().is_empty() {
        return Err(ReconcileError::Validation(
            "Category cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a description is usable
pub fn validate_description(description: &str) -> ReconcileResult<()> {
    if description.trim().is_empty() {
        return Err(ReconcileError::Validation(
            "Description cannot be empty".to_string(),
        ));
    }

    if description.chars().count() > 500 {
        return Err(ReconcileError::Validation(
            "Description cannot exceed 500 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that an amount parses as a decimal number
pub fn validate_amount(amount: &str) -> ReconcileResult<()> {
    parse_amount(amount)
        .map(|_| ())
        .map_err(|e| ReconcileError::Validation(e.to_string()))
}

/// Record validator with field-level checks
///
/// Matching still compares amounts as text; this only makes sure they are
/// numbers so summaries can total them.
pub struct StrictRecordValidator;

impl RecordValidator for StrictRecordValidator {
    fn validate_record(&self, record: &TransactionRecord) -> ReconcileResult<()> {
        validate_category(&record.category)?;
        validate_amount(&record.amount)?;
        validate_description(&record.description)?;
        Ok(())
    }
}

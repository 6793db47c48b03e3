//! Core types and data structures for reconciliation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date layout used when reading and writing record fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of fields in a raw transaction row
pub const RECORD_FIELD_COUNT: usize = 4;

/// Which of the two ledgers a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The ledger being checked (e.g. the internal books)
    A,
    /// The ledger checked against (e.g. the bank statement)
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "side A"),
            Side::B => write!(f, "side B"),
        }
    }
}

/// A single transaction as recorded by one of the two sources
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Posting date
    pub date: NaiveDate,
    /// Category label, compared verbatim
    pub category: String,
    /// Amount in its textual form; `"16.00"` and `"16.0"` are different amounts
    pub amount: String,
    /// Free-form description, compared verbatim
    pub description: String,
}

impl TransactionRecord {
    /// Create a new transaction record
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }

    /// Parse a record from its `[date, category, amount, description]` fields
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> ReconcileResult<Self> {
        if fields.len() != RECORD_FIELD_COUNT {
            return Err(ReconcileError::MalformedRecord(format!(
                "expected {} fields, found {}",
                RECORD_FIELD_COUNT,
                fields.len()
            )));
        }

        let raw_date = fields[0].as_ref();
        let date = parse_iso_date(raw_date).ok_or_else(|| {
            ReconcileError::MalformedRecord(format!("invalid date \"{}\"", raw_date))
        })?;

        Ok(Self::new(
            date,
            fields[1].as_ref(),
            fields[2].as_ref(),
            fields[3].as_ref(),
        ))
    }

    /// Render the record back into its four string fields
    pub fn to_fields(&self) -> Vec<String> {
        vec![
            self.date.format(DATE_FORMAT).to_string(),
            self.category.clone(),
            self.amount.clone(),
            self.description.clone(),
        ]
    }

    /// Lookup key for this record shifted to `date`
    pub fn key_at(&self, date: NaiveDate) -> MatchKey<'_> {
        MatchKey {
            date,
            category: &self.category,
            amount: &self.amount,
            description: &self.description,
        }
    }

    /// Lookup key for this record at its own date
    pub fn key(&self) -> MatchKey<'_> {
        self.key_at(self.date)
    }
}

/// Parse a date written exactly as `YYYY-MM-DD`
///
/// chrono alone accepts unpadded months and days; only the canonical
/// spelling is allowed so that rendering the date gives back the input.
fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()?;
    (date.format(DATE_FORMAT).to_string() == raw).then_some(date)
}

/// Equality key used to pair records across the two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchKey<'r> {
    pub date: NaiveDate,
    pub category: &'r str,
    pub amount: &'r str,
    pub description: &'r str,
}

/// Outcome of reconciling a single record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchStatus {
    /// A counterpart was found on the other side
    Found,
    /// No counterpart exists on the other side
    Missing,
}

impl MatchStatus {
    /// Wire form of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Found => "FOUND",
            MatchStatus::Missing => "MISSING",
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, MatchStatus::Found)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction record tagged with its reconciliation status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedRecord {
    #[serde(flatten)]
    pub record: TransactionRecord,
    pub status: MatchStatus,
}

impl AnnotatedRecord {
    pub fn new(record: TransactionRecord, status: MatchStatus) -> Self {
        Self { record, status }
    }

    /// Render as `[date, category, amount, description, status]`
    pub fn to_fields(&self) -> Vec<String> {
        let mut fields = self.record.to_fields();
        fields.push(self.status.as_str().to_string());
        fields
    }

    pub fn is_found(&self) -> bool {
        self.status.is_found()
    }
}

/// Errors that can occur while reconciling
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Record source error: {0}")]
    Source(String),
}

impl ReconcileError {
    /// Prefix the message with the side and position of the offending record
    pub fn at(self, side: Side, index: usize) -> Self {
        let locate = |reason: String| format!("{} record {}: {}", side, index, reason);
        match self {
            ReconcileError::MalformedRecord(reason) => {
                ReconcileError::MalformedRecord(locate(reason))
            }
            ReconcileError::Validation(reason) => ReconcileError::Validation(locate(reason)),
            ReconcileError::InvalidAmount(reason) => ReconcileError::InvalidAmount(locate(reason)),
            other => other,
        }
    }
}

/// Result type for reconciliation operations
pub type ReconcileResult<T> = Result<T, ReconcileError>;

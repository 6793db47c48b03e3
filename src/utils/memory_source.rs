//! In-memory record source for testing

use crate::traits::*;
use crate::types::*;
use crate::utils::validation::parse_rows;

/// In-memory record source for testing and development
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<TransactionRecord>,
}

impl MemorySource {
    /// Create a source over already-typed records
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    /// Create a source from `[date, category, amount, description]` rows
    pub fn from_rows<R, S>(side: Side, rows: &[R]) -> ReconcileResult<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        Ok(Self::new(parse_rows(side, rows)?))
    }

    /// Append a record
    pub fn push(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for MemorySource {
    fn records(&self) -> ReconcileResult<Vec<TransactionRecord>> {
        Ok(self.records.clone())
    }
}

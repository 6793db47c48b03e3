//! Lookup index over the records a match may consume

use std::collections::{HashMap, VecDeque};

use crate::types::*;

/// Map from match key to the positions still available for that key
///
/// Positions sharing a key are kept in insertion order and handed out
/// first-in, first-out.
#[derive(Debug, Default)]
pub struct SideIndex<'r> {
    slots: HashMap<MatchKey<'r>, VecDeque<usize>>,
    available: usize,
}

impl<'r> SideIndex<'r> {
    /// Index every record by its own key
    pub fn build(records: &'r [TransactionRecord]) -> Self {
        let mut slots: HashMap<MatchKey<'r>, VecDeque<usize>> = HashMap::new();
        for (position, record) in records.iter().enumerate() {
            slots.entry(record.key()).or_default().push_back(position);
        }

        log::debug!(
            "indexed {} records under {} distinct keys",
            records.len(),
            slots.len()
        );

        Self {
            slots,
            available: records.len(),
        }
    }

    /// Consume the oldest available position for `key`
    pub fn take(&mut self, key: &MatchKey<'r>) -> Option<usize> {
        let queue = self.slots.get_mut(key)?;
        let position = queue.pop_front()?;
        if queue.is_empty() {
            self.slots.remove(key);
        }
        self.available -= 1;
        Some(position)
    }

    /// Number of positions not yet consumed
    pub fn available(&self) -> usize {
        self.available
    }

    /// True once every position has been consumed
    pub fn is_empty(&self) -> bool {
        self.available == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, amount: &str) -> TransactionRecord {
        TransactionRecord::new(
            NaiveDate::from_ymd_opt(2020, 12, day).unwrap(),
            "Tech",
            amount,
            "Bitbucket",
        )
    }

    #[test]
    fn test_duplicates_are_taken_in_order() {
        let records = vec![record(1, "16.00"), record(2, "16.00"), record(1, "16.00")];
        let mut index = SideIndex::build(&records);
        let key = records[0].key();

        assert_eq!(index.available(), 3);
        assert_eq!(index.take(&key), Some(0));
        assert_eq!(index.take(&key), Some(2));
        assert_eq!(index.take(&key), None);
        assert_eq!(index.available(), 1);
    }

    #[test]
    fn test_amount_text_is_part_of_key() {
        let records = vec![record(1, "16.00")];
        let rounded = record(1, "16.0");
        let mut index = SideIndex::build(&records);

        assert_eq!(index.take(&rounded.key()), None);
        assert!(!index.is_empty());
    }

    #[test]
    fn test_empty_index() {
        let records: Vec<TransactionRecord> = Vec::new();
        let index = SideIndex::build(&records);

        assert!(index.is_empty());
    }
}

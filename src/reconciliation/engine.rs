//! Matching pass that pairs Side A records with Side B records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::reconciliation::{ReconciliationSummary, SideIndex};
use crate::traits::*;
use crate::types::*;
use crate::utils::validation::parse_rows;

/// Which candidate date produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchWindow {
    /// Side B posted the day before Side A
    PreviousDay,
    /// Both sides posted on the same day
    SameDay,
    /// Side B posted the day after Side A
    NextDay,
}

impl MatchWindow {
    /// Candidate windows in the order they are tried
    pub const ALL: [MatchWindow; 3] = [
        MatchWindow::PreviousDay,
        MatchWindow::SameDay,
        MatchWindow::NextDay,
    ];

    /// Offset in days from the Side A date to the Side B date
    pub fn day_offset(&self) -> i64 {
        match self {
            MatchWindow::PreviousDay => -1,
            MatchWindow::SameDay => 0,
            MatchWindow::NextDay => 1,
        }
    }

    /// Side B date to look for, `None` past the ends of the calendar
    pub fn candidate_date(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            MatchWindow::PreviousDay => date.pred_opt(),
            MatchWindow::SameDay => Some(date),
            MatchWindow::NextDay => date.succ_opt(),
        }
    }
}

/// A Side A position paired with the Side B position it consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPair {
    pub side_a: usize,
    pub side_b: usize,
    pub window: MatchWindow,
}

/// Annotated output of a reconciliation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reconciliation {
    side_a: Vec<AnnotatedRecord>,
    side_b: Vec<AnnotatedRecord>,
    pairs: Vec<MatchPair>,
}

impl Reconciliation {
    /// Side A records in input order
    pub fn side_a(&self) -> &[AnnotatedRecord] {
        &self.side_a
    }

    /// Side B records in input order
    pub fn side_b(&self) -> &[AnnotatedRecord] {
        &self.side_b
    }

    /// Pairings, ordered by Side A position
    pub fn pairs(&self) -> &[MatchPair] {
        &self.pairs
    }

    /// Number of matched pairs
    pub fn found_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn missing_side_a(&self) -> impl Iterator<Item = &AnnotatedRecord> {
        self.side_a.iter().filter(|r| !r.is_found())
    }

    pub fn missing_side_b(&self) -> impl Iterator<Item = &AnnotatedRecord> {
        self.side_b.iter().filter(|r| !r.is_found())
    }

    /// True when every record on both sides found a counterpart
    pub fn is_fully_reconciled(&self) -> bool {
        self.pairs.len() == self.side_a.len() && self.pairs.len() == self.side_b.len()
    }

    /// Counts and decimal totals for this run
    pub fn summary(&self) -> ReconcileResult<ReconciliationSummary> {
        ReconciliationSummary::from_reconciliation(self)
    }

    /// Split into the two annotated sequences
    pub fn into_parts(self) -> (Vec<AnnotatedRecord>, Vec<AnnotatedRecord>) {
        (self.side_a, self.side_b)
    }

    /// Split into `[date, category, amount, description, status]` rows
    pub fn into_rows(self) -> (Vec<Vec<String>>, Vec<Vec<String>>) {
        let rows = |records: Vec<AnnotatedRecord>| {
            records
                .iter()
                .map(AnnotatedRecord::to_fields)
                .collect::<Vec<_>>()
        };
        (rows(self.side_a), rows(self.side_b))
    }
}

/// Reconcile two ledgers
///
/// Each Side A record, in order, consumes the first available Side B record
/// whose category, amount and description are equal and whose date is the
/// day before, the same day, or the day after (tried in that order). Side B
/// records sharing a key are consumed oldest position first.
pub fn reconcile(side_a: &[TransactionRecord], side_b: &[TransactionRecord]) -> Reconciliation {
    let mut index = SideIndex::build(side_b);
    let mut status_b = vec![MatchStatus::Missing; side_b.len()];
    let mut pairs = Vec::new();
    let mut annotated_a = Vec::with_capacity(side_a.len());

    for (position, record) in side_a.iter().enumerate() {
        let status = match find_match(&mut index, record) {
            Some((matched, window)) => {
                log::trace!(
                    "side A record {} matched side B record {} ({:?})",
                    position,
                    matched,
                    window
                );
                status_b[matched] = MatchStatus::Found;
                pairs.push(MatchPair {
                    side_a: position,
                    side_b: matched,
                    window,
                });
                MatchStatus::Found
            }
            None => MatchStatus::Missing,
        };
        annotated_a.push(AnnotatedRecord::new(record.clone(), status));
    }

    let annotated_b = side_b
        .iter()
        .zip(status_b)
        .map(|(record, status)| AnnotatedRecord::new(record.clone(), status))
        .collect();

    log::debug!(
        "reconciled {} side A and {} side B records: {} matched, {} side B left over",
        side_a.len(),
        side_b.len(),
        pairs.len(),
        index.available()
    );

    Reconciliation {
        side_a: annotated_a,
        side_b: annotated_b,
        pairs,
    }
}

fn find_match<'r>(
    index: &mut SideIndex<'r>,
    record: &'r TransactionRecord,
) -> Option<(usize, MatchWindow)> {
    if index.is_empty() {
        return None;
    }
    MatchWindow::ALL.iter().find_map(|window| {
        let date = window.candidate_date(record.date)?;
        index
            .take(&record.key_at(date))
            .map(|position| (position, *window))
    })
}

/// Reconcile two ledgers given as `[date, category, amount, description]` rows
///
/// Both sides are parsed before any matching happens; the first malformed row
/// aborts the call. Output rows carry the status as a fifth field.
pub fn reconcile_rows<RA, SA, RB, SB>(
    side_a: &[RA],
    side_b: &[RB],
) -> ReconcileResult<(Vec<Vec<String>>, Vec<Vec<String>>)>
where
    RA: AsRef<[SA]>,
    SA: AsRef<str>,
    RB: AsRef<[SB]>,
    SB: AsRef<str>,
{
    let records_a = parse_rows(Side::A, side_a)?;
    let records_b = parse_rows(Side::B, side_b)?;
    Ok(reconcile(&records_a, &records_b).into_rows())
}

/// Reconciler with pluggable record validation
pub struct Reconciler {
    validator: Box<dyn RecordValidator>,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new()
    }
}

impl Reconciler {
    /// Create a reconciler that accepts every well-formed record
    pub fn new() -> Self {
        Self {
            validator: Box::new(DefaultRecordValidator),
        }
    }

    /// Create a reconciler with a custom validator
    pub fn with_validator(validator: Box<dyn RecordValidator>) -> Self {
        Self { validator }
    }

    /// Run the validator over every record of one side
    pub fn validate_side(&self, side: Side, records: &[TransactionRecord]) -> ReconcileResult<()> {
        for (position, record) in records.iter().enumerate() {
            if let Err(err) = self.validator.validate_record(record) {
                let err = err.at(side, position);
                log::warn!("rejected record: {}", err);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Validate both sides, then reconcile them
    pub fn reconcile(
        &self,
        side_a: &[TransactionRecord],
        side_b: &[TransactionRecord],
    ) -> ReconcileResult<Reconciliation> {
        self.validate_side(Side::A, side_a)?;
        self.validate_side(Side::B, side_b)?;
        Ok(reconcile(side_a, side_b))
    }

    /// Load both sides from their sources and reconcile them
    pub fn reconcile_sources<A, B>(&self, side_a: &A, side_b: &B) -> ReconcileResult<Reconciliation>
    where
        A: RecordSource + ?Sized,
        B: RecordSource + ?Sized,
    {
        let records_a = side_a.records()?;
        let records_b = side_b.records()?;
        self.reconcile(&records_a, &records_b)
    }
}

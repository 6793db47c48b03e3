//! Reconciliation totals

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::reconciliation::{MatchWindow, Reconciliation};
use crate::types::*;
use crate::utils::validation::parse_amount;

/// Counts and amount totals for one reconciliation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationSummary {
    pub side_a_count: usize,
    pub side_b_count: usize,
    pub matched_count: usize,
    /// Matches found one day earlier on Side B
    pub previous_day_matches: usize,
    pub same_day_matches: usize,
    /// Matches found one day later on Side B
    pub next_day_matches: usize,
    /// Sum of matched Side A amounts
    pub matched_amount: BigDecimal,
    /// Sum of Side A amounts without a counterpart
    pub missing_side_a_amount: BigDecimal,
    /// Sum of Side B amounts without a counterpart
    pub missing_side_b_amount: BigDecimal,
    pub is_fully_reconciled: bool,
}

impl ReconciliationSummary {
    /// Compute the summary, parsing every amount as a decimal
    pub fn from_reconciliation(reconciliation: &Reconciliation) -> ReconcileResult<Self> {
        let mut matched_amount = BigDecimal::from(0);
        let mut missing_side_a_amount = BigDecimal::from(0);
        for (position, annotated) in reconciliation.side_a().iter().enumerate() {
            let amount =
                parse_amount(&annotated.record.amount).map_err(|e| e.at(Side::A, position))?;
            if annotated.is_found() {
                matched_amount += amount;
            } else {
                missing_side_a_amount += amount;
            }
        }

        let mut missing_side_b_amount = BigDecimal::from(0);
        for (position, annotated) in reconciliation.side_b().iter().enumerate() {
            if annotated.is_found() {
                continue;
            }
            missing_side_b_amount +=
                parse_amount(&annotated.record.amount).map_err(|e| e.at(Side::B, position))?;
        }

        let count_window = |window: MatchWindow| {
            reconciliation
                .pairs()
                .iter()
                .filter(|pair| pair.window == window)
                .count()
        };

        Ok(Self {
            side_a_count: reconciliation.side_a().len(),
            side_b_count: reconciliation.side_b().len(),
            matched_count: reconciliation.found_count(),
            previous_day_matches: count_window(MatchWindow::PreviousDay),
            same_day_matches: count_window(MatchWindow::SameDay),
            next_day_matches: count_window(MatchWindow::NextDay),
            matched_amount,
            missing_side_a_amount,
            missing_side_b_amount,
            is_fully_reconciled: reconciliation.is_fully_reconciled(),
        })
    }

    /// Net difference between the unmatched amounts of the two sides
    pub fn net_discrepancy(&self) -> BigDecimal {
        &self.missing_side_a_amount - &self.missing_side_b_amount
    }
}

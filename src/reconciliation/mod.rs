//! Reconciliation of two independently recorded transaction lists
//!
//! Every Side A record looks for an unconsumed Side B record with the same
//! category, amount and description dated the previous day, the same day, or
//! the next day, checked in that order.

pub mod engine;
pub mod index;
pub mod summary;

pub use engine::*;
pub use index::*;
pub use summary::*;

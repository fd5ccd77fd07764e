//! Playoffs domain - bracket generation, advancement, reversal and teardown
//!
//! A bracket is a set of `playoffs` rows: three game rows per slot, one slot
//! per match-up, rounds halving until the single `FINAL` slot. The actions
//! in this module are the only writers; each runs as one transaction.

pub mod actions;
pub mod errors;
pub mod models;
pub mod seeding;

pub use errors::PlayoffsError;
pub use models::game::{PlayoffGame, SlotSide};

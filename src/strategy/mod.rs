//! The computer's side of the table.
//!
//! A mostly-exploit, sometimes-explore opponent: it usually reacts to the
//! player's recent tendency, sometimes counters their single last move,
//! and occasionally acts unpredictably. Intentionally biased toward the
//! house.
//!
//! - [`Tactic`] — one way of answering a move
//! - [`Policy`] — weighted bands choosing a tactic from a uniform draw
//! - [`Selector`] — cold-start fallback plus policy dispatch
mod policy;
mod selector;
mod tactic;

pub use policy::*;
pub use selector::*;
pub use tactic::*;

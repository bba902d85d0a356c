//! Rules of the game and the record of play.
//!
//! - [`Move`] — ROCK / PAPER / SCISSORS and the cyclic beats relation
//! - [`Outcome`] — result of a round, a pure function of both moves
//! - [`History`] — bounded FIFO record of a player's moves
//! - [`Transitions`] — first-order move-to-move counts over a history
mod history;
mod moves;
mod outcome;
mod transitions;

pub use history::*;
pub use moves::*;
pub use outcome::*;
pub use transitions::*;

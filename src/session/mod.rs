//! One player's seat at the table: their history and running score.
mod round;
mod session;
mod tally;

pub use round::*;
pub use session::*;
pub use tally::*;

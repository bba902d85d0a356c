use crate::game::History;
use crate::game::Move;
use rand::Rng;

/// A way of answering the player's last move.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Tactic {
    /// Predict the player's next move from their transition habit and beat it.
    Pattern,
    /// Beat the player's last move.
    Counter,
    /// Repeat the player's last move, forcing a draw if they repeat too.
    Mirror,
    /// Uniformly random move.
    Noise,
}

impl Tactic {
    pub fn respond<R: Rng>(&self, last: Move, history: &History, rng: &mut R) -> Move {
        match self {
            Tactic::Pattern => match history.transitions().predict(last) {
                Some(next) => next.loses(),
                None => Tactic::Counter.respond(last, history, rng),
            },
            Tactic::Counter => last.loses(),
            Tactic::Mirror => last,
            Tactic::Noise => Move::sample(rng),
        }
    }
}

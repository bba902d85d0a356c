use crate::game::Move;
use crate::game::Outcome;

/// A completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub player: Move,
    pub computer: Move,
    pub outcome: Outcome,
}

impl From<(Move, Move)> for Round {
    fn from((player, computer): (Move, Move)) -> Self {
        Self {
            player,
            computer,
            outcome: Outcome::from((player, computer)),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {} => {}", self.player, self.computer, self.outcome)
    }
}

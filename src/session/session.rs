use super::Round;
use super::Tally;
use crate::game::History;
use crate::game::Move;
use crate::strategy::Selector;
use rand::Rng;

/// Explicitly owned per-player state: the only thing carried across rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    history: History,
    tally: Tally,
}

impl Session {
    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn tally(&self) -> &Tally {
        &self.tally
    }
    /// Computer's move for the coming round, before the player's is known.
    pub fn propose<R: Rng>(&self, selector: &Selector, last: Option<Move>, rng: &mut R) -> Move {
        selector.select(last, &self.history, rng)
    }
    /// Settles a round and records the player's move.
    pub fn settle(&mut self, player: Move, computer: Move) -> Round {
        let round = Round::from((player, computer));
        self.tally.witness(round.outcome);
        self.history.push(player);
        round
    }
    /// Full round: select against `last`, decide, record.
    pub fn play<R: Rng>(
        &mut self,
        selector: &Selector,
        player: Move,
        last: Option<Move>,
        rng: &mut R,
    ) -> Round {
        let computer = self.propose(selector, last, rng);
        self.settle(player, computer)
    }
}

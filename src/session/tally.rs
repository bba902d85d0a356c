use crate::Count;
use crate::game::Outcome;
use serde::Deserialize;
use serde::Serialize;

/// Running score of a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub player: Count,
    pub computer: Count,
    pub draws: Count,
}

impl Tally {
    pub fn witness(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => self.player += 1,
            Outcome::ComputerWins => self.computer += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
    pub fn rounds(&self) -> Count {
        self.player + self.computer + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "player {} / computer {} / draws {}",
            self.player, self.computer, self.draws
        )
    }
}

use super::Move;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;

/// Result of a round, seen from the player's side of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    PlayerWins,
    ComputerWins,
    Draw,
}

/// (player, computer)
impl From<(Move, Move)> for Outcome {
    fn from((player, computer): (Move, Move)) -> Self {
        if player == computer {
            Outcome::Draw
        } else if player.beats() == computer {
            Outcome::PlayerWins
        } else {
            Outcome::ComputerWins
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::PlayerWins => write!(f, "PLAYER_WINS"),
            Outcome::ComputerWins => write!(f, "COMPUTER_WINS"),
            Outcome::Draw => write!(f, "DRAW"),
        }
    }
}

/// Decide a round from raw ordinals.
///
/// Fails on anything outside {0, 1, 2}. Coercing a bad ordinal here would
/// leak into a session's history and skew every later round.
pub fn determine_outcome(player: i64, computer: i64) -> anyhow::Result<Outcome> {
    let player = Move::try_from(player)?;
    let computer = Move::try_from(computer)?;
    Ok(Outcome::from((player, computer)))
}

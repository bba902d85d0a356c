use crate::Count;
use crate::game::Outcome;
use crate::session::Round;
use crate::session::Session;
use crate::session::Tally;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRound {
    pub player_move: u8,
    pub computer_move: u8,
    pub computer_name: String,
    pub outcome: Outcome,
    pub tally: Tally,
}

impl From<(Round, Tally)> for ApiRound {
    fn from((round, tally): (Round, Tally)) -> Self {
        Self {
            player_move: u8::from(round.player),
            computer_move: u8::from(round.computer),
            computer_name: round.computer.name().to_string(),
            outcome: round.outcome,
            tally,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSession {
    pub session: String,
    /// Rounds played over the session's lifetime.
    pub rounds: Count,
    /// Moves currently retained for pattern tracking.
    pub history: usize,
    pub tally: Tally,
}

impl From<(String, &Session)> for ApiSession {
    fn from((session, state): (String, &Session)) -> Self {
        Self {
            session,
            rounds: state.tally().rounds(),
            history: state.history().len(),
            tally: *state.tally(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(e: impl std::fmt::Display) -> Self {
        Self {
            error: e.to_string(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::new(e)
    }
}

use crate::ANONYMOUS;
use crate::SESSION_ID_MAX;
use crate::game::Move;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Body of `POST /play`.
///
/// Moves are kept as raw JSON so that an integer, a numeric string, or
/// junk can all be told apart after deserialization.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayRequest {
    #[serde(default)]
    pub player_move: Option<Value>,
    #[serde(default)]
    pub last_player_move: Option<Value>,
    #[serde(default)]
    pub session: Option<String>,
}

impl PlayRequest {
    /// The player's move this round. Required and must be an ordinal.
    pub fn player(&self) -> anyhow::Result<Move> {
        self.player_move
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("field 'playerMove' is required"))
            .and_then(|v| {
                ordinal(v).ok_or_else(|| {
                    anyhow::anyhow!("invalid move: choose 0 (rock), 1 (paper) or 2 (scissors)")
                })
            })
    }
    /// The player's previous move. Anything but an ordinal means none.
    pub fn last(&self) -> Option<Move> {
        self.last_player_move.as_ref().and_then(ordinal)
    }
    /// Session the round belongs to, or the shared anonymous one.
    pub fn session(&self) -> anyhow::Result<String> {
        match self.session.as_deref().map(str::trim) {
            None | Some("") => Ok(ANONYMOUS.to_string()),
            Some(id) if valid(id) => Ok(id.to_string()),
            Some(_) => Err(anyhow::anyhow!(
                "invalid session: use 1 to {} characters of [A-Za-z0-9_-]",
                SESSION_ID_MAX
            )),
        }
    }
}

/// Session identifiers are short and URL-safe.
pub fn valid(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= SESSION_ID_MAX
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn ordinal(value: &Value) -> Option<Move> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .and_then(|n| Move::try_from(n).ok())
}

use crate::SESSION_LIMIT;
use crate::game::Move;
use crate::session::Round;
use crate::session::Session;
use crate::session::Tally;
use crate::strategy::Selector;
use std::collections::HashMap;
use tokio::sync::Mutex;

#[derive(Default)]
struct Seat {
    session: Session,
    /// Value of the table clock when this seat last played.
    touched: u64,
}

/// Seats plus a logical clock ticking once per round.
#[derive(Default)]
struct Seats {
    seats: HashMap<String, Seat>,
    clock: u64,
}

/// Manages live sessions, keyed by session id.
///
/// Every round runs select, decide, and record inside one critical section,
/// so concurrent requests against the same session are serialized. Holds at
/// most `limit` sessions; opening one more evicts the least recently played.
pub struct Table {
    selector: Selector,
    seats: Mutex<Seats>,
    limit: usize,
}

impl Default for Table {
    fn default() -> Self {
        Self::new(Selector::default())
    }
}

impl Table {
    pub fn new(selector: Selector) -> Self {
        Self::with_limit(selector, SESSION_LIMIT)
    }
    pub fn with_limit(selector: Selector, limit: usize) -> Self {
        Self {
            selector,
            seats: Mutex::new(Seats::default()),
            limit: limit.max(1),
        }
    }

    /// Plays one round in session `id`, opening the session if needed.
    /// Returns the round and the session's updated tally.
    pub async fn play(&self, id: &str, player: Move, last: Option<Move>) -> (Round, Tally) {
        let mut guard = self.seats.lock().await;
        let seats = &mut *guard;
        if !seats.seats.contains_key(id) {
            self.evict(&mut seats.seats);
            log::info!("opened session {}", id);
        }
        seats.clock += 1;
        let seat = seats.seats.entry(id.to_string()).or_default();
        let round = seat
            .session
            .play(&self.selector, player, last, &mut rand::rng());
        seat.touched = seats.clock;
        (round, *seat.session.tally())
    }

    /// Snapshot of a session.
    pub async fn session(&self, id: &str) -> anyhow::Result<Session> {
        self.seats
            .lock()
            .await
            .seats
            .get(id)
            .map(|seat| seat.session.clone())
            .ok_or_else(|| anyhow::anyhow!("session not found"))
    }

    pub async fn len(&self) -> usize {
        self.seats.lock().await.seats.len()
    }

    fn evict(&self, seats: &mut HashMap<String, Seat>) {
        while seats.len() >= self.limit {
            let oldest = seats
                .iter()
                .min_by_key(|(_, seat)| seat.touched)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    seats.remove(&id);
                    log::info!("evicted session {}", id);
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HISTORY_LIMIT;
    use std::sync::Arc;

    #[tokio::test]
    async fn sessions_are_isolated() {
        let table = Table::default();
        table.play("alice", Move::Rock, None).await;
        table.play("alice", Move::Rock, Some(Move::Rock)).await;
        table.play("bob", Move::Paper, None).await;
        let alice = table.session("alice").await.unwrap();
        let bob = table.session("bob").await.unwrap();
        assert_eq!(alice.history().len(), 2);
        assert_eq!(bob.history().len(), 1);
        assert_eq!(bob.history().last(), Some(Move::Paper));
        assert_eq!(table.len().await, 2);
    }

    #[tokio::test]
    async fn unknown_session_is_an_error() {
        let table = Table::default();
        assert!(table.session("nobody").await.is_err());
    }

    #[tokio::test]
    async fn evicts_least_recently_played() {
        let table = Table::with_limit(Selector::default(), 2);
        table.play("a", Move::Rock, None).await;
        table.play("b", Move::Rock, None).await;
        table.play("a", Move::Paper, Some(Move::Rock)).await;
        table.play("c", Move::Scissors, None).await;
        assert_eq!(table.len().await, 2);
        assert!(table.session("a").await.is_ok());
        assert!(table.session("b").await.is_err());
        assert!(table.session("c").await.is_ok());
    }

    #[tokio::test]
    async fn concurrent_rounds_are_all_recorded() {
        let table = Arc::new(Table::default());
        let tasks = (0..50)
            .map(|_| {
                let table = table.clone();
                tokio::spawn(async move { table.play("shared", Move::Rock, Some(Move::Rock)).await })
            })
            .collect::<Vec<_>>();
        for task in tasks {
            task.await.unwrap();
        }
        let shared = table.session("shared").await.unwrap();
        assert_eq!(shared.tally().rounds(), 50);
        assert_eq!(shared.history().len(), 50.min(HISTORY_LIMIT));
    }
}

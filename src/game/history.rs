use super::Move;
use super::Transitions;
use crate::HISTORY_LIMIT;
use std::collections::VecDeque;

/// Ordered record of a player's past moves, oldest first.
///
/// Holds at most [`HISTORY_LIMIT`] moves. Pushing onto a full history
/// evicts the oldest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History(VecDeque<Move>);

impl Default for History {
    fn default() -> Self {
        Self(VecDeque::with_capacity(HISTORY_LIMIT))
    }
}

impl History {
    pub fn push(&mut self, m: Move) {
        if self.0.len() == HISTORY_LIMIT {
            self.0.pop_front();
        }
        self.0.push_back(m);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Most recently recorded move.
    pub fn last(&self) -> Option<Move> {
        self.0.back().copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.0.iter().copied()
    }
    pub fn transitions(&self) -> Transitions {
        Transitions::from(self)
    }
}

impl FromIterator<Move> for History {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut history = Self::default();
        iter.into_iter().for_each(|m| history.push(m));
        history
    }
}

impl From<History> for Vec<Move> {
    fn from(history: History) -> Self {
        history.0.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn empty_by_default() {
        let history = History::default();
        assert!(history.is_empty());
        assert_eq!(history.last(), None);
    }

    #[test]
    fn fifo_eviction() {
        let moves = (0..HISTORY_LIMIT + 1)
            .map(|_| Move::random())
            .collect::<Vec<Move>>();
        let history = moves.iter().copied().collect::<History>();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(Vec::<Move>::from(history), moves[1..].to_vec());
    }

    #[test]
    fn last_tracks_push() {
        let mut history = History::default();
        history.push(Move::Rock);
        history.push(Move::Scissors);
        assert_eq!(history.last(), Some(Move::Scissors));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn bound_holds_under_many_pushes() {
        let mut history = History::default();
        for _ in 0..HISTORY_LIMIT * 3 {
            history.push(Move::random());
            assert!(history.len() <= HISTORY_LIMIT);
        }
    }
}

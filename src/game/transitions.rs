use super::History;
use super::Move;
use crate::Count;

/// First-order transition counts over a [`History`].
///
/// `count(a, b)` is how many times the player threw `b` immediately
/// after `a`. Approximates the player's move-to-move habit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Transitions([[Count; 3]; 3]);

impl Transitions {
    pub fn count(&self, from: Move, into: Move) -> Count {
        self.0[from as usize][into as usize]
    }
    /// Most frequent successor of `from`, if it has ever been followed.
    /// Ties go to the lowest ordinal.
    pub fn predict(&self, from: Move) -> Option<Move> {
        Move::all()
            .into_iter()
            .map(|into| (into, self.count(from, into)))
            .filter(|(_, n)| *n > 0)
            .fold(None, |best: Option<(Move, Count)>, (into, n)| match best {
                Some((_, most)) if most >= n => best,
                _ => Some((into, n)),
            })
            .map(|(into, _)| into)
    }
    fn witness(&mut self, from: Move, into: Move) {
        self.0[from as usize][into as usize] += 1;
    }
}

impl From<&History> for Transitions {
    fn from(history: &History) -> Self {
        let mut transitions = Self::default();
        history
            .iter()
            .zip(history.iter().skip(1))
            .for_each(|(from, into)| transitions.witness(from, into));
        transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::*;

    fn history(moves: &[Move]) -> History {
        moves.iter().copied().collect()
    }

    #[test]
    fn counts_consecutive_pairs() {
        let t = history(&[Rock, Paper, Rock, Paper, Scissors]).transitions();
        assert_eq!(t.count(Rock, Paper), 2);
        assert_eq!(t.count(Paper, Rock), 1);
        assert_eq!(t.count(Paper, Scissors), 1);
        assert_eq!(t.count(Scissors, Rock), 0);
    }

    #[test]
    fn predicts_most_frequent_successor() {
        let t = history(&[Rock, Scissors, Rock, Scissors, Rock, Paper]).transitions();
        assert_eq!(t.predict(Rock), Some(Scissors));
    }

    #[test]
    fn ties_go_to_lowest_ordinal() {
        let t = history(&[Paper, Scissors, Paper, Rock]).transitions();
        assert_eq!(t.count(Paper, Scissors), 1);
        assert_eq!(t.count(Paper, Rock), 1);
        assert_eq!(t.predict(Paper), Some(Rock));
    }

    #[test]
    fn no_prediction_without_successors() {
        let t = history(&[Rock, Rock, Paper]).transitions();
        assert_eq!(t.predict(Paper), None);
        assert_eq!(t.predict(Scissors), None);
        assert_eq!(t.predict(Rock), Some(Rock));
    }

    #[test]
    fn short_histories_are_empty() {
        assert_eq!(history(&[]).transitions(), Transitions::default());
        assert_eq!(history(&[Paper]).transitions(), Transitions::default());
    }
}

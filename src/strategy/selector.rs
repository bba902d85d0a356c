use super::Policy;
use crate::COLD_START;
use crate::Probability;
use crate::game::History;
use crate::game::Move;
use rand::Rng;

/// Picks the computer's move from the player's last move and history.
///
/// Never fails. Without a last move, or with fewer than [`COLD_START`]
/// recorded moves, there is no signal to bias on and the answer is uniform.
/// Otherwise a uniform draw picks a [`Tactic`](super::Tactic) from the
/// [`Policy`] table. Reads the history, never writes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selector {
    policy: Policy,
}

impl From<Policy> for Selector {
    fn from(policy: Policy) -> Self {
        Self { policy }
    }
}

impl Selector {
    pub fn select<R: Rng>(&self, last: Option<Move>, history: &History, rng: &mut R) -> Move {
        match last {
            Some(last) if history.len() >= COLD_START => {
                let roll = rng.random::<Probability>();
                let tactic = self.policy.choose(roll);
                let choice = tactic.respond(last, history, rng);
                log::debug!("{:?} answers {} with {}", tactic, last, choice);
                choice
            }
            _ => Move::sample(rng),
        }
    }
}

/// Computer's move under the default policy and the thread-local generator.
/// A `last` outside {0, 1, 2} counts as no last move.
pub fn select_opponent_move(last: Option<i64>, history: &History) -> Move {
    let last = last.and_then(|n| Move::try_from(n).ok());
    Selector::default().select(last, history, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Tactic;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use Move::*;

    const TRIALS: usize = 10_000;

    fn frequencies(mut draw: impl FnMut() -> Move) -> [usize; 3] {
        let mut counts = [0; 3];
        (0..TRIALS).for_each(|_| counts[draw() as usize] += 1);
        counts
    }

    /// Pearson statistic against uniform, 2 degrees of freedom.
    fn chi_square(counts: [usize; 3]) -> f64 {
        let expected = TRIALS as f64 / 3.;
        counts
            .iter()
            .map(|&n| (n as f64 - expected).powi(2) / expected)
            .sum()
    }

    #[test]
    fn cold_start_is_uniform() {
        let ref mut rng = SmallRng::seed_from_u64(42);
        let selector = Selector::default();
        let history = History::default();
        let counts = frequencies(|| selector.select(None, &history, rng));
        assert!(chi_square(counts) < 20., "{:?}", counts);
    }

    #[test]
    fn short_history_is_uniform() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let selector = Selector::from(Policy::new(&[(Tactic::Counter, 1.)]).unwrap());
        let history = [Rock, Rock].into_iter().collect::<History>();
        let counts = frequencies(|| selector.select(Some(Rock), &history, rng));
        assert!(chi_square(counts) < 20., "{:?}", counts);
    }

    #[test]
    fn invalid_last_is_no_signal() {
        let history = [Rock; 10].into_iter().collect::<History>();
        let counts = frequencies(|| select_opponent_move(Some(7), &history));
        assert!(counts.iter().all(|&n| n > TRIALS / 5), "{:?}", counts);
        let counts = frequencies(|| select_opponent_move(Some(-1), &history));
        assert!(counts.iter().all(|&n| n > TRIALS / 5), "{:?}", counts);
    }

    #[test]
    fn biased_against_a_rock_habit() {
        let ref mut rng = SmallRng::seed_from_u64(1738);
        let selector = Selector::default();
        let history = [Rock; 20].into_iter().collect::<History>();
        let counts = frequencies(|| selector.select(Some(Rock), &history, rng));
        assert!(counts[Paper as usize] > TRIALS / 2, "{:?}", counts);
    }

    #[test]
    fn single_band_is_deterministic() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let history = [Paper, Scissors, Paper, Scissors, Paper]
            .into_iter()
            .collect::<History>();
        let pattern = Selector::from(Policy::new(&[(Tactic::Pattern, 1.)]).unwrap());
        let counter = Selector::from(Policy::new(&[(Tactic::Counter, 1.)]).unwrap());
        let mirror = Selector::from(Policy::new(&[(Tactic::Mirror, 1.)]).unwrap());
        for _ in 0..100 {
            assert_eq!(pattern.select(Some(Paper), &history, rng), Rock);
            assert_eq!(counter.select(Some(Paper), &history, rng), Scissors);
            assert_eq!(mirror.select(Some(Paper), &history, rng), Paper);
        }
    }

    #[test]
    fn always_in_domain() {
        let ref mut rng = SmallRng::seed_from_u64(99);
        let selector = Selector::default();
        let history = (0..50).map(|_| Move::sample(rng)).collect::<History>();
        for _ in 0..1000 {
            let last = Some(Move::sample(rng));
            assert!(u8::from(selector.select(last, &history, rng)) < 3);
        }
    }
}

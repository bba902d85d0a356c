use super::Tactic;
use crate::Probability;

/// One band of the policy: a tactic and its share of the unit interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice {
    pub tactic: Tactic,
    pub weight: Probability,
}

/// Weighted table mapping a uniform draw in [0, 1) to a [`Tactic`].
///
/// Bands are laid end to end in declaration order, so the default table
/// reads as cumulative cutoffs:
///
/// | draw          | tactic  |
/// |---------------|---------|
/// | [0.00, 0.40)  | Pattern |
/// | [0.40, 0.70)  | Counter |
/// | [0.70, 0.80)  | Mirror  |
/// | [0.80, 1.00)  | Noise   |
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    choices: Vec<Choice>,
}

impl Default for Policy {
    fn default() -> Self {
        Self::new(&[
            (Tactic::Pattern, crate::WEIGHT_PATTERN),
            (Tactic::Counter, crate::WEIGHT_COUNTER),
            (Tactic::Mirror, crate::WEIGHT_MIRROR),
            (Tactic::Noise, crate::WEIGHT_NOISE),
        ])
        .expect("default weights are valid")
    }
}

impl Policy {
    /// Builds a table from raw weights, normalized to sum to one.
    /// Zero-weight bands are dropped.
    pub fn new(weights: &[(Tactic, Probability)]) -> anyhow::Result<Self> {
        if let Some((tactic, w)) = weights.iter().find(|(_, w)| !w.is_finite() || *w < 0.) {
            anyhow::bail!("invalid weight {} for {:?}", w, tactic);
        }
        let total = weights.iter().map(|(_, w)| w).sum::<Probability>();
        if total <= 0. || !total.is_finite() {
            anyhow::bail!("policy weights must have a positive, finite total");
        }
        let choices = weights
            .iter()
            .filter(|(_, w)| *w > 0.)
            .map(|&(tactic, w)| Choice {
                tactic,
                weight: w / total,
            })
            .collect();
        Ok(Self { choices })
    }
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }
    /// Tactic whose band contains `roll`. A roll past the last cutoff,
    /// which float rounding can produce, lands in the last band.
    pub fn choose(&self, roll: Probability) -> Tactic {
        let mut sum = 0.;
        for choice in self.choices.iter() {
            sum += choice.weight;
            if roll < sum {
                return choice.tactic;
            }
        }
        self.choices
            .last()
            .map(|choice| choice.tactic)
            .unwrap_or(Tactic::Noise)
    }
}

use crate::Arbitrary;
use rand::Rng;
use std::fmt::Display;
use std::fmt::Formatter;

/// A throw in rock-paper-scissors, encoded by its ordinal.
///
/// The beats relation is a 3-cycle: PAPER > ROCK, SCISSORS > PAPER,
/// ROCK > SCISSORS. Everything that needs to know who wins goes through
/// [`Move::beats`] or [`Move::loses`], never through its own table.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    #[default]
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    /// All moves in ordinal order.
    pub const fn all() -> [Move; 3] {
        [Move::Rock, Move::Paper, Move::Scissors]
    }
    /// The move this one defeats.
    pub const fn beats(&self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }
    /// The move that defeats this one.
    pub const fn loses(&self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
    /// Uniform draw from an explicit generator.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self::all()[rng.random_range(0..3)]
    }
}

/// u8 isomorphism
impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}
impl TryFrom<u8> for Move {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Move::Rock),
            1 => Ok(Move::Paper),
            2 => Ok(Move::Scissors),
            _ => Err(anyhow::anyhow!("move out of range: {}", n)),
        }
    }
}

/// i64 injection, the width JSON numbers arrive in
impl TryFrom<i64> for Move {
    type Error = anyhow::Error;
    fn try_from(n: i64) -> Result<Self, Self::Error> {
        u8::try_from(n)
            .map_err(|_| anyhow::anyhow!("move out of range: {}", n))
            .and_then(Move::try_from)
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        Self::sample(&mut rand::rng())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name().to_uppercase())
    }
}

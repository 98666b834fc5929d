use crate::error::{DiceboxError, Result};
use crate::random::RandomSource;

/// Sides used when `getDie` receives no count, or zero.
pub const DEFAULT_SIDES: i32 = 6;

/// Largest `numRolls` a single `roll` call accepts.
pub const MAX_ROLLS: i32 = 10_000;

/// A die with a fixed number of sides. Built per query, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomDie {
    num_sides: i32,
}

impl RandomDie {
    /// Build a die, treating an absent or zero side count as [`DEFAULT_SIDES`].
    pub fn new(num_sides: Option<i32>) -> Result<Self> {
        match num_sides {
            None | Some(0) => Ok(Self {
                num_sides: DEFAULT_SIDES,
            }),
            Some(n) if n < 0 => Err(DiceboxError::InvalidArgument(format!(
                "numSides must be positive, got {}",
                n
            ))),
            Some(n) => Ok(Self { num_sides: n }),
        }
    }

    pub fn num_sides(&self) -> i32 {
        self.num_sides
    }

    /// Uniform roll in `[1, num_sides]`.
    pub fn roll_once(&self, rng: &dyn RandomSource) -> i32 {
        rng.range_inclusive(1, i64::from(self.num_sides)) as i32
    }

    /// `num_rolls` independent rolls in call order. Zero or negative yields no
    /// rolls; more than [`MAX_ROLLS`] is rejected before anything is allocated.
    pub fn roll(&self, rng: &dyn RandomSource, num_rolls: i32) -> Result<Vec<i32>> {
        if num_rolls > MAX_ROLLS {
            return Err(DiceboxError::InvalidArgument(format!(
                "numRolls must be at most {}, got {}",
                MAX_ROLLS, num_rolls
            )));
        }
        Ok((0..num_rolls.max(0)).map(|_| self.roll_once(rng)).collect())
    }
}

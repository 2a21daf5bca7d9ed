//! Random scramble generation.

use log::debug;

use crate::notation::{Move, format_sequence};

pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// Draws each move of a scramble independently and uniformly from the 18
/// legal moves. No attempt is made to avoid redundant neighbors like `U U'`.
#[derive(Debug)]
pub struct ScrambleGenerator {
    length: usize,
    rng: fastrand::Rng,
}

impl ScrambleGenerator {
    /// A generator seeded from the thread-local RNG.
    pub fn new(length: usize) -> ScrambleGenerator {
        ScrambleGenerator {
            length,
            rng: fastrand::Rng::new(),
        }
    }

    /// A generator that yields the same scrambles every time it is built with
    /// the same `seed`.
    pub fn with_seed(length: usize, seed: u64) -> ScrambleGenerator {
        ScrambleGenerator {
            length,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn next_move(&mut self) -> Move {
        Move::ALL[self.rng.usize(..Move::ALL.len())]
    }

    pub fn generate(&mut self) -> Vec<Move> {
        let moves = (0..self.length).map(|_| self.next_move()).collect::<Vec<_>>();
        debug!("Generated scramble: {}", format_sequence(&moves));
        moves
    }
}

impl Default for ScrambleGenerator {
    fn default() -> Self {
        ScrambleGenerator::new(DEFAULT_SCRAMBLE_LENGTH)
    }
}

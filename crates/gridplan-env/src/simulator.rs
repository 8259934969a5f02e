use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{Coordinate, Direction, Environment, GridWorld};

#[derive(Debug, Clone)]
/// Seeded simulator over a compiled grid world.
pub struct GridSimulator {
    world: GridWorld,
    rng: ChaCha8Rng,
}

impl GridSimulator {
    /// Create a simulator with deterministic RNG seed.
    pub fn new(world: GridWorld, seed: u64) -> Self {
        Self {
            world,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Borrow the underlying grid world.
    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    /// Sample one `(next_state, reward, terminal)` transition. Terminal
    /// states absorb: stepping from one is a no-op with zero reward.
    pub fn step(&mut self, state: Coordinate, direction: Direction) -> (Coordinate, f64, bool) {
        if self.world.is_terminal(state) {
            return (state, 0.0, true);
        }

        let sample = (self.rng.next_u64() as f64) / ((u64::MAX as f64) + 1.0);
        let outcomes = self.world.transitions(state, direction);

        let mut cumulative = 0.0_f64;
        let mut chosen = outcomes.len().saturating_sub(1);
        for (idx, (_, prob)) in outcomes.iter().enumerate() {
            cumulative += prob;
            if sample < cumulative {
                chosen = idx;
                break;
            }
        }

        let next = outcomes[chosen].0;
        (next, self.world.reward(next), self.world.is_terminal(next))
    }
}

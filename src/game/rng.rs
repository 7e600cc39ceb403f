//! Deterministic point-winner generation.
//!
//! ```
//! use tennis_score::game::PointRng;
//!
//! let mut a = PointRng::new(42);
//! let mut b = PointRng::new(42);
//! for _ in 0..20 {
//!     assert_eq!(a.point_winner(0.5), b.point_winner(0.5));
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::Player;

/// Seeded RNG deciding who wins each point.
#[derive(Clone, Debug)]
pub struct PointRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl PointRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent stream, e.g. one per simulated game.
    ///
    /// Forks are deterministic: the n-th fork of a given seed is always the
    /// same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Draw the winner of one point.
    ///
    /// Player one wins with probability `p`. Values outside `[0, 1]` behave
    /// like the nearest bound; NaN always gives the point to player two.
    pub fn point_winner(&mut self, p: f64) -> Player {
        if self.inner.gen::<f64>() < p {
            Player::PlayerOne
        } else {
            Player::PlayerTwo
        }
    }
}

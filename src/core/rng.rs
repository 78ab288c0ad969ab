//! Deterministic random clicks for scrambling.
//!
//! The same seed always produces the same click sequence, so a scrambled
//! position can be reproduced from its seed alone.
//!
//! ```
//! use instant_insanity::core::ScrambleRng;
//!
//! let mut a = ScrambleRng::new(7);
//! let mut b = ScrambleRng::new(7);
//! assert_eq!(a.next_click(4), b.next_click(4));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::action::Click;
use super::orientation::Orientation;

/// Seeded click generator.
///
/// Uses ChaCha8 so sequences are stable across platforms.
#[derive(Clone, Debug)]
pub struct ScrambleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ScrambleRng {
    /// Create a generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick a random orientation.
    pub fn orientation(&mut self) -> Orientation {
        Orientation::ALL[self.inner.gen_range(0..Orientation::ALL.len())]
    }

    /// Pick a random click on one of `cube_count` cubes.
    ///
    /// Only orientations that actually move the cube are drawn; the front
    /// and back rows of the rotation table are identities.
    ///
    /// # Panics
    ///
    /// Panics if `cube_count` is zero.
    pub fn next_click(&mut self, cube_count: usize) -> Click {
        assert!(cube_count > 0, "Cannot scramble zero cubes");

        const MOVING: [Orientation; 4] = [
            Orientation::Up,
            Orientation::Down,
            Orientation::Left,
            Orientation::Right,
        ];

        let cube = self.inner.gen_range(0..cube_count);
        let clicked = MOVING[self.inner.gen_range(0..MOVING.len())];
        Click::new(cube, clicked)
    }
}

//! Derez shard bursts
//!
//! When a villain is struck its body breaks into a shower of small squares.
//! Bursts are seeded so a replay produces the same shower.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Horizontal spread of a burst (full width, centred on the body)
const SPREAD_X: f32 = 44.0;
/// Shards fall at least this far
const FALL_MIN: f32 = 55.0;
/// Extra random fall distance
const FALL_JITTER: f32 = 18.0;
/// Largest start delay (ms)
const MAX_DELAY_MS: f32 = 350.0;

/// One falling fragment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shard {
    /// Travel from the body centre
    pub offset: Vec2,
    /// Final spin (degrees)
    pub rotation_deg: f32,
    /// Edge length
    pub size: f32,
    /// Start delay (ms)
    pub delay_ms: f32,
}

/// Seeded shard generator; each burst advances the seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShardSource {
    pub seed: u64,
}

impl ShardSource {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Produce the next burst of `count` shards
    pub fn burst(&mut self, count: usize) -> Vec<Shard> {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        self.seed = self.seed.wrapping_add(1);

        (0..count)
            .map(|_| Shard {
                offset: Vec2::new(
                    (rng.random::<f32>() - 0.5) * SPREAD_X,
                    FALL_MIN + rng.random::<f32>() * FALL_JITTER,
                ),
                rotation_deg: (rng.random::<f32>() - 0.5) * 360.0,
                size: 1.0 + rng.random::<f32>() * 3.0,
                delay_ms: rng.random::<f32>() * MAX_DELAY_MS,
            })
            .collect()
    }
}

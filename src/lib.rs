//! Tron Disk - bounce solver and trajectory animator for a thrown identity disk
//!
//! Core modules:
//! - `sim`: Deterministic trajectory math (bounce solver, phase timeline, animator)
//! - `arena`: Headless host (roster, hover dispatch, impact effects)
//! - `settings`: Data-driven tuning (speed, padding, spin)

pub mod arena;
pub mod settings;
pub mod sim;

pub use arena::{Arena, Layout};
pub use settings::Settings;

use glam::Vec2;

/// Trajectory configuration constants
pub mod consts {
    /// Disk travel speed (arena units per second)
    pub const DISK_SPEED: f32 = 1610.0;
    /// Inset keeping the bounce point off the literal wall
    pub const WALL_PAD: f32 = 6.0;
    /// Below this horizontal separation the mirrored line is treated as vertical
    pub const VERTICAL_EPSILON: f32 = 1.0;
    /// Cosmetic spin (degrees per elapsed millisecond)
    pub const SPIN_DEG_PER_MS: f32 = 0.5;

    /// Shards thrown when a villain derezzes
    pub const SHARD_COUNT: usize = 100;
}

/// Linear interpolation between two points
#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Convert a leg length to its travel time in milliseconds
#[inline]
pub fn leg_millis(length: f32, speed: f32) -> f64 {
    if !speed.is_finite() || speed <= 0.0 {
        return 0.0;
    }
    f64::from(length) / f64::from(speed) * 1000.0
}

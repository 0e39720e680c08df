//! Disk tuning and preferences
//!
//! Read from the `TRON_DISK_SETTINGS` environment variable (JSON) on native
//! targets. Missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{DISK_SPEED, SHARD_COUNT, SPIN_DEG_PER_MS, WALL_PAD};

/// Trajectory and effect settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Trajectory ===
    /// Disk speed in arena units per second
    pub disk_speed: f32,
    /// Inset of the bounce point from the arena wall
    pub wall_pad: f32,
    /// Cosmetic spin rate (degrees per millisecond)
    pub spin_deg_per_ms: f32,

    // === Effects ===
    /// Shards per derez burst
    pub shard_count: usize,
    /// Seed for the first shard burst
    pub shard_seed: u64,

    // === Accessibility ===
    /// Reduced motion (no shard bursts)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            disk_speed: DISK_SPEED,
            wall_pad: WALL_PAD,
            spin_deg_per_ms: SPIN_DEG_PER_MS,

            shard_count: SHARD_COUNT,
            shard_seed: 0x109,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Environment variable holding a JSON settings document
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    const ENV_KEY: &'static str = "TRON_DISK_SETTINGS";

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize settings to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Effective shard count (respects reduced_motion)
    pub fn effective_shard_count(&self) -> usize {
        if self.reduced_motion { 0 } else { self.shard_count }
    }

    /// Load settings from the environment, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var(Self::ENV_KEY) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::ENV_KEY);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed {}: {}", Self::ENV_KEY, e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Web stub
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}

//! Four-leg trajectory and its phase timeline
//!
//! Elapsed time is partitioned into half-open intervals `[T(i-1), T(i))`, so
//! every instant belongs to exactly one phase and a boundary instant belongs
//! to the later phase.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounce::compute_bounce_padded;
use super::geometry::Rect;
use crate::{leg_millis, lerp};

/// The four waypoints of one throw
///
/// The bounce point is shared by the outbound and return legs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoints {
    pub from: Vec2,
    pub bounce: Vec2,
    pub to: Vec2,
}

impl Waypoints {
    /// Solve the bounce for a throw inside `arena`
    pub fn solve(from: Vec2, to: Vec2, arena: &Rect, pad: f32) -> Self {
        Self {
            from,
            bounce: compute_bounce_padded(from, to, arena, pad),
            to,
        }
    }

    #[inline]
    pub fn bounce_out(&self) -> Vec2 {
        self.bounce
    }

    #[inline]
    pub fn bounce_back(&self) -> Vec2 {
        self.bounce
    }

    /// Start and end point of each leg, in flight order
    pub fn legs(&self) -> [(Vec2, Vec2); 4] {
        [
            (self.from, self.bounce),
            (self.bounce, self.to),
            (self.to, self.bounce),
            (self.bounce, self.from),
        ]
    }

    /// Total distance flown
    pub fn path_length(&self) -> f32 {
        self.legs().iter().map(|(a, b)| a.distance(*b)).sum()
    }
}

/// Which leg the disk is currently on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Launch point to the wall
    Outbound,
    /// Wall to the target (impact fires on entry)
    Strike,
    /// Target back to the wall
    Rebound,
    /// Wall back to the launch point
    Return,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Outbound, Phase::Strike, Phase::Rebound, Phase::Return];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Phase::Outbound => 0,
            Phase::Strike => 1,
            Phase::Rebound => 2,
            Phase::Return => 3,
        }
    }
}

/// Cumulative phase boundaries `[T1, T2, T3, T4]` in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseTimeline {
    pub ends: [f64; 4],
}

/// Where the disk is at some elapsed time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    InFlight { phase: Phase, position: Vec2 },
    Finished,
}

impl PhaseTimeline {
    /// Build boundaries from leg lengths at a constant speed
    pub fn new(waypoints: &Waypoints, speed: f32) -> Self {
        let mut ends = [0.0; 4];
        let mut acc = 0.0;
        for (end, (a, b)) in ends.iter_mut().zip(waypoints.legs()) {
            acc += leg_millis(a.distance(b), speed);
            *end = acc;
        }
        Self { ends }
    }

    /// Time at which the disk reaches the target (T1 is the wall, T2 the target)
    #[inline]
    pub fn impact_at(&self) -> f64 {
        self.ends[0]
    }

    /// Total flight time (T4)
    #[inline]
    pub fn total(&self) -> f64 {
        self.ends[3]
    }

    /// Start of a phase
    #[inline]
    pub fn start_of(&self, phase: Phase) -> f64 {
        match phase.index() {
            0 => 0.0,
            i => self.ends[i - 1],
        }
    }

    /// Phase containing `elapsed`, or `None` once the flight is over
    pub fn phase_at(&self, elapsed: f64) -> Option<Phase> {
        Phase::ALL
            .into_iter()
            .find(|phase| elapsed < self.ends[phase.index()])
    }

    /// Position at `elapsed` milliseconds since the first tick
    pub fn sample(&self, waypoints: &Waypoints, elapsed: f64) -> Sample {
        let Some(phase) = self.phase_at(elapsed) else {
            return Sample::Finished;
        };
        let (a, b) = waypoints.legs()[phase.index()];
        let start = self.start_of(phase);
        let duration = self.ends[phase.index()] - start;

        let position = if duration <= 0.0 {
            b
        } else {
            lerp(a, b, ((elapsed - start) / duration) as f32)
        };
        Sample::InFlight { phase, position }
    }
}

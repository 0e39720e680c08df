//! Deterministic trajectory module
//!
//! All disk motion lives here. This module must be pure and deterministic:
//! - Time only enters through `Animator::on_tick` timestamps
//! - No rendering or platform dependencies
//! - At most one run in flight

pub mod animator;
pub mod bounce;
pub mod events;
pub mod geometry;
pub mod scheduler;
pub mod timeline;

pub use animator::{Animator, Frame, LaunchRejected, TickOutcome, TrajectoryRun};
pub use bounce::{compute_bounce, compute_bounce_padded};
pub use events::{ImpactKind, TrajectoryEvent, TrajectoryObserver};
pub use geometry::Rect;
pub use scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
pub use timeline::{Phase, PhaseTimeline, Sample, Waypoints};

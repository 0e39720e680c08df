//! Frame-driven trajectory animator
//!
//! Owns the single active-run slot. A run is created by `start_trajectory`,
//! begins ticking once the host calls `attach` (the disk visual exists), and
//! is cleared either when the disk gets home or when the host cancels.

use std::fmt;

use glam::Vec2;

use super::events::TrajectoryObserver;
use super::geometry::Rect;
use super::scheduler::{FrameHandle, FrameScheduler};
use super::timeline::{Phase, PhaseTimeline, Sample, Waypoints};
use crate::consts::{DISK_SPEED, SPIN_DEG_PER_MS, WALL_PAD};
use crate::settings::Settings;

/// Why a launch request did not start a run
///
/// Both cases are normal UI states; hosts usually ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchRejected {
    /// Arena or endpoints not measured yet (or not finite)
    MissingGeometry,
    /// A disk is already in flight
    RunInProgress,
}

impl fmt::Display for LaunchRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGeometry => write!(f, "launch geometry is not available"),
            Self::RunInProgress => write!(f, "a disk is already in flight"),
        }
    }
}

impl std::error::Error for LaunchRejected {}

/// One throw in progress
#[derive(Debug, Clone)]
pub struct TrajectoryRun {
    pub waypoints: Waypoints,
    pub timeline: PhaseTimeline,
    pub subject: String,
    pub is_boss: bool,
    /// Timestamp of the first delivered tick
    start: Option<f64>,
    impact_fired: bool,
    attached: bool,
}

impl TrajectoryRun {
    pub fn impact_fired(&self) -> bool {
        self.impact_fired
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn started_at(&self) -> Option<f64> {
        self.start
    }
}

/// Disk pose for one rendered frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub position: Vec2,
    /// Degrees, grows without bound
    pub rotation_deg: f32,
    pub phase: Phase,
    pub elapsed_ms: f64,
}

/// Result of delivering one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// No attached run; nothing to draw
    Idle,
    /// Disk still flying
    Frame(Frame),
    /// Disk got home this tick; the run is gone
    Complete,
}

/// Single-slot trajectory animator
pub struct Animator<S: FrameScheduler, O: TrajectoryObserver> {
    scheduler: S,
    observer: O,
    run: Option<TrajectoryRun>,
    pending: Option<FrameHandle>,
    speed: f32,
    pad: f32,
    spin_deg_per_ms: f32,
}

impl<S: FrameScheduler, O: TrajectoryObserver> Animator<S, O> {
    pub fn new(scheduler: S, observer: O) -> Self {
        Self {
            scheduler,
            observer,
            run: None,
            pending: None,
            speed: DISK_SPEED,
            pad: WALL_PAD,
            spin_deg_per_ms: SPIN_DEG_PER_MS,
        }
    }

    /// Create an animator tuned from settings
    pub fn with_settings(scheduler: S, observer: O, settings: &Settings) -> Self {
        let mut animator = Self::new(scheduler, observer);
        if settings.disk_speed.is_finite() && settings.disk_speed > 0.0 {
            animator.speed = settings.disk_speed;
        } else {
            log::warn!("Ignoring disk speed {}, using {}", settings.disk_speed, DISK_SPEED);
        }
        animator.pad = settings.wall_pad;
        animator.spin_deg_per_ms = settings.spin_deg_per_ms;
        animator
    }

    pub fn is_active(&self) -> bool {
        self.run.is_some()
    }

    pub fn active_run(&self) -> Option<&TrajectoryRun> {
        self.run.as_ref()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Begin a throw if the slot is free
    ///
    /// Returns the waypoints so the host can mount the disk visual at `from`.
    pub fn start_trajectory(
        &mut self,
        from: Vec2,
        to: Vec2,
        arena: &Rect,
        subject: &str,
        is_boss: bool,
    ) -> Result<Waypoints, LaunchRejected> {
        if self.run.is_some() {
            log::debug!("Launch at {subject} dropped: disk already in flight");
            return Err(LaunchRejected::RunInProgress);
        }
        if !from.is_finite() || !to.is_finite() || !arena.is_finite() {
            log::debug!("Launch at {subject} dropped: geometry unavailable");
            return Err(LaunchRejected::MissingGeometry);
        }

        let waypoints = Waypoints::solve(from, to, arena, self.pad);
        let timeline = PhaseTimeline::new(&waypoints, self.speed);
        log::info!(
            "Disk thrown at {} (bounce at {:?}, flight {:.1} ms)",
            subject,
            waypoints.bounce,
            timeline.total()
        );

        self.run = Some(TrajectoryRun {
            waypoints,
            timeline,
            subject: subject.to_string(),
            is_boss,
            start: None,
            impact_fired: false,
            attached: false,
        });
        Ok(waypoints)
    }

    /// The disk visual is ready: request the first tick
    ///
    /// Only the first call for a run has any effect.
    pub fn attach(&mut self) -> bool {
        let Some(run) = self.run.as_mut() else {
            return false;
        };
        if run.attached {
            return false;
        }
        run.attached = true;
        self.pending = Some(self.scheduler.request_frame());
        true
    }

    /// Advance the active run to `timestamp` (milliseconds, host clock)
    pub fn on_tick(&mut self, timestamp: f64) -> TickOutcome {
        let Some(run) = self.run.as_mut() else {
            return TickOutcome::Idle;
        };
        if !run.attached {
            return TickOutcome::Idle;
        }
        // The delivered frame is no longer outstanding
        self.pending = None;

        let start = *run.start.get_or_insert(timestamp);
        let elapsed = (timestamp - start).max(0.0);

        // A long frame gap may skip the whole strike leg; impact still fires once
        if !run.impact_fired && elapsed >= run.timeline.impact_at() {
            run.impact_fired = true;
            self.observer.on_impact(&run.subject, run.is_boss);
        }

        match run.timeline.sample(&run.waypoints, elapsed) {
            Sample::Finished => {
                log::info!("Disk returned from {} after {:.1} ms", run.subject, elapsed);
                self.run = None;
                self.observer.on_complete();
                TickOutcome::Complete
            }
            Sample::InFlight { phase, position } => {
                let rotation_deg = elapsed as f32 * self.spin_deg_per_ms;
                log::trace!("tick {elapsed:.1} ms {phase:?} at {position:?}");
                self.pending = Some(self.scheduler.request_frame());
                TickOutcome::Frame(Frame {
                    position,
                    rotation_deg,
                    phase,
                    elapsed_ms: elapsed,
                })
            }
        }
    }

    /// Tear the run down without completing it
    ///
    /// Releases the outstanding frame request; no notifications fire. Safe to
    /// call any number of times.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if let Some(run) = self.run.take() {
            log::debug!("Disk run at {} cancelled", run.subject);
        }
    }
}

impl<S: FrameScheduler, O: TrajectoryObserver> Drop for Animator<S, O> {
    fn drop(&mut self) {
        self.cancel();
    }
}

//! Notifications raised by a trajectory run

use serde::{Deserialize, Serialize};

/// Visual consequence the host should play on impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactKind {
    /// Regular villain breaks apart
    Derez,
    /// The boss only shakes
    Shake,
}

impl ImpactKind {
    #[inline]
    pub fn for_subject(is_boss: bool) -> Self {
        if is_boss { ImpactKind::Shake } else { ImpactKind::Derez }
    }
}

/// Event emitted by the animator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrajectoryEvent {
    /// Disk reached its target (fires once per run)
    Impact { subject: String, is_boss: bool },
    /// Disk is back home and the run is cleared
    Complete,
}

/// Receiver of run notifications
pub trait TrajectoryObserver {
    fn on_impact(&mut self, subject: &str, is_boss: bool);
    fn on_complete(&mut self);
}

/// Collects events in order, handy for tests and replays
impl TrajectoryObserver for Vec<TrajectoryEvent> {
    fn on_impact(&mut self, subject: &str, is_boss: bool) {
        self.push(TrajectoryEvent::Impact {
            subject: subject.to_string(),
            is_boss,
        });
    }

    fn on_complete(&mut self) {
        self.push(TrajectoryEvent::Complete);
    }
}

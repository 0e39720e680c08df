//! Headless arena host
//!
//! Stands in for the page around the animator: knows the cast, turns a hover
//! over a villain into a throw using measured layout, and keeps the visual
//! effect state (who is derezzing, who is shaking) that impact drives.

pub mod roster;
pub mod shards;

use std::collections::HashMap;

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{
    Animator, FrameScheduler, ImpactKind, LaunchRejected, Rect, TickOutcome, TrajectoryObserver,
    Waypoints,
};
pub use roster::{BOSS, Character, HERO, Role, VILLAINS};
pub use shards::{Shard, ShardSource};

/// Measured element boxes; any of them may be missing before layout
#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// Arena walls
    pub walls: Option<Rect>,
    /// The disk on the hero's back
    pub hero_disk: Option<Rect>,
    /// Body boxes keyed by character name
    pub bodies: HashMap<String, Rect>,
}

impl Layout {
    /// Launch point: centre of the hero's disk
    pub fn launch_point(&self) -> Option<Vec2> {
        self.hero_disk.map(|r| r.center())
    }

    /// Aim point: centre of the character's body
    pub fn body_center(&self, name: &str) -> Option<Vec2> {
        self.bodies.get(name).map(Rect::center)
    }
}

/// Visual consequences of the current throw
#[derive(Debug, Clone)]
pub struct Effects {
    pub derez_target: Option<String>,
    pub shake_target: Option<String>,
    /// Shower for the current derez (empty under reduced motion)
    pub shards: Vec<Shard>,
    shard_source: ShardSource,
    shard_count: usize,
}

impl Effects {
    pub fn new(settings: &Settings) -> Self {
        Self {
            derez_target: None,
            shake_target: None,
            shards: Vec::new(),
            shard_source: ShardSource::new(settings.shard_seed),
            shard_count: settings.effective_shard_count(),
        }
    }

    fn clear(&mut self) {
        self.derez_target = None;
        self.shake_target = None;
        self.shards.clear();
    }
}

impl TrajectoryObserver for Effects {
    fn on_impact(&mut self, subject: &str, is_boss: bool) {
        match ImpactKind::for_subject(is_boss) {
            ImpactKind::Derez => {
                log::info!("{subject} derezzed");
                self.derez_target = Some(subject.to_string());
                self.shards = self.shard_source.burst(self.shard_count);
            }
            ImpactKind::Shake => {
                log::info!("{subject} shaken");
                self.shake_target = Some(subject.to_string());
            }
        }
    }

    fn on_complete(&mut self) {
        self.clear();
    }
}

/// Arena page: cast, layout-driven launches and effect state
pub struct Arena<S: FrameScheduler> {
    animator: Animator<S, Effects>,
}

impl<S: FrameScheduler> Arena<S> {
    pub fn new(scheduler: S, settings: &Settings) -> Self {
        Self {
            animator: Animator::with_settings(scheduler, Effects::new(settings), settings),
        }
    }

    /// Pointer entered a character card
    ///
    /// Villains and the boss get a disk thrown at them; everything else,
    /// including dropped launches, is ignored.
    pub fn hover(&mut self, name: &str, layout: &Layout) -> Option<Waypoints> {
        let Some(character) = roster::find(name) else {
            log::debug!("Hover over unknown character {name}");
            return None;
        };
        if !character.is_target() {
            return None;
        }
        self.launch(character, layout).ok()
    }

    /// Throw the hero's disk at `target` and start ticking
    pub fn launch(
        &mut self,
        target: &Character,
        layout: &Layout,
    ) -> Result<Waypoints, LaunchRejected> {
        if self.animator.is_active() {
            log::debug!("Launch at {} dropped: disk already in flight", target.name);
            return Err(LaunchRejected::RunInProgress);
        }
        let (Some(walls), Some(from), Some(to)) = (
            layout.walls,
            layout.launch_point(),
            layout.body_center(target.name),
        ) else {
            log::debug!("Launch at {} dropped: layout not measured", target.name);
            return Err(LaunchRejected::MissingGeometry);
        };

        let waypoints =
            self.animator
                .start_trajectory(from, to, &walls, target.name, target.is_boss())?;
        // Headless: the disk visual is available as soon as it is mounted
        self.animator.attach();
        Ok(waypoints)
    }

    /// Deliver a scheduled frame
    pub fn frame(&mut self, timestamp: f64) -> TickOutcome {
        self.animator.on_tick(timestamp)
    }

    /// Page teardown: stop ticking and drop any throw in progress
    pub fn unmount(&mut self) {
        self.animator.cancel();
        self.animator.observer_mut().clear();
    }

    /// A flying disk is on screen
    pub fn is_disk_mounted(&self) -> bool {
        self.animator.is_active()
    }

    /// The hero's own disk is hidden while it is in the air
    pub fn hero_disk_visible(&self) -> bool {
        !self.is_disk_mounted()
    }

    pub fn is_derezzing(&self, name: &str) -> bool {
        self.effects().derez_target.as_deref() == Some(name)
    }

    pub fn is_shaking(&self, name: &str) -> bool {
        self.effects().shake_target.as_deref() == Some(name)
    }

    pub fn effects(&self) -> &Effects {
        self.animator.observer()
    }

    pub fn animator(&self) -> &Animator<S, Effects> {
        &self.animator
    }

    pub fn scheduler(&self) -> &S {
        self.animator.scheduler()
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        self.animator.scheduler_mut()
    }
}

//! Tron Disk entry point
//!
//! Headless demo: lays out the arena, hovers a villain and then the boss, and
//! drives the throws with a 60 Hz frame loop.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::collections::HashMap;

    use tron_disk::arena::{BOSS, VILLAINS};
    use tron_disk::sim::{ManualScheduler, Rect, TickOutcome};
    use tron_disk::{Arena, Layout, Settings};

    /// Frame interval of the simulated display (ms)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Give up on a throw after this many frames
    const MAX_FRAMES: u32 = 600;

    /// Card boxes in a 900x600 arena: villains on two rows, boss in between
    fn layout() -> Layout {
        let mut bodies = HashMap::new();
        for (i, v) in VILLAINS.iter().enumerate() {
            let row = if i < 5 { 0.0 } else { 1.0 };
            let col = if i < 5 { i as f32 } else { (i - 5) as f32 + 0.5 };
            let rect = Rect::from_origin_size(120.0 + col * 150.0, 40.0 + row * 220.0, 40.0, 64.0);
            bodies.insert(v.name.to_string(), rect);
        }
        bodies.insert(
            BOSS.name.to_string(),
            Rect::from_origin_size(400.0, 140.0, 100.0, 100.0),
        );

        Layout {
            walls: Some(Rect::from_origin_size(0.0, 0.0, 900.0, 600.0)),
            hero_disk: Some(Rect::from_origin_size(440.0, 500.0, 20.0, 20.0)),
            bodies,
        }
    }

    /// Deliver frames until the throw lands back home
    fn fly(arena: &mut Arena<ManualScheduler>, start: f64) -> f64 {
        let mut ts = start;
        let mut frames = 0;
        while arena.scheduler_mut().take_pending().is_some() && frames < MAX_FRAMES {
            match arena.frame(ts) {
                TickOutcome::Frame(f) => {
                    log::debug!(
                        "{:>7.1} ms {:?} ({:.0}, {:.0}) {:.0}°",
                        f.elapsed_ms,
                        f.phase,
                        f.position.x,
                        f.position.y,
                        f.rotation_deg
                    );
                }
                TickOutcome::Complete => log::info!("Disk caught after {frames} frames"),
                TickOutcome::Idle => break,
            }
            ts += FRAME_MS;
            frames += 1;
        }
        ts
    }

    pub fn run() {
        let settings = Settings::load();
        let layout = layout();
        let mut arena = Arena::new(ManualScheduler::new(), &settings);

        let mut ts = 0.0;
        for target in [VILLAINS[2].name, BOSS.name] {
            if let Some(wp) = arena.hover(target, &layout) {
                log::info!("Throw at {target}: bounce {:?}", wp.bounce);
                ts = fly(&mut arena, ts);
            }
        }

        // A hover during flight is ignored
        arena.hover(VILLAINS[0].name, &layout);
        if arena.hover(VILLAINS[1].name, &layout).is_none() {
            log::info!("Second throw dropped while the first is in the air");
        }
        arena.unmount();
        let sched = arena.scheduler();
        log::info!(
            "Frames requested: {}, cancelled: {}",
            sched.requested,
            sched.cancelled
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    log::info!("Tron Disk (headless) starting...");
    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on the web; the host page drives the animator
}

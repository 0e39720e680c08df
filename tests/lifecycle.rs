//! Full throw lifecycle driven through the public API

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use tron_disk::sim::{
    Animator, FrameHandle, FrameScheduler, LaunchRejected, ManualScheduler, Phase, Rect,
    TickOutcome, TrajectoryEvent, compute_bounce,
};

type TestAnimator = Animator<ManualScheduler, Vec<TrajectoryEvent>>;

fn arena() -> Rect {
    Rect::from_origin_size(0.0, 0.0, 400.0, 200.0)
}

fn animator() -> TestAnimator {
    Animator::new(ManualScheduler::new(), Vec::new())
}

/// Deliver frames every `step` ms while the animator keeps asking for them
fn drive(anim: &mut TestAnimator, start: f64, step: f64) -> Vec<TickOutcome> {
    let mut out = Vec::new();
    let mut ts = start;
    while anim.scheduler_mut().take_pending().is_some() {
        out.push(anim.on_tick(ts));
        ts += step;
        assert!(out.len() < 10_000, "run did not terminate");
    }
    out
}

#[test]
fn test_reference_scenario() {
    let from = Vec2::new(100.0, 100.0);
    let to = Vec2::new(300.0, 100.0);
    let bounce = compute_bounce(from, to, &arena());
    assert_eq!(bounce.x, 6.0);
    assert!(bounce.y >= 6.0 && bounce.y <= 194.0);

    let mut anim = animator();
    let wp = anim.start_trajectory(from, to, &arena(), "Aldrich 007", false).unwrap();
    assert_eq!(wp.bounce_out(), bounce);
    assert_eq!(wp.bounce_back(), bounce);
    anim.attach();

    let outcomes = drive(&mut anim, 1000.0, 16.0);
    assert_eq!(outcomes.last(), Some(&TickOutcome::Complete));
    assert_eq!(
        anim.observer(),
        &vec![
            TrajectoryEvent::Impact {
                subject: "Aldrich 007".into(),
                is_boss: false,
            },
            TrajectoryEvent::Complete,
        ]
    );

    // Phases appear in order and never go backwards
    let phases: Vec<usize> = outcomes
        .iter()
        .filter_map(|o| match o {
            TickOutcome::Frame(f) => Some(f.phase.index()),
            _ => None,
        })
        .collect();
    assert!(phases.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(phases.first(), Some(&Phase::Outbound.index()));
    assert_eq!(phases.last(), Some(&Phase::Return.index()));
}

#[test]
fn test_impact_on_first_tick_past_wall() {
    let mut anim = animator();
    anim.start_trajectory(
        Vec2::new(100.0, 100.0),
        Vec2::new(300.0, 100.0),
        &arena(),
        "MCP",
        true,
    )
    .unwrap();
    let t1 = anim.active_run().unwrap().timeline.impact_at();
    anim.attach();

    let mut ts = 0.0;
    while anim.observer().is_empty() {
        anim.scheduler_mut().take_pending();
        anim.on_tick(ts);
        ts += 10.0;
    }
    let hit_tick = ts - 10.0;
    assert!(hit_tick >= t1);
    assert!(hit_tick - 10.0 < t1);
    assert_eq!(
        anim.observer()[0],
        TrajectoryEvent::Impact {
            subject: "MCP".into(),
            is_boss: true,
        }
    );
}

#[test]
fn test_identical_endpoints_terminate() {
    let p = Vec2::new(120.0, 80.0);
    let mut anim = animator();
    anim.start_trajectory(p, p, &arena(), "Aldrich 008", false).unwrap();
    anim.attach();
    let outcomes = drive(&mut anim, 0.0, 16.0);
    assert_eq!(outcomes.last(), Some(&TickOutcome::Complete));
    for o in &outcomes {
        if let TickOutcome::Frame(f) = o {
            assert!(f.position.is_finite());
        }
    }
    assert_eq!(anim.observer().len(), 2);
}

#[test]
fn test_launch_from_bounce_point() {
    // Standing on the bounce point: outbound leg is zero length
    let to = Vec2::new(300.0, 100.0);
    let from = Vec2::new(6.0, 100.0);
    let mut anim = animator();
    anim.start_trajectory(from, to, &arena(), "Aldrich 009", false).unwrap();
    assert_eq!(anim.active_run().unwrap().timeline.impact_at(), 0.0);
    anim.attach();
    anim.scheduler_mut().take_pending();
    match anim.on_tick(0.0) {
        TickOutcome::Frame(f) => assert_eq!(f.phase, Phase::Strike),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(anim.observer().len(), 1);
    drive(&mut anim, 16.0, 16.0);
    assert_eq!(anim.observer().len(), 2);
}

#[test]
fn test_concurrent_launch_leaves_run_alone() {
    let mut anim = animator();
    anim.start_trajectory(
        Vec2::new(100.0, 100.0),
        Vec2::new(300.0, 100.0),
        &arena(),
        "Aldrich 010",
        false,
    )
    .unwrap();
    anim.attach();
    anim.scheduler_mut().take_pending();
    anim.on_tick(0.0);

    let second = anim.start_trajectory(
        Vec2::new(50.0, 50.0),
        Vec2::new(350.0, 150.0),
        &arena(),
        "Aldrich 011",
        true,
    );
    assert_eq!(second, Err(LaunchRejected::RunInProgress));
    // Attaching again must not double the frame requests
    assert!(!anim.attach());

    drive(&mut anim, 16.0, 16.0);
    assert_eq!(
        anim.observer(),
        &vec![
            TrajectoryEvent::Impact {
                subject: "Aldrich 010".into(),
                is_boss: false,
            },
            TrajectoryEvent::Complete,
        ]
    );

    // Slot is free again
    assert!(
        anim.start_trajectory(Vec2::ZERO, Vec2::ONE, &arena(), "Aldrich 011", false)
            .is_ok()
    );
}

/// Scheduler whose state outlives the animator that owns it
#[derive(Clone, Default)]
struct SharedScheduler(Rc<RefCell<ManualScheduler>>);

impl FrameScheduler for SharedScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.0.borrow_mut().request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.0.borrow_mut().cancel_frame(handle);
    }
}

#[test]
fn test_drop_releases_pending_frame() {
    let shared = SharedScheduler::default();
    {
        let mut anim = Animator::new(shared.clone(), Vec::<TrajectoryEvent>::new());
        anim.start_trajectory(Vec2::ZERO, Vec2::new(300.0, 30.0), &arena(), "x", false)
            .unwrap();
        anim.attach();
        assert!(shared.0.borrow().has_pending());
    }
    let sched = shared.0.borrow();
    assert!(!sched.has_pending());
    assert_eq!(sched.requested, 1);
    assert_eq!(sched.cancelled, 1);
}

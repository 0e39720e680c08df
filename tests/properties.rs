//! Property tests for the bounce solver and phase timeline

use glam::Vec2;
use proptest::prelude::*;
use tron_disk::consts::{DISK_SPEED, WALL_PAD};
use tron_disk::sim::{
    Animator, ManualScheduler, PhaseTimeline, Rect, TickOutcome, TrajectoryEvent, Waypoints,
    compute_bounce,
};

/// Arena at least big enough for the padding on both sides
fn arb_arena() -> impl Strategy<Value = Rect> {
    (-500.0f32..500.0, -500.0f32..500.0, 40.0f32..1200.0, 40.0f32..900.0)
        .prop_map(|(l, t, w, h)| Rect::from_origin_size(l, t, w, h))
}

/// Arena plus a point inside it
fn arb_arena_point() -> impl Strategy<Value = (Rect, Vec2)> {
    arb_arena().prop_flat_map(|r| {
        (Just(r), (r.left..=r.right, r.top..=r.bottom).prop_map(|(x, y)| Vec2::new(x, y)))
    })
}

proptest! {
    #[test]
    fn bounce_lands_on_padded_wall((arena, to) in arb_arena_point(), fx in -2000.0f32..2000.0, fy in -2000.0f32..2000.0) {
        let b = compute_bounce(Vec2::new(fx, fy), to, &arena);
        prop_assert!(b.x == arena.left + WALL_PAD || b.x == arena.right - WALL_PAD);
        prop_assert!(b.y >= arena.top + WALL_PAD && b.y <= arena.bottom - WALL_PAD);
    }

    #[test]
    fn wall_depends_only_on_target_side((arena, to) in arb_arena_point(), fx in -2000.0f32..2000.0, fy1 in -2000.0f32..2000.0, fy2 in -2000.0f32..2000.0) {
        let a = compute_bounce(Vec2::new(fx, fy1), to, &arena);
        let b = compute_bounce(Vec2::new(fx, fy2), to, &arena);
        prop_assert_eq!(a.x, b.x);
        let expected = if to.x < arena.mid_x() { arena.right - WALL_PAD } else { arena.left + WALL_PAD };
        prop_assert_eq!(a.x, expected);
    }

    #[test]
    fn bounce_path_never_shorter_than_direct((arena, to) in arb_arena_point(), fx in -2000.0f32..2000.0, fy in -2000.0f32..2000.0) {
        let from = Vec2::new(fx, fy);
        let b = compute_bounce(from, to, &arena);
        let via = from.distance(b) + b.distance(to);
        prop_assert!(via + 1e-2 >= from.distance(to));
    }

    #[test]
    fn phase_boundaries_ordered((arena, to) in arb_arena_point(), fx in -2000.0f32..2000.0, fy in -2000.0f32..2000.0) {
        let wp = Waypoints::solve(Vec2::new(fx, fy), to, &arena, WALL_PAD);
        let tl = PhaseTimeline::new(&wp, DISK_SPEED);
        prop_assert!(tl.ends[0] >= 0.0);
        prop_assert!(tl.ends.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn impact_once_and_completes(
        (arena, to) in arb_arena_point(),
        fx in -1000.0f32..1000.0,
        fy in -1000.0f32..1000.0,
        step in 1.0f64..120.0,
    ) {
        let mut anim = Animator::new(ManualScheduler::new(), Vec::<TrajectoryEvent>::new());
        anim.start_trajectory(Vec2::new(fx, fy), to, &arena, "Aldrich 007", false).unwrap();
        let total = anim.active_run().unwrap().timeline.total();
        anim.attach();

        let bound = (total / step).ceil() as usize + 2;
        let mut ticks = 0;
        let mut last = TickOutcome::Idle;
        let mut ts = 0.0;
        while anim.scheduler_mut().take_pending().is_some() {
            last = anim.on_tick(ts);
            ts += step;
            ticks += 1;
            prop_assert!(ticks <= bound);
        }
        prop_assert_eq!(last, TickOutcome::Complete);

        let impacts = anim
            .observer()
            .iter()
            .filter(|e| matches!(e, TrajectoryEvent::Impact { .. }))
            .count();
        prop_assert_eq!(impacts, 1);
        prop_assert_eq!(anim.observer().last(), Some(&TrajectoryEvent::Complete));
    }
}

//! Wall bounce solver
//!
//! The disk flies to one vertical wall, then on to the target. Mirroring the
//! target across that wall turns the two legs into one straight line, whose
//! crossing with the wall is the bounce point.

use glam::Vec2;

use super::geometry::Rect;
use crate::consts::{VERTICAL_EPSILON, WALL_PAD};

/// Padded x of the wall the disk should bounce off for a given target
///
/// Targets left of the arena midline bounce off the right wall and vice versa.
#[inline]
pub fn bounce_wall_x(to: Vec2, arena: &Rect, pad: f32) -> f32 {
    if to.x < arena.mid_x() {
        arena.right - pad
    } else {
        arena.left + pad
    }
}

/// Mirror a point across the vertical line `x = wall_x`
#[inline]
pub fn mirror_across_wall(p: Vec2, wall_x: f32) -> Vec2 {
    Vec2::new(2.0 * wall_x - p.x, p.y)
}

/// Bounce point for a throw from `from` to `to` inside `arena`, default padding
pub fn compute_bounce(from: Vec2, to: Vec2, arena: &Rect) -> Vec2 {
    compute_bounce_padded(from, to, arena, WALL_PAD)
}

/// Bounce point with an explicit wall inset
///
/// The returned y is kept inside `[top + pad, bottom - pad]` even when the
/// geometry would put the bounce above or below the arena.
pub fn compute_bounce_padded(from: Vec2, to: Vec2, arena: &Rect, pad: f32) -> Vec2 {
    let wall_x = bounce_wall_x(to, arena, pad);
    let mirrored = mirror_across_wall(to, wall_x);
    let dx = mirrored.x - from.x;

    let y = if dx.abs() < VERTICAL_EPSILON {
        (from.y + to.y) / 2.0
    } else {
        let t = (wall_x - from.x) / dx;
        from.y + t * (mirrored.y - from.y)
    };

    // min/max rather than clamp: an arena shorter than 2*pad must not panic
    Vec2::new(wall_x, y.min(arena.bottom - pad).max(arena.top + pad))
}

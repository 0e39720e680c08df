//! Arena rectangle geometry
//!
//! Screen-space convention: y grows downward, so `top < bottom`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of the arena (or of any measured element)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Build from an origin and size, filling the derived edges
    pub fn from_origin_size(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            right: left + width,
            top,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Horizontal midpoint, used to pick which wall the disk bounces off
    #[inline]
    pub fn mid_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    /// Centre point of the box
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Whether every edge is a finite number
    pub fn is_finite(&self) -> bool {
        [self.left, self.right, self.top, self.bottom, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Check if a point lies inside (edges inclusive)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_origin_size() {
        let r = Rect::from_origin_size(10.0, 20.0, 400.0, 200.0);
        assert_eq!(r.right, 410.0);
        assert_eq!(r.bottom, 220.0);
        assert_eq!(r.mid_x(), 210.0);
        assert_eq!(r.center(), Vec2::new(210.0, 120.0));
    }

    #[test]
    fn test_is_finite() {
        let mut r = Rect::from_origin_size(0.0, 0.0, 10.0, 10.0);
        assert!(r.is_finite());
        r.top = f32::NAN;
        assert!(!r.is_finite());
    }

    #[test]
    fn test_contains() {
        let r = Rect::from_origin_size(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Vec2::new(0.0, 10.0)));
        assert!(!r.contains(Vec2::new(-0.1, 5.0)));
    }
}

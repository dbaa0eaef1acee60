//! Axis-aligned rectangle geometry for bricks, paddles, and walls
//!
//! A rect is defined by its top-left corner and size, in window
//! coordinates (origin top-left, y down).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in window space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Build a rect from its center point and size
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point of the rect
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Move the rect so its center is at the given point
    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size / 2.0;
    }

    /// Check if a point is inside the rect (inclusive edges)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Closest point on or inside the rect to the given point
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.left(), self.right()),
            point.y.clamp(self.top(), self.bottom()),
        )
    }

    /// Check if two rects overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center() {
        let rect = Rect::from_center(Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(rect.pos, Vec2::new(40.0, 45.0));
        assert_eq!(rect.center(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_contains_point() {
        let rect = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(30.0, 20.0));
        assert!(rect.contains_point(Vec2::new(20.0, 15.0)));
        assert!(rect.contains_point(Vec2::new(10.0, 10.0))); // corner
        assert!(!rect.contains_point(Vec2::new(45.0, 15.0)));
        assert!(!rect.contains_point(Vec2::new(20.0, 35.0)));
    }

    #[test]
    fn test_clamp_point() {
        let rect = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 50.0));
        // Point above-left clamps to corner
        assert_eq!(rect.clamp_point(Vec2::new(-10.0, -10.0)), Vec2::ZERO);
        // Point inside is unchanged
        let inside = Vec2::new(40.0, 25.0);
        assert_eq!(rect.clamp_point(inside), inside);
        // Point right of the rect clamps in x only
        assert_eq!(
            rect.clamp_point(Vec2::new(150.0, 25.0)),
            Vec2::new(100.0, 25.0)
        );
    }

    #[test]
    fn test_overlaps() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0));
        let b = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
        let c = Rect::new(Vec2::new(30.0, 30.0), Vec2::new(5.0, 5.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }
}

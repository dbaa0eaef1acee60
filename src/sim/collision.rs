//! Collision detection between balls, rects, and the window bounds
//!
//! Balls are circles; bricks, paddles, and walls are axis-aligned rects.
//! Tests return contact point, surface normal, and penetration depth so the
//! tick can reflect velocities and push balls out of overlap.

use glam::Vec2;

use super::rect::Rect;

/// Result of a collision test
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    pub hit: bool,
    /// Contact point on the surface
    pub point: Vec2,
    /// Surface normal pointing away from the surface (unit length)
    pub normal: Vec2,
    /// Overlap depth along the normal
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Reflect a velocity off a surface with the given normal
pub fn reflect_velocity(vel: Vec2, normal: Vec2) -> Vec2 {
    vel - 2.0 * vel.dot(normal) * normal
}

/// Test a circle against a rect.
///
/// The normal points from the rect surface toward the circle center. A
/// circle whose center is inside the rect is pushed out along the shortest
/// axis.
pub fn ball_rect_collision(ball_pos: Vec2, ball_radius: f32, rect: &Rect) -> CollisionResult {
    let closest = rect.clamp_point(ball_pos);
    let offset = ball_pos - closest;
    let dist = offset.length();

    if dist > ball_radius {
        return CollisionResult::miss();
    }

    if dist > f32::EPSILON {
        // Center outside the rect: normal along the offset
        return CollisionResult {
            hit: true,
            point: closest,
            normal: offset / dist,
            penetration: ball_radius - dist,
        };
    }

    // Center inside the rect: push out along the nearest face
    let to_left = ball_pos.x - rect.left();
    let to_right = rect.right() - ball_pos.x;
    let to_top = ball_pos.y - rect.top();
    let to_bottom = rect.bottom() - ball_pos.y;

    let min = to_left.min(to_right).min(to_top).min(to_bottom);
    let normal = if min == to_left {
        Vec2::new(-1.0, 0.0)
    } else if min == to_right {
        Vec2::new(1.0, 0.0)
    } else if min == to_top {
        Vec2::new(0.0, -1.0)
    } else {
        Vec2::new(0.0, 1.0)
    };

    CollisionResult {
        hit: true,
        point: ball_pos,
        normal,
        penetration: ball_radius + min,
    }
}

/// Test a ball against the left/right/top border walls.
///
/// The bottom edge is open: falling out is a life-loss condition handled by
/// the tick, not a bounce.
pub fn ball_border_collision(
    ball_pos: Vec2,
    ball_radius: f32,
    window: Vec2,
    border: f32,
) -> CollisionResult {
    // Left wall
    if ball_pos.x - ball_radius < border {
        return CollisionResult {
            hit: true,
            point: Vec2::new(border, ball_pos.y),
            normal: Vec2::new(1.0, 0.0),
            penetration: border - (ball_pos.x - ball_radius),
        };
    }
    // Right wall
    if ball_pos.x + ball_radius > window.x - border {
        return CollisionResult {
            hit: true,
            point: Vec2::new(window.x - border, ball_pos.y),
            normal: Vec2::new(-1.0, 0.0),
            penetration: (ball_pos.x + ball_radius) - (window.x - border),
        };
    }
    // Top wall
    if ball_pos.y - ball_radius < border {
        return CollisionResult {
            hit: true,
            point: Vec2::new(ball_pos.x, border),
            normal: Vec2::new(0.0, 1.0),
            penetration: border - (ball_pos.y - ball_radius),
        };
    }

    CollisionResult::miss()
}

/// Check if a ball has fallen past the bottom edge of the window
pub fn ball_below_window(ball_pos: Vec2, window_height: f32) -> bool {
    ball_pos.y > window_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_rect_side_hit() {
        let rect = Rect::new(Vec2::new(100.0, 100.0), Vec2::new(60.0, 15.0));

        // Ball approaching from the left, overlapping the left edge
        let result = ball_rect_collision(Vec2::new(95.0, 107.0), 8.0, &rect);
        assert!(result.hit);
        assert!(result.normal.x < 0.0);
        assert!(result.normal.y.abs() < 0.001);
        assert!(result.penetration > 0.0);
    }

    #[test]
    fn test_ball_rect_top_hit() {
        let rect = Rect::new(Vec2::new(100.0, 100.0), Vec2::new(60.0, 15.0));

        // Ball above the rect, overlapping the top edge
        let result = ball_rect_collision(Vec2::new(130.0, 95.0), 8.0, &rect);
        assert!(result.hit);
        assert!(result.normal.y < 0.0);
    }

    #[test]
    fn test_ball_rect_miss() {
        let rect = Rect::new(Vec2::new(100.0, 100.0), Vec2::new(60.0, 15.0));
        let result = ball_rect_collision(Vec2::new(130.0, 50.0), 8.0, &rect);
        assert!(!result.hit);
    }

    #[test]
    fn test_ball_rect_center_inside() {
        let rect = Rect::new(Vec2::new(100.0, 100.0), Vec2::new(60.0, 15.0));

        // Center just inside, nearest the top face
        let result = ball_rect_collision(Vec2::new(130.0, 101.0), 8.0, &rect);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::new(0.0, -1.0));
        assert!(result.penetration > 8.0);
    }

    #[test]
    fn test_reflect_velocity() {
        // Ball moving right hits a vertical wall (normal pointing left)
        let reflected = reflect_velocity(Vec2::new(100.0, 0.0), Vec2::new(-1.0, 0.0));
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);

        // Diagonal bounce off the floor preserves x
        let reflected = reflect_velocity(Vec2::new(50.0, 80.0), Vec2::new(0.0, -1.0));
        assert!((reflected.x - 50.0).abs() < 0.001);
        assert!((reflected.y - (-80.0)).abs() < 0.001);
    }

    #[test]
    fn test_border_collision() {
        let window = Vec2::new(800.0, 600.0);

        // Ball in the middle: no hit
        let result = ball_border_collision(Vec2::new(400.0, 300.0), 10.0, window, 15.0);
        assert!(!result.hit);

        // Ball against the left wall
        let result = ball_border_collision(Vec2::new(20.0, 300.0), 10.0, window, 15.0);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::new(1.0, 0.0));

        // Ball against the top wall
        let result = ball_border_collision(Vec2::new(400.0, 18.0), 10.0, window, 15.0);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_ball_below_window() {
        assert!(!ball_below_window(Vec2::new(400.0, 599.0), 600.0));
        assert!(ball_below_window(Vec2::new(400.0, 601.0), 600.0));
    }
}

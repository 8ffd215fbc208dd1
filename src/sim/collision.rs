//! Collision detection for circles in a rectangular arena
//!
//! Everything in the arena is a circle, so contact is a distance test.
//! Screen-space coordinates: origin top-left, +y down.

use glam::Vec2;

/// Check whether two circles overlap (touching edges do not count)
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) < reach * reach
}

/// Check whether a point lies strictly within `radius` of a circle centre
#[inline]
pub fn point_in_circle(p: Vec2, center: Vec2, radius: f32) -> bool {
    p.distance_squared(center) < radius * radius
}

/// Bounce a circle off the arena walls
///
/// When the circle touches a wall, the velocity component normal to that
/// wall is forced to point back into the arena.
pub fn wall_bounce(pos: Vec2, vel: Vec2, radius: f32, size: Vec2) -> Vec2 {
    let mut vel = vel;
    if pos.x - radius <= 0.0 {
        vel.x = vel.x.abs();
    } else if pos.x + radius >= size.x {
        vel.x = -vel.x.abs();
    }
    if pos.y - radius <= 0.0 {
        vel.y = vel.y.abs();
    } else if pos.y + radius >= size.y {
        vel.y = -vel.y.abs();
    }
    vel
}

/// Keep a circle fully inside the arena
pub fn clamp_to_arena(pos: Vec2, radius: f32, size: Vec2) -> Vec2 {
    let min = Vec2::splat(radius);
    let max = (size - Vec2::splat(radius)).max(min);
    pos.clamp(min, max)
}

/// Check whether a point has left the arena
///
/// With `vertical_only` only the top and bottom edges count, matching the
/// straight-up shots of the outbreak rules.
pub fn out_of_bounds(pos: Vec2, size: Vec2, vertical_only: bool) -> bool {
    let vertical = pos.y < 0.0 || pos.y > size.y;
    if vertical_only {
        vertical
    } else {
        vertical || pos.x < 0.0 || pos.x > size.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARENA: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_circles_overlap() {
        // Two balls of radius 15: contact below 30px
        assert!(circles_overlap(Vec2::new(100.0, 100.0), 15.0, Vec2::new(129.0, 100.0), 15.0));
        assert!(!circles_overlap(Vec2::new(100.0, 100.0), 15.0, Vec2::new(130.0, 100.0), 15.0));
        assert!(!circles_overlap(Vec2::ZERO, 15.0, Vec2::new(30.0, 30.0), 15.0));
    }

    #[test]
    fn test_point_in_circle() {
        assert!(point_in_circle(Vec2::new(10.0, 0.0), Vec2::ZERO, 15.0));
        assert!(!point_in_circle(Vec2::new(15.0, 0.0), Vec2::ZERO, 15.0));
    }

    #[test]
    fn test_wall_bounce_left_and_bottom() {
        let vel = wall_bounce(Vec2::new(10.0, 590.0), Vec2::new(-3.0, 2.0), 15.0, ARENA);
        assert_eq!(vel, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn test_wall_bounce_keeps_inward_velocity() {
        // Already heading away from the right wall - must not flip back out
        let vel = wall_bounce(Vec2::new(790.0, 300.0), Vec2::new(-3.0, 0.0), 15.0, ARENA);
        assert_eq!(vel, Vec2::new(-3.0, 0.0));
    }

    #[test]
    fn test_wall_bounce_interior_untouched() {
        let vel = Vec2::new(1.5, -2.5);
        assert_eq!(wall_bounce(Vec2::new(400.0, 300.0), vel, 15.0, ARENA), vel);
    }

    #[test]
    fn test_clamp_to_arena() {
        let p = clamp_to_arena(Vec2::new(-50.0, 900.0), 20.0, ARENA);
        assert_eq!(p, Vec2::new(20.0, 580.0));
        let inside = Vec2::new(300.0, 300.0);
        assert_eq!(clamp_to_arena(inside, 20.0, ARENA), inside);
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(out_of_bounds(Vec2::new(100.0, -1.0), ARENA, true));
        assert!(!out_of_bounds(Vec2::new(-5.0, 100.0), ARENA, true));
        assert!(out_of_bounds(Vec2::new(-5.0, 100.0), ARENA, false));
        assert!(!out_of_bounds(Vec2::new(800.0, 600.0), ARENA, false));
    }
}

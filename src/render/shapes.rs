//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::scene::Scene;
use super::vertex::Vertex;
use super::rgba;

/// Segments per circle; enough for a 20px ball to look round
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a rectangle outline drawn inside `min..max`
pub fn rect_outline(min: Vec2, max: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(24);
    let w = width;
    // Top, bottom, left, right bands
    let bands = [
        (min, Vec2::new(max.x, min.y + w)),
        (Vec2::new(min.x, max.y - w), max),
        (Vec2::new(min.x, min.y + w), Vec2::new(min.x + w, max.y - w)),
        (Vec2::new(max.x - w, min.y + w), Vec2::new(max.x, max.y - w)),
    ];
    for (a, b) in bands {
        // Two triangles
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, a.y, color));
        vertices.push(Vertex::new(a.x, b.y, color));

        vertices.push(Vertex::new(a.x, b.y, color));
        vertices.push(Vertex::new(b.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }
    vertices
}

/// Triangle list for a whole scene (background is left to the clear color)
pub fn tessellate(scene: &Scene) -> Vec<Vertex> {
    let per_circle = (CIRCLE_SEGMENTS * 3) as usize;
    let mut vertices = Vec::with_capacity(scene.circles.len() * per_circle + 24);
    for c in &scene.circles {
        vertices.extend(circle(c.center, c.radius, rgba(c.color, 1.0), CIRCLE_SEGMENTS));
    }
    vertices.extend(rect_outline(
        Vec2::ZERO,
        scene.size,
        scene.border_width,
        rgba(scene.border_color, 1.0),
    ));
    vertices
}

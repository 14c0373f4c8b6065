//! Shape generation for stroked circle outlines

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::RenderedCircle;

/// Fewest segments used for any outline
const MIN_SEGMENTS: u32 = 12;
/// Most segments used for any outline
const MAX_SEGMENTS: u32 = 256;
/// Target outline length per segment, in simulation units
const SEGMENT_LENGTH: f32 = 6.0;

/// Segment count for a circle of the given radius
pub fn segments_for_radius(radius: f32) -> u32 {
    let circumference = 2.0 * PI * radius.max(0.0);
    ((circumference / SEGMENT_LENGTH).ceil() as u32).clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());

        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Stroke a circle outline of `stroke_width`, centered on the radius
///
/// The inner edge is clamped at the center so tiny circles draw as dots.
pub fn stroke_circle(center: Vec2, radius: f32, stroke_width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = stroke_width / 2.0;
    let inner = (radius - half).max(0.0);
    let outer = (radius + half).max(half);
    ring(center, inner, outer, color, segments_for_radius(outer))
}

/// Triangle list for a whole frame, back to front in draw order
pub fn frame_geometry(circles: &[RenderedCircle], stroke_width: f32) -> Vec<Vertex> {
    circles
        .iter()
        .flat_map(|c| stroke_circle(c.center, c.radius, stroke_width, c.color.rgba()))
        .collect()
}

//! Intersection tests for growing circles
//!
//! Two outlines "collide" when they cross: the discs overlap but neither disc
//! sits entirely inside the other. A circle nested inside a bigger one is left
//! alone, otherwise it would stay trapped and flip every frame.

use glam::Vec2;

use crate::Viewport;

/// Result of a pairwise check, kept for logging and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingContact {
    /// Whether the outlines cross
    pub hit: bool,
    /// Distance between centers
    pub distance: f32,
}

impl RingContact {
    pub fn miss(distance: f32) -> Self {
        Self {
            hit: false,
            distance,
        }
    }
}

/// Check whether two circle outlines cross
///
/// Hit iff `d < r1 + r2` (discs overlap) and `d >= |r1 - r2|` (not nested).
pub fn ring_ring_contact(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> RingContact {
    let distance = center_a.distance(center_b);

    if distance < radius_a + radius_b && distance >= (radius_a - radius_b).abs() {
        return RingContact {
            hit: true,
            distance,
        };
    }

    RingContact::miss(distance)
}

/// Check whether a circle's bounding box leaves the viewport grown by `margin`
///
/// Degenerate viewports never report an exit.
pub fn ring_outside_view(center: Vec2, radius: f32, viewport: Viewport, margin: f32) -> bool {
    if viewport.is_degenerate() {
        return false;
    }

    let (min, max) = viewport.inflated(margin);
    let extent = Vec2::splat(radius);

    let lo = center - extent;
    let hi = center + extent;
    lo.x < min.x || lo.y < min.y || hi.x > max.x || hi.y > max.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separate_rings_miss() {
        let contact = ring_ring_contact(Vec2::ZERO, 4.0, Vec2::new(10.0, 0.0), 4.0);
        assert!(!contact.hit);
        assert!((contact.distance - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_crossing_rings_hit() {
        let contact = ring_ring_contact(Vec2::ZERO, 6.0, Vec2::new(10.0, 0.0), 6.0);
        assert!(contact.hit);
    }

    #[test]
    fn test_touching_rings_miss() {
        // d == r1 + r2 is tangent from outside, not overlapping
        let contact = ring_ring_contact(Vec2::ZERO, 5.0, Vec2::new(10.0, 0.0), 5.0);
        assert!(!contact.hit);
    }

    #[test]
    fn test_concentric_rings_miss() {
        let contact = ring_ring_contact(Vec2::ZERO, 3.0, Vec2::ZERO, 8.0);
        assert!(!contact.hit);
    }

    #[test]
    fn test_internally_tangent_rings_hit() {
        // d == |r1 - r2|: inner outline touches the outer one
        let contact = ring_ring_contact(Vec2::ZERO, 3.0, Vec2::new(5.0, 0.0), 8.0);
        assert!(contact.hit);
    }

    #[test]
    fn test_identical_rings_hit() {
        let contact = ring_ring_contact(Vec2::new(4.0, 4.0), 2.0, Vec2::new(4.0, 4.0), 2.0);
        assert!(contact.hit);
    }

    #[test]
    fn test_inside_margin_stays() {
        let view = Viewport::new(100.0, 100.0);
        assert!(!ring_outside_view(Vec2::new(50.0, 50.0), 40.0, view, 100.0));
        assert!(!ring_outside_view(Vec2::new(50.0, 50.0), 150.0, view, 100.0));
    }

    #[test]
    fn test_past_margin_exits() {
        let view = Viewport::new(100.0, 100.0);
        assert!(ring_outside_view(Vec2::new(50.0, 50.0), 260.0, view, 100.0));
        // Only the left edge is crossed
        assert!(ring_outside_view(Vec2::new(0.0, 50.0), 101.0, view, 100.0));
        // Only the bottom edge is crossed
        assert!(ring_outside_view(Vec2::new(50.0, 100.0), 101.0, view, 100.0));
    }

    #[test]
    fn test_degenerate_view_never_exits() {
        assert!(!ring_outside_view(Vec2::ZERO, 1.0e6, Viewport::new(0.0, 100.0), 100.0));
        assert!(!ring_outside_view(Vec2::ZERO, 1.0e6, Viewport::new(-5.0, -5.0), 100.0));
    }
}

//! A single growing/shrinking circle
//!
//! Flips are two-step: detection only raises `pending_flip`, and `integrate`
//! applies it before moving the radius. Several detectors can therefore mark
//! the same circle in one frame and it still reverses exactly once.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{ring_outside_view, ring_ring_contact};
use super::palette::Swatch;
use crate::Viewport;
use crate::consts::*;

/// A circle entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub id: u64,
    center: Vec2,
    color: Swatch,
    radius: f32,
    /// Radius change per frame; only its sign ever changes
    velocity: f32,
    /// Set by detection, consumed by `integrate` in the same frame
    #[serde(skip)]
    pending_flip: bool,
}

impl Circle {
    /// New circle at `center` with the default radius and velocity
    pub fn new(id: u64, center: Vec2, color: Swatch) -> Self {
        Self {
            id,
            center,
            color,
            radius: INITIAL_RADIUS,
            velocity: INITIAL_VELOCITY,
            pending_flip: false,
        }
    }

    /// New circle with a random palette color
    pub fn with_random_color<R: Rng>(id: u64, center: Vec2, rng: &mut R) -> Self {
        Self::new(id, center, Swatch::random(rng))
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn color(&self) -> Swatch {
        self.color
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn pending_flip(&self) -> bool {
        self.pending_flip
    }

    #[inline]
    pub fn is_growing(&self) -> bool {
        self.velocity > 0.0
    }

    /// Mark a flip once a shrinking circle has reached the minimum radius
    pub fn mark_flip_if_due(&mut self) {
        if self.velocity < 0.0 && self.radius <= MIN_RADIUS {
            self.pending_flip = true;
        }
    }

    /// Mark a flip on behalf of a peer that crossed this circle
    #[inline]
    pub fn request_flip(&mut self) {
        self.pending_flip = true;
    }

    /// Whether this circle's outline crosses `other`'s
    pub fn collides_with(&self, other: &Circle) -> bool {
        ring_ring_contact(self.center, self.radius, other.center, other.radius).hit
    }

    /// Mark a flip if a growing circle has left the viewport plus margin
    ///
    /// Shrinking circles are never flipped here.
    pub fn mark_flip_from_boundary(&mut self, viewport: Viewport) {
        if !self.is_growing() {
            return;
        }
        if ring_outside_view(self.center, self.radius, viewport, VIEWPORT_MARGIN) {
            log::trace!("circle {} left the viewport at r={:.1}", self.id, self.radius);
            self.pending_flip = true;
        }
    }

    /// Apply any pending flip, then advance the radius by one step
    pub fn integrate(&mut self) {
        if self.pending_flip {
            self.velocity = -self.velocity;
            self.pending_flip = false;
        }
        self.radius += self.velocity;
    }

    /// Test helper: place a circle in an arbitrary state
    #[cfg(test)]
    pub(crate) fn with_state(center: Vec2, radius: f32, velocity: f32) -> Self {
        Self {
            id: 0,
            center,
            color: Swatch::Rose,
            radius,
            velocity,
            pending_flip: false,
        }
    }
}

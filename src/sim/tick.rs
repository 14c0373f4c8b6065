//! Per-frame simulation protocol
//!
//! A frame is `tick` (self and pairwise flip detection) followed by
//! `render_frame` (boundary detection, integration, emission). The split
//! exists because the viewport size is only known at draw time; `step_frame`
//! runs both when the caller already has it.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::palette::Swatch;
use super::state::SimulationState;
use crate::Viewport;

/// A discrete input event from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer tap, already in simulation coordinates
    Tap(Vec2),
    /// Remove every circle
    Clear,
}

/// Input events gathered between two frames, in arrival order
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    pub fn on_tap(&mut self, point: Vec2) {
        self.events.push(InputEvent::Tap(point));
    }

    pub fn on_clear(&mut self) {
        self.events.push(InputEvent::Clear);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// One circle to stroke this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderedCircle {
    pub center: Vec2,
    pub radius: f32,
    pub color: Swatch,
}

/// Apply queued input events to the state, oldest first
pub fn apply_input<R: Rng>(state: &mut SimulationState<R>, input: &mut FrameInput) {
    for event in input.events.drain(..) {
        match event {
            InputEvent::Tap(point) => state.add_circle(point),
            InputEvent::Clear => state.clear(),
        }
    }
}

/// Self and pairwise flip detection over every live circle
///
/// Visits each unordered pair exactly once. Flips are flags, so visiting
/// order does not matter.
pub fn tick<R: Rng>(state: &mut SimulationState<R>) {
    state.frame_watermark = Some(state.peek_next_id());

    for circle in &mut state.circles {
        circle.mark_flip_if_due();
    }

    let n = state.circles.len();
    for i in 0..n {
        // Split so both circles of the pair can be borrowed mutably
        let (head, tail) = state.circles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if a.collides_with(b) {
                a.request_flip();
                b.request_flip();
            }
        }
    }
}

/// Boundary detection, integration and emission, in draw order
///
/// Circles added after this frame's `tick` are left untouched and not
/// emitted; they join from the next frame.
pub fn render_frame<R: Rng>(state: &mut SimulationState<R>, viewport: Viewport) -> Vec<RenderedCircle> {
    let watermark = state.frame_watermark.take().unwrap_or(u64::MAX);

    let mut out = Vec::with_capacity(state.circles.len());
    for circle in state.circles.iter_mut().filter(|c| c.id < watermark) {
        circle.mark_flip_from_boundary(viewport);
        circle.integrate();
        out.push(RenderedCircle {
            center: circle.center(),
            radius: circle.radius(),
            color: circle.color(),
        });
    }

    state.frame += 1;
    out
}

/// Run one full frame: queued input, then `tick`, then `render_frame`
pub fn step_frame<R: Rng>(
    state: &mut SimulationState<R>,
    input: &mut FrameInput,
    viewport: Viewport,
) -> Vec<RenderedCircle> {
    apply_input(state, input);
    tick(state);
    render_frame(state, viewport)
}

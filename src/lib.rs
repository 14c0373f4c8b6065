//! Ripple Rings - circles that breathe, bump and bounce off the screen edge
//!
//! Core modules:
//! - `sim`: Deterministic simulation (circles, flip detection, frame protocol)
//! - `renderer`: Stroke geometry for drawing circle outlines
//! - `settings`: Driver configuration (viewport, frame rate, scripted input)

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{OutputMode, ScriptedEvent, Settings, SettingsError};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    use glam::Vec2;

    /// How far a growing circle may extend past any viewport edge before it reverses
    pub const VIEWPORT_MARGIN: f32 = 100.0;
    /// Hard cap on live circles (oldest evicted first)
    pub const MAX_CIRCLES: usize = 50;
    /// Radius of a freshly created circle
    pub const INITIAL_RADIUS: f32 = 1.0;
    /// Growth per frame of a freshly created circle (always starts growing)
    pub const INITIAL_VELOCITY: f32 = 0.9;
    /// A shrinking circle at or below this radius turns around
    pub const MIN_RADIUS: f32 = 1.0;
    /// Where the single starting circle is placed
    pub const SEED_POINT: Vec2 = Vec2::new(100.0, 100.0);
    /// Outline width used when stroking circles
    pub const STROKE_WIDTH: f32 = 3.0;
}

/// Viewport size in simulation units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero or negative dimensions (e.g. a minimized window)
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Viewport rectangle grown outward by `margin` on all four sides, as (min, max)
    #[inline]
    pub fn inflated(&self, margin: f32) -> (Vec2, Vec2) {
        (
            Vec2::splat(-margin),
            Vec2::new(self.width + margin, self.height + margin),
        )
    }
}

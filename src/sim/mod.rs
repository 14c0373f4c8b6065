//! Deterministic simulation module
//!
//! All circle behavior lives here. This module must be pure and deterministic:
//! - One frame = one tick + one render pass
//! - Injected RNG only
//! - Stable iteration order (insertion order)
//! - No drawing or platform dependencies

pub mod circle;
pub mod collision;
pub mod palette;
pub mod state;
pub mod tick;

pub use circle::Circle;
pub use collision::{RingContact, ring_outside_view, ring_ring_contact};
pub use palette::{PALETTE, Swatch};
pub use state::{SimulationState, Snapshot};
pub use tick::{FrameInput, InputEvent, RenderedCircle, apply_input, render_frame, step_frame, tick};

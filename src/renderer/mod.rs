//! Rendering helpers
//!
//! Turns a frame's draw list into stroked-outline triangles. No GPU code lives
//! here; the vertices are laid out for direct buffer upload.

pub mod shapes;
pub mod vertex;

pub use shapes::{frame_geometry, stroke_circle};
pub use vertex::{Vertex, vertex_bytes};

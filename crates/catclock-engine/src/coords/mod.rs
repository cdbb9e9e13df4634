//! Coordinate and geometry types shared by the shape generators, the draw list
//! and the rasterizer.
//!
//! Canonical space:
//! - Canvas units (the face is 150 × 300 units regardless of output resolution)
//! - Origin top-left
//! - +X right, +Y down
//!
//! The rasterizer converts units to pixels with a single uniform scale.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;

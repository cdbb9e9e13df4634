//! Paint model shared between the face layout and the rasterizer.
//!
//! The face is drawn with a single solid ink, so the model is a color type only.

mod color;

pub use color::Color;

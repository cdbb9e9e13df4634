//! CPU rasterizer.
//!
//! Paths are filled anti-aliased with the non-zero winding rule by tiny-skia
//! (re-exported from `resvg`). The pixmap is converted to an `image::RgbaImage`
//! once, when the frame is finished.

mod canvas;

pub use canvas::{Canvas, MAX_PIXELS_PER_SIDE};

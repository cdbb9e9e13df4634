//! Shape generators for the face.
//!
//! Each generator is a small parameter set (phase, or hand length/width/angle)
//! that maps a target rectangle to one closed [`Path`]. Generators are cheap
//! values; the face builds fresh ones every frame.

mod eyes;
mod hand;
mod tail;

pub use eyes::{project, EyesShape};
pub use hand::{hour_hand_theta, minute_hand_theta, second_hand_theta, ClockHandShape};
pub use tail::TailShape;

use crate::coords::Rect;
use crate::path::Path;

/// A closed polygon anchored in a target rectangle.
pub trait Shape {
    fn path(&self, rect: Rect) -> Path;
}

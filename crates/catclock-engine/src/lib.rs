//! Cat clock engine.
//!
//! A decorative clock face: a cat whose eyes track side to side, whose tail
//! sways, and whose paws are the clock hands. Everything here is a pure
//! function of a [`time::TimeSample`] except the [`ticker`] and the
//! [`view::ClockView`] that drives it.

pub mod config;
pub mod coords;
pub mod error;
pub mod face;
pub mod logging;
pub mod paint;
pub mod path;
pub mod raster;
pub mod scene;
pub mod shapes;
pub mod ticker;
pub mod time;
pub mod view;

pub use config::{FaceConfig, FaceLayout, HandSpec};
pub use error::{ConfigError, TimeParseError};
pub use face::{load_background, ClockFace};
pub use time::{FixedClock, SystemClock, TimeSample, WallClock};
pub use view::ClockView;

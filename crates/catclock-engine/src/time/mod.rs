//! Time subsystem.
//!
//! - `TimeSample`: one immutable wall-clock reading, taken once per tick
//! - `WallClock`: where samples come from (`SystemClock`, or `FixedClock` in tests)
//! - `FrameClock`: monotonic frame pacing for the host loop

mod clock;
mod frame_clock;
mod sample;

pub use clock::{FixedClock, SystemClock, WallClock};
pub use frame_clock::{FrameClock, FrameTime};
pub use sample::TimeSample;

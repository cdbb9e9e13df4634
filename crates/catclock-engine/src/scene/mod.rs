//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic fill commands for one frame
//! - provide deterministic ordering (z-index + insertion order)

mod cmd;
mod key;
mod list;
mod z_index;

pub use cmd::{DrawCmd, FillPathCmd};
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use z_index::ZIndex;

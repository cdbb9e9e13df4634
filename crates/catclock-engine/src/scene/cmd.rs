use crate::paint::Color;
use crate::path::Path;

/// Fill payload: one closed contour, non-zero winding, solid color.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPathCmd {
    pub path: Path,
    pub color: Color,
}

impl FillPathCmd {
    #[inline]
    pub fn new(path: Path, color: Color) -> Self {
        Self { path, color }
    }
}

/// Renderer-agnostic draw command stream.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillPath(FillPathCmd),
}

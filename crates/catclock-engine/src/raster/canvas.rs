use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{self, FillRule, Pixmap, PathBuilder, Transform};

use crate::coords::Vec2;
use crate::paint::Color;
use crate::path::Path;
use crate::scene::{DrawCmd, DrawList};

/// Largest surface edge, in pixels, a canvas may have.
pub const MAX_PIXELS_PER_SIDE: u32 = 16_384;

/// A transparent pixel surface addressed in canvas units.
///
/// The surface is `ceil(units × scale)` pixels on each axis.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixmap: Pixmap,
    scale: f64,
}

impl Canvas {
    /// Creates a fully transparent canvas, or `None` when the pixel size is
    /// zero or exceeds [`MAX_PIXELS_PER_SIDE`].
    pub fn new(units: Vec2, scale: f64) -> Option<Self> {
        let (w, h) = Self::pixel_size(units, scale)?;
        Some(Self { pixmap: Pixmap::new(w, h)?, scale })
    }

    /// Pixel dimensions for a canvas of `units` at `scale`, `None` when either
    /// side is empty, not finite or above [`MAX_PIXELS_PER_SIDE`].
    pub fn pixel_size(units: Vec2, scale: f64) -> Option<(u32, u32)> {
        let px = |v: f64| {
            let n = (v * scale).ceil();
            (n.is_finite() && n >= 1.0 && n <= f64::from(MAX_PIXELS_PER_SIDE)).then(|| n as u32)
        };
        Some((px(units.x)?, px(units.y)?))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Fills a closed path (canvas units) with `color`, source-over.
    ///
    /// Paths with fewer than three points cover nothing and are skipped.
    pub fn fill_path(&mut self, path: &Path, color: Color) {
        if color.a <= 0.0 || path.len() < 3 || !path.is_finite() {
            return;
        }

        let mut pb = PathBuilder::with_capacity(path.len() + 1, path.len());
        for (i, p) in path.points().iter().enumerate() {
            if i == 0 {
                pb.move_to(p.x as f32, p.y as f32);
            } else {
                pb.line_to(p.x as f32, p.y as f32);
            }
        }
        pb.close();
        let Some(skia_path) = pb.finish() else {
            log::trace!("skipping degenerate path ({} points)", path.len());
            return;
        };

        let [r, g, b, a] = color.to_rgba8();
        let mut paint = tiny_skia::Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        let s = self.scale as f32;
        self.pixmap
            .fill_path(&skia_path, &paint, FillRule::Winding, Transform::from_scale(s, s), None);
    }

    /// Replays a draw list in paint order.
    pub fn draw(&mut self, list: &mut DrawList) {
        for item in list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::FillPath(fill) => self.fill_path(&fill.path, fill.color),
            }
        }
    }

    /// Converts the premultiplied pixmap into a straight-alpha image.
    pub fn into_image(self) -> RgbaImage {
        let width = self.pixmap.width();
        let pixels = self.pixmap.pixels();
        RgbaImage::from_fn(width, self.pixmap.height(), |x, y| {
            let c = pixels[(y as usize) * (width as usize) + x as usize].demultiply();
            Rgba([c.red(), c.green(), c.blue(), c.alpha()])
        })
    }
}

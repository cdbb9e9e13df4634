//! Frame compositor.
//!
//! Turns one [`TimeSample`] into the face image: the ink layer (eyes, tail,
//! hands) is rasterized onto a transparent canvas, then flattened over the
//! optional background artwork and the backdrop color.

use std::path::Path as FsPath;

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::config::{FaceConfig, HandSpec};
use crate::coords::{Rect, Vec2};
use crate::error::ConfigError;
use crate::raster::Canvas;
use crate::scene::{DrawList, ZIndex};
use crate::shapes::{
    hour_hand_theta, minute_hand_theta, second_hand_theta, ClockHandShape, EyesShape, Shape,
    TailShape,
};
use crate::time::TimeSample;

const Z_EYES: ZIndex = ZIndex::new(0);
const Z_TAIL: ZIndex = ZIndex::new(1);
const Z_MINUTE: ZIndex = ZIndex::new(2);
const Z_HOUR: ZIndex = ZIndex::new(3);
const Z_SECOND: ZIndex = ZIndex::new(4);

/// A validated face, ready to render frames.
#[derive(Debug, Clone)]
pub struct ClockFace {
    config: FaceConfig,
    /// Transparent surface every overlay starts from.
    blank: Canvas,
}

impl ClockFace {
    pub fn new(config: FaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let blank = Canvas::new(config.canvas, config.scale)
            .ok_or_else(|| ConfigError::new("scale", "surface could not be allocated"))?;
        Ok(Self { config, blank })
    }

    #[inline]
    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// Output image size in pixels.
    #[inline]
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.blank.width(), self.blank.height())
    }

    /// Where the face sits when shown inside `container` at the display aspect.
    #[inline]
    pub fn display_rect(&self, container: Rect) -> Rect {
        container.fit_aspect(self.config.display_aspect)
    }

    /// Records the ink layer for `sample`: eyes, tail, minute hand, hour hand,
    /// then the second hand when enabled.
    pub fn build_scene(&self, sample: &TimeSample, list: &mut DrawList) {
        let c = &self.config;
        let t = sample.phase();

        let eyes = EyesShape::new(t);
        list.push_fill(Z_EYES, eyes.path(c.layout.left_eye), c.ink);
        list.push_fill(Z_EYES, eyes.path(c.layout.right_eye), c.ink);

        list.push_fill(Z_TAIL, TailShape::new(t).path(c.layout.tail), c.ink);

        let hand = |spec: HandSpec, theta: f64| {
            ClockHandShape::new(spec.length, spec.width, theta).path(c.layout.hands)
        };
        list.push_fill(Z_MINUTE, hand(c.minute_hand, minute_hand_theta(sample.minute)), c.ink);
        list.push_fill(
            Z_HOUR,
            hand(c.hour_hand, hour_hand_theta(sample.hour, sample.minute)),
            c.ink,
        );
        if let Some(spec) = c.second_hand {
            list.push_fill(Z_SECOND, hand(spec, second_hand_theta(sample.second)), c.ink);
        }
    }

    /// Rasterizes the ink layer onto a transparent image, reusing `list`.
    pub fn render_overlay_with(&self, sample: &TimeSample, list: &mut DrawList) -> RgbaImage {
        list.clear();
        self.build_scene(sample, list);

        let mut canvas = self.blank.clone();
        canvas.draw(list);
        log::trace!("rendered overlay for {sample} ({} shapes)", list.len());
        canvas.into_image()
    }

    pub fn render_overlay(&self, sample: &TimeSample) -> RgbaImage {
        self.render_overlay_with(sample, &mut DrawList::new())
    }

    /// Flattens `overlay` over `background` (stretched to the face) over the backdrop.
    pub fn compose(&self, overlay: &RgbaImage, background: Option<&RgbaImage>) -> RgbaImage {
        let (w, h) = self.pixel_size();
        let mut out = RgbaImage::from_pixel(w, h, Rgba(self.config.backdrop.to_rgba8()));

        if let Some(bg) = background {
            if bg.dimensions() == (w, h) {
                imageops::overlay(&mut out, bg, 0, 0);
            } else {
                let resized = imageops::resize(bg, w, h, FilterType::Triangle);
                imageops::overlay(&mut out, &resized, 0, 0);
            }
        }

        imageops::overlay(&mut out, overlay, 0, 0);
        out
    }

    /// Renders the complete frame for `sample`. Always `pixel_size()` pixels.
    pub fn render_frame(&self, sample: &TimeSample, background: Option<&RgbaImage>) -> RgbaImage {
        let overlay = self.render_overlay(sample);
        self.compose(&overlay, background)
    }

    /// Canvas size in units.
    #[inline]
    pub fn canvas(&self) -> Vec2 {
        self.config.canvas
    }
}

/// Loads background artwork from disk.
pub fn load_background(path: impl AsRef<FsPath>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let img = image::open(path)
        .with_context(|| format!("failed to load background image {}", path.display()))?;
    log::debug!("loaded background {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img.to_rgba8())
}

//! Face configuration.
//!
//! Defaults reproduce the stock cat clock: a 150 × 300 unit face, minute and
//! hour hands only, black ink over a white backdrop, redrawn every 10 ms.

use std::time::Duration;

use crate::coords::{Rect, Vec2};
use crate::error::ConfigError;
use crate::paint::Color;
use crate::raster::{Canvas, MAX_PIXELS_PER_SIDE};

/// Fixed anchor rectangles for each shape, in canvas units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceLayout {
    pub tail: Rect,
    pub left_eye: Rect,
    pub right_eye: Rect,
    /// Shared by all hands; they pivot on its center.
    pub hands: Rect,
}

impl Default for FaceLayout {
    fn default() -> Self {
        Self {
            tail: Rect::new(0.0, 211.0, 150.0, 89.0),
            left_eye: Rect::new(49.0, 30.0, 54.0, 23.0),
            right_eye: Rect::new(80.0, 30.0, 54.0, 23.0),
            hands: Rect::new(0.0, 0.0, 150.0, 300.0),
        }
    }
}

/// Hand dimensions: tip distance from the pivot and base half-width.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandSpec {
    pub length: f64,
    pub width: f64,
}

impl HandSpec {
    pub const MINUTE: HandSpec = HandSpec::new(27.0, 4.0);
    pub const HOUR: HandSpec = HandSpec::new(17.0, 4.0);
    pub const SECOND: HandSpec = HandSpec::new(27.0, 1.0);

    #[inline]
    pub const fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaceConfig {
    /// Face size in canvas units.
    pub canvas: Vec2,
    pub layout: FaceLayout,
    pub minute_hand: HandSpec,
    pub hour_hand: HandSpec,
    /// Drawn on top of the other hands when set. Off on the stock face.
    pub second_hand: Option<HandSpec>,
    pub ink: Color,
    pub backdrop: Color,
    /// Output pixels per canvas unit.
    pub scale: f64,
    /// Width:height ratio the face is displayed at.
    pub display_aspect: f64,
    /// Redraw cadence of the live view.
    pub tick_interval: Duration,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            canvas: Vec2::new(150.0, 300.0),
            layout: FaceLayout::default(),
            minute_hand: HandSpec::MINUTE,
            hour_hand: HandSpec::HOUR,
            second_hand: None,
            ink: Color::black(),
            backdrop: Color::white(),
            scale: 1.0,
            display_aspect: 0.5,
            tick_interval: Duration::from_millis(10),
        }
    }
}

impl FaceConfig {
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn second_hand(mut self, enabled: bool) -> Self {
        self.second_hand = enabled.then_some(HandSpec::SECOND);
        self
    }

    pub fn ink(mut self, ink: Color) -> Self {
        self.ink = ink;
        self
    }

    pub fn backdrop(mut self, backdrop: Color) -> Self {
        self.backdrop = backdrop;
        self
    }

    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Checks that the face can be rasterized and scheduled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.canvas.is_finite() || self.canvas.x <= 0.0 || self.canvas.y <= 0.0 {
            return Err(ConfigError::new("canvas", "size must be positive and finite"));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::new("scale", format!("{} is not a positive number", self.scale)));
        }
        if Canvas::pixel_size(self.canvas, self.scale).is_none() {
            return Err(ConfigError::new(
                "scale",
                format!(
                    "{} gives a surface outside 1..={MAX_PIXELS_PER_SIDE} px per side",
                    self.scale
                ),
            ));
        }
        if !self.display_aspect.is_finite() || self.display_aspect <= 0.0 {
            return Err(ConfigError::new("display_aspect", "must be positive and finite"));
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::new("tick_interval", "must be non-zero"));
        }

        let layout = [
            ("layout.tail", self.layout.tail),
            ("layout.left_eye", self.layout.left_eye),
            ("layout.right_eye", self.layout.right_eye),
            ("layout.hands", self.layout.hands),
        ];
        for (field, rect) in layout {
            if !rect.is_finite() {
                return Err(ConfigError::new(field, "rect must be finite"));
            }
        }

        let hands = [
            ("minute_hand", Some(self.minute_hand)),
            ("hour_hand", Some(self.hour_hand)),
            ("second_hand", self.second_hand),
        ];
        for (field, spec) in hands {
            if let Some(spec) = spec {
                if !(spec.length.is_finite() && spec.width.is_finite())
                    || spec.length < 0.0
                    || spec.width < 0.0
                {
                    return Err(ConfigError::new(field, "length and width must be non-negative"));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(FaceConfig::default().validate(), Ok(()));
    }

    #[test]
    fn second_hand_is_off_by_default() {
        assert_eq!(FaceConfig::default().second_hand, None);
        assert_eq!(FaceConfig::default().second_hand(true).second_hand, Some(HandSpec::SECOND));
    }

    #[test]
    fn rejects_non_positive_scale() {
        let err = FaceConfig::default().scale(0.0).validate().unwrap_err();
        assert_eq!(err.field, "scale");
    }

    #[test]
    fn rejects_scale_beyond_pixel_cap() {
        let err = FaceConfig::default().scale(1e9).validate().unwrap_err();
        assert_eq!(err.field, "scale");
        assert!(err.message.contains("16384"));
        // 300 × 55 = 16 500 px tall.
        assert!(FaceConfig::default().scale(55.0).validate().is_err());
        assert!(FaceConfig::default().scale(54.0).validate().is_ok());
    }

    #[test]
    fn tiny_scale_still_yields_one_pixel() {
        assert!(FaceConfig::default().scale(1e-6).validate().is_ok());
    }

    #[test]
    fn rejects_zero_tick_interval() {
        let err = FaceConfig::default().tick_interval(Duration::ZERO).validate().unwrap_err();
        assert_eq!(err.field, "tick_interval");
    }

    #[test]
    fn rejects_negative_hand() {
        let mut config = FaceConfig::default();
        config.hour_hand = HandSpec::new(-1.0, 4.0);
        assert_eq!(config.validate().unwrap_err().field, "hour_hand");
    }
}

use core::f64::consts::TAU;

use crate::coords::{Rect, Vec2};
use crate::path::Path;

use super::Shape;

/// Angle of the second hand, clockwise from 12 o'clock.
#[inline]
pub fn second_hand_theta(second: u32) -> f64 {
    TAU * f64::from(second) / 60.0
}

/// Angle of the minute hand, clockwise from 12 o'clock.
#[inline]
pub fn minute_hand_theta(minute: u32) -> f64 {
    TAU * f64::from(minute) / 60.0
}

/// Angle of the hour hand, clockwise from 12 o'clock. `hour` may be 0–23;
/// the hand sweeps the dial twice a day.
#[inline]
pub fn hour_hand_theta(hour: u32, minute: u32) -> f64 {
    TAU * (f64::from(hour) + f64::from(minute) / 60.0) / 12.0
}

/// A dart-shaped hand pivoting on the center of its rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockHandShape {
    pub length: f64,
    /// Half-width of the base.
    pub width: f64,
    pub theta: f64,
}

impl ClockHandShape {
    #[inline]
    pub const fn new(length: f64, width: f64, theta: f64) -> Self {
        Self { length, width, theta }
    }

    /// Tip, then the two base corners (behind the pivot on either side).
    pub fn vertices(&self, rect: Rect) -> [Vec2; 3] {
        let (s, c) = self.theta.sin_cos();
        let (ws, wc) = (self.width * s, self.width * c);
        let o = rect.center();

        [
            Vec2::new(o.x + self.length * s, o.y - self.length * c),
            Vec2::new(o.x - (ws + wc), o.y + (wc - ws)),
            Vec2::new(o.x - (ws - wc), o.y + (ws + wc)),
        ]
    }
}

impl Shape for ClockHandShape {
    fn path(&self, rect: Rect) -> Path {
        let [tip, left, right] = self.vertices(rect);
        let mut path = Path::with_capacity(3);
        path.move_to(tip);
        path.line_to(left);
        path.line_to(right);
        path.close();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    const HANDS: Rect = Rect::new(0.0, 0.0, 150.0, 300.0);

    fn near(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-9
    }

    // ── angles ────────────────────────────────────────────────────────────

    #[test]
    fn minute_angle_is_periodic() {
        assert_eq!(minute_hand_theta(0), minute_hand_theta(60 % 60));
        assert!((minute_hand_theta(60) - TAU).abs() < 1e-12);
    }

    #[test]
    fn hour_angle_at_three_is_quarter_turn() {
        assert!((hour_hand_theta(3, 0) - FRAC_PI_2).abs() < 1e-12);
        assert!((hour_hand_theta(15, 0) - (FRAC_PI_2 + TAU)).abs() < 1e-12);
    }

    #[test]
    fn hour_angle_increases_with_minutes() {
        for hour in 0..24 {
            for minute in 1..60 {
                assert!(hour_hand_theta(hour, minute) > hour_hand_theta(hour, minute - 1));
            }
        }
    }

    #[test]
    fn half_past_moves_hour_hand_halfway() {
        let step = hour_hand_theta(1, 0) - hour_hand_theta(0, 0);
        assert!((hour_hand_theta(6, 30) - hour_hand_theta(6, 0) - step / 2.0).abs() < 1e-12);
    }

    #[test]
    fn second_angle_matches_minute_scale() {
        assert_eq!(second_hand_theta(15), minute_hand_theta(15));
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn noon_hand_points_up() {
        let [tip, left, right] = ClockHandShape::new(27.0, 4.0, 0.0).vertices(HANDS);
        assert!(near(tip, Vec2::new(75.0, 123.0)));
        assert!(near(left, Vec2::new(71.0, 154.0)));
        assert!(near(right, Vec2::new(79.0, 154.0)));
    }

    #[test]
    fn three_oclock_hand_points_right() {
        let [tip, ..] = ClockHandShape::new(17.0, 4.0, FRAC_PI_2).vertices(HANDS);
        assert!(near(tip, Vec2::new(92.0, 150.0)));
    }

    #[test]
    fn six_oclock_hand_points_down() {
        let [tip, ..] = ClockHandShape::new(27.0, 4.0, PI).vertices(HANDS);
        assert!(near(tip, Vec2::new(75.0, 177.0)));
    }

    #[test]
    fn path_is_closed_triangle() {
        let path = ClockHandShape::new(27.0, 4.0, 1.0).path(HANDS);
        assert!(path.is_closed());
        assert_eq!(path.len(), 3);
        assert_eq!(path.edges().count(), 3);
    }
}

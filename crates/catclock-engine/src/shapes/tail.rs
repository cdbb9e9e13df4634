use core::f64::consts::PI;

use crate::coords::{Rect, Vec2};
use crate::path::Path;

use super::Shape;

/// Paw silhouette in the tail's local frame, pivot at (0, 0).
const TAIL_POINTS: [Vec2; 6] = [
    Vec2::new(0.0, 76.0),
    Vec2::new(3.0, 82.0),
    Vec2::new(10.0, 84.0),
    Vec2::new(18.0, 82.0),
    Vec2::new(21.0, 76.0),
    Vec2::new(21.0, 70.0),
];

/// Pivot position relative to the tail rectangle's origin.
const TAIL_OFFSET: Vec2 = Vec2::new(74.0, -15.0);

/// Peak sway, in radians.
const SWAY_AMPLITUDE: f64 = 0.4;

/// The swinging tail: a wedge from the pivot out to the paw, rotated by the sway angle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TailShape {
    pub t: f64,
}

impl TailShape {
    #[inline]
    pub const fn new(t: f64) -> Self {
        Self { t }
    }

    /// Sway angle `0.4 · sin(t + 3π)`, always within ±0.4 rad.
    #[inline]
    pub fn rotation(&self) -> f64 {
        SWAY_AMPLITUDE * (self.t + 3.0 * PI).sin()
    }

    /// Pivot of the sway in canvas units.
    #[inline]
    pub fn pivot(rect: Rect) -> Vec2 {
        rect.origin + TAIL_OFFSET
    }

    /// The six paw vertices after rotation about the pivot.
    pub fn vertices(&self, rect: Rect) -> [Vec2; 6] {
        let theta = self.rotation();
        let pivot = Self::pivot(rect);
        TAIL_POINTS.map(|p| pivot + p.rotated(theta))
    }
}

impl Shape for TailShape {
    /// Pivot followed by the six paw vertices, closed back to the pivot.
    fn path(&self, rect: Rect) -> Path {
        let mut path = Path::with_capacity(TAIL_POINTS.len() + 1);
        path.move_to(Self::pivot(rect));
        for v in self.vertices(rect) {
            path.line_to(v);
        }
        path.close();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAIL_RECT: Rect = Rect::new(0.0, 211.0, 150.0, 89.0);

    #[test]
    fn rotation_is_bounded() {
        for i in 0..2_000 {
            let t = -50.0 + i as f64 * 0.05;
            let theta = TailShape::new(t).rotation();
            assert!((-0.4..=0.4).contains(&theta), "t = {t}: theta = {theta}");
        }
    }

    #[test]
    fn rotation_peaks_at_quarter_phase() {
        // sin(π/2 + 3π) = sin(7π/2) = -1
        let theta = TailShape::new(PI / 2.0).rotation();
        assert!((theta + 0.4).abs() < 1e-12);
    }

    #[test]
    fn zero_phase_is_pure_translation() {
        let vertices = TailShape::new(0.0).vertices(TAIL_RECT);
        let pivot = Vec2::new(74.0, 196.0);
        for (v, local) in vertices.iter().zip(TAIL_POINTS) {
            assert!(v.distance(pivot + local) < 1e-9, "{v:?} vs {:?}", pivot + local);
        }
        // Concrete check: the last paw vertex sits at (95, 266).
        assert!(vertices[5].distance(Vec2::new(95.0, 266.0)) < 1e-9);
    }

    #[test]
    fn path_is_closed_pivot_plus_six_vertices() {
        let path = TailShape::new(1.3).path(TAIL_RECT);
        assert!(path.is_closed());
        assert_eq!(path.len(), 7);
        assert_eq!(path.first(), Some(TailShape::pivot(TAIL_RECT)));
        // Closing edge leads back to the start.
        let (_, end) = path.edges().last().unwrap();
        assert_eq!(Some(end), path.first());
    }

    #[test]
    fn sway_keeps_distance_to_pivot() {
        let pivot = TailShape::pivot(TAIL_RECT);
        let at_rest = TailShape::new(0.0).vertices(TAIL_RECT);
        let swung = TailShape::new(0.8).vertices(TAIL_RECT);
        for (a, b) in at_rest.iter().zip(swung.iter()) {
            assert!((a.distance(pivot) - b.distance(pivot)).abs() < 1e-9);
        }
    }
}

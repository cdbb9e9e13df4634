use core::f64::consts::{FRAC_PI_2, PI};

use crate::coords::{Rect, Vec2};
use crate::path::Path;

use super::Shape;

/// Peak gaze deflection from straight ahead, in radians.
const GAZE_AMPLITUDE: f64 = 0.7;

/// Half the lens opening; the two sweeps are rotated by ±this.
const LENS_HALF_ANGLE: f64 = PI / 7.0;

/// Sweep step of the arc parameter `u`.
const ARC_STEP: f64 = 0.25;

/// Distance of the projection plane from the eyeball center.
const CAMERA_DISTANCE: f64 = 2.0;

const EYE_SCALE: f64 = 23.0;
const EYE_CENTER: Vec2 = Vec2::new(12.0, 11.0);

/// Perspective divide with a guard: a zero depth leaves the point unprojected.
#[inline]
pub fn project(px: f64, py: f64, pz: f64) -> (f64, f64) {
    if pz == 0.0 { (px, py) } else { (px / pz, py / pz) }
}

/// One eye: a lens-shaped outline of a sphere slice, seen in perspective, whose
/// apparent rotation follows the gaze angle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EyesShape {
    pub t: f64,
}

impl EyesShape {
    #[inline]
    pub const fn new(t: f64) -> Self {
        Self { t }
    }

    /// Gaze angle `0.7 · sin(t + 3π) + π/2`, always within `π/2 ± 0.7`.
    #[inline]
    pub fn gaze_angle(&self) -> f64 {
        GAZE_AMPLITUDE * (self.t + 3.0 * PI).sin() + FRAC_PI_2
    }

    /// Points of both sweeps: `u` rising from `-π/2 + 0.25` (exclusive of `π/2`)
    /// on the `+π/7` meridian, then falling from `π/2` (exclusive of `-π/2`) on
    /// the `-π/7` meridian.
    pub fn arc_points(&self, rect: Rect) -> Vec<Vec2> {
        let angle = self.gaze_angle();
        let origin = rect.origin;

        let rising = (0..)
            .map(|k| -FRAC_PI_2 + ARC_STEP + k as f64 * ARC_STEP)
            .take_while(|&u| u < FRAC_PI_2)
            .map(|u| (u, angle + LENS_HALF_ANGLE));
        let falling = (0..)
            .map(|k| FRAC_PI_2 - k as f64 * ARC_STEP)
            .take_while(|&u| u > -FRAC_PI_2)
            .map(|u| (u, angle - LENS_HALF_ANGLE));

        rising
            .chain(falling)
            .map(|(u, meridian)| lens_point(origin, u, meridian))
            .collect()
    }

    /// Projected top of the lens, where the outline starts.
    #[inline]
    pub fn start_point(rect: Rect) -> Vec2 {
        rect.origin + Vec2::new(EYE_CENTER.x, EYE_CENTER.y - EYE_SCALE / CAMERA_DISTANCE)
    }
}

fn lens_point(origin: Vec2, u: f64, meridian: f64) -> Vec2 {
    let (sin_m, cos_m) = meridian.sin_cos();
    let px = u.cos() * cos_m;
    let py = u.sin();
    let pz = CAMERA_DISTANCE + u.cos() * sin_m;

    let (qx, qy) = project(px, py, pz);
    origin + Vec2::new(qx, qy) * EYE_SCALE + EYE_CENTER
}

impl Shape for EyesShape {
    fn path(&self, rect: Rect) -> Path {
        let arc = self.arc_points(rect);
        let mut path = Path::with_capacity(arc.len() + 1);
        path.move_to(Self::start_point(rect));
        for p in arc {
            path.line_to(p);
        }
        path.close();
        path
    }
}

//! Single-contour polygon paths.
//!
//! Every face shape is one closed contour, so a `Path` holds exactly one
//! point list. Build it the same way the shapes describe themselves:
//! `move_to` the start, `line_to` each vertex, then `close`.

use crate::coords::{Rect, Vec2};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<Vec2>,
    closed: bool,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        Self { points: Vec::with_capacity(n), closed: false }
    }

    /// Starts the contour at `p`, discarding anything recorded before.
    pub fn move_to(&mut self, p: Vec2) {
        self.points.clear();
        self.closed = false;
        self.points.push(p);
    }

    /// Appends a vertex. Without a prior `move_to` the point becomes the start.
    #[inline]
    pub fn line_to(&mut self, p: Vec2) {
        self.points.push(p);
    }

    /// Marks the contour closed; the last vertex connects back to the first.
    #[inline]
    pub fn close(&mut self) {
        self.closed = true;
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn first(&self) -> Option<Vec2> {
        self.points.first().copied()
    }

    /// Iterates the polygon edges, including the closing edge of a closed path.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let open = self.points.windows(2).map(|w| (w[0], w[1]));
        let closing = match (self.closed, self.points.first(), self.points.last()) {
            (true, Some(&first), Some(&last)) if self.points.len() > 1 => Some((last, first)),
            _ => None,
        };
        open.chain(closing)
    }

    /// Tight axis-aligned bounds of the vertices, `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.first()?;
        let (mut lo, mut hi) = (first, first);
        for p in &self.points[1..] {
            lo = Vec2::new(lo.x.min(p.x), lo.y.min(p.y));
            hi = Vec2::new(hi.x.max(p.x), hi.y.max(p.y));
        }
        Some(Rect::from_origin_size(lo, hi - lo))
    }

    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.is_finite())
    }
}

impl FromIterator<Vec2> for Path {
    /// Collects an open contour; call [`Path::close`] to close it.
    fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect(), closed: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Path {
        let mut p = Path::new();
        p.move_to(Vec2::new(0.0, 0.0));
        p.line_to(Vec2::new(4.0, 0.0));
        p.line_to(Vec2::new(0.0, 3.0));
        p.close();
        p
    }

    #[test]
    fn closed_path_yields_closing_edge() {
        let edges: Vec<_> = triangle().edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (Vec2::new(0.0, 3.0), Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn open_path_has_no_closing_edge() {
        let p: Path = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)].into_iter().collect();
        assert!(!p.is_closed());
        assert_eq!(p.edges().count(), 1);
    }

    #[test]
    fn move_to_restarts_contour() {
        let mut p = triangle();
        p.move_to(Vec2::new(9.0, 9.0));
        assert_eq!(p.len(), 1);
        assert!(!p.is_closed());
    }

    #[test]
    fn bounds_cover_all_points() {
        assert_eq!(triangle().bounds(), Some(Rect::new(0.0, 0.0, 4.0, 3.0)));
        assert_eq!(Path::new().bounds(), None);
    }
}

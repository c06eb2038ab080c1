use std::sync::OnceLock;

use crate::geom::{Point, Rect};

use super::{PathFillType, Verb};

/// The owned verb/point/weight buffers behind a [`Path`](super::Path).
///
/// Buffer invariants:
/// - the first verb is always [`Verb::Move`], or the path is empty;
/// - the per-verb point counts sum to `points.len()`;
/// - `conic_weights.len()` equals the number of [`Verb::Conic`] verbs, in
///   verb order;
/// - `Close` never opens a contour and appends no point.
///
/// Shared by handles copy-on-write; every mutation drops the cached bounds
/// before touching the buffers.
#[derive(Debug, Clone, Default)]
pub struct PathData {
    pub(crate) verbs: Vec<Verb>,
    pub(crate) points: Vec<Point>,
    pub(crate) conic_weights: Vec<f32>,
    pub(crate) fill_type: PathFillType,
    /// Control-polygon bounds, computed on first query after a mutation.
    pub(crate) bounds: OnceLock<Rect>,
}

impl PathData {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn count_verbs(&self) -> usize {
        self.verbs.len()
    }

    #[inline]
    pub fn count_points(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn conic_weights(&self) -> &[f32] {
        &self.conic_weights
    }

    #[inline]
    pub fn fill_type(&self) -> PathFillType {
        self.fill_type
    }

    #[inline]
    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Bounding box of the point buffer; `(0,0,0,0)` for fewer than 2 points.
    ///
    /// This is the control-polygon bound: conservative for curves, whose
    /// control points may lie outside the curve itself.
    pub fn bounds(&self) -> Rect {
        *self.bounds.get_or_init(|| {
            if self.points.len() < 2 {
                return Rect::EMPTY;
            }
            let mut bounds = Rect::from_points(self.points[0], self.points[1]);
            for &p in &self.points[2..] {
                bounds.include(p);
            }
            bounds
        })
    }

    /// Clears the cached bounds. Every mutating access must call this.
    #[inline]
    pub(crate) fn dirty(&mut self) {
        self.bounds = OnceLock::new();
    }

    pub(crate) fn reset(&mut self) {
        self.verbs = Vec::new();
        self.points = Vec::new();
        self.conic_weights = Vec::new();
        self.fill_type = PathFillType::Winding;
        self.dirty();
    }

    pub(crate) fn push_verb(&mut self, verb: Verb, pts: &[Point]) {
        debug_assert_eq!(verb.points_appended(), pts.len());
        self.verbs.push(verb);
        self.points.extend_from_slice(pts);
        self.dirty();
    }

    pub(crate) fn push_conic(&mut self, ctrl: Point, to: Point, weight: f32) {
        self.verbs.push(Verb::Conic);
        self.points.push(ctrl);
        self.points.push(to);
        self.conic_weights.push(weight);
        self.dirty();
    }

    pub(crate) fn reserve(&mut self, verbs: usize, points: usize, weights: usize) {
        self.verbs.reserve(verbs);
        self.points.reserve(points);
        self.conic_weights.reserve(weights);
    }
}

/// Deep content comparison; the bounds cache does not participate.
impl PartialEq for PathData {
    fn eq(&self, other: &Self) -> bool {
        self.fill_type == other.fill_type
            && self.verbs == other.verbs
            && self.points == other.points
            && self.conic_weights == other.conic_weights
    }
}

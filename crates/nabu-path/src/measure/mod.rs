//! Arc-length parameterization of paths.
//!
//! [`PathMeasure`] converts a path into per-contour segment tables with
//! precomputed lengths, then exposes two forward-only cursors (contour and
//! segment) plus sub-range extraction — the basis for dashing, trim effects,
//! and motion along a path.

mod flatten;

pub use flatten::{
    FLATTEN_TOLERANCE, MAX_SUBDIVISION_DEPTH, chop_conic_at, chop_cubic_at, chop_quad_at,
    conic_point, cubic_point, flatten_conic, flatten_cubic, flatten_quad, quad_point,
};

use crate::geom::Point;
use crate::path::{Path, PathElement};

/// Curve class of a measured segment.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SegmentKind {
    Line,
    Quad,
    Conic,
    Cubic,
}

/// One measured piece of a contour.
///
/// `pts` holds the full control polygon (2, 3, or 4 points depending on
/// `kind`); `weight` is meaningful for conics only.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub kind: SegmentKind,
    pub pts: [Point; 4],
    pub weight: f32,
    pub length: f32,
}

impl Segment {
    fn line(from: Point, to: Point) -> Self {
        Segment {
            kind: SegmentKind::Line,
            pts: [from, to, Point::ZERO, Point::ZERO],
            weight: 0.0,
            length: from.distance(to),
        }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.pts[0]
    }

    #[inline]
    pub fn end(&self) -> Point {
        match self.kind {
            SegmentKind::Line => self.pts[1],
            SegmentKind::Quad | SegmentKind::Conic => self.pts[2],
            SegmentKind::Cubic => self.pts[3],
        }
    }
}

/// One continuous sub-figure: its measurable segments in order.
#[derive(Debug, Clone)]
pub struct Contour {
    segments: Vec<Segment>,
    is_closed: bool,
    total_length: f32,
}

impl Contour {
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    #[inline]
    pub fn total_length(&self) -> f32 {
        self.total_length
    }
}

/// Length-indexed view of a path.
///
/// Built once from a path's iterator; immutable afterwards. Zero-length
/// segments are dropped during construction — they are never visited and
/// never flattened. A closed contour whose last point does not coincide with
/// its move point gains an implicit closing line segment.
#[derive(Debug)]
pub struct PathMeasure {
    contours: Vec<Contour>,
    contour_idx: usize,
    segment_idx: usize,
}

impl PathMeasure {
    pub fn new(path: &Path) -> Self {
        let mut contours = Vec::new();
        let mut pending: Option<PendingContour> = None;

        for element in path.iter() {
            match element {
                PathElement::MoveTo { .. } => {
                    finish(&mut contours, pending.take());
                    pending = Some(PendingContour::default());
                }
                PathElement::LineTo { from, to } => {
                    push_segment(&mut pending, Segment::line(from, to));
                }
                PathElement::QuadTo { from, ctrl, to } => {
                    let pts = [from, ctrl, to];
                    push_segment(
                        &mut pending,
                        Segment {
                            kind: SegmentKind::Quad,
                            pts: [from, ctrl, to, Point::ZERO],
                            weight: 0.0,
                            length: flatten::quad_length(&pts),
                        },
                    );
                }
                PathElement::ConicTo { from, ctrl, to, weight } => {
                    let pts = [from, ctrl, to];
                    push_segment(
                        &mut pending,
                        Segment {
                            kind: SegmentKind::Conic,
                            pts: [from, ctrl, to, Point::ZERO],
                            weight,
                            length: flatten::conic_length(&pts, weight),
                        },
                    );
                }
                PathElement::CubicTo { from, ctrl1, ctrl2, to } => {
                    let pts = [from, ctrl1, ctrl2, to];
                    push_segment(
                        &mut pending,
                        Segment {
                            kind: SegmentKind::Cubic,
                            pts,
                            weight: 0.0,
                            length: flatten::cubic_length(&pts),
                        },
                    );
                }
                PathElement::Close { from, to } => {
                    if let Some(p) = pending.as_mut() {
                        if from.distance(to) > 0.0 {
                            p.push(Segment::line(from, to));
                        }
                        p.closed = true;
                    }
                }
            }
        }
        finish(&mut contours, pending.take());

        PathMeasure {
            contours,
            contour_idx: 0,
            segment_idx: 0,
        }
    }

    /// All measured contours, for consumers that index directly.
    #[inline]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    // ── cursors ───────────────────────────────────────────────────────────

    /// Rewinds both cursors to the first segment of the first contour.
    pub fn reset_contour(&mut self) {
        self.contour_idx = 0;
        self.segment_idx = 0;
    }

    /// Advances to the next contour; `false` once past the last. The
    /// segment cursor rewinds alongside.
    pub fn next_contour(&mut self) -> bool {
        if self.contour_idx < self.contours.len() {
            self.contour_idx += 1;
        }
        self.segment_idx = 0;
        self.contour_idx < self.contours.len()
    }

    /// Rewinds the segment cursor within the current contour.
    pub fn reset_segment(&mut self) {
        self.segment_idx = 0;
    }

    /// Advances to the next segment of the current contour; `false` once
    /// past the last.
    pub fn next_segment(&mut self) -> bool {
        let Some(contour) = self.current_contour() else {
            return false;
        };
        let n = contour.segments.len();
        if self.segment_idx < n {
            self.segment_idx += 1;
        }
        self.segment_idx < n
    }

    fn current_contour(&self) -> Option<&Contour> {
        self.contours.get(self.contour_idx)
    }

    fn current_segment(&self) -> Option<&Segment> {
        self.current_contour()?.segments.get(self.segment_idx)
    }

    /// Whether the contour at the cursor was explicitly closed.
    pub fn is_closed(&self) -> bool {
        self.current_contour().is_some_and(|c| c.is_closed)
    }

    /// Length of the segment at the cursor, or 0 past-the-end.
    pub fn segment_length(&self) -> f32 {
        self.current_segment().map_or(0.0, |s| s.length)
    }

    /// Total length of the contour at the cursor, or 0 past-the-end.
    pub fn contour_length(&self) -> f32 {
        self.current_contour().map_or(0.0, |c| c.total_length)
    }

    // ── extraction ────────────────────────────────────────────────────────

    /// Appends the sub-piece of the current segment between arc distances
    /// `start_d` and `stop_d` to `out`.
    ///
    /// Distances are clamped into `[0, segment_length]` and then normalized
    /// to curve parameters (linear in length fraction). With
    /// `force_move_to` the piece starts its own contour; otherwise it
    /// continues `out`, bridging with a line when the positions differ.
    /// Returns `false` — appending nothing — when the cursor is
    /// past-the-end or the clamped range is empty.
    pub fn segment_slice(
        &self,
        start_d: f32,
        stop_d: f32,
        force_move_to: bool,
        out: &mut Path,
    ) -> bool {
        let Some(seg) = self.current_segment() else {
            return false;
        };
        let start_d = start_d.clamp(0.0, seg.length);
        let stop_d = stop_d.clamp(0.0, seg.length);
        if start_d >= stop_d {
            return false;
        }

        let t0 = start_d / seg.length;
        let t1 = stop_d / seg.length;
        let piece = slice_segment(seg, t0, t1);

        let start = piece.start();
        if force_move_to {
            out.move_to(start);
        } else if out.last_point().is_none() {
            out.move_to(start);
        } else if out.last_point() != Some(start) {
            out.line_to(start);
        }
        match piece.kind {
            SegmentKind::Line => out.line_to(piece.pts[1]),
            SegmentKind::Quad => out.quad_to(piece.pts[1], piece.pts[2]),
            SegmentKind::Conic => out.conic_to(piece.pts[1], piece.pts[2], piece.weight),
            SegmentKind::Cubic => out.cubic_to(piece.pts[1], piece.pts[2], piece.pts[3]),
        }
        true
    }
}

#[derive(Default)]
struct PendingContour {
    segments: Vec<Segment>,
    closed: bool,
}

impl PendingContour {
    fn push(&mut self, seg: Segment) {
        if seg.length > 0.0 && seg.length.is_finite() {
            self.segments.push(seg);
        } else if !seg.length.is_finite() {
            log::warn!("dropping segment with non-finite length (bad control points)");
        }
    }
}

fn push_segment(pending: &mut Option<PendingContour>, seg: Segment) {
    if let Some(p) = pending.as_mut() {
        p.push(seg);
    }
}

fn finish(contours: &mut Vec<Contour>, pending: Option<PendingContour>) {
    let Some(pending) = pending else { return };
    // A bare Move (or a contour whose every segment was degenerate) has
    // nothing to measure.
    if pending.segments.is_empty() {
        return;
    }
    let total_length = pending.segments.iter().map(|s| s.length).sum();
    contours.push(Contour {
        segments: pending.segments,
        is_closed: pending.closed,
        total_length,
    });
}

/// Cuts `[t0, t1]` out of a segment: chop away the tail first, then the
/// head of what remains (rescaling the parameter), so each curve class uses
/// its own de Casteljau form exactly twice at most.
fn slice_segment(seg: &Segment, t0: f32, t1: f32) -> Segment {
    debug_assert!((0.0..=1.0).contains(&t0) && t0 < t1 && t1 <= 1.0);

    match seg.kind {
        SegmentKind::Line => {
            let a = seg.pts[0].lerp(seg.pts[1], t0);
            let b = seg.pts[0].lerp(seg.pts[1], t1);
            Segment::line(a, b)
        }
        SegmentKind::Quad => {
            let p = [seg.pts[0], seg.pts[1], seg.pts[2]];
            let kept = if t1 < 1.0 { chop_quad_at(&p, t1).0 } else { p };
            let kept = if t0 > 0.0 {
                chop_quad_at(&kept, t0 / t1).1
            } else {
                kept
            };
            Segment {
                kind: SegmentKind::Quad,
                pts: [kept[0], kept[1], kept[2], Point::ZERO],
                weight: 0.0,
                length: 0.0,
            }
        }
        SegmentKind::Conic => {
            let p = [seg.pts[0], seg.pts[1], seg.pts[2]];
            let (kept, kw) = if t1 < 1.0 {
                chop_conic_at(&p, seg.weight, t1).0
            } else {
                (p, seg.weight)
            };
            let (kept, kw) = if t0 > 0.0 {
                chop_conic_at(&kept, kw, t0 / t1).1
            } else {
                (kept, kw)
            };
            Segment {
                kind: SegmentKind::Conic,
                pts: [kept[0], kept[1], kept[2], Point::ZERO],
                weight: kw,
                length: 0.0,
            }
        }
        SegmentKind::Cubic => {
            let p = seg.pts;
            let kept = if t1 < 1.0 { chop_cubic_at(&p, t1).0 } else { p };
            let kept = if t0 > 0.0 {
                chop_cubic_at(&kept, t0 / t1).1
            } else {
                kept
            };
            Segment {
                kind: SegmentKind::Cubic,
                pts: kept,
                weight: 0.0,
                length: 0.0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Rect;
    use crate::path::PathDirection;

    fn pt(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    fn line_path(points: &[Point]) -> Path {
        let mut p = Path::new();
        p.move_to(points[0]);
        for &q in &points[1..] {
            p.line_to(q);
        }
        p
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn line_lengths_are_euclidean() {
        let p = line_path(&[pt(0.0, 0.0), pt(3.0, 4.0), pt(3.0, 10.0)]);
        let m = PathMeasure::new(&p);
        assert_eq!(m.contours().len(), 1);
        assert_eq!(m.contour_length(), 11.0);
        assert_eq!(m.segment_length(), 5.0);
    }

    #[test]
    fn zero_length_segments_are_dropped() {
        let mut p = Path::new();
        p.move_to(pt(0.0, 0.0));
        p.line_to(pt(0.0, 0.0)); // degenerate
        p.line_to(pt(10.0, 0.0));
        let m = PathMeasure::new(&p);
        assert_eq!(m.contours()[0].segments().len(), 1);
        assert_eq!(m.contour_length(), 10.0);
    }

    #[test]
    fn bare_move_contours_vanish() {
        let mut p = Path::new();
        p.move_to(pt(5.0, 5.0));
        p.move_to(pt(0.0, 0.0));
        p.line_to(pt(1.0, 0.0));
        let m = PathMeasure::new(&p);
        assert_eq!(m.contours().len(), 1);
    }

    #[test]
    fn close_adds_implicit_edge() {
        let mut p = Path::new();
        p.move_to(pt(0.0, 0.0));
        p.line_to(pt(10.0, 0.0));
        p.line_to(pt(10.0, 10.0));
        p.close();
        let m = PathMeasure::new(&p);
        let c = &m.contours()[0];
        assert!(c.is_closed());
        assert_eq!(c.segments().len(), 3);
        // Implicit closing line from (10,10) back to (0,0).
        let close = c.segments().last().unwrap();
        assert_eq!(close.kind, SegmentKind::Line);
        assert!((c.total_length() - (20.0 + 200.0f32.sqrt())).abs() < 1e-4);
    }

    #[test]
    fn close_on_coincident_endpoint_adds_nothing() {
        let mut p = Path::new();
        p.move_to(pt(0.0, 0.0));
        p.line_to(pt(10.0, 0.0));
        p.line_to(pt(0.0, 0.0));
        p.close();
        let m = PathMeasure::new(&p);
        assert_eq!(m.contours()[0].segments().len(), 2);
        assert!(m.is_closed());
    }

    // ── cursors ───────────────────────────────────────────────────────────

    #[test]
    fn cursor_walk_and_past_the_end() {
        let mut p = Path::new();
        p.move_to(pt(0.0, 0.0));
        p.line_to(pt(5.0, 0.0));
        p.move_to(pt(0.0, 10.0));
        p.line_to(pt(0.0, 17.0));
        p.line_to(pt(3.0, 21.0));

        let mut m = PathMeasure::new(&p);
        assert_eq!(m.segment_length(), 5.0);
        assert!(!m.next_segment()); // single-segment contour
        assert_eq!(m.segment_length(), 0.0); // past-the-end

        assert!(m.next_contour());
        assert_eq!(m.segment_length(), 7.0);
        assert!(m.next_segment());
        assert_eq!(m.segment_length(), 5.0);
        assert!(!m.next_segment());

        assert!(!m.next_contour()); // past last contour
        assert_eq!(m.contour_length(), 0.0);

        m.reset_contour();
        assert_eq!(m.segment_length(), 5.0);
    }

    #[test]
    fn reset_segment_rewinds_within_contour() {
        let mut m = PathMeasure::new(&line_path(&[pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0)]));
        assert!(m.next_segment());
        m.reset_segment();
        assert_eq!(m.segment_length(), 1.0);
    }

    // ── extraction ────────────────────────────────────────────────────────

    #[test]
    fn slice_rejects_inverted_or_empty_range() {
        let m = PathMeasure::new(&line_path(&[pt(0.0, 0.0), pt(10.0, 0.0)]));
        let mut out = Path::new();
        assert!(!m.segment_slice(6.0, 4.0, true, &mut out));
        assert!(!m.segment_slice(3.0, 3.0, true, &mut out));
        assert!(out.is_empty());
    }

    #[test]
    fn slice_clamps_out_of_range_distances() {
        let m = PathMeasure::new(&line_path(&[pt(0.0, 0.0), pt(10.0, 0.0)]));
        let mut out = Path::new();
        assert!(m.segment_slice(-5.0, 99.0, true, &mut out));
        assert_eq!(out.data().points(), &[pt(0.0, 0.0), pt(10.0, 0.0)]);
    }

    #[test]
    fn line_slice_is_linear_interpolation() {
        let m = PathMeasure::new(&line_path(&[pt(0.0, 0.0), pt(10.0, 0.0)]));
        let mut out = Path::new();
        assert!(m.segment_slice(2.5, 7.5, true, &mut out));
        assert_eq!(out.data().points(), &[pt(2.5, 0.0), pt(7.5, 0.0)]);
    }

    #[test]
    fn quad_halves_join_and_sum_to_whole() {
        let mut p = Path::new();
        p.move_to(pt(0.0, 0.0));
        p.quad_to(pt(5.0, 10.0), pt(10.0, 0.0));
        let m = PathMeasure::new(&p);
        let len = m.segment_length();

        let mut first = Path::new();
        let mut second = Path::new();
        assert!(m.segment_slice(0.0, len / 2.0, true, &mut first));
        assert!(m.segment_slice(len / 2.0, len, true, &mut second));

        // The two sub-curves butt up against each other and span the whole.
        assert_eq!(first.data().points()[0], pt(0.0, 0.0));
        assert_eq!(first.last_point(), Some(second.data().points()[0]));
        assert_eq!(second.last_point(), Some(pt(10.0, 0.0)));

        let sum = PathMeasure::new(&first).contour_length()
            + PathMeasure::new(&second).contour_length();
        assert!((sum - len).abs() < FLATTEN_TOLERANCE);
    }

    #[test]
    fn conic_slice_keeps_circular_class() {
        let mut p = Path::new();
        p.move_to(pt(10.0, 0.0));
        p.conic_to(pt(10.0, 10.0), pt(0.0, 10.0), std::f32::consts::FRAC_1_SQRT_2);
        let m = PathMeasure::new(&p);
        let len = m.segment_length();

        let mut out = Path::new();
        assert!(m.segment_slice(len * 0.25, len * 0.75, true, &mut out));
        assert_eq!(out.data().verbs().len(), 2); // Move + Conic
        // Every sampled point of the middle half still sits on the circle.
        let pts = out.data().points();
        let w = out.data().conic_weights()[0];
        let ctrl = [pts[0], pts[1], pts[2]];
        for i in 0..=4 {
            let on = conic_point(&ctrl, w, i as f32 / 4.0);
            assert!((on.length() - 10.0).abs() < 0.05);
        }
    }

    #[test]
    fn continuation_bridges_with_line() {
        let m = PathMeasure::new(&line_path(&[pt(0.0, 0.0), pt(10.0, 0.0)]));
        let mut out = Path::new();
        out.move_to(pt(-5.0, -5.0));
        assert!(m.segment_slice(0.0, 10.0, false, &mut out));
        // Bridge line from the existing end into the slice start.
        assert_eq!(
            out.data().points(),
            &[pt(-5.0, -5.0), pt(0.0, 0.0), pt(10.0, 0.0)]
        );
    }
}

//! Shape classification and containment queries.
//!
//! The rect/oval/round-rect detectors pattern-match against the exact
//! layouts the `add_*` builders emit (any start corner, either direction) —
//! they do not attempt general curve fitting. Predicates return `Option`
//! payloads; `None` means "not that shape" and carries no outputs.

use crate::geom::{Point, Rect};
use crate::measure::{FLATTEN_TOLERANCE, flatten_conic, flatten_cubic, flatten_quad};
use crate::rrect::RRect;

use super::{Path, PathDirection, PathElement, Verb};

/// Relative tolerance for shape pattern equality. The source geometry is
/// f32; anything tighter than ~1e-4 starts failing on legitimately
/// round-tripped coordinates.
pub const SHAPE_TOLERANCE: f32 = 1e-4;

/// What `is_rect` recovered from a rectangular contour.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectInfo {
    pub rect: Rect,
    /// Whether an explicit `Close` verb ended the contour.
    pub is_closed: bool,
    pub direction: PathDirection,
}

#[inline]
fn nearly(a: f32, b: f32) -> bool {
    (a - b).abs() <= SHAPE_TOLERANCE * (1.0 + a.abs().max(b.abs()))
}

#[inline]
fn nearly_pt(a: Point, b: Point) -> bool {
    nearly(a.x, b.x) && nearly(a.y, b.y)
}

/// Verb-for-verb, point-for-point comparison against a candidate pattern.
fn matches_pattern(path: &Path, pattern: &Path) -> bool {
    let a = path.data();
    let b = pattern.data();
    a.verbs() == b.verbs()
        && a.points().len() == b.points().len()
        && a.points()
            .iter()
            .zip(b.points())
            .all(|(&p, &q)| nearly_pt(p, q))
        && a.conic_weights().len() == b.conic_weights().len()
        && a.conic_weights()
            .iter()
            .zip(b.conic_weights())
            .all(|(&u, &v)| nearly(u, v))
}

impl Path {
    /// The two endpoints when this path is exactly one line segment.
    pub fn is_line(&self) -> Option<[Point; 2]> {
        let data = self.data();
        if data.verbs() == [Verb::Move, Verb::Line].as_slice() {
            Some([data.points()[0], data.points()[1]])
        } else {
            None
        }
    }

    /// Detects the canonical rectangular contour: 4 (or 5, with the start
    /// point repeated) on-curve points joined by axis-aligned lines, with or
    /// without an explicit `Close` — any starting corner, either winding.
    pub fn is_rect(&self) -> Option<RectInfo> {
        let data = self.data();
        let verbs = data.verbs();

        let (lines, is_closed) = match verbs {
            [Verb::Move, rest @ ..] => match rest {
                [Verb::Line, Verb::Line, Verb::Line] => (3, false),
                [Verb::Line, Verb::Line, Verb::Line, Verb::Close] => (3, true),
                [Verb::Line, Verb::Line, Verb::Line, Verb::Line] => (4, false),
                [Verb::Line, Verb::Line, Verb::Line, Verb::Line, Verb::Close] => (4, true),
                _ => return None,
            },
            _ => return None,
        };

        let pts = data.points();
        // A 5-point variant must return to its start; the 4th line is the
        // explicit closing edge.
        if lines == 4 && !nearly_pt(pts[4], pts[0]) {
            return None;
        }
        let corners = [pts[0], pts[1], pts[2], pts[3]];

        // Four axis-aligned edges of alternating orientation around a closed
        // cycle can only trace a rectangle.
        let mut horizontal = [false; 4];
        for i in 0..4 {
            let a = corners[i];
            let b = corners[(i + 1) % 4];
            let is_h = nearly(a.y, b.y) && !nearly(a.x, b.x);
            let is_v = nearly(a.x, b.x) && !nearly(a.y, b.y);
            if is_h == is_v {
                return None; // diagonal or degenerate edge
            }
            horizontal[i] = is_h;
        }
        if (0..4).any(|i| horizontal[i] == horizontal[(i + 1) % 4]) {
            return None;
        }

        // Shoelace sign gives traversal direction (positive = clockwise in
        // y-down coordinates).
        let mut area2 = 0.0f32;
        for i in 0..4 {
            let a = corners[i];
            let b = corners[(i + 1) % 4];
            area2 += a.x * b.y - b.x * a.y;
        }
        let direction = if area2 > 0.0 {
            PathDirection::Cw
        } else {
            PathDirection::Ccw
        };

        Some(RectInfo {
            rect: self.bounds(),
            is_closed,
            direction,
        })
    }

    /// Detects the fixed 4-conic oval layout produced by `add_oval` (any
    /// start quadrant, either direction); returns its bounds.
    pub fn is_oval(&self) -> Option<Rect> {
        let data = self.data();
        const OVAL_VERBS: &[Verb] =
            &[Verb::Move, Verb::Conic, Verb::Conic, Verb::Conic, Verb::Conic, Verb::Close];
        if data.verbs() != OVAL_VERBS {
            return None;
        }

        let bounds = self.bounds();
        for dir in [PathDirection::Cw, PathDirection::Ccw] {
            for start in 0..4 {
                let mut candidate = Path::new();
                candidate.add_oval(bounds, dir, start);
                if matches_pattern(self, &candidate) {
                    return Some(bounds);
                }
            }
        }
        None
    }

    /// Detects the canonical 8-point/4-conic round-rect layout with a
    /// uniform radii pair.
    ///
    /// Mutually exclusive with `is_rect` and `is_oval` by construction:
    /// zero radii never produce conics, and whole-rect radii produce the
    /// oval layout instead.
    pub fn is_rrect(&self) -> Option<RRect> {
        let data = self.data();
        if data.count_verbs() != 10 || data.conic_weights().len() != 4 {
            return None;
        }
        if data.verbs()[0] != Verb::Move || data.verbs()[9] != Verb::Close {
            return None;
        }

        // Recover the radii from the first conic: its control point is a
        // rect corner, its neighbors sit on the two adjacent edges.
        let radii = self.iter().find_map(|element| match element {
            PathElement::ConicTo { from, ctrl, to, .. } => {
                let rx = (ctrl.x - from.x).abs().max((ctrl.x - to.x).abs());
                let ry = (ctrl.y - from.y).abs().max((ctrl.y - to.y).abs());
                Some(Point::new(rx, ry))
            }
            _ => None,
        })?;

        let rrect = RRect::from_rect_xy(self.bounds(), radii.x, radii.y);
        for dir in [PathDirection::Cw, PathDirection::Ccw] {
            for start in 0..4 {
                let mut candidate = Path::new();
                candidate.add_rrect(&rrect, dir, start);
                if matches_pattern(self, &candidate) {
                    return Some(rrect);
                }
            }
        }
        None
    }

    /// Point-in-path test honoring the path's fill type.
    ///
    /// Curves are flattened to chords before crossing accumulation, so
    /// points within the flattening tolerance of the boundary may land on
    /// either side. Fill treats every contour as closed, explicit `Close`
    /// or not.
    pub fn contains(&self, p: Point) -> bool {
        let fill = self.fill_type();
        let mut winding = 0i32;
        let mut crossings = 0u32;

        let mut accumulate = |a: Point, b: Point| {
            let w = line_winding(a, b, p);
            winding += w;
            if w != 0 {
                crossings += 1;
            }
        };
        self.for_each_edge(|a, b| accumulate(a, b));

        let inside = if fill.is_even_odd() {
            crossings % 2 == 1
        } else {
            winding != 0
        };
        inside != fill.is_inverse()
    }

    /// Conservative rect containment.
    ///
    /// Returns `true` only when no flattened boundary edge touches `rect`
    /// and the rect's center is inside. Sound for single-contour paths; a
    /// multi-contour path whose inner contours pass near the rect can yield
    /// a false negative even when containment actually holds.
    pub fn contains_rect(&self, rect: Rect) -> bool {
        let rect = rect.normalized();
        let mut blocked = false;
        self.for_each_edge(|a, b| {
            if !blocked && segment_intersects_rect(a, b, rect) {
                blocked = true;
            }
        });
        !blocked && self.contains(rect.center())
    }

    /// Flattens every contour (implicitly closing each one) into line
    /// segments for scan accumulation.
    fn for_each_edge(&self, mut emit: impl FnMut(Point, Point)) {
        let mut contour_start: Option<Point> = None;
        let mut last = Point::ZERO;

        for element in self.iter() {
            match element {
                PathElement::MoveTo { to } => {
                    if let Some(start) = contour_start {
                        if last != start {
                            emit(last, start); // implicit fill-closing edge
                        }
                    }
                    contour_start = Some(to);
                    last = to;
                }
                PathElement::LineTo { from, to } => {
                    emit(from, to);
                    last = to;
                }
                PathElement::QuadTo { from, ctrl, to } => {
                    flatten_quad(&[from, ctrl, to], FLATTEN_TOLERANCE, &mut emit);
                    last = to;
                }
                PathElement::ConicTo { from, ctrl, to, weight } => {
                    flatten_conic(&[from, ctrl, to], weight, FLATTEN_TOLERANCE, &mut emit);
                    last = to;
                }
                PathElement::CubicTo { from, ctrl1, ctrl2, to } => {
                    flatten_cubic(&[from, ctrl1, ctrl2, to], FLATTEN_TOLERANCE, &mut emit);
                    last = to;
                }
                PathElement::Close { from, to } => {
                    if from != to {
                        emit(from, to);
                    }
                    last = to;
                }
            }
        }
        if let Some(start) = contour_start {
            if last != start {
                emit(last, start);
            }
        }
    }
}

/// Winding contribution of edge `a→b` for a horizontal ray from `p` to +∞.
/// Half-open in y so shared vertices count once.
fn line_winding(a: Point, b: Point, p: Point) -> i32 {
    let (top, bottom, dir) = if a.y <= b.y { (a, b, 1) } else { (b, a, -1) };
    if p.y < top.y || p.y >= bottom.y || top.y == bottom.y {
        return 0;
    }
    let t = (p.y - top.y) / (bottom.y - top.y);
    let x = top.x + t * (bottom.x - top.x);
    if x > p.x { dir } else { 0 }
}

/// Liang-Barsky style segment/rect overlap.
fn segment_intersects_rect(a: Point, b: Point, r: Rect) -> bool {
    if r.contains(a) || r.contains(b) {
        return true;
    }
    let d = b - a;
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;
    for (p, q) in [
        (-d.x, a.x - r.left()),
        (d.x, r.right() - a.x),
        (-d.y, a.y - r.top()),
        (d.y, r.bottom() - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return false;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }
            if t0 > t1 {
                return false;
            }
        }
    }
    true
}

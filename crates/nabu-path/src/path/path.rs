use std::f32::consts::FRAC_1_SQRT_2;
use std::sync::Arc;

use crate::geom::{CornerRadii, Matrix, Matrix3D, Point, Rect};
use crate::ops::{PathCombiner, PathOp, PathOpError};
use crate::rrect::RRect;

use super::{PathData, PathDirection, PathFillType, Verb};

/// A 2D vector path: an ordered stream of verbs over a point buffer.
///
/// `Path` is a value-semantic handle over shared [`PathData`]; cloning is
/// O(1) and the first mutation through a shared handle copies the buffers
/// (copy-on-write). Distinct handles may therefore be read concurrently from
/// any number of threads; mutating one handle never disturbs another.
#[derive(Debug, Clone, Default)]
pub struct Path {
    pub(crate) data: Arc<PathData>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the underlying buffers.
    #[inline]
    pub fn data(&self) -> &PathData {
        &self.data
    }

    /// Write access; copies the buffers first when the handle is shared.
    #[inline]
    pub(crate) fn writable(&mut self) -> &mut PathData {
        Arc::make_mut(&mut self.data)
    }

    /// Handle identity: do both handles share one buffer right now?
    ///
    /// Content comparison is `==`.
    #[inline]
    pub fn is_same(&self, other: &Path) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    #[inline]
    pub fn fill_type(&self) -> PathFillType {
        self.data.fill_type
    }

    #[inline]
    pub fn set_fill_type(&mut self, fill_type: PathFillType) {
        if self.data.fill_type != fill_type {
            self.writable().fill_type = fill_type;
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn count_verbs(&self) -> usize {
        self.data.count_verbs()
    }

    #[inline]
    pub fn count_points(&self) -> usize {
        self.data.count_points()
    }

    /// Control-polygon bounds; see [`PathData::bounds`].
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.data.bounds()
    }

    #[inline]
    pub fn last_point(&self) -> Option<Point> {
        self.data.last_point()
    }

    // ── contour bookkeeping ───────────────────────────────────────────────

    /// Move point of the most recent contour, scanning from the back.
    pub(crate) fn last_move_point(&self) -> Option<Point> {
        let data = &self.data;
        let mut pt_idx = data.points.len();
        for &verb in data.verbs.iter().rev() {
            pt_idx -= verb.points_appended();
            if verb == Verb::Move {
                return Some(data.points[pt_idx]);
            }
        }
        None
    }

    /// Guarantees an open contour before an edge verb is appended.
    ///
    /// On an empty path the contour starts at the origin; after a `Close` it
    /// starts at the closed contour's move point. (The "auto move-to"
    /// convention shared by mainstream drawing APIs.)
    pub(crate) fn ensure_contour(&mut self) {
        match self.data.verbs.last() {
            None => self.move_to(Point::ZERO),
            Some(Verb::Close) => {
                let start = self.last_move_point().unwrap_or(Point::ZERO);
                self.move_to(start);
            }
            Some(_) => {}
        }
    }

    // ── builder verbs ─────────────────────────────────────────────────────

    /// Starts a new contour at `p`.
    pub fn move_to(&mut self, p: Point) {
        self.writable().push_verb(Verb::Move, &[p]);
    }

    pub fn line_to(&mut self, p: Point) {
        self.ensure_contour();
        self.writable().push_verb(Verb::Line, &[p]);
    }

    pub fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.ensure_contour();
        self.writable().push_verb(Verb::Quad, &[ctrl, to]);
    }

    /// Appends a rational quadratic (conic) segment.
    ///
    /// The weight selects the curve class: `< 1` elliptical, `== 1`
    /// parabolic (stored as a plain quad), `> 1` hyperbolic; `√2/2` traces an
    /// exact circular quarter arc. Non-positive weights degenerate to a line
    /// and non-finite weights to the two control-polygon edges.
    pub fn conic_to(&mut self, ctrl: Point, to: Point, weight: f32) {
        if !(weight > 0.0) {
            self.line_to(to);
        } else if !weight.is_finite() {
            self.line_to(ctrl);
            self.line_to(to);
        } else if weight == 1.0 {
            self.quad_to(ctrl, to);
        } else {
            self.ensure_contour();
            self.writable().push_conic(ctrl, to, weight);
        }
    }

    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.ensure_contour();
        self.writable().push_verb(Verb::Cubic, &[ctrl1, ctrl2, to]);
    }

    /// Closes the current contour back to its move point.
    ///
    /// A no-op on an empty path or directly after another `Close`.
    pub fn close(&mut self) {
        match self.data.verbs.last() {
            None | Some(Verb::Close) => {}
            Some(_) => self.writable().push_verb(Verb::Close, &[]),
        }
    }

    /// Drops all geometry and resets the fill type to winding.
    ///
    /// Releases this handle's claim on shared storage rather than clearing
    /// it in place.
    pub fn reset(&mut self) {
        self.data = Arc::new(PathData::new());
    }

    // ── shapes ────────────────────────────────────────────────────────────

    /// Appends a rectangle as a closed 4-point contour.
    ///
    /// Corner indices: 0 top-left, 1 top-right, 2 bottom-right, 3
    /// bottom-left; traversal is clockwise unless `dir` says otherwise and
    /// `start_index` rotates the starting corner. The exact layout is
    /// normative — `is_rect` pattern-matches against it.
    pub fn add_rect(&mut self, rect: Rect, dir: PathDirection, start_index: usize) {
        let rect = rect.normalized();
        let nodes = [
            (Point::new(rect.left(), rect.top()), None),
            (Point::new(rect.right(), rect.top()), None),
            (Point::new(rect.right(), rect.bottom()), None),
            (Point::new(rect.left(), rect.bottom()), None),
        ];
        self.add_contour_cycle(&nodes, dir, start_index % 4);
    }

    /// Appends an oval as a closed 4-conic contour (weight √2/2 each).
    ///
    /// Quadrant indices start at the right edge midpoint and proceed
    /// clockwise: 0 right, 1 bottom, 2 left, 3 top.
    pub fn add_oval(&mut self, oval: Rect, dir: PathDirection, start_index: usize) {
        let oval = oval.normalized();
        let c = oval.center();
        let w = FRAC_1_SQRT_2;
        let nodes = [
            (Point::new(oval.right(), c.y), Some((Point::new(oval.right(), oval.top()), w))),
            (Point::new(c.x, oval.bottom()), Some((Point::new(oval.right(), oval.bottom()), w))),
            (Point::new(oval.left(), c.y), Some((Point::new(oval.left(), oval.bottom()), w))),
            (Point::new(c.x, oval.top()), Some((Point::new(oval.left(), oval.top()), w))),
        ];
        self.add_contour_cycle(&nodes, dir, start_index % 4);
    }

    /// Appends a rounded rectangle; `start_index` picks the starting corner
    /// (same indices as [`Path::add_rect`]).
    ///
    /// Radii are sanitized first: negative components clamp to zero, and
    /// oversized radii are scaled down uniformly so opposing corners fit the
    /// edge between them. Fully-zero radii delegate to `add_rect`; radii
    /// covering the whole rect delegate to `add_oval` — which keeps the
    /// rect/oval/round-rect predicate categories mutually exclusive.
    pub fn add_round_rect(
        &mut self,
        rect: Rect,
        radii: CornerRadii,
        dir: PathDirection,
        start_index: usize,
    ) {
        let rect = rect.normalized();
        let radii = sanitize_radii(rect, radii);

        if radii.is_zero() {
            self.add_rect(rect, dir, start_index);
            return;
        }
        let (w2, h2) = (rect.width() * 0.5, rect.height() * 0.5);
        if radii.is_uniform() && radii.top_left.x >= w2 && radii.top_left.y >= h2 {
            self.add_oval(rect, dir, start_index);
            return;
        }

        let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
        let [tl, tr, br, bl] = radii.as_array();
        let w = FRAC_1_SQRT_2;

        // Two nodes per corner: the arc's entry (reached by a line along the
        // incoming edge) and its exit, with the rect corner as conic control.
        // Clockwise from the top-left exit.
        let nodes = [
            (Point::new(l + tl.x, t), Some((Point::new(l, t), w))), // exit TL
            (Point::new(r - tr.x, t), None),                        // entry TR
            (Point::new(r, t + tr.y), Some((Point::new(r, t), w))), // exit TR
            (Point::new(r, b - br.y), None),                        // entry BR
            (Point::new(r - br.x, b), Some((Point::new(r, b), w))), // exit BR
            (Point::new(l + bl.x, b), None),                        // entry BL
            (Point::new(l, b - bl.y), Some((Point::new(l, b), w))), // exit BL
            (Point::new(l, t + tl.y), None),                        // entry TL
        ];
        self.add_contour_cycle(&nodes, dir, (start_index % 4) * 2);
    }

    /// Appends a rounded rect value with its uniform radii pair.
    pub fn add_rrect(&mut self, rrect: &RRect, dir: PathDirection, start_index: usize) {
        self.add_round_rect(
            rrect.rect,
            CornerRadii::all(rrect.radii),
            dir,
            start_index,
        );
    }

    /// Emits one closed contour from a cyclic node list.
    ///
    /// `nodes[i]` is an on-curve point; the segment *into* `nodes[(i+1)%n]`
    /// is a line, or a conic when that target node carries `(ctrl, weight)`.
    /// Reversed traversal walks the cycle backwards reusing the same
    /// controls, which is what makes the shape predicates able to match both
    /// directions against one table.
    fn add_contour_cycle(
        &mut self,
        nodes: &[(Point, Option<(Point, f32)>)],
        dir: PathDirection,
        start: usize,
    ) {
        let n = nodes.len();
        debug_assert!(start < n);
        self.writable().reserve(n + 2, 1 + 2 * n, n);

        self.move_to(nodes[start].0);
        match dir {
            PathDirection::Cw => {
                for i in 1..=n {
                    let idx = (start + i) % n;
                    match nodes[idx].1 {
                        Some((ctrl, weight)) => self.conic_to(ctrl, nodes[idx].0, weight),
                        None => self.line_to(nodes[idx].0),
                    }
                }
            }
            PathDirection::Ccw => {
                for i in 1..=n {
                    // Walking backwards, the control for the segment out of
                    // node `from` is stored on `from` itself.
                    let from = (start + n - i + 1) % n;
                    let to = (start + n - i) % n;
                    match nodes[from].1 {
                        Some((ctrl, weight)) => self.conic_to(ctrl, nodes[to].0, weight),
                        None => self.line_to(nodes[to].0),
                    }
                }
            }
        }
        // The cycle ends back on the start point; Close marks the contour.
        self.close();
    }

    // ── composition ───────────────────────────────────────────────────────

    /// Adds `src` to this path according to `op`.
    ///
    /// `Append` and `Extend` are handled locally; boolean ops require an
    /// engine (see [`Path::add_path_with`]) and fail with
    /// [`PathOpError::NotImplemented`] here.
    pub fn add_path(&mut self, src: &Path, op: PathOp) -> Result<(), PathOpError> {
        self.add_path_with(src, op, None)
    }

    /// [`Path::add_path`] with an optional boolean-combination engine for
    /// the clipping ops. The kernel itself never implements clipping.
    pub fn add_path_with(
        &mut self,
        src: &Path,
        op: PathOp,
        engine: Option<&dyn PathCombiner>,
    ) -> Result<(), PathOpError> {
        match op {
            PathOp::Append => {
                self.splice(src, false);
                Ok(())
            }
            PathOp::Extend => {
                self.splice(src, !self.is_empty());
                Ok(())
            }
            PathOp::Difference | PathOp::Intersect | PathOp::Union | PathOp::Xor => {
                let Some(engine) = engine else {
                    log::debug!("add_path: boolean op {op:?} requested without an engine");
                    return Err(PathOpError::NotImplemented);
                };
                *self = engine.combine(self, src, op)?;
                Ok(())
            }
        }
    }

    /// Concatenates `src`'s buffers. With `connect` set, `src`'s leading
    /// `Move` becomes a `Line` so the first contour continues the current
    /// one.
    fn splice(&mut self, src: &Path, connect: bool) {
        let src = src.data.clone(); // keeps self-append sound
        let data = self.writable();
        data.reserve(src.verbs.len(), src.points.len(), src.conic_weights.len());

        let mut first = true;
        let mut pt_idx = 0;
        for &verb in &src.verbs {
            let pts = &src.points[pt_idx..pt_idx + verb.points_appended()];
            pt_idx += verb.points_appended();
            if first && verb == Verb::Move && connect {
                data.push_verb(Verb::Line, pts);
            } else {
                data.push_verb(verb, pts);
            }
            first = false;
        }
        data.conic_weights.extend_from_slice(&src.conic_weights);
        data.dirty();
    }

    // ── transforms ────────────────────────────────────────────────────────

    /// Maps every point through `matrix` in place.
    ///
    /// Conic weights are invariant under affine maps, so only points move.
    pub fn transform(&mut self, matrix: &Matrix) {
        if matrix.is_identity() || self.is_empty() {
            return;
        }
        let data = self.writable();
        matrix.map_points(&mut data.points);
        data.dirty();
    }

    /// Maps every point through the 4×4 `matrix` with perspective divide.
    ///
    /// Weights are kept as-is; a projective map that bends conic classes is
    /// approximated by its action on control points.
    pub fn transform_3d(&mut self, matrix: &Matrix3D) {
        if matrix.is_identity() || self.is_empty() {
            return;
        }
        let data = self.writable();
        for p in &mut data.points {
            *p = matrix.map_point(*p);
        }
        data.dirty();
    }

    /// Reverses contour traversal: contours come out in reverse order and
    /// each contour runs backwards over the same point set. Closedness is
    /// preserved.
    pub fn reverse(&mut self) {
        if self.is_empty() {
            return;
        }

        struct RawContour {
            verbs: Vec<Verb>,
            points: Vec<Point>,
            weights: Vec<f32>,
            closed: bool,
        }

        let src = &self.data;
        let mut contours: Vec<RawContour> = Vec::new();
        let mut pt_idx = 0;
        let mut wt_idx = 0;
        for &verb in &src.verbs {
            if verb == Verb::Move {
                contours.push(RawContour {
                    verbs: Vec::new(),
                    points: Vec::new(),
                    weights: Vec::new(),
                    closed: false,
                });
            }
            let contour = contours.last_mut().expect("first verb is Move");
            match verb {
                Verb::Close => contour.closed = true,
                _ => {
                    contour.verbs.push(verb);
                    contour
                        .points
                        .extend_from_slice(&src.points[pt_idx..pt_idx + verb.points_appended()]);
                    if verb == Verb::Conic {
                        contour.weights.push(src.conic_weights[wt_idx]);
                        wt_idx += 1;
                    }
                }
            }
            pt_idx += verb.points_appended();
        }

        let fill_type = src.fill_type;
        let mut out = Path::new();
        out.set_fill_type(fill_type);
        for contour in contours.iter().rev() {
            // Reversing the flattened point sequence reverses every
            // segment's control polygon; the edge verbs (minus the leading
            // Move) simply replay in reverse order.
            let mut points = contour.points.clone();
            points.reverse();
            out.move_to(points[0]);

            let mut rest = &points[1..];
            let mut weights = contour.weights.iter().rev();
            for &verb in contour.verbs.iter().skip(1).rev() {
                let n = verb.points_appended();
                let (pts, tail) = rest.split_at(n);
                rest = tail;
                match verb {
                    Verb::Line => out.line_to(pts[0]),
                    Verb::Quad => out.quad_to(pts[0], pts[1]),
                    Verb::Conic => {
                        let w = *weights.next().expect("weight per conic");
                        out.conic_to(pts[0], pts[1], w);
                    }
                    Verb::Cubic => out.cubic_to(pts[0], pts[1], pts[2]),
                    Verb::Move | Verb::Close => unreachable!("filtered above"),
                }
            }
            if contour.closed {
                out.close();
            }
        }
        *self = out;
    }
}

/// Deep content equality (fill type + verbs + points + weights); see
/// [`Path::is_same`] for handle identity.
impl PartialEq for Path {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data) || *self.data == *other.data
    }
}

/// Clamps negative radii to zero, then scales all radii down uniformly when
/// any edge is shorter than the two radii leaning on it — preserving each
/// corner ellipse's aspect ratio instead of clipping one axis.
fn sanitize_radii(rect: Rect, radii: CornerRadii) -> CornerRadii {
    let clamp = |p: Point| Point::new(p.x.max(0.0), p.y.max(0.0));
    let [tl, tr, br, bl] = [
        clamp(radii.top_left),
        clamp(radii.top_right),
        clamp(radii.bottom_right),
        clamp(radii.bottom_left),
    ];

    let mut scale = 1.0f32;
    let mut fit = |edge: f32, a: f32, b: f32| {
        let sum = a + b;
        if sum > edge && sum > 0.0 {
            scale = scale.min(edge / sum);
        }
    };
    fit(rect.width(), tl.x, tr.x);
    fit(rect.width(), bl.x, br.x);
    fit(rect.height(), tl.y, bl.y);
    fit(rect.height(), tr.y, br.y);

    if scale < 1.0 {
        log::debug!("round rect radii exceed the rect; scaling by {scale}");
        CornerRadii::new(tl * scale, tr * scale, br * scale, bl * scale)
    } else {
        CornerRadii::new(tl, tr, br, bl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    // ── copy-on-write ─────────────────────────────────────────────────────

    #[test]
    fn clone_is_shared_until_mutation() {
        let mut a = Path::new();
        a.move_to(pt(0.0, 0.0));
        a.line_to(pt(10.0, 0.0));

        let b = a.clone();
        assert!(a.is_same(&b));
        assert_eq!(a, b);

        a.line_to(pt(10.0, 10.0));
        assert!(!a.is_same(&b));
        assert_ne!(a, b);
        assert_eq!(b.count_verbs(), 2); // clone untouched
    }

    #[test]
    fn eq_is_content_not_identity() {
        let mut a = Path::new();
        a.add_rect(Rect::new(0.0, 0.0, 4.0, 4.0), PathDirection::Cw, 0);
        let mut b = Path::new();
        b.add_rect(Rect::new(0.0, 0.0, 4.0, 4.0), PathDirection::Cw, 0);
        assert!(!a.is_same(&b));
        assert_eq!(a, b);

        b.set_fill_type(PathFillType::EvenOdd);
        assert_ne!(a, b);
    }

    // ── auto move-to ──────────────────────────────────────────────────────

    #[test]
    fn line_on_empty_path_starts_at_origin() {
        let mut p = Path::new();
        p.line_to(pt(5.0, 5.0));
        assert_eq!(p.data().verbs(), &[Verb::Move, Verb::Line]);
        assert_eq!(p.data().points()[0], Point::ZERO);
    }

    #[test]
    fn line_after_close_reopens_at_contour_start() {
        let mut p = Path::new();
        p.move_to(pt(3.0, 4.0));
        p.line_to(pt(8.0, 4.0));
        p.close();
        p.line_to(pt(9.0, 9.0));
        assert_eq!(
            p.data().verbs(),
            &[Verb::Move, Verb::Line, Verb::Close, Verb::Move, Verb::Line]
        );
        assert_eq!(p.data().points()[2], pt(3.0, 4.0));
    }

    // ── conic weight classes ──────────────────────────────────────────────

    #[test]
    fn conic_weight_one_is_a_quad() {
        let mut p = Path::new();
        p.move_to(pt(0.0, 0.0));
        p.conic_to(pt(5.0, 0.0), pt(5.0, 5.0), 1.0);
        assert_eq!(p.data().verbs(), &[Verb::Move, Verb::Quad]);
        assert!(p.data().conic_weights().is_empty());
    }

    #[test]
    fn conic_weight_zero_is_a_line() {
        let mut p = Path::new();
        p.move_to(pt(0.0, 0.0));
        p.conic_to(pt(5.0, 0.0), pt(5.0, 5.0), 0.0);
        assert_eq!(p.data().verbs(), &[Verb::Move, Verb::Line]);
    }

    // ── close ─────────────────────────────────────────────────────────────

    #[test]
    fn close_on_empty_or_closed_is_noop() {
        let mut p = Path::new();
        p.close();
        assert!(p.is_empty());

        p.move_to(pt(0.0, 0.0));
        p.line_to(pt(1.0, 0.0));
        p.close();
        p.close();
        assert_eq!(p.count_verbs(), 3);
    }

    // ── shapes ────────────────────────────────────────────────────────────

    #[test]
    fn add_rect_layout_cw() {
        let mut p = Path::new();
        p.add_rect(Rect::new(0.0, 0.0, 10.0, 10.0), PathDirection::Cw, 0);
        assert_eq!(
            p.data().verbs(),
            &[Verb::Move, Verb::Line, Verb::Line, Verb::Line, Verb::Close]
        );
        assert_eq!(
            p.data().points(),
            &[pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0)]
        );
    }

    #[test]
    fn add_rect_start_index_rotates() {
        let mut p = Path::new();
        p.add_rect(Rect::new(0.0, 0.0, 10.0, 10.0), PathDirection::Cw, 2);
        assert_eq!(p.data().points()[0], pt(10.0, 10.0));
    }

    #[test]
    fn add_rect_ccw_reverses_traversal() {
        let mut p = Path::new();
        p.add_rect(Rect::new(0.0, 0.0, 10.0, 10.0), PathDirection::Ccw, 0);
        assert_eq!(
            p.data().points(),
            &[pt(0.0, 0.0), pt(0.0, 10.0), pt(10.0, 10.0), pt(10.0, 0.0)]
        );
    }

    #[test]
    fn add_oval_is_four_conics() {
        let mut p = Path::new();
        p.add_oval(Rect::new(0.0, 0.0, 10.0, 10.0), PathDirection::Cw, 0);
        assert_eq!(
            p.data().verbs(),
            &[Verb::Move, Verb::Conic, Verb::Conic, Verb::Conic, Verb::Conic, Verb::Close]
        );
        assert_eq!(p.data().conic_weights(), &[FRAC_1_SQRT_2; 4]);
        assert_eq!(p.data().points()[0], pt(10.0, 5.0));
    }

    #[test]
    fn add_round_rect_zero_radii_is_rect() {
        let mut p = Path::new();
        p.add_round_rect(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            CornerRadii::zero(),
            PathDirection::Cw,
            0,
        );
        assert_eq!(p.count_verbs(), 5);
    }

    #[test]
    fn add_round_rect_full_radii_is_oval() {
        let mut p = Path::new();
        p.add_round_rect(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            CornerRadii::uniform(5.0),
            PathDirection::Cw,
            0,
        );
        assert_eq!(p.data().conic_weights().len(), 4);
        assert_eq!(p.count_verbs(), 6); // oval layout
    }

    #[test]
    fn round_rect_radii_scale_preserves_ratio() {
        // 2:1 corner radii twice as large as the rect can hold.
        let radii = sanitize_radii(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            CornerRadii::all(pt(20.0, 10.0)),
        );
        assert_eq!(radii.top_left, pt(5.0, 2.5));
    }

    #[test]
    fn round_rect_negative_radii_clamp() {
        let radii = sanitize_radii(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            CornerRadii::all(pt(-3.0, 2.0)),
        );
        assert_eq!(radii.top_left, pt(0.0, 2.0));
    }

    // ── add_path ──────────────────────────────────────────────────────────

    #[test]
    fn add_path_append_keeps_contours_apart() {
        let mut a = Path::new();
        a.move_to(pt(0.0, 0.0));
        a.line_to(pt(1.0, 0.0));
        let mut b = Path::new();
        b.move_to(pt(5.0, 5.0));
        b.line_to(pt(6.0, 5.0));

        a.add_path(&b, PathOp::Append).unwrap();
        assert_eq!(a.data().verbs(), &[Verb::Move, Verb::Line, Verb::Move, Verb::Line]);
    }

    #[test]
    fn add_path_extend_connects_with_line() {
        let mut a = Path::new();
        a.move_to(pt(0.0, 0.0));
        a.line_to(pt(1.0, 0.0));
        let mut b = Path::new();
        b.move_to(pt(5.0, 5.0));
        b.line_to(pt(6.0, 5.0));

        a.add_path(&b, PathOp::Extend).unwrap();
        assert_eq!(a.data().verbs(), &[Verb::Move, Verb::Line, Verb::Line, Verb::Line]);
        assert_eq!(a.data().points()[2], pt(5.0, 5.0));
    }

    #[test]
    fn add_path_boolean_without_engine_fails() {
        let mut a = Path::new();
        a.add_rect(Rect::new(0.0, 0.0, 4.0, 4.0), PathDirection::Cw, 0);
        let b = a.clone();
        assert_eq!(
            a.add_path(&b, PathOp::Union).unwrap_err(),
            PathOpError::NotImplemented
        );
    }

    // ── transform / reverse ───────────────────────────────────────────────

    #[test]
    fn identity_transform_is_exact_noop() {
        let mut p = Path::new();
        p.add_oval(Rect::new(1.0, 2.0, 3.0, 4.0), PathDirection::Cw, 0);
        let before = p.clone();
        p.transform(&Matrix::IDENTITY);
        assert_eq!(p, before);
        assert!(p.is_same(&before)); // not even a copy
    }

    #[test]
    fn translate_moves_bounds() {
        let mut p = Path::new();
        p.add_rect(Rect::new(0.0, 0.0, 10.0, 10.0), PathDirection::Cw, 0);
        p.transform(&Matrix::translate(5.0, -5.0));
        assert_eq!(p.bounds(), Rect::new(5.0, -5.0, 10.0, 10.0));
    }

    #[test]
    fn reverse_twice_is_identity() {
        let mut p = Path::new();
        p.move_to(pt(0.0, 0.0));
        p.quad_to(pt(5.0, 0.0), pt(5.0, 5.0));
        p.cubic_to(pt(5.0, 8.0), pt(2.0, 9.0), pt(0.0, 9.0));
        p.close();
        p.move_to(pt(20.0, 20.0));
        p.line_to(pt(30.0, 20.0));

        let original = p.clone();
        p.reverse();
        assert_ne!(p, original);
        p.reverse();
        assert_eq!(p, original);
    }

    #[test]
    fn reverse_reverses_contour_order_and_points() {
        let mut p = Path::new();
        p.move_to(pt(0.0, 0.0));
        p.line_to(pt(1.0, 0.0));
        p.move_to(pt(5.0, 5.0));
        p.line_to(pt(6.0, 5.0));
        p.reverse();

        assert_eq!(
            p.data().points(),
            &[pt(6.0, 5.0), pt(5.0, 5.0), pt(1.0, 0.0), pt(0.0, 0.0)]
        );
    }
}

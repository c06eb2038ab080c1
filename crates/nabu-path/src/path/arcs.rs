use std::f64::consts::PI;

use crate::geom::Point;

use super::{ArcSize, Path, PathDirection};

impl Path {
    /// Appends a circular arc tangent to the segments `last→p1` and `p1→p2`
    /// ("arct" form): a line to the first tangent point, then one conic.
    ///
    /// Zero radius, coincident points, or collinear tangents degrade to
    /// `line_to(p1)` — degenerate geometry draws something reasonable
    /// instead of failing.
    pub fn arc_to_tangent(&mut self, p1: Point, p2: Point, radius: f32) {
        self.ensure_contour();
        let start = self.last_point().unwrap_or(Point::ZERO);

        if radius <= 0.0 {
            self.line_to(p1);
            return;
        }
        let (Some(before), Some(after)) = ((p1 - start).normalize(), (p2 - p1).normalize()) else {
            self.line_to(p1);
            return;
        };

        // Exterior angle at the corner; the arc sweeps exactly this much.
        let cos_sweep = before.dot(after);
        let sin_sweep = before.cross(after);
        if sin_sweep.abs() <= f32::EPSILON {
            self.line_to(p1);
            return;
        }

        // Distance from the corner to each tangent point: r / tan(θ/2).
        let dist = (radius * (1.0 - cos_sweep) / sin_sweep).abs();
        if !dist.is_finite() {
            self.line_to(p1);
            return;
        }

        let tangent1 = p1 - before * dist;
        let tangent2 = p1 + after * dist;
        let weight = (0.5 + cos_sweep * 0.5).max(0.0).sqrt(); // cos(sweep/2)

        self.line_to(tangent1);
        self.conic_to(p1, tangent2, weight);
    }

    /// Appends an elliptical arc from the current point to `end` (SVG
    /// endpoint parameterization), lowered to at most four conic segments of
    /// ≤ 90° each.
    ///
    /// `x_axis_rotate` is in degrees, matching the wire format it arrives
    /// in. [`PathDirection::Cw`] corresponds to a set SVG sweep flag.
    /// Degenerate radii or a zero-length chord degrade to `line_to(end)`;
    /// radii too small to span the chord are scaled up uniformly first
    /// (SVG arc correction).
    pub fn arc_to(
        &mut self,
        radii: Point,
        x_axis_rotate: f32,
        size: ArcSize,
        dir: PathDirection,
        end: Point,
    ) {
        self.ensure_contour();
        let start = self.last_point().unwrap_or(Point::ZERO);

        let rx = radii.x.abs() as f64;
        let ry = radii.y.abs() as f64;
        if rx == 0.0 || ry == 0.0 || start == end {
            self.line_to(end);
            return;
        }

        let Some(arc) = center_parameterization(
            start,
            end,
            rx,
            ry,
            (x_axis_rotate as f64).to_radians(),
            size == ArcSize::Large,
            dir == PathDirection::Cw,
        ) else {
            self.line_to(end);
            return;
        };

        // ≤ 90° per slice keeps every conic weight in [√2/2, 1).
        let segments = (arc.sweep.abs() / (PI / 2.0)).ceil().max(1.0) as usize;
        let sweep = arc.sweep / segments as f64;
        let weight = ((sweep / 2.0).cos()) as f32;

        let (sin_phi, cos_phi) = arc.phi.sin_cos();
        let map = |angle_pt: (f64, f64)| -> Point {
            // Unit circle → ellipse axes → x-axis rotation → center.
            let x = angle_pt.0 * arc.rx;
            let y = angle_pt.1 * arc.ry;
            Point::new(
                (arc.cx + x * cos_phi - y * sin_phi) as f32,
                (arc.cy + x * sin_phi + y * cos_phi) as f32,
            )
        };

        let mut angle = arc.theta1;
        for i in 0..segments {
            let next = angle + sweep;
            let mid = angle + sweep / 2.0;
            // Tangent-intersection control point on the unit circle.
            let scale = 1.0 / (sweep / 2.0).cos();
            let ctrl = map((mid.cos() * scale, mid.sin() * scale));
            let to = if i + 1 == segments {
                end // land exactly, no accumulated drift
            } else {
                map((next.cos(), next.sin()))
            };
            self.conic_to(ctrl, to, weight);
            angle = next;
        }
    }
}

struct CenterArc {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    phi: f64,
    theta1: f64,
    sweep: f64,
}

/// SVG endpoint → center conversion (spec section F.6.5, including the
/// F.6.6 radius correction). Returns `None` when the geometry collapses.
fn center_parameterization(
    start: Point,
    end: Point,
    mut rx: f64,
    mut ry: f64,
    phi: f64,
    large_arc: bool,
    sweep_positive: bool,
) -> Option<CenterArc> {
    let (sin_phi, cos_phi) = phi.sin_cos();

    // Step 1: midpoint in the rotated frame.
    let dx = (start.x as f64 - end.x as f64) / 2.0;
    let dy = (start.y as f64 - end.y as f64) / 2.0;
    let x1p = cos_phi * dx + sin_phi * dy;
    let y1p = -sin_phi * dx + cos_phi * dy;

    // F.6.6: scale radii up when the chord doesn't fit.
    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        let s = lambda.sqrt();
        log::debug!("arc radii too small for chord; scaling by {s:.4}");
        rx *= s;
        ry *= s;
    }
    if !(rx.is_finite() && ry.is_finite()) {
        return None;
    }

    // Step 2: center in the rotated frame.
    let rxsq = rx * rx;
    let rysq = ry * ry;
    let num = rxsq * rysq - rxsq * y1p * y1p - rysq * x1p * x1p;
    let den = rxsq * y1p * y1p + rysq * x1p * x1p;
    if den == 0.0 {
        return None;
    }
    let mut k = (num.max(0.0) / den).sqrt();
    if large_arc == sweep_positive {
        k = -k;
    }
    let cxp = k * rx * y1p / ry;
    let cyp = -k * ry * x1p / rx;

    // Step 3: back to the original frame.
    let mx = (start.x as f64 + end.x as f64) / 2.0;
    let my = (start.y as f64 + end.y as f64) / 2.0;
    let cx = cos_phi * cxp - sin_phi * cyp + mx;
    let cy = sin_phi * cxp + cos_phi * cyp + my;

    // Step 4: start angle and sweep.
    let angle = |vx: f64, vy: f64| vy.atan2(vx);
    let theta1 = angle((x1p - cxp) / rx, (y1p - cyp) / ry);
    let theta2 = angle((-x1p - cxp) / rx, (-y1p - cyp) / ry);
    let mut sweep = theta2 - theta1;
    if sweep_positive && sweep < 0.0 {
        sweep += 2.0 * PI;
    } else if !sweep_positive && sweep > 0.0 {
        sweep -= 2.0 * PI;
    }

    Some(CenterArc { cx, cy, rx, ry, phi, theta1, sweep })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Verb;

    fn pt(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn zero_radius_arc_is_a_line() {
        let mut p = Path::new();
        p.move_to(pt(0.0, 0.0));
        p.arc_to(pt(0.0, 0.0), 0.0, ArcSize::Small, PathDirection::Cw, pt(5.0, 5.0));
        assert_eq!(p.data().verbs(), &[Verb::Move, Verb::Line]);
        assert_eq!(p.data().points(), &[pt(0.0, 0.0), pt(5.0, 5.0)]);
    }

    #[test]
    fn coincident_endpoints_arc_is_a_line() {
        let mut p = Path::new();
        p.move_to(pt(3.0, 3.0));
        p.arc_to(pt(10.0, 10.0), 0.0, ArcSize::Small, PathDirection::Cw, pt(3.0, 3.0));
        assert_eq!(p.data().verbs(), &[Verb::Move, Verb::Line]);
    }

    #[test]
    fn quarter_circle_is_one_conic() {
        let mut p = Path::new();
        p.move_to(pt(10.0, 0.0));
        // Quarter of a circle of radius 10 around the origin.
        p.arc_to(pt(10.0, 10.0), 0.0, ArcSize::Small, PathDirection::Cw, pt(0.0, 10.0));
        assert_eq!(p.data().verbs(), &[Verb::Move, Verb::Conic]);

        let w = p.data().conic_weights()[0];
        assert!((w - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-4);
        // Control point is the tangent intersection.
        assert!(p.data().points()[1].distance(pt(10.0, 10.0)) < 1e-3);
    }

    #[test]
    fn half_circle_splits_into_two_conics() {
        let mut p = Path::new();
        p.move_to(pt(-5.0, 0.0));
        p.arc_to(pt(5.0, 5.0), 0.0, ArcSize::Small, PathDirection::Cw, pt(5.0, 0.0));
        assert_eq!(p.data().verbs(), &[Verb::Move, Verb::Conic, Verb::Conic]);
        // Ends exactly on the requested endpoint.
        assert_eq!(p.last_point().unwrap(), pt(5.0, 0.0));
    }

    #[test]
    fn undersized_radii_scale_up_to_span_chord() {
        let mut p = Path::new();
        p.move_to(pt(0.0, 0.0));
        // Radius 1 cannot span a chord of length 20; correction kicks in.
        p.arc_to(pt(1.0, 1.0), 0.0, ArcSize::Small, PathDirection::Cw, pt(20.0, 0.0));
        assert!(p.data().verbs().iter().any(|&v| v == Verb::Conic));
        assert_eq!(p.last_point().unwrap(), pt(20.0, 0.0));
    }

    #[test]
    fn sweep_direction_picks_arc_side() {
        let mut cw = Path::new();
        cw.move_to(pt(0.0, 0.0));
        cw.arc_to(pt(5.0, 5.0), 0.0, ArcSize::Small, PathDirection::Cw, pt(10.0, 0.0));
        let mut ccw = Path::new();
        ccw.move_to(pt(0.0, 0.0));
        ccw.arc_to(pt(5.0, 5.0), 0.0, ArcSize::Small, PathDirection::Ccw, pt(10.0, 0.0));

        // Screen-clockwise from left to right passes above the chord
        // (negative y in y-down coordinates); counter-clockwise below.
        let cw_min_y = cw.data().points().iter().map(|p| p.y).fold(f32::MAX, f32::min);
        let ccw_max_y = ccw.data().points().iter().map(|p| p.y).fold(f32::MIN, f32::max);
        assert!(cw_min_y < -1.0);
        assert!(ccw_max_y > 1.0);
    }

    #[test]
    fn tangent_arc_emits_line_plus_conic() {
        let mut p = Path::new();
        p.move_to(pt(0.0, 0.0));
        // 90° corner at (10, 0): tangent points sit `radius` away from it.
        p.arc_to_tangent(pt(10.0, 0.0), pt(10.0, 10.0), 3.0);
        assert_eq!(p.data().verbs(), &[Verb::Move, Verb::Line, Verb::Conic]);
        assert_eq!(p.data().points()[1], pt(7.0, 0.0));
        assert_eq!(p.last_point().unwrap(), pt(10.0, 3.0));

        let w = p.data().conic_weights()[0];
        assert!((w - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-4);
    }

    #[test]
    fn tangent_arc_degenerates_to_line() {
        // Collinear tangents: no corner to round.
        let mut p = Path::new();
        p.move_to(pt(0.0, 0.0));
        p.arc_to_tangent(pt(5.0, 0.0), pt(10.0, 0.0), 2.0);
        assert_eq!(p.data().verbs(), &[Verb::Move, Verb::Line]);
        assert_eq!(p.last_point().unwrap(), pt(5.0, 0.0));

        // Zero radius.
        let mut q = Path::new();
        q.move_to(pt(0.0, 0.0));
        q.arc_to_tangent(pt(5.0, 5.0), pt(10.0, 0.0), 0.0);
        assert_eq!(q.data().verbs(), &[Verb::Move, Verb::Line]);
    }
}

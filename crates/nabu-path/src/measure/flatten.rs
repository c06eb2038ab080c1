//! Curve evaluation, subdivision, and adaptive flattening.
//!
//! Arc lengths come from recursive midpoint subdivision: a curve flat enough
//! that its control points sit within [`FLATTEN_TOLERANCE`] of the chord is
//! measured as that chord. This gives bounded-error lengths for quads,
//! conics, and cubics without closed-form elliptic integrals.

use crate::geom::Point;

/// Flatness tolerance in logical pixels. Deliberately a compile-time
/// constant: every consumer of a measured path should agree on one notion of
/// "straight enough".
pub const FLATTEN_TOLERANCE: f32 = 0.25;

/// Hard cap on subdivision depth. Pathological or NaN control points stop
/// recursing here and fall back to the chord estimate instead of looping.
pub const MAX_SUBDIVISION_DEPTH: u32 = 20;

// ── evaluation ────────────────────────────────────────────────────────────

#[inline]
pub fn quad_point(p: &[Point; 3], t: f32) -> Point {
    let u = 1.0 - t;
    p[0] * (u * u) + p[1] * (2.0 * u * t) + p[2] * (t * t)
}

#[inline]
pub fn cubic_point(p: &[Point; 4], t: f32) -> Point {
    let u = 1.0 - t;
    p[0] * (u * u * u) + p[1] * (3.0 * u * u * t) + p[2] * (3.0 * u * t * t) + p[3] * (t * t * t)
}

/// Rational quadratic: `((1-t)²p0 + 2t(1-t)w·p1 + t²p2) / ((1-t)² + 2t(1-t)w + t²)`.
///
/// One formula for every weight class — elliptical, parabolic, hyperbolic
/// arcs are all the same evaluation.
#[inline]
pub fn conic_point(p: &[Point; 3], w: f32, t: f32) -> Point {
    let u = 1.0 - t;
    let c0 = u * u;
    let c1 = 2.0 * u * t * w;
    let c2 = t * t;
    (p[0] * c0 + p[1] * c1 + p[2] * c2) / (c0 + c1 + c2)
}

// ── subdivision ───────────────────────────────────────────────────────────

pub fn chop_quad_at(p: &[Point; 3], t: f32) -> ([Point; 3], [Point; 3]) {
    let q0 = p[0].lerp(p[1], t);
    let q1 = p[1].lerp(p[2], t);
    let r = q0.lerp(q1, t);
    ([p[0], q0, r], [r, q1, p[2]])
}

pub fn chop_cubic_at(p: &[Point; 4], t: f32) -> ([Point; 4], [Point; 4]) {
    let q0 = p[0].lerp(p[1], t);
    let q1 = p[1].lerp(p[2], t);
    let q2 = p[2].lerp(p[3], t);
    let r0 = q0.lerp(q1, t);
    let r1 = q1.lerp(q2, t);
    let s = r0.lerp(r1, t);
    ([p[0], q0, r0, s], [s, r1, q2, p[3]])
}

/// Rational de Casteljau chop. The halves are renormalized to standard form
/// (end weights 1), so the new middle weight is `w_mid / √(w_start · w_end)`.
pub fn chop_conic_at(p: &[Point; 3], w: f32, t: f32) -> (([Point; 3], f32), ([Point; 3], f32)) {
    // Homogeneous control points (x·w, y·w, w).
    let h = |pt: Point, pw: f32| [pt.x * pw, pt.y * pw, pw];
    let lerp3 = |a: [f32; 3], b: [f32; 3], t: f32| {
        [
            a[0] + (b[0] - a[0]) * t,
            a[1] + (b[1] - a[1]) * t,
            a[2] + (b[2] - a[2]) * t,
        ]
    };
    let project = |v: [f32; 3]| Point::new(v[0] / v[2], v[1] / v[2]);

    let p0 = h(p[0], 1.0);
    let p1 = h(p[1], w);
    let p2 = h(p[2], 1.0);

    let q0 = lerp3(p0, p1, t);
    let q1 = lerp3(p1, p2, t);
    let r = lerp3(q0, q1, t);

    let mid = project(r);
    let root = r[2].max(f32::MIN_POSITIVE).sqrt();
    let left = ([p[0], project(q0), mid], q0[2] / root);
    let right = ([mid, project(q1), p[2]], q1[2] / root);
    (left, right)
}

// ── flatness ──────────────────────────────────────────────────────────────

/// Distance from `p` to the segment `a..b` (not the infinite line).
fn chord_distance(p: Point, a: Point, b: Point) -> f32 {
    let ab = b - a;
    let len2 = ab.dot(ab);
    if len2 <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[inline]
fn controls_near_chord(ctrls: &[Point], a: Point, b: Point, tol: f32) -> bool {
    ctrls.iter().all(|&c| chord_distance(c, a, b) <= tol)
}

// ── length ────────────────────────────────────────────────────────────────

pub fn quad_length(p: &[Point; 3]) -> f32 {
    fn recurse(p: &[Point; 3], depth: u32) -> f32 {
        if depth >= MAX_SUBDIVISION_DEPTH || controls_near_chord(&p[1..2], p[0], p[2], FLATTEN_TOLERANCE) {
            return p[0].distance(p[2]);
        }
        let (a, b) = chop_quad_at(p, 0.5);
        recurse(&a, depth + 1) + recurse(&b, depth + 1)
    }
    recurse(p, 0)
}

pub fn cubic_length(p: &[Point; 4]) -> f32 {
    fn recurse(p: &[Point; 4], depth: u32) -> f32 {
        if depth >= MAX_SUBDIVISION_DEPTH || controls_near_chord(&p[1..3], p[0], p[3], FLATTEN_TOLERANCE) {
            return p[0].distance(p[3]);
        }
        let (a, b) = chop_cubic_at(p, 0.5);
        recurse(&a, depth + 1) + recurse(&b, depth + 1)
    }
    recurse(p, 0)
}

pub fn conic_length(p: &[Point; 3], w: f32) -> f32 {
    fn recurse(p: &[Point; 3], w: f32, depth: u32) -> f32 {
        if depth >= MAX_SUBDIVISION_DEPTH || controls_near_chord(&p[1..2], p[0], p[2], FLATTEN_TOLERANCE) {
            return p[0].distance(p[2]);
        }
        let ((ap, aw), (bp, bw)) = chop_conic_at(p, w, 0.5);
        recurse(&ap, aw, depth + 1) + recurse(&bp, bw, depth + 1)
    }
    recurse(p, w, 0)
}

// ── flattened emission ────────────────────────────────────────────────────

/// Emits `(from, to)` chords approximating a quad within `tol`.
pub fn flatten_quad(p: &[Point; 3], tol: f32, emit: &mut impl FnMut(Point, Point)) {
    fn recurse(p: &[Point; 3], tol: f32, depth: u32, emit: &mut impl FnMut(Point, Point)) {
        if depth >= MAX_SUBDIVISION_DEPTH || controls_near_chord(&p[1..2], p[0], p[2], tol) {
            emit(p[0], p[2]);
            return;
        }
        let (a, b) = chop_quad_at(p, 0.5);
        recurse(&a, tol, depth + 1, emit);
        recurse(&b, tol, depth + 1, emit);
    }
    recurse(p, tol, 0, emit)
}

/// Emits `(from, to)` chords approximating a cubic within `tol`.
pub fn flatten_cubic(p: &[Point; 4], tol: f32, emit: &mut impl FnMut(Point, Point)) {
    fn recurse(p: &[Point; 4], tol: f32, depth: u32, emit: &mut impl FnMut(Point, Point)) {
        if depth >= MAX_SUBDIVISION_DEPTH || controls_near_chord(&p[1..3], p[0], p[3], tol) {
            emit(p[0], p[3]);
            return;
        }
        let (a, b) = chop_cubic_at(p, 0.5);
        recurse(&a, tol, depth + 1, emit);
        recurse(&b, tol, depth + 1, emit);
    }
    recurse(p, tol, 0, emit)
}

/// Emits `(from, to)` chords approximating a conic within `tol`.
pub fn flatten_conic(p: &[Point; 3], w: f32, tol: f32, emit: &mut impl FnMut(Point, Point)) {
    fn recurse(p: &[Point; 3], w: f32, tol: f32, depth: u32, emit: &mut impl FnMut(Point, Point)) {
        if depth >= MAX_SUBDIVISION_DEPTH || controls_near_chord(&p[1..2], p[0], p[2], tol) {
            emit(p[0], p[2]);
            return;
        }
        let ((ap, aw), (bp, bw)) = chop_conic_at(p, w, 0.5);
        recurse(&ap, aw, tol, depth + 1, emit);
        recurse(&bp, bw, tol, depth + 1, emit);
    }
    recurse(p, w, tol, 0, emit)
}

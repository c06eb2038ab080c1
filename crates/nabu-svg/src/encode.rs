//! SVG path-data serialization.

use std::fmt::Write;

use nabu_path::measure::chop_conic_at;
use nabu_path::{Path, PathElement, Point};

/// Coordinate style for [`to_svg`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Coordinates {
    #[default]
    Absolute,
    Relative,
}

/// Serializes a path to minimal SVG path syntax.
///
/// Conics that are circular-arc sections come out as `A` commands and parse
/// back to a single conic with the same control point and weight; other
/// conic classes (no SVG equivalent) degrade to a quadratic pair. `Close`
/// always writes `Z`. Numbers use the shortest representation that
/// round-trips the f32 value.
pub fn to_svg(path: &Path, coords: Coordinates) -> String {
    let mut out = String::new();
    let mut current = Point::ZERO;

    for element in path.iter() {
        if !out.is_empty() {
            out.push(' ');
        }
        match element {
            PathElement::MoveTo { to } => {
                write_cmd(&mut out, 'M', coords, current, &[to]);
                current = to;
            }
            PathElement::LineTo { to, .. } => {
                write_cmd(&mut out, 'L', coords, current, &[to]);
                current = to;
            }
            PathElement::QuadTo { ctrl, to, .. } => {
                write_cmd(&mut out, 'Q', coords, current, &[ctrl, to]);
                current = to;
            }
            PathElement::CubicTo { ctrl1, ctrl2, to, .. } => {
                write_cmd(&mut out, 'C', coords, current, &[ctrl1, ctrl2, to]);
                current = to;
            }
            PathElement::ConicTo { from, ctrl, to, weight } => {
                match circular_arc(from, ctrl, to, weight) {
                    Some(arc) => {
                        let sweep = if arc.clockwise { '1' } else { '0' };
                        let to_out = relativize(coords, current, to);
                        let _ = write!(
                            out,
                            "{}{} {} 0 0 {} {} {}",
                            if coords == Coordinates::Relative { 'a' } else { 'A' },
                            fmt_num(arc.radius),
                            fmt_num(arc.radius),
                            sweep,
                            fmt_num(to_out.x),
                            fmt_num(to_out.y),
                        );
                    }
                    None => {
                        // Parabolic/hyperbolic conics have no arc form;
                        // approximate with the two halves' control polygons.
                        let ((a, _), (b, _)) = chop_conic_at(&[from, ctrl, to], weight, 0.5);
                        write_cmd(&mut out, 'Q', coords, current, &[a[1], a[2]]);
                        out.push(' ');
                        write_cmd(&mut out, 'Q', coords, a[2], &[b[1], b[2]]);
                    }
                }
                current = to;
            }
            PathElement::Close { to, .. } => {
                out.push(if coords == Coordinates::Relative { 'z' } else { 'Z' });
                current = to;
            }
        }
    }
    out
}

fn write_cmd(out: &mut String, cmd: char, coords: Coordinates, current: Point, pts: &[Point]) {
    let cmd = if coords == Coordinates::Relative {
        cmd.to_ascii_lowercase()
    } else {
        cmd
    };
    out.push(cmd);
    for (i, &p) in pts.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let p = relativize(coords, current, p);
        let _ = write!(out, "{} {}", fmt_num(p.x), fmt_num(p.y));
    }
}

#[inline]
fn relativize(coords: Coordinates, current: Point, p: Point) -> Point {
    match coords {
        Coordinates::Absolute => p,
        Coordinates::Relative => p - current,
    }
}

/// Shortest decimal that round-trips the f32 (`Display` guarantees this).
#[inline]
fn fmt_num(v: f32) -> String {
    format!("{v}")
}

struct CircularArc {
    radius: f32,
    clockwise: bool,
}

/// Recognizes a conic that traces a circular-arc section: weight below 1
/// (elliptical class) with isosceles control legs, and a weight matching
/// the sweep its geometry implies.
fn circular_arc(from: Point, ctrl: Point, to: Point, weight: f32) -> Option<CircularArc> {
    if !(0.0 < weight && weight < 1.0) {
        return None;
    }
    let leg_a = ctrl.distance(from);
    let leg_b = ctrl.distance(to);
    if leg_a <= 0.0 || (leg_a - leg_b).abs() > 1e-3 * (1.0 + leg_a) {
        return None;
    }

    // Circle center: on the line from the control through the chord
    // midpoint, where the radius meets the tangent at a right angle.
    let mid = (from + to) * 0.5;
    let v = from - ctrl;
    let m = mid - ctrl;
    let denom = m.dot(v);
    if denom.abs() <= f32::EPSILON {
        return None;
    }
    let t = v.dot(v) / denom;
    let center = ctrl + m * t;
    let radius = from.distance(center);
    if !radius.is_finite() || radius <= 0.0 {
        return None;
    }

    // The weight of a circular conic is the cosine of half its sweep.
    let r1 = from - center;
    let r2 = to - center;
    let cos_sweep = (r1.dot(r2) / (radius * radius)).clamp(-1.0, 1.0);
    let expected = ((1.0 + cos_sweep) * 0.5).sqrt();
    if (weight - expected).abs() > 1e-3 {
        return None;
    }

    Some(CircularArc {
        radius,
        clockwise: r1.cross(r2) > 0.0,
    })
}

use crate::geom::Point;

use super::{Path, Verb};

/// One resolved piece of path geometry, with the incoming current point
/// spelled out.
///
/// `Close { from, to }` carries the implicit closing edge: `to` is the
/// contour's move point; consumers that fill or measure treat it as a line
/// from `from` to `to`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathElement {
    MoveTo { to: Point },
    LineTo { from: Point, to: Point },
    QuadTo { from: Point, ctrl: Point, to: Point },
    ConicTo { from: Point, ctrl: Point, to: Point, weight: f32 },
    CubicTo { from: Point, ctrl1: Point, ctrl2: Point, to: Point },
    Close { from: Point, to: Point },
}

impl PathElement {
    /// End point of this element (for `Close`, the contour start).
    #[inline]
    pub fn end(&self) -> Point {
        match *self {
            PathElement::MoveTo { to }
            | PathElement::LineTo { to, .. }
            | PathElement::QuadTo { to, .. }
            | PathElement::ConicTo { to, .. }
            | PathElement::CubicTo { to, .. }
            | PathElement::Close { to, .. } => to,
        }
    }
}

/// Lazy walk over a path's verbs, one [`PathElement`] per verb.
///
/// Tracks the current point and the contour's move point so every yielded
/// element is self-contained. Forward-only; build a fresh iterator to walk
/// again.
pub struct PathIter<'a> {
    path: &'a Path,
    verb_idx: usize,
    pt_idx: usize,
    wt_idx: usize,
    current: Point,
    contour_start: Point,
}

impl<'a> PathIter<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self {
            path,
            verb_idx: 0,
            pt_idx: 0,
            wt_idx: 0,
            current: Point::ZERO,
            contour_start: Point::ZERO,
        }
    }
}

impl Iterator for PathIter<'_> {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        let data = self.path.data();
        let verb = *data.verbs().get(self.verb_idx)?;
        self.verb_idx += 1;

        let pts = &data.points()[self.pt_idx..self.pt_idx + verb.points_appended()];
        self.pt_idx += verb.points_appended();

        let from = self.current;
        let element = match verb {
            Verb::Move => {
                self.contour_start = pts[0];
                PathElement::MoveTo { to: pts[0] }
            }
            Verb::Line => PathElement::LineTo { from, to: pts[0] },
            Verb::Quad => PathElement::QuadTo { from, ctrl: pts[0], to: pts[1] },
            Verb::Conic => {
                let weight = data.conic_weights()[self.wt_idx];
                self.wt_idx += 1;
                PathElement::ConicTo { from, ctrl: pts[0], to: pts[1], weight }
            }
            Verb::Cubic => PathElement::CubicTo { from, ctrl1: pts[0], ctrl2: pts[1], to: pts[2] },
            Verb::Close => PathElement::Close { from, to: self.contour_start },
        };
        self.current = element.end();
        Some(element)
    }
}

impl Path {
    /// Iterates the path one resolved element at a time.
    #[inline]
    pub fn iter(&self) -> PathIter<'_> {
        PathIter::new(self)
    }

    /// Callback-style walk; stops early when `f` returns `false`.
    ///
    /// Returns `true` when the whole path was visited.
    pub fn decompose(&self, mut f: impl FnMut(PathElement) -> bool) -> bool {
        for element in self.iter() {
            if !f(element) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathDirection;
    use crate::geom::Rect;

    fn pt(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn elements_carry_current_point() {
        let mut p = Path::new();
        p.move_to(pt(1.0, 1.0));
        p.line_to(pt(4.0, 1.0));
        p.quad_to(pt(4.0, 4.0), pt(1.0, 4.0));
        p.close();

        let got: Vec<_> = p.iter().collect();
        assert_eq!(
            got,
            vec![
                PathElement::MoveTo { to: pt(1.0, 1.0) },
                PathElement::LineTo { from: pt(1.0, 1.0), to: pt(4.0, 1.0) },
                PathElement::QuadTo { from: pt(4.0, 1.0), ctrl: pt(4.0, 4.0), to: pt(1.0, 4.0) },
                PathElement::Close { from: pt(1.0, 4.0), to: pt(1.0, 1.0) },
            ]
        );
    }

    #[test]
    fn close_points_at_contour_start_per_contour() {
        let mut p = Path::new();
        p.move_to(pt(0.0, 0.0));
        p.line_to(pt(1.0, 0.0));
        p.close();
        p.move_to(pt(10.0, 0.0));
        p.line_to(pt(11.0, 0.0));
        p.close();

        let closes: Vec<_> = p
            .iter()
            .filter_map(|e| match e {
                PathElement::Close { to, .. } => Some(to),
                _ => None,
            })
            .collect();
        assert_eq!(closes, vec![pt(0.0, 0.0), pt(10.0, 0.0)]);
    }

    #[test]
    fn decompose_stops_early() {
        let mut p = Path::new();
        p.add_rect(Rect::new(0.0, 0.0, 1.0, 1.0), PathDirection::Cw, 0);

        let mut seen = 0;
        let finished = p.decompose(|_| {
            seen += 1;
            seen < 2
        });
        assert!(!finished);
        assert_eq!(seen, 2);
    }
}

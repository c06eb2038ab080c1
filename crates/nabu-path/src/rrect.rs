use crate::geom::{Point, Rect};

/// A rounded rectangle: a rect plus one `(rx, ry)` radii pair applied to
/// all four corners.
///
/// Per-corner radii exist only as a builder-time parameter to
/// [`Path::add_round_rect`](crate::Path::add_round_rect); the stored value
/// type is always uniform.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RRect {
    pub rect: Rect,
    pub radii: Point,
}

impl RRect {
    /// Builds from a rect and corner radii, sanitizing degenerate input:
    /// negative radii clamp to zero, and radii too large for the rect are
    /// scaled down by `min(w/2rx, h/2ry)` — both together, preserving the
    /// corner ellipse's aspect ratio rather than clipping one axis.
    pub fn from_rect_xy(rect: Rect, rx: f32, ry: f32) -> Self {
        let rect = rect.normalized();
        let mut rx = rx.max(0.0);
        let mut ry = ry.max(0.0);

        let mut scale = 1.0f32;
        if rx > 0.0 {
            scale = scale.min(rect.width() / (2.0 * rx));
        }
        if ry > 0.0 {
            scale = scale.min(rect.height() / (2.0 * ry));
        }
        if scale < 1.0 {
            rx *= scale;
            ry *= scale;
        }

        RRect { rect, radii: Point::new(rx, ry) }
    }

    /// The degenerate oval case: radii are exactly half the rect.
    pub fn from_oval(oval: Rect) -> Self {
        let oval = oval.normalized();
        RRect {
            rect: oval,
            radii: Point::new(oval.width() * 0.5, oval.height() * 0.5),
        }
    }

    /// True iff no corner is rounded.
    #[inline]
    pub fn is_rect(&self) -> bool {
        self.radii.x <= 0.0 || self.radii.y <= 0.0
    }

    /// True iff the radii swallow the whole rect (both at least half the
    /// corresponding dimension).
    #[inline]
    pub fn is_oval(&self) -> bool {
        self.radii.x >= self.rect.width() * 0.5 && self.radii.y >= self.rect.height() * 0.5
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.rect.width()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.rect.height()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rect.is_empty()
    }

    /// Scales rect and radii per axis. Circular corners legitimately become
    /// elliptical under non-uniform scale.
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.rect = Rect::new(
            self.rect.left() * sx,
            self.rect.top() * sy,
            self.rect.width() * sx,
            self.rect.height() * sy,
        )
        .normalized();
        self.radii = Point::new((self.radii.x * sx).abs(), (self.radii.y * sy).abs());
    }

    /// Exact point containment, treating each corner as an ellipse quadrant.
    pub fn contains(&self, p: Point) -> bool {
        if !self.rect.contains(p) {
            return false;
        }
        let (rx, ry) = (self.radii.x, self.radii.y);
        if rx <= 0.0 || ry <= 0.0 {
            return true;
        }

        // The corner ellipse centers sit one radii pair inside the rect.
        // A point in the central cross band is governed by the straight
        // edges alone; otherwise test against the nearest corner's ellipse.
        let r = self.rect;
        let cx = if p.x < r.left() + rx {
            r.left() + rx
        } else if p.x > r.right() - rx {
            r.right() - rx
        } else {
            return true;
        };
        let cy = if p.y < r.top() + ry {
            r.top() + ry
        } else if p.y > r.bottom() - ry {
            r.bottom() - ry
        } else {
            return true;
        };

        let nx = (p.x - cx) / rx;
        let ny = (p.y - cy) / ry;
        nx * nx + ny * ny <= 1.0
    }

    /// True when `other` lies entirely inside the rounded rect.
    pub fn contains_rect(&self, other: Rect) -> bool {
        let other = other.normalized();
        // All four corners inside suffices: the rounded rect is convex.
        self.contains(Point::new(other.left(), other.top()))
            && self.contains(Point::new(other.right(), other.top()))
            && self.contains(Point::new(other.right(), other.bottom()))
            && self.contains(Point::new(other.left(), other.bottom()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn negative_radii_clamp_to_zero() {
        let rr = RRect::from_rect_xy(Rect::new(0.0, 0.0, 10.0, 10.0), -2.0, -3.0);
        assert_eq!(rr.radii, Point::ZERO);
        assert!(rr.is_rect());
        assert!(!rr.is_oval());
    }

    #[test]
    fn oversized_radii_scale_together() {
        // rx needs halving; ry must shrink by the same factor.
        let rr = RRect::from_rect_xy(Rect::new(0.0, 0.0, 10.0, 100.0), 10.0, 20.0);
        assert_eq!(rr.radii, pt(5.0, 10.0));
    }

    #[test]
    fn oval_degenerate() {
        let rr = RRect::from_oval(Rect::new(0.0, 0.0, 10.0, 20.0));
        assert_eq!(rr.radii, pt(5.0, 10.0));
        assert!(rr.is_oval());
        assert!(!rr.is_rect());
    }

    #[test]
    fn scale_non_uniform_makes_elliptical_corners() {
        let mut rr = RRect::from_rect_xy(Rect::new(0.0, 0.0, 10.0, 10.0), 2.0, 2.0);
        rr.scale(2.0, 1.0);
        assert_eq!(rr.rect, Rect::new(0.0, 0.0, 20.0, 10.0));
        assert_eq!(rr.radii, pt(4.0, 2.0));
    }

    #[test]
    fn contains_cuts_corners() {
        let rr = RRect::from_rect_xy(Rect::new(0.0, 0.0, 10.0, 10.0), 4.0, 4.0);
        assert!(rr.contains(pt(5.0, 5.0)));
        assert!(rr.contains(pt(0.0, 5.0))); // edge band
        assert!(!rr.contains(pt(0.5, 0.5))); // clipped corner
        assert!(!rr.contains(pt(11.0, 5.0))); // outside rect
        // On the corner arc's diagonal, just inside.
        assert!(rr.contains(pt(4.0 - 2.7, 4.0 - 2.7)));
    }

    #[test]
    fn contains_rect_uses_corners() {
        let rr = RRect::from_rect_xy(Rect::new(0.0, 0.0, 10.0, 10.0), 3.0, 3.0);
        assert!(rr.contains_rect(Rect::new(3.0, 3.0, 4.0, 4.0)));
        assert!(!rr.contains_rect(Rect::new(0.0, 0.0, 2.0, 2.0))); // corner clipped
    }
}

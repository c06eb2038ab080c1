use super::Point;

/// 2D affine transform.
///
/// Column-major 2×3 layout:
///
/// ```text
/// | a  c  tx |   | x |
/// | b  d  ty | · | y |
///                | 1 |
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    #[inline]
    pub const fn translate(tx: f32, ty: f32) -> Self {
        Matrix::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    #[inline]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Matrix::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation by `radians` about the origin.
    #[inline]
    pub fn rotate(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Matrix::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Rotation by `radians` about `pivot`.
    #[inline]
    pub fn rotate_about(radians: f32, pivot: Point) -> Self {
        Matrix::translate(pivot.x, pivot.y)
            .concat(&Matrix::rotate(radians))
            .concat(&Matrix::translate(-pivot.x, -pivot.y))
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Matrix::IDENTITY
    }

    /// Returns `self · other` (apply `other` first, then `self`).
    #[inline]
    pub fn concat(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            tx: self.a * other.tx + self.c * other.ty + self.tx,
            ty: self.b * other.tx + self.d * other.ty + self.ty,
        }
    }

    #[inline]
    pub fn map_point(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    #[inline]
    pub fn map_points(&self, points: &mut [Point]) {
        for p in points {
            *p = self.map_point(*p);
        }
    }
}

impl Default for Matrix {
    #[inline]
    fn default() -> Self {
        Matrix::IDENTITY
    }
}

/// Column-major 4×4 transform, applied to 2D points on the z = 0 plane with
/// a perspective divide.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix3D {
    /// `cols[c][r]` is column `c`, row `r`.
    pub cols: [[f32; 4]; 4],
}

impl Matrix3D {
    pub const IDENTITY: Matrix3D = Matrix3D {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    #[inline]
    pub const fn from_cols(cols: [[f32; 4]; 4]) -> Self {
        Self { cols }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Matrix3D::IDENTITY
    }

    /// Maps `(x, y, 0, 1)` and projects back to 2D.
    ///
    /// A w term at or below zero would flip or explode the projection; it is
    /// clamped to a tiny positive value so callers always get finite output.
    #[inline]
    pub fn map_point(&self, p: Point) -> Point {
        let c = &self.cols;
        let x = c[0][0] * p.x + c[1][0] * p.y + c[3][0];
        let y = c[0][1] * p.x + c[1][1] * p.y + c[3][1];
        let w = c[0][3] * p.x + c[1][3] * p.y + c[3][3];
        let w = if w > f32::EPSILON { w } else { f32::EPSILON };
        Point::new(x / w, y / w)
    }
}

impl Default for Matrix3D {
    #[inline]
    fn default() -> Self {
        Matrix3D::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn identity_maps_to_self() {
        let p = Point::new(3.5, -2.0);
        assert_eq!(Matrix::IDENTITY.map_point(p), p);
        assert!(Matrix::IDENTITY.is_identity());
    }

    #[test]
    fn translate_then_scale_order() {
        // concat applies the right-hand matrix first.
        let m = Matrix::scale(2.0, 2.0).concat(&Matrix::translate(1.0, 0.0));
        assert_eq!(m.map_point(Point::ZERO), Point::new(2.0, 0.0));
    }

    #[test]
    fn rotate_quarter_turn() {
        let m = Matrix::rotate(std::f32::consts::FRAC_PI_2);
        // y-down coordinates: +x rotates onto +y.
        assert!(close(m.map_point(Point::new(1.0, 0.0)), Point::new(0.0, 1.0)));
    }

    #[test]
    fn rotate_about_pivot_fixes_pivot() {
        let pivot = Point::new(5.0, 5.0);
        let m = Matrix::rotate_about(1.234, pivot);
        assert!(close(m.map_point(pivot), pivot));
    }

    #[test]
    fn matrix3d_identity_and_translation() {
        let p = Point::new(2.0, 3.0);
        assert_eq!(Matrix3D::IDENTITY.map_point(p), p);

        let mut cols = Matrix3D::IDENTITY.cols;
        cols[3][0] = 10.0;
        cols[3][1] = -5.0;
        let m = Matrix3D::from_cols(cols);
        assert_eq!(m.map_point(p), Point::new(12.0, -2.0));
    }

    #[test]
    fn matrix3d_perspective_divides() {
        let mut cols = Matrix3D::IDENTITY.cols;
        cols[0][3] = 0.1; // w = 1 + 0.1 x
        let m = Matrix3D::from_cols(cols);
        let p = m.map_point(Point::new(10.0, 4.0));
        assert!(close(p, Point::new(5.0, 2.0)));
    }
}

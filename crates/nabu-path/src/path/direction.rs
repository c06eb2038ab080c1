/// Contour traversal direction, in y-down screen coordinates.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PathDirection {
    /// Clockwise on screen (the direction of increasing angle when +Y
    /// points down). Matches a set SVG sweep flag.
    #[default]
    Cw,
    /// Counter-clockwise on screen.
    Ccw,
}

impl PathDirection {
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            PathDirection::Cw => PathDirection::Ccw,
            PathDirection::Ccw => PathDirection::Cw,
        }
    }
}

/// Which of the two sweep magnitudes an elliptical arc takes.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ArcSize {
    /// Sweep ≤ 180°.
    #[default]
    Small,
    /// Sweep > 180°.
    Large,
}

//! Geometry primitives shared by the path kernel and its consumers.
//!
//! Canonical space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! All angles are radians unless a function name says otherwise.

mod corner_radii;
mod matrix;
mod point;
mod rect;

pub use corner_radii::CornerRadii;
pub use matrix::{Matrix, Matrix3D};
pub use point::Point;
pub use rect::Rect;

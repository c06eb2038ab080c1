//! nabu-path: a CPU-side 2D vector path geometry kernel.
//!
//! This crate owns the path representation every higher layer consumes —
//! renderers draw it, hit-testers query it, serializers walk it:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`geom`] | `Point`, `Rect`, `Matrix`, `Matrix3D`, `CornerRadii` |
//! | [`path`] | `Path`, `PathData`, `Verb`, fill types, iteration, predicates |
//! | [`rrect`] | the rounded-rect value type |
//! | [`measure`] | arc-length tables, curve flattening and chopping |
//! | [`provider`] | lazy/eager path factories |
//! | [`ops`] | the boolean-combination contract |
//! | [`logging`] | `env_logger` bootstrap for binaries and harnesses |
//!
//! # Quick start
//!
//! ```rust
//! use nabu_path::{Path, PathDirection, Point, Rect};
//!
//! let mut path = Path::new();
//! path.move_to(Point::new(0.0, 0.0));
//! path.quad_to(Point::new(50.0, 0.0), Point::new(50.0, 50.0));
//! path.close();
//!
//! let mut square = Path::new();
//! square.add_rect(Rect::new(0.0, 0.0, 10.0, 10.0), PathDirection::Cw, 0);
//! assert!(square.is_rect().is_some());
//! assert!(square.contains(Point::new(5.0, 5.0)));
//! ```
//!
//! Paths are value-semantic copy-on-write handles: clone freely, share
//! read-only across threads, and mutate without disturbing other holders.

pub mod geom;
pub mod logging;
pub mod measure;
pub mod ops;
pub mod path;
pub mod provider;
pub mod rrect;

pub use geom::{CornerRadii, Matrix, Matrix3D, Point, Rect};
pub use measure::{Contour, PathMeasure, Segment, SegmentKind};
pub use ops::{PathCombiner, PathOp, PathOpError};
pub use path::{
    ArcSize, Path, PathData, PathDirection, PathElement, PathFillType, PathIter, RectInfo, Verb,
};
pub use provider::{FixedPathProvider, LazyPathProvider, PathProvider};
pub use rrect::RRect;

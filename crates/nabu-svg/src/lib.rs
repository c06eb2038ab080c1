//! SVG path-data scanning, parsing, and encoding for **nabu** paths.
//!
//! This crate stays lean on purpose — just the path kernel underneath — so
//! asset pipelines, linters, and editor tooling can embed it without
//! renderer-facing dependencies.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`scan`] | character-level numeric/token scanners |
//! | [`parse`] | `from_svg` — `d` attribute → [`Path`](nabu_path::Path) |
//! | [`encode`] | `to_svg` — path → `d` attribute |
//! | [`error`] | `ParseError` |
//!
//! # Quick start
//!
//! ```rust
//! use nabu_svg::{from_svg, to_svg, Coordinates};
//!
//! let path = from_svg("M 0 0 L 10 0 Q 10 10 0 10 Z").unwrap();
//! assert_eq!(path.count_verbs(), 4);
//!
//! let d = to_svg(&path, Coordinates::Absolute);
//! assert_eq!(from_svg(&d).unwrap(), path);
//! ```

pub mod encode;
pub mod error;
pub mod parse;
pub mod scan;

pub use encode::{Coordinates, to_svg};
pub use error::ParseError;
pub use parse::from_svg;

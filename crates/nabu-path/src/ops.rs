use std::fmt;

use crate::path::Path;

/// How [`Path::add_path`] combines two paths.
///
/// `Append`/`Extend` are buffer operations the kernel performs itself. The
/// remaining values denote boolean clipping, which is contractually the job
/// of an external engine (see [`PathCombiner`]).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PathOp {
    /// Concatenate the verb/point/weight streams as-is.
    Append,
    /// Connect with a line from the destination's last point, then append.
    Extend,
    /// Subtract the second path from the first.
    Difference,
    /// Keep the overlap of both paths.
    Intersect,
    /// Keep the union of both paths.
    Union,
    /// Keep the regions covered by exactly one path.
    Xor,
}

/// Failure modes of path combination.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PathOpError {
    /// A boolean op was requested and no engine was supplied.
    NotImplemented,
    /// The external engine rejected the inputs.
    Engine(String),
}

impl fmt::Display for PathOpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOpError::NotImplemented => write!(f, "boolean path ops require an external engine"),
            PathOpError::Engine(msg) => write!(f, "path combine engine error: {msg}"),
        }
    }
}

impl std::error::Error for PathOpError {}

/// Capability interface for boolean path combination.
///
/// The kernel never implements curve clipping; embedders inject an engine
/// (a sweep-line clipper, a platform library binding, ...) and the kernel
/// passes requests through and accepts the resulting buffers.
pub trait PathCombiner {
    fn combine(&self, a: &Path, b: &Path, op: PathOp) -> Result<Path, PathOpError>;
}

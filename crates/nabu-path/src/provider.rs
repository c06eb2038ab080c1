use crate::geom::Rect;
use crate::path::{Path, PathFillType};

/// A lazy path factory: "path known now" and "path computed on demand"
/// behind one capability.
///
/// Contract: implementations are immutable after construction and safe to
/// query concurrently from multiple threads. `path()` may recompute on
/// every call — nothing here promises caching, so callers that reuse a
/// result should hold on to it themselves.
pub trait PathProvider: Send + Sync {
    /// Produces the path. May be called from any thread, any number of
    /// times.
    fn path(&self) -> Path;

    /// Bounds of the produced path. The default computes the path and asks
    /// it; eager implementations can answer cheaper.
    fn bounds(&self) -> Rect {
        self.path().bounds()
    }

    fn fill_type(&self) -> PathFillType {
        PathFillType::Winding
    }
}

/// Wraps an already-built path. Cloning the handle out is O(1), so this is
/// the cheap eager variant.
#[derive(Debug, Clone)]
pub struct FixedPathProvider {
    path: Path,
}

impl FixedPathProvider {
    pub fn new(path: Path) -> Self {
        Self { path }
    }
}

impl PathProvider for FixedPathProvider {
    fn path(&self) -> Path {
        self.path.clone()
    }

    fn bounds(&self) -> Rect {
        self.path.bounds()
    }

    fn fill_type(&self) -> PathFillType {
        self.path.fill_type()
    }
}

/// Computes the path on every request from a captured closure.
///
/// The closure must be `Send + Sync` itself; concurrent `path()` calls may
/// run it in parallel.
pub struct LazyPathProvider {
    compute: Box<dyn Fn() -> Path + Send + Sync>,
    fill_type: PathFillType,
}

impl LazyPathProvider {
    pub fn new(compute: impl Fn() -> Path + Send + Sync + 'static) -> Self {
        Self {
            compute: Box::new(compute),
            fill_type: PathFillType::Winding,
        }
    }

    pub fn with_fill_type(mut self, fill_type: PathFillType) -> Self {
        self.fill_type = fill_type;
        self
    }
}

impl PathProvider for LazyPathProvider {
    fn path(&self) -> Path {
        (self.compute)()
    }

    fn fill_type(&self) -> PathFillType {
        self.fill_type
    }
}

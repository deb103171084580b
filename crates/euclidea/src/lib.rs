//! A straightedge-and-compass construction solver: a geometric kernel
//! (points, lines, circles, fingerprinted de-duplication) plus a DFS search
//! engine that tries tool sequences until a named puzzle's target is built.

pub mod configs;
pub mod error;
pub mod geom;
pub mod hashset;
pub mod problem;
pub mod render;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports for quick access to the crate's core types.
pub mod prelude {
    pub use crate::error::{EuclideaError, Result};
    pub use crate::geom::{Board, Circle, HalfLine, Intersection, Line, Point, Segment, Vec2};
    pub use crate::problem::{Statement, Target};
    pub use crate::solver::{solve, ParallelContext, SearchOutcome};
}

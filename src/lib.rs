//! Polygon triangulation by trapezoidal decomposition.
//!
//! Segments are threaded one at a time into a [Trapezoidation], a subdivision of the plane into trapezoids
//! with a point-location structure over it. The trapezoids then yield [Diagonal]s which cut the polygon
//! into monotone mountains, and each mountain is triangulated in a single greedy pass.
//!
//! ```
//! use trapezoidal::Polygon;
//!
//! let square = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
//! let triangulation = square.triangulate().unwrap();
//! assert_eq!(triangulation.triangles().len(), 2);
//! ```

mod idx;
mod point;
mod segment;
mod trapezoid;
mod querynode;
mod trapezoidation;
mod diagonals;
mod monotone;
mod triangulation;
mod math;
mod options;
mod inputs;
mod outputs;
mod errors;

#[cfg(feature = "debugging")]
pub mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{InternalError, TriangulationError};
pub use point::{Point, EPSILON};
pub use segment::Segment;
pub use trapezoidation::{TrapezoidInfo, Trapezoidation};
pub use diagonals::Diagonal;
pub use triangulation::Triangulation;
pub use options::{InsertionOrder, TriangulationOptions};

pub use inputs::*;
pub use outputs::*;

pub use num_traits::real::Real;

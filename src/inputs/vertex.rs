use num_traits::{ToPrimitive, real::Real};

use crate::{errors::TriangulationError, point::Point};

/// A two-dimensional input point.
///
/// The coordinate type must implement [num_traits::real::Real], reexported as [crate::Real]. Coordinates are
/// converted to `f64` before any geometry happens.
pub trait Vertex {
    type Coordinate: Real;

    fn x(&self) -> Self::Coordinate;
    fn y(&self) -> Self::Coordinate;
}

/// Convert any [Vertex] to a finite [Point]
pub(crate) fn to_point<V: Vertex>(v: &V) -> Result<Point, TriangulationError> {
    let coordinate = |c: V::Coordinate| c.to_f64().filter(|c| c.is_finite()).ok_or(TriangulationError::InvalidCoordinate);
    Ok(Point::new(coordinate(v.x())?, coordinate(v.y())?))
}

impl<C: Real> Vertex for [C; 2] {
    type Coordinate = C;

    #[inline]
    fn x(&self) -> C { self[0] }
    #[inline]
    fn y(&self) -> C { self[1] }
}

impl<C: Real> Vertex for (C, C) {
    type Coordinate = C;

    #[inline]
    fn x(&self) -> C { self.0 }
    #[inline]
    fn y(&self) -> C { self.1 }
}

impl Vertex for Point {
    type Coordinate = f64;

    #[inline]
    fn x(&self) -> f64 { self.x }
    #[inline]
    fn y(&self) -> f64 { self.y }
}

impl<V: Vertex + ?Sized> Vertex for &V {
    type Coordinate = V::Coordinate;

    #[inline]
    fn x(&self) -> V::Coordinate { (**self).x() }
    #[inline]
    fn y(&self) -> V::Coordinate { (**self).y() }
}

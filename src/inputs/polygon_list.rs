use std::ops;

use crate::{ContourSet, List, Trapezoidation, Triangulation, TriangulationOptions, Vertex, errors::TriangulationError};

/// A single contour: a closed sequence of [Vertex] values
pub trait Polygon {
    type Vertex: Vertex;

    fn vertices(&self) -> &[Self::Vertex];

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// View this polygon as a [PolygonList] with one contour
    fn as_polygon_list(&self) -> SinglePolygon<'_, Self> {
        SinglePolygon(self)
    }

    fn contour_set(&self) -> Result<ContourSet, TriangulationError> {
        self.as_polygon_list().contour_set()
    }

    fn trapezoidize(&self, options: &TriangulationOptions) -> Result<Trapezoidation, TriangulationError> {
        self.as_polygon_list().trapezoidize(options)
    }

    fn triangulate(&self) -> Result<Triangulation, TriangulationError> {
        self.as_polygon_list().triangulate()
    }

    fn triangulate_with(&self, options: &TriangulationOptions) -> Result<Triangulation, TriangulationError> {
        self.as_polygon_list().triangulate_with(options)
    }

    fn triangulate_into<L: List<usize>>(&self, options: &TriangulationOptions, output: &mut L) -> Result<ContourSet, TriangulationError> {
        self.as_polygon_list().triangulate_into(options, output)
    }
}

/// A set of contours, e.g. an outer boundary and its holes
pub trait PolygonList {
    type Vertex: Vertex;

    fn contour_count(&self) -> usize;

    fn contour(&self, index: usize) -> &[Self::Vertex];

    fn vertex_count(&self) -> usize {
        (0..self.contour_count()).map(|i| self.contour(i).len()).sum()
    }

    /// Deduplicate, orient and index the contours
    fn contour_set(&self) -> Result<ContourSet, TriangulationError> {
        ContourSet::new((0..self.contour_count()).map(|i| self.contour(i)))
    }

    fn trapezoidize(&self, options: &TriangulationOptions) -> Result<Trapezoidation, TriangulationError> {
        Trapezoidation::build(self.contour_set()?, options)
    }

    fn triangulate(&self) -> Result<Triangulation, TriangulationError> {
        self.triangulate_with(&TriangulationOptions::default())
    }

    fn triangulate_with(&self, options: &TriangulationOptions) -> Result<Triangulation, TriangulationError> {
        self.trapezoidize(options)?.triangulate(options)
    }

    /// Triangulate into any [List] of vertex indices, returning the [ContourSet] the indices refer to
    fn triangulate_into<L: List<usize>>(&self, options: &TriangulationOptions, output: &mut L) -> Result<ContourSet, TriangulationError> {
        let trapezoidation = self.trapezoidize(options)?;
        trapezoidation.triangulate_into(options, output)?;
        Ok(trapezoidation.into_contours())
    }
}

/// A [Polygon] seen as a [PolygonList] of one contour
pub struct SinglePolygon<'p, P: ?Sized>(&'p P);

impl<'p, P: Polygon + ?Sized> PolygonList for SinglePolygon<'p, P> {
    type Vertex = P::Vertex;

    fn contour_count(&self) -> usize {
        1
    }

    fn contour(&self, _index: usize) -> &[Self::Vertex] {
        self.0.vertices()
    }
}

impl<V: Vertex, T: ops::Deref<Target = [V]>> Polygon for T {
    type Vertex = V;

    fn vertices(&self) -> &[Self::Vertex] {
        self
    }
}

// Vec<Vec<_>>, &[Vec<_>] and the like reach this through auto-deref
impl<P: Polygon> PolygonList for [P] {
    type Vertex = P::Vertex;

    fn contour_count(&self) -> usize {
        self.len()
    }

    fn contour(&self, index: usize) -> &[Self::Vertex] {
        self[index].vertices()
    }
}

use log::debug;

use crate::{ContourSet, Diagonal, List, Trapezoidation, TriangleWinding, TriangulationOptions, errors::TriangulationError, point::Point};

/// The triangles covering a polygon, as indices into [Triangulation::points]
#[derive(Debug, Clone)]
pub struct Triangulation {
    contours: ContourSet,
    diagonals: Vec<Diagonal>,
    triangles: Vec<[usize; 3]>,
}

impl Triangulation {
    /// The deduplicated vertices the triangle indices refer to
    pub fn points(&self) -> &[Point] {
        self.contours.points()
    }

    pub fn contours(&self) -> &ContourSet {
        &self.contours
    }

    /// The diagonals the polygon was split along
    pub fn diagonals(&self) -> &[Diagonal] {
        &self.diagonals
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    pub fn into_triangles(self) -> Vec<[usize; 3]> {
        self.triangles
    }

    /// Each triangle as a triple of points
    pub fn triangle_points(&self) -> impl Iterator<Item = [Point; 3]> + '_ {
        let points = self.points();
        self.triangles.iter().map(move |&[a, b, c]| [points[a], points[b], points[c]])
    }

    /// The total unsigned area covered by the triangles
    pub fn area(&self) -> f64 {
        self.triangle_points()
            .map(|[a, b, c]| ((b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)).abs() / 2.0)
            .sum()
    }
}

impl Trapezoidation {
    fn winding(&self, options: &TriangulationOptions) -> TriangleWinding {
        options.winding.unwrap_or(if self.contours().is_clockwise() {
            TriangleWinding::Clockwise
        } else {
            TriangleWinding::Counterclockwise
        })
    }

    /// Extract the diagonals and triangulate the resulting monotone pieces into `output`
    pub fn triangulate_into<L: List<usize>>(&self, options: &TriangulationOptions, output: &mut L) -> Result<Vec<Diagonal>, TriangulationError> {
        if !self.is_complete() {
            return Err(TriangulationError::internal(format!("Only {} of {} segments are trapezoidized", self.inserted_count(), self.contours().segments().len())));
        }
        let diagonals = self.diagonals()?;
        self.contours().triangulate_into(&diagonals, self.winding(options), output)?;
        Ok(diagonals)
    }

    /// Extract the diagonals and triangulate the resulting monotone pieces
    pub fn triangulate(self, options: &TriangulationOptions) -> Result<Triangulation, TriangulationError> {
        let mut triangles: Vec<[usize; 3]> = Vec::with_capacity(self.contours().points().len() * 2);
        let diagonals = self.triangulate_into(options, &mut triangles)?;
        debug!("Triangulated {} vertices into {} triangles", self.contours().points().len(), triangles.len());
        Ok(Triangulation {
            contours: self.into_contours(),
            diagonals,
            triangles,
        })
    }
}

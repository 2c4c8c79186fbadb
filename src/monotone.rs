use log::trace;
use smallvec::{SmallVec, smallvec};

use crate::{ContourSet, Diagonal, List, TriangleWinding, errors::TriangulationError, math, point::Point};

/// A monotone mountain: a polygon which, between its highest and lowest vertices, has a single edge on one
/// side and a chain monotone in the sweep direction on the other
pub(crate) struct Monotone<'a> {
    points: &'a [Point],
    /// Vertex indices in counterclockwise order
    ring: &'a [usize],
}

impl<'a> Monotone<'a> {
    pub fn new(points: &'a [Point], ring: &'a [usize]) -> Self {
        Self {
            points,
            ring,
        }
    }

    fn point(&self, i: usize) -> &Point {
        &self.points[self.ring[i]]
    }

    fn next(&self, i: usize) -> usize {
        (i + 1) % self.ring.len()
    }

    fn prev(&self, i: usize) -> usize {
        (i + self.ring.len() - 1) % self.ring.len()
    }

    fn push<L: List<usize>>(&self, output: &mut L, winding: TriangleWinding, a: usize, b: usize, c: usize) {
        output.push_triangle(winding.orient([self.ring[a], self.ring[b], self.ring[c]]));
    }

    /// Greedily cut convex corners off the chain, appending `n - 2` triangles to `output`
    pub fn triangulate<L: List<usize>>(&self, winding: TriangleWinding, output: &mut L) -> Result<(), TriangulationError> {
        let n = self.ring.len();
        if n < 3 {
            return Err(TriangulationError::internal(format!("Monotone polygon needs at least 3 vertices, has {}", n)));
        }
        if n == 3 {
            self.push(output, winding, 0, 1, 2);
            return Ok(());
        }

        let not_monotone = || TriangulationError::NotMonotone { vertices: n };
        let top = (0..n).max_by(|&a, &b| self.point(a).compare(self.point(b))).ok_or_else(not_monotone)?;
        let bottom = (0..n).min_by(|&a, &b| self.point(a).compare(self.point(b))).ok_or_else(not_monotone)?;

        // Walk the chain from one end of the single edge to the other
        let (mut stack, mut v, end): (SmallVec<[usize; 16]>, usize, usize) = if self.next(top) == bottom {
            let first = self.next(top);
            (smallvec![first, self.next(first)], self.next(self.next(first)), top)
        } else if self.prev(top) == bottom {
            (smallvec![top, self.next(top)], self.next(self.next(top)), bottom)
        } else {
            return Err(not_monotone());
        };
        trace!("Monotone polygon of {} vertices, chain ends at v{}", n, self.ring[end]);

        let start_len = output.len();
        // Every step either emits a triangle or advances along the chain
        for _ in 0..2 * n {
            let len = stack.len();
            if v == end && len <= 2 {
                break;
            }
            if len >= 2 && math::cross(self.point(v), self.point(stack[len - 2]), self.point(stack[len - 1])) > 0.0 {
                self.push(output, winding, stack[len - 2], stack[len - 1], v);
                stack.pop();
            } else if v == end {
                return Err(not_monotone());
            } else {
                stack.push(v);
                v = self.next(v);
            }
        }

        if v != end || stack.len() != 2 {
            return Err(not_monotone());
        }
        self.push(output, winding, stack[0], stack[1], v);

        let emitted = output.len() - start_len;
        if emitted != n - 2 {
            return Err(TriangulationError::internal(format!("Monotone polygon of {} vertices produced {} triangles", n, emitted)));
        }
        Ok(())
    }
}

impl ContourSet {
    /// Split along `diagonals` and triangulate every resulting piece, appending triangles of vertex indices
    /// to `output`.
    ///
    /// Each piece must be a monotone mountain, which is the case for the diagonals produced by
    /// [Trapezoidation::diagonals](crate::Trapezoidation::diagonals). On failure, `output` is truncated back
    /// to its original length.
    pub fn triangulate_into<L: List<usize>>(&self, diagonals: &[Diagonal], winding: TriangleWinding, output: &mut L) -> Result<(), TriangulationError> {
        let start_len = output.len();
        let result = self.split(diagonals).and_then(|rings| {
            rings.iter().try_for_each(|ring| Monotone::new(self.points(), ring).triangulate(winding, output))
        });
        if result.is_err() {
            output.truncate(start_len);
        }
        result
    }

    /// Split along `diagonals` and triangulate every resulting piece into counterclockwise triangles
    pub fn triangulate(&self, diagonals: &[Diagonal]) -> Result<Vec<[usize; 3]>, TriangulationError> {
        let mut triangles: Vec<[usize; 3]> = Vec::with_capacity(self.points().len() * 2);
        self.triangulate_into(diagonals, TriangleWinding::Counterclockwise, &mut triangles)?;
        Ok(triangles)
    }
}

pub mod polygon;
mod vtest;

pub use vtest::VTest;

use crate::{EPSILON, Point, TriangleWinding, Triangulation};

/// Twice the signed area of a triangle; positive if counterclockwise
pub fn doubled_area(t: [Point; 3]) -> f64 {
    let [a, b, c] = t;
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// The enclosed area of a polygon list, with every contour after the first treated as a hole
pub fn polygon_area(contours: &[Vec<[f64; 2]>]) -> f64 {
    let ring_area = |ring: &[[f64; 2]]| -> f64 {
        let n = ring.len();
        (0..n).map(|i| {
            let (a, b) = (ring[i], ring[(i + 1) % n]);
            a[0] * b[1] - b[0] * a[1]
        }).sum::<f64>().abs() / 2.0
    };
    let mut contours = contours.iter();
    let outer = contours.next().map_or(0.0, |c| ring_area(c));
    outer - contours.map(|c| ring_area(c)).sum::<f64>()
}

/// Check the triangle count, that every triangle is wound as expected, and that the triangles cover `area`
pub fn check_triangulation(triangulation: &Triangulation, triangles: usize, area: f64, winding: TriangleWinding) {
    assert_eq!(triangulation.triangles().len(), triangles, "Unexpected triangle count");
    for t in triangulation.triangle_points() {
        let doubled = doubled_area(t);
        assert!(doubled.abs() >= 2. * EPSILON, "Triangle {:?} is degenerate", t);
        match winding {
            TriangleWinding::Counterclockwise => assert!(doubled > 0.0, "Triangle {:?} is not counterclockwise", t),
            TriangleWinding::Clockwise => assert!(doubled < 0.0, "Triangle {:?} is not clockwise", t),
        }
    }
    let covered = triangulation.area();
    assert!((covered - area).abs() < 1e-6 * area.max(1.0), "Triangles cover {} instead of {}", covered, area);
}

/// Triangles with each rotated to start at its smallest index, then sorted, for comparing as multisets
pub fn normalized_triangles(triangles: &[[usize; 3]]) -> Vec<[usize; 3]> {
    let mut triangles: Vec<[usize; 3]> = triangles.iter()
        .map(|&[a, b, c]| {
            if a <= b && a <= c {
                [a, b, c]
            } else if b <= c {
                [b, c, a]
            } else {
                [c, a, b]
            }
        })
        .collect();
    triangles.sort_unstable();
    triangles
}

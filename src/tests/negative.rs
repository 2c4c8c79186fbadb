use crate::{ContourSet, Point, Polygon, PolygonList, TriangulationError};

use super::util::VTest;

#[test]
fn incomplete_polygon() {
    let polygon: Vec<VTest> = vec![(0., 0.).into(), (1., 1.).into()];
    match polygon.triangulate() {
        Err(TriangulationError::NotEnoughVertices(2)) => { },
        other => panic!("Unexpected result {:?}", other.map(|t| t.triangles().len())),
    }
}

#[test]
fn collapses_to_two_vertices() {
    let polygon = vec![[0., 0.], [1., 1.], [1., 1.], [0., 0.]];
    assert!(matches!(polygon.contour_set(), Err(TriangulationError::NotEnoughVertices(2))));
}

#[test]
fn no_vertices() {
    let polygon: Vec<[f64; 2]> = Vec::new();
    assert!(matches!(polygon.triangulate(), Err(TriangulationError::NoVertices)));

    let polygons: Vec<Vec<[f64; 2]>> = vec![Vec::new(), Vec::new()];
    assert!(matches!(polygons.triangulate(), Err(TriangulationError::NoVertices)));
}

#[test]
fn invalid_coordinate() {
    let polygon = vec![[0., 0.], [1., f64::NAN], [0., 1.]];
    assert!(matches!(polygon.triangulate(), Err(TriangulationError::InvalidCoordinate)));

    let polygon = vec![[0., 0.], [f32::INFINITY, 0.], [0., 1.]];
    assert!(matches!(polygon.triangulate(), Err(TriangulationError::InvalidCoordinate)));
}

#[test]
fn collinear() {
    let polygon = vec![[0., 0.], [1., 1.], [2., 2.]];
    assert!(matches!(polygon.triangulate(), Err(TriangulationError::DegenerateContour(0))));
}

#[test]
fn degenerate_hole() {
    let contours = vec![
        vec![Point::new(0., 0.), Point::new(4., 0.), Point::new(4., 4.), Point::new(0., 4.)],
        vec![Point::new(1., 1.), Point::new(2., 2.), Point::new(3., 3.)],
    ];
    assert!(matches!(ContourSet::from_points(contours), Err(TriangulationError::DegenerateContour(1))));
}

#[test]
fn error_display() {
    let error = TriangulationError::NotEnoughVertices(2);
    assert_eq!(error.to_string(), "Polygon only contains 2 vertices");
    let error = TriangulationError::NotMonotone { vertices: 7 };
    assert!(error.to_string().contains('7'));
}

use crate::{Polygon, TriangleWinding, TriangulationError};

use super::util;

#[test]
fn mountain_without_diagonals() {
    // Every vertex between the top and the bottom lies on the right-hand chain
    let mountain = vec![[0., 0.], [2., 1.], [1., 2.], [3., 3.], [0., 4.]];
    let cs = mountain.contour_set().expect("Contour set failed");
    let triangles = cs.triangulate(&[]).expect("Triangulation failed");
    assert_eq!(triangles.len(), 3);
    for &[a, b, c] in &triangles {
        let p = cs.points();
        assert!(util::doubled_area([p[a], p[b], p[c]]) > 0.0);
    }
}

#[test]
fn not_a_mountain() {
    let cs = util::polygon::notched().contour_set().expect("Contour set failed");
    match cs.triangulate(&[]) {
        Err(TriangulationError::NotMonotone { vertices }) => assert_eq!(vertices, 5),
        other => panic!("Unexpected result {:?}", other),
    }
}

#[test]
fn split_then_triangulate() {
    let polygon = util::polygon::notched();
    let traps = polygon.trapezoidize(&Default::default()).expect("Trapezoidation failed");
    let diagonals = traps.diagonals().expect("Diagonal extraction failed");
    let cs = traps.contours();

    let pieces = cs.split(&diagonals).expect("Split failed");
    assert_eq!(pieces.len(), diagonals.len() + 1);
    assert_eq!(pieces.iter().map(Vec::len).sum::<usize>(), cs.points().len() + 2 * diagonals.len());

    let mut clockwise = Vec::<usize>::new();
    cs.triangulate_into(&diagonals, TriangleWinding::Clockwise, &mut clockwise).expect("Triangulation failed");
    assert_eq!(clockwise.len(), 3 * 3);
    for t in clockwise.chunks(3) {
        let p = cs.points();
        assert!(util::doubled_area([p[t[0]], p[t[1]], p[t[2]]]) < 0.0);
    }
}

#[test]
fn failure_rolls_back_output() {
    use crate::PolygonList;

    // The triangle is a valid piece, the notched square is not without its diagonal
    let contours = vec![vec![[10., 0.], [12., 0.], [11., 1.]], util::polygon::notched()];
    let cs = contours.contour_set().expect("Contour set failed");
    let mut output = vec![[7usize, 8, 9]];
    assert!(cs.triangulate_into(&[], TriangleWinding::Counterclockwise, &mut output).is_err());
    assert_eq!(output, vec![[7, 8, 9]]);
}

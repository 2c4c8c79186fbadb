use crate::{Polygon, PolygonList, TriangleWinding, TriangulationOptions};

use super::util;

#[test]
fn triangulate() {
    for polygon in util::polygon::all() {
        let triangulation = polygon.triangulate().expect("Triangulation failed");
        assert_eq!(triangulation.triangles().len(), polygon.len() - 2);
    }
}

#[test]
fn star() {
    let triangulation = util::polygon::star().triangulate().expect("Triangulation failed");
    util::check_triangulation(&triangulation, 6, 8., TriangleWinding::Counterclockwise);
}

#[test]
fn clockwise_input() {
    // Given clockwise, so the triangles follow suit
    let polygon = util::polygon::half_frame();
    let triangulation = polygon.triangulate().expect("Triangulation failed");
    assert!(triangulation.contours().is_clockwise());
    assert!(triangulation.contours().contours()[0].was_reversed());
    util::check_triangulation(&triangulation, 4, 0.095, TriangleWinding::Clockwise);

    let options = TriangulationOptions::new().with_winding(TriangleWinding::Clockwise.reversed());
    let triangulation = polygon.triangulate_with(&options).expect("Triangulation failed");
    util::check_triangulation(&triangulation, 4, 0.095, TriangleWinding::Counterclockwise);
}

#[test]
fn winding_option() {
    let polygon = util::polygon::comb(3);
    let area = util::polygon_area(&[polygon.clone()]);
    for winding in [TriangleWinding::Counterclockwise, TriangleWinding::Clockwise] {
        let triangulation = polygon.triangulate_with(&TriangulationOptions::new().with_winding(winding)).expect("Triangulation failed");
        util::check_triangulation(&triangulation, polygon.len() - 2, area, winding);
    }
}

#[test]
fn triangulate_hollow() {
    let polygon = util::polygon::hollow_square();
    let triangulation = polygon.triangulate().expect("Triangulation failed");
    // Eight vertices and one hole
    util::check_triangulation(&triangulation, 8, util::polygon_area(&polygon), TriangleWinding::Clockwise);
    assert_eq!(triangulation.contours().contours().len(), 2);
}

#[test]
fn touching_contours() {
    let triangulation = util::polygon::touching().triangulate().expect("Triangulation failed");
    assert_eq!(triangulation.points().len(), 5);
    assert_eq!(triangulation.contours().contours().len(), 2);
    util::check_triangulation(&triangulation, 2, 2., TriangleWinding::Counterclockwise);
}

#[test]
fn duplicate_vertices() {
    let polygon = vec![[0., 0.], [1., 0.], [1., 0.], [1., 1.], [0., 1.], [0., 0.]];
    let triangulation = polygon.triangulate().expect("Triangulation failed");
    assert_eq!(triangulation.points().len(), 4);
    util::check_triangulation(&triangulation, 2, 1., TriangleWinding::Counterclockwise);
}

#[test]
fn separate_trapezoidation() {
    let polygon = util::polygon::star();
    let traps = polygon.trapezoidize(&TriangulationOptions::new()).expect("Trapezoidation failed");
    let diagonals = traps.diagonals().expect("Diagonal extraction failed");
    let pieces = traps.contours().triangulate(&diagonals).expect("Monotone triangulation failed");
    let triangulation = traps.triangulate(&TriangulationOptions::new()).expect("Triangulation failed");
    assert_eq!(triangulation.diagonals(), &diagonals[..]);
    assert_eq!(triangulation.triangles().len(), 6);
    assert_eq!(util::normalized_triangles(triangulation.triangles()), util::normalized_triangles(&pieces));
}

#[test]
fn two_by_two_square() {
    let polygon = vec![[0., 0.], [2., 0.], [2., 2.], [0., 2.]];
    let triangulation = polygon.triangulate().expect("Triangulation failed");
    util::check_triangulation(&triangulation, 2, 4., TriangleWinding::Counterclockwise);
    assert_eq!(triangulation.area(), 4.);
}

#[test]
fn collinear_edge_vertices() {
    let polygon = vec![[0., 0.], [1., 0.], [2., 0.], [2., 1.], [0., 1.]];
    for options in [TriangulationOptions::new(), TriangulationOptions::new().shuffled(1), TriangulationOptions::new().shuffled(2)] {
        let triangulation = polygon.triangulate_with(&options).expect("Triangulation failed");
        util::check_triangulation(&triangulation, 3, 2., TriangleWinding::Counterclockwise);
    }
}

fn insertion_orders() -> impl Iterator<Item = TriangulationOptions> {
    std::iter::once(TriangulationOptions::new()).chain((0..8).map(|seed| TriangulationOptions::new().shuffled(seed)))
}

#[test]
fn hole_touching_corner() {
    for corner in 0..4 {
        let polygon = util::polygon::square_with_touching_hole(corner);
        for options in insertion_orders() {
            let triangulation = polygon.triangulate_with(&options)
                .unwrap_or_else(|e| panic!("Corner {} with {:?} failed: {}", corner, options.insertion_order, e));
            assert_eq!(triangulation.points().len(), 6);
            util::check_triangulation(&triangulation, 5, 14.5, TriangleWinding::Counterclockwise);
        }
    }
}

#[test]
fn hole_touching_edge_vertex() {
    let polygon = util::polygon::square_with_hole_at_edge();
    for options in insertion_orders() {
        let triangulation = polygon.triangulate_with(&options)
            .unwrap_or_else(|e| panic!("{:?} failed: {}", options.insertion_order, e));
        util::check_triangulation(&triangulation, 6, 15., TriangleWinding::Counterclockwise);
    }
}

#[test]
fn shared_lowest_vertex() {
    let polygon = util::polygon::shared_lowest_vertex();
    for options in insertion_orders() {
        let triangulation = polygon.triangulate_with(&options)
            .unwrap_or_else(|e| panic!("{:?} failed: {}", options.insertion_order, e));
        assert_eq!(triangulation.points().len(), 5);
        util::check_triangulation(&triangulation, 2, 3., TriangleWinding::Counterclockwise);
    }
}

#[test]
fn list_outputs() {
    let polygon = util::polygon::star();
    let options = TriangulationOptions::new();

    let mut flat = Vec::<usize>::new();
    let cs = polygon.triangulate_into(&options, &mut flat).expect("Triangulation failed");
    assert_eq!(flat.len(), 6 * 3);
    assert!(flat.iter().all(|&vi| vi < cs.points().len()));

    let mut tuples = Vec::<(usize, usize, usize)>::new();
    polygon.triangulate_into(&options, &mut tuples).expect("Triangulation failed");
    assert_eq!(tuples.len(), 6);
    assert_eq!(tuples.iter().map(|&(a, b, c)| [a, b, c]).flatten().collect::<Vec<_>>(), flat);
}

#[test]
fn shuffled() {
    let polygon = util::polygon::comb(6);
    let area = util::polygon_area(&[polygon.clone()]);
    for seed in 0..10 {
        let triangulation = polygon.triangulate_with(&TriangulationOptions::new().shuffled(seed)).expect("Triangulation failed");
        util::check_triangulation(&triangulation, polygon.len() - 2, area, TriangleWinding::Counterclockwise);
    }
}

#[test]
fn regular_polygons() {
    for n in 3..=300 {
        let polygon = util::polygon::regular(n);
        let triangulation = polygon.triangulate().expect("Triangulation failed");
        let area = util::polygon_area(&[polygon]);
        util::check_triangulation(&triangulation, n - 2, area, TriangleWinding::Counterclockwise);
    }
}

#[test]
fn f32_coordinates() {
    let polygon: Vec<[f32; 2]> = vec![[0., 0.], [2., 0.], [2., 2.], [1., 1.], [0., 2.]];
    let triangulation = polygon.triangulate().expect("Triangulation failed");
    util::check_triangulation(&triangulation, 3, 3., TriangleWinding::Counterclockwise);
}

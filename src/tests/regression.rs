use crate::{Polygon, TriangleWinding};

use super::util;

#[test]
fn france_nearly_horizontal() {
    // Long, nearly horizontal edges with vertices close together in y
    let polygon = vec![
        [-1.189062499999949, 45.16147460937498],
        [-0.691113281249926, 45.09345703124998],
        [6.724707031250006, 44.97299804687506],
        [6.992675781250057, 44.82729492187502],
        [-1.15288085937496, 44.764013671875006],
        [-1.24521484374992, 44.66669921875001],
    ];
    let triangulation = polygon.triangulate().expect("Triangulation failed");
    let area = util::polygon_area(&[polygon.clone()]);
    let winding = if triangulation.contours().is_clockwise() {
        TriangleWinding::Clockwise
    } else {
        TriangleWinding::Counterclockwise
    };
    util::check_triangulation(&triangulation, 4, area, winding);
}

#[test]
fn shared_y_coordinates() {
    // Every vertex shares its y coordinate with another
    let polygon = vec![[0., 0.], [3., 0.], [3., 1.], [2., 1.], [2., 2.], [1., 2.], [1., 1.], [0., 1.]];
    let triangulation = polygon.triangulate().expect("Triangulation failed");
    util::check_triangulation(&triangulation, 6, 4., TriangleWinding::Counterclockwise);
}

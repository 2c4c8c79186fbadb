use std::cmp::Ordering;

use crate::{Point, EPSILON};

#[test]
fn y_before_x() {
    let low_right = Point::new(10., 0.);
    let high_left = Point::new(-10., 1.);
    assert!(high_left.greater_than(&low_right));
    assert!(low_right.less_than(&high_left));
    assert_eq!(low_right.compare(&high_left), Ordering::Less);
}

#[test]
fn equal_y_breaks_ties_by_x() {
    let left = Point::new(0., 5.);
    let right = Point::new(1., 5.);
    assert!(right.greater_than(&left));
    assert!(left.equal_y(&right));
    assert!(!left.equal(&right));
}

#[test]
fn within_tolerance() {
    let p = Point::new(1., 1.);
    let q = Point::new(1. + EPSILON / 2., 1. - EPSILON / 2.);
    assert!(p.equal(&q));
    assert_eq!(p, q);
    assert!(p.greater_equal(&q));
    assert!(q.greater_equal(&p));
    assert!(!p.greater_than(&q));
    assert!(!p.less_than(&q));

    let r = Point::new(1., 1. + EPSILON * 2.);
    assert!(r.greater_than(&p));
    assert!(!r.equal_y(&p));
}

#[test]
fn vertices_indexed_in_sweep_order() {
    use crate::Polygon;

    let contours = crate::tests::util::polygon::star().contour_set().expect("Contour set failed");
    let points = contours.points();
    assert_eq!(points.len(), 8);
    for pair in points.windows(2) {
        assert!(pair[0].less_than(&pair[1]), "{} should sort before {}", pair[0], pair[1]);
    }
    assert_eq!(points[0], Point::new(-2., -2.));
    assert_eq!(points[7], Point::new(2., 2.));
}

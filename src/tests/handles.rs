use crate::{idx::{Idx, SliceExt, VecExt}, Point};

#[test]
fn round_trip() {
    for i in [0, 1, 7, 1 << 40] {
        assert_eq!(Idx::<Point>::new(i).usize(), i);
    }
    assert_eq!(std::mem::size_of::<Option<Idx<Point>>>(), std::mem::size_of::<usize>());
}

#[test]
fn largest_index_is_out_of_bounds() {
    let idx = Idx::<Point>::new(usize::MAX);
    assert!(idx.usize() >= usize::MAX - 1);
    let points = vec![Point::new(0., 0.)];
    assert!(points.get(idx.usize()).is_none());
}

#[test]
fn arena_handles() {
    let mut points: Vec<Point> = Vec::new();
    assert_eq!(points.next_index(), Idx::new(0));
    let a = points.push_get_index(Point::new(1., 2.));
    let b = points.push_get_index(Point::new(3., 4.));
    assert_eq!(points[b], Point::new(3., 4.));
    points[a].x = 5.;
    assert_eq!(points.iter_index().collect::<Vec<_>>(), vec![a, b]);
    assert_eq!(points[a].x, 5.);
}

use std::{cmp, fmt};

/// Tolerance used by every point comparison
pub const EPSILON: f64 = 1e-6;

/// A two-dimensional point in `f64` coordinates.
///
/// Points are compared with a fixed tolerance of [EPSILON]: equality requires both coordinates to be within
/// tolerance, and ordering is by `y`, then by `x`. This is the "tilted" sweep order used throughout the crate,
/// so no two distinct points ever share the same position in it, even if they share a `y` coordinate.
#[derive(Clone, Copy, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Compare by `y`, then by `x`, treating differences below [EPSILON] as ties
    pub fn compare(&self, other: &Self) -> cmp::Ordering {
        match compare_coordinate(self.y, other.y) {
            cmp::Ordering::Equal => compare_coordinate(self.x, other.x),
            ord => ord,
        }
    }

    /// Both coordinates lie within [EPSILON] of each other
    pub fn equal(&self, other: &Self) -> bool {
        self.compare(other) == cmp::Ordering::Equal
    }

    /// The points lie on the same horizontal line, within [EPSILON]
    pub fn equal_y(&self, other: &Self) -> bool {
        compare_coordinate(self.y, other.y) == cmp::Ordering::Equal
    }

    pub fn greater_than(&self, other: &Self) -> bool {
        self.compare(other) == cmp::Ordering::Greater
    }

    pub fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == cmp::Ordering::Less
    }

    pub fn greater_equal(&self, other: &Self) -> bool {
        self.compare(other) != cmp::Ordering::Less
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

fn compare_coordinate(a: f64, b: f64) -> cmp::Ordering {
    if a > b + EPSILON {
        cmp::Ordering::Greater
    } else if a < b - EPSILON {
        cmp::Ordering::Less
    } else {
        cmp::Ordering::Equal
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.compare(other))
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from(v: [f64; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

impl From<(f64, f64)> for Point {
    fn from(v: (f64, f64)) -> Self {
        Self::new(v.0, v.1)
    }
}

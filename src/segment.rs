use std::fmt;

use crate::idx::{Idx, IdxDisplay};

/// A directed polygon edge between two vertices of a [ContourSet](crate::ContourSet).
///
/// Segments of one contour form a circular list through [Segment::prev] and [Segment::next]. The interior of
/// the polygon always lies to the left of `start -> end`.
#[derive(Debug, Clone)]
pub struct Segment {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) prev: Idx<Segment>,
    pub(crate) next: Idx<Segment>,
    pub(crate) contour: usize,
}

impl IdxDisplay for Segment {
    fn fmt(f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result {
        write!(f, "s{}", idx)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{} -> v{}", self.start, self.end)
    }
}

impl Segment {
    /// Index of the vertex this segment leaves from
    pub fn start(&self) -> usize { self.start }
    /// Index of the vertex this segment arrives at
    pub fn end(&self) -> usize { self.end }
    /// Id of the previous segment in the same contour
    pub fn prev(&self) -> usize { self.prev.usize() }
    /// Id of the next segment in the same contour
    pub fn next(&self) -> usize { self.next.usize() }
    /// Index of the contour this segment belongs to
    pub fn contour(&self) -> usize { self.contour }
}

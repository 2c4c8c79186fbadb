use crate::TriangleWinding;

/// The order segments are threaded into the trapezoidation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertionOrder {
    /// Segment id order, which is the order the contours were supplied in
    #[default]
    Sequential,
    /// A pseudo-random permutation which is reproducible for a given seed
    Shuffled {
        seed: u64,
    },
}

/// Settings for building a [Trapezoidation](crate::Trapezoidation) and triangulating it
#[derive(Debug, Clone, Default)]
pub struct TriangulationOptions {
    pub insertion_order: InsertionOrder,
    /// Stop after inserting this many segments. The partial trapezoidation can still be inspected,
    /// but it does not describe the whole polygon.
    pub segment_limit: Option<usize>,
    /// The winding of the produced triangles. By default, the winding of the first outer contour as supplied.
    pub winding: Option<TriangleWinding>,
}

impl TriangulationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_insertion_order(mut self, insertion_order: InsertionOrder) -> Self {
        self.insertion_order = insertion_order;
        self
    }

    pub fn shuffled(self, seed: u64) -> Self {
        self.with_insertion_order(InsertionOrder::Shuffled { seed })
    }

    pub fn with_segment_limit(mut self, segment_limit: usize) -> Self {
        self.segment_limit = Some(segment_limit);
        self
    }

    pub fn with_winding(mut self, winding: TriangleWinding) -> Self {
        self.winding = Some(winding);
        self
    }
}

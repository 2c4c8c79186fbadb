use std::{collections::BTreeSet, fmt};

use log::debug;

use crate::{Trapezoidation, errors::{InternalError, TriangulationError}, idx::{Idx, SliceExt}, segment::Segment, trapezoid::Trapezoid, trapezoidation::TrapezoidationStructure};

/// A split between the start vertices of two segments.
///
/// The pair is unordered; it is stored with the smaller segment id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Diagonal(usize, usize);

impl Diagonal {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    /// The two segment ids, smaller first
    pub fn segments(&self) -> (usize, usize) {
        (self.0, self.1)
    }

    fn between(a: Idx<Segment>, b: Idx<Segment>) -> Self {
        Self::new(a.usize(), b.usize())
    }
}

impl fmt::Display for Diagonal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{} - s{}", self.0, self.1)
    }
}

impl Trapezoidation {
    /// The diagonals splitting the polygon into monotone mountains, in sorted order
    pub fn diagonals(&self) -> Result<Vec<Diagonal>, TriangulationError> {
        let mut visited = vec![false; self.ts().len()];
        let mut diagonals = BTreeSet::new();
        for ti in self.ts().iter_index() {
            if !visited[ti.usize()] && self.is_inside(ti) {
                self.collect_diagonals(ti, &mut visited, &mut diagonals)?;
            }
        }
        debug!("Extracted {} diagonals", diagonals.len());
        Ok(diagonals.into_iter().collect())
    }

    /// The diagonals of the connected interior region containing the trapezoid `start`
    pub fn diagonals_from(&self, start: usize) -> Result<Vec<Diagonal>, TriangulationError> {
        if start >= self.ts().len() {
            return Err(TriangulationError::internal(format!("No trapezoid t{}", start)));
        }
        let mut visited = vec![false; self.ts().len()];
        let mut diagonals = BTreeSet::new();
        self.collect_diagonals(Idx::new(start), &mut visited, &mut diagonals)?;
        Ok(diagonals.into_iter().collect())
    }

    /// Whether the trapezoid lies inside the polygon: bounded on both sides, with the interior to the
    /// left of the upward-running right segment
    pub(crate) fn is_inside(&self, ti: Idx<Trapezoid>) -> bool {
        let t = &self.ts()[ti];
        t.is_live() && t.left.is_some() && t.right.map_or(false, |sr| self.cs().is_upward(sr))
    }

    fn collect_diagonals(&self, start: Idx<Trapezoid>, visited: &mut [bool], diagonals: &mut BTreeSet<Diagonal>) -> Result<(), InternalError> {
        let mut stack = vec![start];
        while let Some(ti) = stack.pop() {
            if visited[ti.usize()] {
                continue;
            }
            visited[ti.usize()] = true;
            if !self.is_inside(ti) {
                continue;
            }

            if let Some(diagonal) = self.classify(ti)? {
                let (a, b) = diagonal.segments();
                // Segments which share a start vertex do not make a diagonal
                if self.cs().ss()[a].start() != self.cs().ss()[b].start() {
                    diagonals.insert(diagonal);
                }
            }

            stack.extend(self.ts()[ti].neighbors().filter(|tn| !visited[tn.usize()]));
        }
        Ok(())
    }

    /// The diagonal, if any, contributed by one interior trapezoid, based on how many neighbours it has above
    /// and below
    fn classify(&self, ti: Idx<Trapezoid>) -> Result<Option<Diagonal>, InternalError> {
        let t = &self.ts()[ti];
        let missing = |what: &str| InternalError::new(format!("{} has no {}", ti, what));
        let (sl, sr) = match (t.left, t.right) {
            (Some(sl), Some(sr)) => (sl, sr),
            _ => return Err(missing("side segment")),
        };
        let (hi, lo) = match (t.hi, t.lo) {
            (Some(hi), Some(lo)) => (hi, lo),
            _ => return Err(missing("upper or lower bound")),
        };

        let ss = self.cs().ss();
        let up_right_of = |tu: Option<Idx<Trapezoid>>| tu.and_then(|tu| self.ts()[tu].right).ok_or_else(|| missing("bounded upper left neighbour"));
        let down_left_of = |td: Option<Idx<Trapezoid>>| td.and_then(|td| self.ts()[td].left).ok_or_else(|| missing("bounded lower right neighbour"));
        let (sl_lo, sl_hi) = self.segment_lo_hi_points(sl);
        let (sr_lo, _) = self.segment_lo_hi_points(sr);
        let sl_end = self.cs().point(ss[sl].end());
        let sr_end = self.cs().point(ss[sr].end());

        let diagonal = match (t.up_count(), t.down_count()) {
            (1, 0) | (0, 1) => None,
            (0, 2) => Some(Diagonal::between(down_left_of(t.down[1])?, sl)),
            (2, 0) => Some(Diagonal::between(sr, up_right_of(t.up[0])?)),
            (2, 2) => Some(Diagonal::between(down_left_of(t.down[1])?, up_right_of(t.up[0])?)),
            (2, 1) => {
                if lo.equal(&sl_lo) {
                    Some(Diagonal::between(up_right_of(t.up[0])?, ss[sl].next))
                } else {
                    Some(Diagonal::between(sr, up_right_of(t.up[0])?))
                }
            }
            (1, 2) => {
                if hi.equal(&sl_hi) {
                    Some(Diagonal::between(down_left_of(t.down[1])?, sl))
                } else {
                    Some(Diagonal::between(down_left_of(t.down[1])?, ss[sr].next))
                }
            }
            (1, 1) => {
                if hi.equal(&sl_hi) && lo.equal(&sr_lo) {
                    Some(Diagonal::between(sr, sl))
                } else if hi.equal(&sr_end) && lo.equal(&sl_end) {
                    Some(Diagonal::between(ss[sr].next, ss[sl].next))
                } else {
                    None
                }
            }
            (up, down) => return Err(InternalError::new(format!("{} has {} upper and {} lower neighbours", ti, up, down))),
        };
        Ok(diagonal)
    }
}

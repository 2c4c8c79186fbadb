use std::fmt;

use crate::{idx::{Idx, IdxDisplay}, point::Point, querynode::QueryNode, segment::Segment};

/// Which of its lower neighbour's two upper neighbours a crossed trapezoid was
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrapezoidState {
    Live,
    /// Absorbed into the trapezoid above it; kept only so existing handles stay valid
    Merged,
}

/// A region of the subdivision bounded above and below by horizontal lines through `hi` and `lo`,
/// and on the sides by `left` and `right`. Missing bounds extend to infinity.
#[derive(Debug, Clone)]
pub(crate) struct Trapezoid {
    pub hi: Option<Point>,
    pub lo: Option<Point>,
    pub left: Option<Idx<Segment>>,
    pub right: Option<Idx<Segment>>,
    /// Upper neighbours, left to right
    pub up: [Option<Idx<Trapezoid>>; 2],
    /// Lower neighbours, left to right
    pub down: [Option<Idx<Trapezoid>>; 2],
    /// A third upper neighbour, only present while a segment is being threaded through
    pub third: Option<(Idx<Trapezoid>, Side)>,
    pub sink: Idx<QueryNode>,
    pub state: TrapezoidState,
}

impl fmt::Display for Trapezoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn opt<T: fmt::Display>(f: &mut fmt::Formatter<'_>, value: &Option<T>) -> fmt::Result {
            match value {
                Some(value) => write!(f, "{}", value),
                None => write!(f, "-"),
            }
        }

        write!(f, "hi ")?;
        opt(f, &self.hi)?;
        write!(f, " lo ")?;
        opt(f, &self.lo)?;
        write!(f, " [")?;
        opt(f, &self.left)?;
        write!(f, " | ")?;
        opt(f, &self.right)?;
        write!(f, "] up (")?;
        opt(f, &self.up[0])?;
        write!(f, ", ")?;
        opt(f, &self.up[1])?;
        write!(f, ") down (")?;
        opt(f, &self.down[0])?;
        write!(f, ", ")?;
        opt(f, &self.down[1])?;
        write!(f, ") {}", self.sink)?;
        if self.state == TrapezoidState::Merged {
            write!(f, " merged")?;
        }
        Ok(())
    }
}

impl IdxDisplay for Trapezoid {
    fn fmt(f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result {
        write!(f, "t{}", idx)
    }
}

impl Trapezoid {
    pub fn all(sink: Idx<QueryNode>) -> Self {
        Self {
            hi: None,
            lo: None,
            left: None,
            right: None,
            up: [None, None],
            down: [None, None],
            third: None,
            sink,
            state: TrapezoidState::Live,
        }
    }

    pub fn is_live(&self) -> bool {
        self.state == TrapezoidState::Live
    }

    pub fn up_count(&self) -> usize {
        self.up.iter().flatten().count()
    }

    pub fn down_count(&self) -> usize {
        self.down.iter().flatten().count()
    }

    pub fn neighbors(&self) -> impl Iterator<Item = Idx<Trapezoid>> + '_ {
        self.up.iter().chain(self.down.iter()).flatten().copied()
    }

    /// The lower bound lies at `p`
    pub fn lo_is(&self, p: &Point) -> bool {
        self.lo.map_or(false, |lo| lo.equal(p))
    }

    /// The upper bound lies at `p`
    pub fn hi_is(&self, p: &Point) -> bool {
        self.hi.map_or(false, |hi| hi.equal(p))
    }

    /// Replace `old` with `new` among the upper neighbours
    pub fn replace_up(&mut self, old: Idx<Trapezoid>, new: Idx<Trapezoid>) {
        for up in self.up.iter_mut() {
            if *up == Some(old) {
                *up = Some(new);
            }
        }
    }

    /// Replace `old` with `new` among the lower neighbours
    pub fn replace_down(&mut self, old: Idx<Trapezoid>, new: Idx<Trapezoid>) {
        for down in self.down.iter_mut() {
            if *down == Some(old) {
                *down = Some(new);
            }
        }
    }
}

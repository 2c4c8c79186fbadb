use std::fmt;

use crate::{idx::{Idx, IdxDisplay}, point::Point, segment::Segment, trapezoid::Trapezoid};

/// A node of the point-location structure.
///
/// Nodes are never removed. Splitting a trapezoid rewrites its sink in place into a branch, so every
/// handle referring to the old sink now refers to the branch.
#[derive(Debug, Clone)]
pub(crate) enum QueryNode {
    Branch(Idx<QueryNode>, Idx<QueryNode>, QueryNodeBranch),
    Sink(Idx<Trapezoid>),
}

/// The test performed by a branch.
///
/// For `X` the first child is left of the segment, the second right of it.
/// For `Y` the first child is below the point, the second above it.
#[derive(Debug, Clone)]
pub(crate) enum QueryNodeBranch {
    X(Idx<Segment>),
    Y(Point),
}

impl fmt::Display for QueryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch(_, _, branch) => write!(f, "{}", branch),
            Self::Sink(ti) => write!(f, "S({})", ti),
        }
    }
}

impl fmt::Display for QueryNodeBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X(si) => write!(f, "X({})", si),
            Self::Y(p) => write!(f, "Y{}", p),
        }
    }
}

impl IdxDisplay for QueryNode {
    fn fmt(f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result {
        write!(f, "q{}", idx)
    }
}

#[cfg(feature = "debugging")]
pub(crate) struct IndexedQueryNode<'a>(Idx<QueryNode>, &'a QueryNode);

#[cfg(feature = "debugging")]
impl<'a> fmt::Display for IndexedQueryNode<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.0, self.1)
    }
}

impl QueryNode {
    #[cfg(feature = "debugging")]
    pub fn as_text_tree<'a>(&'a self, qi: Idx<Self>, qs: &'a [Self]) -> text_trees::TreeNode<IndexedQueryNode<'a>> {
        let node = IndexedQueryNode(qi, self);
        match self {
            QueryNode::Branch(first, second, _) => text_trees::TreeNode::with_child_nodes(node, vec![qs[*first].as_text_tree(*first, qs), qs[*second].as_text_tree(*second, qs)].into_iter()),
            QueryNode::Sink(_) => node.into(),
        }
    }

    /// Turn this sink into a segment test between two new sinks
    pub fn branch_x(&mut self, qi_left: Idx<Self>, qi_right: Idx<Self>, si: Idx<Segment>) {
        *self = QueryNode::Branch(qi_left, qi_right, QueryNodeBranch::X(si));
    }

    /// Turn this sink into a point test between two new sinks
    pub fn branch_y(&mut self, qi_below: Idx<Self>, qi_above: Idx<Self>, p: Point) {
        *self = QueryNode::Branch(qi_below, qi_above, QueryNodeBranch::Y(p));
    }

    /// Point any child handle equal to `old` at `new` instead
    pub fn redirect(&mut self, old: Idx<Self>, new: Idx<Self>) {
        if let QueryNode::Branch(first, second, _) = self {
            if *first == old {
                *first = new;
            }
            if *second == old {
                *second = new;
            }
        }
    }

    pub fn sink(&self) -> Option<Idx<Trapezoid>> {
        match self {
            QueryNode::Sink(ti) => Some(*ti),
            QueryNode::Branch(..) => None,
        }
    }
}

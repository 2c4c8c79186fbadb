use log::{debug, trace};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{ContourSet, InsertionOrder, TriangulationOptions, errors::{InternalError, TriangulationError}, idx::{Idx, SliceExt, VecExt}, math, point::Point, querynode::{QueryNode, QueryNodeBranch}, segment::Segment, trapezoid::{Side, Trapezoid, TrapezoidState}};

#[cfg(feature = "debugging")]
use crate::debug;

pub(crate) trait TrapezoidationStructure {
    fn cs(&self) -> &ContourSet;
    fn ts(&self) -> &[Trapezoid];
    fn qs(&self) -> &[QueryNode];

    fn query_node_root(&self) -> Idx<QueryNode> {
        Idx::new(0)
    }

    /// The endpoints of a segment ordered low, high
    fn segment_lo_hi_points(&self, si: Idx<Segment>) -> (Point, Point) {
        let (lo, hi) = self.cs().segment_lo_hi(si);
        (self.cs().point(lo), self.cs().point(hi))
    }

    /// Find the trapezoid containing `p`. If `p` is an existing vertex, the trapezoid adjacent to `p` in the
    /// direction of `other` is chosen.
    fn locate(&self, p: &Point, other: &Point) -> Result<Idx<Trapezoid>, InternalError> {
        let qs = self.qs();
        let mut qi = self.query_node_root();
        for _ in 0..=qs.len() {
            match &qs[qi] {
                QueryNode::Sink(ti) => return Ok(*ti),
                QueryNode::Branch(below, above, QueryNodeBranch::Y(y)) => {
                    let use_above = if p.equal(y) {
                        other.greater_than(y)
                    } else {
                        p.greater_than(y)
                    };
                    qi = if use_above { *above } else { *below };
                }
                QueryNode::Branch(left, right, QueryNodeBranch::X(si)) => {
                    let (lo, hi) = self.segment_lo_hi_points(*si);
                    let use_left = if p.equal(&lo) || p.equal(&hi) {
                        if p.equal_y(other) {
                            other.x < p.x
                        } else if lo.equal_y(&hi) {
                            // Above a horizontal segment is its left side
                            other.greater_than(p)
                        } else {
                            math::is_left_of_line(&lo, &hi, other)?
                        }
                    } else {
                        math::is_left_of_line(&lo, &hi, p)?
                    };
                    qi = if use_left { *left } else { *right };
                }
            }
        }
        Err(InternalError::new(format!("Locating {} did not reach a sink", p)))
    }
}

#[cfg(feature = "debugging")]
pub(crate) fn trapezoidation_fmt<T: TrapezoidationStructure>(w: &mut impl std::io::Write, trapezoidation: &T) -> std::io::Result<()> {
    writeln!(w, "segments:")?;
    for si in trapezoidation.cs().ss().iter_index() {
        writeln!(w, "{}: {}", si, trapezoidation.cs().ss()[si])?;
    }

    writeln!(w, "query structure:")?;
    let qi_root = trapezoidation.query_node_root();
    writeln!(w, "{}", trapezoidation.qs()[qi_root].as_text_tree(qi_root, trapezoidation.qs()))?;

    writeln!(w, "trapezoids:")?;
    for ti in trapezoidation.ts().iter_index() {
        writeln!(w, "{}: {}", ti, trapezoidation.ts()[ti])?;
    }
    Ok(())
}

pub(crate) struct TrapezoidationState {
    cs: ContourSet,
    inserted: Vec<bool>,
    ts: Vec<Trapezoid>,
    qs: Vec<QueryNode>,
    /// The node each query node was created under, used to unhook the sinks of merged trapezoids
    parents: Vec<Option<Idx<QueryNode>>>,
    #[cfg(feature = "debugging")]
    svg_context: Option<debug::svg::SvgContext>,
    #[cfg(feature = "debugging")]
    current_step: u32,
    #[cfg(feature = "debugging")]
    current_substep: u32,
}

impl TrapezoidationStructure for TrapezoidationState {
    fn cs(&self) -> &ContourSet { &self.cs }
    fn ts(&self) -> &[Trapezoid] { &self.ts }
    fn qs(&self) -> &[QueryNode] { &self.qs }
}

impl TrapezoidationState {
    /// Start from a single unbounded trapezoid whose sink is the root of the location structure.
    ///
    /// The first segment goes through the general insertion path, so the structure it leaves behind is
    /// a y node on its high endpoint at the root, a y node on its low endpoint below that, and the x node
    /// for the segment under the low endpoint's upper branch. The segment test sits below the two
    /// endpoint tests, not at the root.
    pub fn new(cs: ContourSet) -> Self {
        let segment_count = cs.ss().len();

        // Each insertion adds at most four trapezoids and eight query nodes per crossed trapezoid,
        // but in practice a few per segment
        let mut qs = Vec::with_capacity(segment_count * 8 + 1);
        let ti = Idx::new(0);
        let qi = qs.push_get_index(QueryNode::Sink(ti));
        let mut ts = Vec::with_capacity(segment_count * 4 + 1);
        ts.push(Trapezoid::all(qi));

        #[cfg(feature = "debugging")]
        let svg_context = debug::svg::SvgContext::from_env(cs.points());

        Self {
            cs,
            inserted: vec![false; segment_count],
            ts,
            qs,
            parents: vec![None],
            #[cfg(feature = "debugging")]
            svg_context,
            #[cfg(feature = "debugging")]
            current_step: 0,
            #[cfg(feature = "debugging")]
            current_substep: 0,
        }
    }

    #[cfg(feature = "debugging")]
    fn output_svg(&mut self, style: debug::svg::SvgTriangulationStyle, level: debug::svg::SvgOutputLevel) {
        if let Some(svg_context) = &self.svg_context {
            if svg_context.output_level >= level {
                // Make the directory for this step if this is the first svg
                if self.current_substep == 0 {
                    let path = svg_context.output_path.join(format!("{:03}", self.current_step));
                    if std::fs::create_dir_all(path).is_err() {
                        return;
                    }
                }

                let mut svg = debug::svg::SvgOutput::new(svg_context, style);
                let _ = svg.append_trapezoidation(self);

                let path: std::path::PathBuf = format!("{:03}", self.current_step).into();
                let path = path.join(format!("{:03}.svg", self.current_substep));
                let _ = svg.save(path);

                self.current_substep += 1;
            }
        }
    }

    #[cfg(feature = "debugging")]
    fn advance_step(&mut self) {
        if let Some(svg_context) = &self.svg_context {
            if svg_context.output_level >= debug::svg::SvgOutputLevel::MajorSteps {
                let path = svg_context.output_path.join(format!("{:03}", self.current_step)).join("state.txt");
                if let Ok(f) = std::fs::File::create(path) {
                    let mut w = std::io::BufWriter::new(&f);
                    let _ = trapezoidation_fmt(&mut w, self);
                }

                self.current_step += 1;
                self.current_substep = 0;
            }
        }
    }

    pub fn build(mut self, options: &TriangulationOptions) -> Result<Trapezoidation, TriangulationError> {
        let mut order: Vec<Idx<Segment>> = self.cs.ss().iter_index().collect();
        if let InsertionOrder::Shuffled { seed } = options.insertion_order {
            let mut rng = StdRng::seed_from_u64(seed);
            order.shuffle(&mut rng);
        }
        let limit = options.segment_limit.map_or(order.len(), |limit| limit.min(order.len()));

        for &si in &order[..limit] {
            #[cfg(feature = "debugging")]
            self.output_svg(debug::svg::SvgTriangulationStyle::highlight_segment(si), debug::svg::SvgOutputLevel::AllSteps);

            self.insert(si)?;

            #[cfg(debug_assertions)]
            self.check_consistency()?;

            #[cfg(feature = "debugging")]
            {
                self.output_svg(debug::svg::SvgTriangulationStyle::highlight_segment(si), debug::svg::SvgOutputLevel::MajorSteps);
                self.advance_step();
            }
        }

        debug!("Trapezoidation of {} / {} segments: {} live trapezoids, {} query nodes",
            limit,
            order.len(),
            self.ts.iter().filter(|t| t.is_live()).count(),
            self.qs.len());

        #[cfg(feature = "debugging")]
        self.output_svg(debug::svg::SvgTriangulationStyle::default(), debug::svg::SvgOutputLevel::ResultOnly);

        Ok(Trapezoidation {
            cs: self.cs,
            inserted: self.inserted,
            ts: self.ts,
            qs: self.qs,
        })
    }

    fn is_vertex_inserted(&self, vi: usize) -> bool {
        self.cs.segments_at(vi).iter().any(|si| self.inserted[si.usize()])
    }

    fn side_ends_at(&self, side: Option<Idx<Segment>>, p: &Point) -> bool {
        side.map_or(false, |si| self.cs.segment_ends_at(si, p))
    }

    /// Thread a segment into the subdivision
    pub fn insert(&mut self, si: Idx<Segment>) -> Result<(), InternalError> {
        if self.inserted[si.usize()] {
            return Err(InternalError::new(format!("Segment {} inserted twice", si)));
        }

        let (vi_lo, vi_hi) = self.cs.segment_lo_hi(si);
        let (lo, hi) = (self.cs.point(vi_lo), self.cs.point(vi_hi));
        trace!("Inserting {} from {} down to {}", si, hi, lo);

        let hi_inserted = self.is_vertex_inserted(vi_hi);
        let ti_hi = self.locate(&hi, &lo)?;
        let ti_first = if hi_inserted {
            ti_hi
        } else {
            self.split_horizontal(ti_hi, hi)
        };

        let lo_inserted = self.is_vertex_inserted(vi_lo);
        let ti_lo = self.locate(&lo, &hi)?;
        if !lo_inserted {
            self.split_horizontal(ti_lo, lo);
        }

        let mut ti_first_right = None;
        let mut ti_last_right = None;
        let mut next = Some(ti_first);
        while let Some(ti) = next {
            if !self.ts[ti].lo.map_or(false, |t_lo| t_lo.greater_equal(&lo)) {
                break;
            }

            let tn = self.split_vertical(ti, si);
            if ti == ti_first {
                ti_first_right = Some(tn);
            }
            let at_lo = self.ts[ti].lo_is(&lo);
            if at_lo {
                ti_last_right = Some(tn);
            }

            self.link_up(ti, tn, &hi, &lo, hi_inserted && ti == ti_first)?;
            next = self.link_down(ti, tn, &hi, &lo, lo_inserted && at_lo)?;

            self.ts[ti].right = Some(si);
            self.ts[tn].left = Some(si);
        }

        match (ti_first_right, ti_last_right) {
            (Some(ti_first_right), Some(_)) => {
                self.merge(si, ti_first, Side::Left, &lo)?;
                self.merge(si, ti_first_right, Side::Right, &lo)?;
            }
            _ => return Err(InternalError::new(format!("Segment {} did not reach its lower endpoint {} from {}", si, lo, ti_first))),
        }

        self.inserted[si.usize()] = true;
        Ok(())
    }

    /// Split `tu` with a horizontal line through `p`. `tu` keeps the upper part; the new lower part is returned.
    fn split_horizontal(&mut self, tu: Idx<Trapezoid>, p: Point) -> Idx<Trapezoid> {
        let qi = self.ts[tu].sink;
        let tl = self.ts.next_index();
        let qi_below = self.qs.push_get_index(QueryNode::Sink(tl));
        let qi_above = self.qs.push_get_index(QueryNode::Sink(tu));
        self.parents.push(Some(qi));
        self.parents.push(Some(qi));
        self.qs[qi].branch_y(qi_below, qi_above, p);

        let mut t_lower = self.ts[tu].clone();
        t_lower.hi = Some(p);
        t_lower.up = [Some(tu), None];
        t_lower.sink = qi_below;
        let down = t_lower.down;
        self.ts.push(t_lower);

        let t_upper = &mut self.ts[tu];
        t_upper.lo = Some(p);
        t_upper.down = [Some(tl), None];
        t_upper.sink = qi_above;

        for &td in down.iter().flatten() {
            self.ts[td].replace_up(tu, tl);
        }
        tl
    }

    /// Split `ti` along segment `si`. `ti` keeps the left part; the new right part is returned.
    fn split_vertical(&mut self, ti: Idx<Trapezoid>, si: Idx<Segment>) -> Idx<Trapezoid> {
        let qi = self.ts[ti].sink;
        let tn = self.ts.next_index();
        let qi_left = self.qs.push_get_index(QueryNode::Sink(ti));
        let qi_right = self.qs.push_get_index(QueryNode::Sink(tn));
        self.parents.push(Some(qi));
        self.parents.push(Some(qi));
        self.qs[qi].branch_x(qi_left, qi_right, si);

        let mut t_right = self.ts[ti].clone();
        t_right.sink = qi_right;
        self.ts.push(t_right);
        self.ts[ti].sink = qi_left;
        tn
    }

    /// Distribute the upper neighbours of `ti` between its left part `ti` and right part `tn`
    fn link_up(&mut self, ti: Idx<Trapezoid>, tn: Idx<Trapezoid>, hi: &Point, lo: &Point, at_inserted_hi: bool) -> Result<(), InternalError> {
        // Another contour already has a corner at `hi`. The part between that corner's segment and
        // the new segment closes to a point at `hi` and has nothing above it.
        if at_inserted_hi && self.ts[ti].hi_is(hi) {
            if self.side_ends_at(self.ts[ti].left, hi) {
                trace!("{} closes at left corner {}", ti, hi);
                let up = self.ts[ti].up;
                self.ts[tn].up = up;
                self.ts[tn].third = None;
                self.ts[ti].up = [None, None];
                self.ts[ti].third = None;
                for &tu in up.iter().flatten() {
                    self.ts[tu].replace_down(ti, tn);
                }
                return Ok(());
            }
            if self.side_ends_at(self.ts[ti].right, hi) {
                trace!("{} closes at right corner {}", tn, hi);
                self.ts[tn].up = [None, None];
                self.ts[tn].third = None;
                return Ok(());
            }
        }

        let (up, third) = (self.ts[ti].up, self.ts[ti].third);
        match up {
            [Some(u0), Some(u1)] => {
                // Continuing a chain of crossed trapezoids
                if let Some((u_third, side)) = third {
                    match side {
                        Side::Left => {
                            self.ts[tn].up = [Some(u1), Some(u_third)];
                            self.ts[ti].up[1] = None;
                            self.ts[u0].down[0] = Some(ti);
                            self.ts[u1].down[0] = Some(tn);
                            self.ts[u_third].down[0] = Some(tn);
                        }
                        Side::Right => {
                            self.ts[tn].up = [Some(u1), None];
                            self.ts[ti].up = [Some(u_third), Some(u0)];
                            self.ts[u_third].down[0] = Some(ti);
                            self.ts[u0].down[0] = Some(ti);
                            self.ts[u1].down[0] = Some(tn);
                        }
                    }
                    self.ts[ti].third = None;
                    self.ts[tn].third = None;
                } else {
                    self.ts[tn].up = [Some(u1), None];
                    self.ts[ti].up[1] = None;
                    self.ts[u1].down[0] = Some(tn);
                }
            }
            [u0, u1] => {
                let tu = u0.or(u1).ok_or_else(|| InternalError::new(format!("{} crossed by a segment has no upper neighbour", ti)))?;
                let tu_down = self.ts[tu].down;
                match tu_down {
                    [Some(td0), Some(td1)] => {
                        // Upward cusp: the new segment starts below an existing vertex
                        let use_right = match self.ts[td0].right {
                            Some(sr) if !self.cs.is_horizontal(sr) => {
                                let (r_lo, r_hi) = self.segment_lo_hi_points(sr);
                                !math::is_left_of_line(&r_lo, &r_hi, lo)?
                            }
                            _ => ti == td1,
                        };
                        if use_right {
                            trace!("Upward cusp above {}, right part {} keeps {}", ti, tn, tu);
                            self.ts[ti].up = [None, None];
                            self.ts[tn].up = [Some(tu), None];
                            self.ts[tu].down[1] = Some(tn);
                        } else {
                            trace!("Upward cusp above {}, left part keeps {}", ti, tu);
                            self.ts[tn].up = [None, None];
                            self.ts[ti].up = [Some(tu), None];
                            self.ts[tu].down[0] = Some(ti);
                        }
                    }
                    _ => {
                        // Fresh segment: both parts hang below `tu`
                        self.ts[tu].down = [Some(ti), Some(tn)];
                    }
                }
            }
        }
        Ok(())
    }

    /// Distribute the lower neighbours of `ti` between `ti` and `tn`, returning the next trapezoid the
    /// segment crosses
    fn link_down(&mut self, ti: Idx<Trapezoid>, tn: Idx<Trapezoid>, hi: &Point, lo: &Point, at_inserted_lo: bool) -> Result<Option<Idx<Trapezoid>>, InternalError> {
        let down = self.ts[ti].down;
        match down {
            [None, None] if at_inserted_lo => {
                // A wedge between two segments leaving `lo` upward; both parts close to a point at `lo`
                if self.side_ends_at(self.ts[ti].left, lo) && self.side_ends_at(self.ts[ti].right, lo) {
                    trace!("{} and {} close in the wedge above {}", ti, tn, lo);
                    Ok(None)
                } else {
                    Err(InternalError::new(format!("{} ends at {} but is not a wedge above it", ti, lo)))
                }
            }
            [None, None] => Err(InternalError::new(format!("{} crossed by a segment has no lower neighbour", ti))),
            [Some(td), None] | [None, Some(td)] => {
                if at_inserted_lo {
                    // The segment ends on a corner of `ti`, closing one part to a point at `lo`
                    if self.side_ends_at(self.ts[ti].right, lo) {
                        trace!("{} closes at right corner {}", tn, lo);
                        self.ts[tn].down = [None, None];
                    } else if self.side_ends_at(self.ts[ti].left, lo) {
                        trace!("{} closes at left corner {}", ti, lo);
                        self.ts[ti].down = [None, None];
                        self.ts[td].replace_up(ti, tn);
                    } else {
                        return Err(InternalError::new(format!("{} ends at {} but neither side of {} does", ti, lo, ti)));
                    }
                    Ok(None)
                } else {
                    let td_up = self.ts[td].up;
                    if let [Some(du0), Some(du1)] = td_up {
                        // `td` is about to lose one of its two upper neighbours to the pair being created
                        self.ts[td].third = Some(if du0 == ti {
                            (du1, Side::Left)
                        } else {
                            (du0, Side::Right)
                        });
                    }
                    self.ts[td].up = [Some(ti), Some(tn)];
                    Ok(Some(td))
                }
            }
            [Some(td0), Some(td1)] => {
                let t_lo = self.ts[ti].lo.ok_or_else(|| InternalError::new(format!("{} with two lower neighbours is unbounded below", ti)))?;
                let use_left = if t_lo.equal_y(hi) {
                    t_lo.x > hi.x
                } else {
                    let x = math::x_at(lo, hi, t_lo.y)?;
                    Point::new(x, t_lo.y).less_than(&t_lo)
                };

                if at_inserted_lo {
                    trace!("{} and {} end on the vertex {} between {} and {}", ti, tn, lo, td0, td1);
                    self.ts[td0].up = [Some(ti), None];
                    self.ts[td1].up = [Some(tn), None];
                    self.ts[tn].down = [Some(td1), None];
                    self.ts[ti].down[1] = None;
                    Ok(None)
                } else if use_left {
                    self.ts[td0].up = [Some(ti), Some(tn)];
                    self.ts[td1].up = [Some(tn), None];
                    self.ts[ti].down[1] = None;
                    Ok(Some(td0))
                } else {
                    self.ts[td0].up = [Some(ti), None];
                    self.ts[td1].up = [Some(ti), Some(tn)];
                    self.ts[tn].down = [Some(td1), None];
                    Ok(Some(td1))
                }
            }
        }
    }

    /// Merge vertically adjacent trapezoids on one side of `si` which share both side segments
    fn merge(&mut self, si: Idx<Segment>, ti_first: Idx<Trapezoid>, side: Side, lo: &Point) -> Result<(), InternalError> {
        let mut ti = ti_first;
        while self.ts[ti].lo.map_or(false, |t_lo| t_lo.greater_equal(lo)) {
            let t_next = self.ts[ti].down.iter()
                .flatten()
                .copied()
                .find(|&td| match side {
                    Side::Left => self.ts[td].right == Some(si),
                    Side::Right => self.ts[td].left == Some(si),
                });
            let t_next = match t_next {
                Some(t_next) => t_next,
                None => break,
            };

            let (t, n) = (&self.ts[ti], &self.ts[t_next]);
            if t.left == n.left && t.right == n.right {
                trace!("Merging {} into {}", t_next, ti);
                let (qi, qi_next) = (t.sink, n.sink);
                let (down, n_lo) = (n.down, n.lo);
                let qi_parent = self.parents[qi_next.usize()].ok_or_else(|| InternalError::new(format!("Sink {} of {} has no parent", qi_next, t_next)))?;
                self.qs[qi_parent].redirect(qi_next, qi);

                let t = &mut self.ts[ti];
                t.down = down;
                t.lo = n_lo;
                for &td in down.iter().flatten() {
                    self.ts[td].replace_up(t_next, ti);
                }
                self.ts[t_next].state = TrapezoidState::Merged;
            } else {
                ti = t_next;
            }
        }
        Ok(())
    }

    #[cfg(debug_assertions)]
    fn check_consistency(&self) -> Result<(), InternalError> {
        for ti in self.ts.iter_index() {
            let t = &self.ts[ti];
            if !t.is_live() {
                continue;
            }
            if self.qs[t.sink].sink() != Some(ti) {
                return Err(InternalError::new(format!("{} refers to {} which is not its sink", ti, t.sink)));
            }
            if t.third.is_some() {
                return Err(InternalError::new(format!("{} still has a pending third upper neighbour", ti)));
            }
            for tn in t.neighbors() {
                if !self.ts[tn].is_live() {
                    return Err(InternalError::new(format!("{} links to merged trapezoid {}", ti, tn)));
                }
            }
        }
        Ok(())
    }
}

/// A read-only view of one trapezoid of a [Trapezoidation]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapezoidInfo {
    /// Arena index, stable for the lifetime of the [Trapezoidation]
    pub id: usize,
    /// Upper bound; `None` if unbounded
    pub hi: Option<Point>,
    /// Lower bound; `None` if unbounded
    pub lo: Option<Point>,
    /// Id of the bounding segment on the left; `None` if unbounded
    pub left: Option<usize>,
    /// Id of the bounding segment on the right; `None` if unbounded
    pub right: Option<usize>,
    pub up_count: usize,
    pub down_count: usize,
}

/// The trapezoidal decomposition of a [ContourSet], along with its point-location structure.
///
/// Built by threading the contour segments one at a time. A trapezoidation built with
/// [TriangulationOptions::segment_limit] only describes the segments inserted so far, which is useful for
/// inspecting intermediate states.
pub struct Trapezoidation {
    cs: ContourSet,
    inserted: Vec<bool>,
    ts: Vec<Trapezoid>,
    qs: Vec<QueryNode>,
}

impl TrapezoidationStructure for Trapezoidation {
    fn cs(&self) -> &ContourSet { &self.cs }
    fn ts(&self) -> &[Trapezoid] { &self.ts }
    fn qs(&self) -> &[QueryNode] { &self.qs }
}

impl Trapezoidation {
    /// Trapezoidize all segments of `cs` (or the first [TriangulationOptions::segment_limit] of them)
    pub fn build(cs: ContourSet, options: &TriangulationOptions) -> Result<Self, TriangulationError> {
        TrapezoidationState::new(cs).build(options)
    }

    pub fn contours(&self) -> &ContourSet {
        &self.cs
    }

    pub fn into_contours(self) -> ContourSet {
        self.cs
    }

    /// Number of segments threaded into the subdivision
    pub fn inserted_count(&self) -> usize {
        self.inserted.iter().filter(|&&inserted| inserted).count()
    }

    /// Whether every segment has been inserted
    pub fn is_complete(&self) -> bool {
        self.inserted.iter().all(|&inserted| inserted)
    }

    pub fn is_inserted(&self, segment: usize) -> bool {
        self.inserted.get(segment).copied().unwrap_or(false)
    }

    /// The live trapezoids of the subdivision
    pub fn trapezoids(&self) -> impl Iterator<Item = TrapezoidInfo> + '_ {
        self.ts.iter_index()
            .filter(move |&ti| self.ts[ti].is_live())
            .map(move |ti| self.info(ti))
    }

    /// The inserted segments as point pairs, in segment id order
    pub fn edges(&self) -> Vec<(Point, Point)> {
        self.cs.ss().iter_index()
            .filter(|si| self.inserted[si.usize()])
            .map(|si| self.cs.segment_points(si))
            .collect()
    }

    /// The trapezoid containing `p`. Points on a boundary resolve downward and to the right.
    pub fn locate_point(&self, p: Point) -> Result<TrapezoidInfo, TriangulationError> {
        let ti = self.locate(&p, &p)?;
        Ok(self.info(ti))
    }

    pub(crate) fn info(&self, ti: Idx<Trapezoid>) -> TrapezoidInfo {
        let t = &self.ts[ti];
        TrapezoidInfo {
            id: ti.usize(),
            hi: t.hi,
            lo: t.lo,
            left: t.left.map(|si| si.usize()),
            right: t.right.map(|si| si.usize()),
            up_count: t.up_count(),
            down_count: t.down_count(),
        }
    }

    #[cfg(feature = "debugging")]
    pub fn write_state(&self, w: &mut impl std::io::Write) -> std::io::Result<()> {
        trapezoidation_fmt(w, self)
    }
}

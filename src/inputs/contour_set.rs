use std::{collections::HashSet, f64::consts::TAU};

use log::debug;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::{Diagonal, Vertex, errors::TriangulationError, idx::{Idx, SliceExt}, inputs::vertex::to_point, math, point::{Point, EPSILON}, segment::Segment};

/// One closed ring of segments within a [ContourSet]
#[derive(Debug, Clone)]
pub struct Contour {
    first: Idx<Segment>,
    len: usize,
    depth: usize,
    reversed: bool,
}

impl Contour {
    /// Ids of the segments of this contour, in order
    pub fn segments(&self) -> impl Iterator<Item = usize> {
        let first = self.first.usize();
        first..first + self.len
    }

    /// Number of segments (and vertices)
    pub fn len(&self) -> usize { self.len }

    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// How many other contours enclose this one
    pub fn depth(&self) -> usize { self.depth }

    /// Holes are the contours enclosed an odd number of times
    pub fn is_hole(&self) -> bool { self.depth % 2 == 1 }

    /// Whether the vertex order was reversed to put the interior on the left
    pub fn was_reversed(&self) -> bool { self.reversed }
}

/// The normalized input to the triangulator.
///
/// Vertices are deduplicated and indexed in sweep order (ascending `y`, then `x`). A contour which passes
/// through the same vertex more than once is split there into sub-contours touching at that vertex.
/// Every contour is oriented so the polygon interior lies to the left of each of its [Segment]s: outer
/// contours counterclockwise, holes clockwise.
#[derive(Debug, Clone)]
pub struct ContourSet {
    points: Vec<Point>,
    ss: Vec<Segment>,
    contours: Vec<Contour>,
    incident: Vec<SmallVec<[Idx<Segment>; 4]>>,
    clockwise: bool,
}

impl ContourSet {
    /// Build a contour set from any sequence of contours, each a sequence of [Vertex] values
    pub fn new<I, C, V>(contours: I) -> Result<Self, TriangulationError>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = V>,
        V: Vertex,
    {
        let raw = contours.into_iter()
            .map(|c| c.into_iter().map(|v| to_point(&v)).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_points(raw)
    }

    /// Build a contour set from contours already converted to [Point]s
    pub fn from_points(raw: Vec<Vec<Point>>) -> Result<Self, TriangulationError> {
        if raw.iter().all(|c| c.is_empty()) {
            return Err(TriangulationError::NoVertices);
        }
        if raw.iter().flatten().any(|p| !p.is_finite()) {
            return Err(TriangulationError::InvalidCoordinate);
        }

        let (points, ids) = Self::fuse_points(&raw);

        let mut rings = Vec::with_capacity(ids.len());
        for mut ring in ids {
            ring.dedup();
            while ring.len() > 1 && ring.first() == ring.last() {
                ring.pop();
            }
            if ring.len() < 3 {
                return Err(TriangulationError::NotEnoughVertices(ring.len()));
            }
            Self::split_touching(ring, &mut rings)?;
        }

        let mut contours = Vec::with_capacity(rings.len());
        let mut clockwise = None;
        for (ci, ring) in rings.iter().enumerate() {
            let area = math::signed_area(ring.iter().map(|&vi| &points[vi]));
            if area.abs() < EPSILON * EPSILON {
                return Err(TriangulationError::DegenerateContour(ci));
            }
            let depth = rings.iter()
                .enumerate()
                .filter(|&(cj, other)| cj != ci && Self::encloses(&points, other, ring))
                .count();
            let reversed = (area > 0.0) != (depth % 2 == 0);
            if depth == 0 && clockwise.is_none() {
                clockwise = Some(reversed);
            }
            contours.push(Contour {
                first: Idx::new(0),
                len: ring.len(),
                depth,
                reversed,
            });
        }

        let mut ss = Vec::with_capacity(rings.iter().map(Vec::len).sum());
        for (ci, (mut ring, contour)) in rings.into_iter().zip(contours.iter_mut()).enumerate() {
            if contour.reversed {
                ring.reverse();
            }
            let base = ss.len();
            let n = ring.len();
            contour.first = Idx::new(base);
            for k in 0..n {
                ss.push(Segment {
                    start: ring[k],
                    end: ring[(k + 1) % n],
                    prev: Idx::new(base + (k + n - 1) % n),
                    next: Idx::new(base + (k + 1) % n),
                    contour: ci,
                });
            }
        }

        let mut incident = vec![SmallVec::new(); points.len()];
        for si in ss.iter_index() {
            let s: &Segment = &ss[si];
            incident[s.start].push(si);
            incident[s.end].push(si);
        }

        debug!("Contour set of {} vertices, {} segments and {} contours", points.len(), ss.len(), contours.len());

        Ok(Self {
            points,
            ss,
            contours,
            incident,
            clockwise: clockwise.unwrap_or(false),
        })
    }

    /// Assign every input point the index of its deduplicated vertex
    fn fuse_points(raw: &[Vec<Point>]) -> (Vec<Point>, Vec<Vec<usize>>) {
        let mut order: Vec<(usize, usize)> = raw.iter()
            .enumerate()
            .flat_map(|(ci, c)| (0..c.len()).map(move |k| (ci, k)))
            .collect();
        order.sort_by_key(|&(ci, k)| {
            let p = raw[ci][k];
            (OrderedFloat(p.y), OrderedFloat(p.x))
        });

        let mut points: Vec<Point> = Vec::with_capacity(order.len());
        let mut ids: Vec<Vec<usize>> = raw.iter().map(|c| vec![0; c.len()]).collect();
        for (ci, k) in order {
            let p = raw[ci][k];
            match points.last() {
                Some(last) if last.equal(&p) => { },
                _ => points.push(p),
            }
            ids[ci][k] = points.len() - 1;
        }
        (points, ids)
    }

    /// Cut a ring at every vertex it revisits, so each resulting ring is simple
    fn split_touching(ring: Vec<usize>, rings: &mut Vec<Vec<usize>>) -> Result<(), TriangulationError> {
        let mut path: Vec<usize> = Vec::with_capacity(ring.len());
        for vi in ring {
            if let Some(k) = path.iter().position(|&p| p == vi) {
                let sub = path.split_off(k);
                if sub.len() < 3 {
                    return Err(TriangulationError::NotEnoughVertices(sub.len()));
                }
                rings.push(sub);
            }
            path.push(vi);
        }
        if path.len() < 3 {
            return Err(TriangulationError::NotEnoughVertices(path.len()));
        }
        rings.push(path);
        Ok(())
    }

    fn encloses(points: &[Point], outer: &[usize], inner: &[usize]) -> bool {
        // Rings may share vertices where they touch, so test one that is not shared
        match inner.iter().find(|vi| !outer.contains(vi)) {
            Some(&vi) => math::ring_contains(outer.iter().map(|&vo| &points[vo]), &points[vi]),
            None => false,
        }
    }

    /// The deduplicated vertices, in sweep order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// All segments, indexed by segment id
    pub fn segments(&self) -> &[Segment] {
        &self.ss
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Whether the first outer contour was supplied in clockwise order
    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    /// The contours which pass through vertex `vi`
    pub fn contours_at(&self, vi: usize) -> SmallVec<[usize; 2]> {
        let mut result: SmallVec<[usize; 2]> = SmallVec::new();
        for &si in self.segments_at(vi) {
            let ci = self.ss[si].contour;
            if !result.contains(&ci) {
                result.push(ci);
            }
        }
        result
    }

    pub(crate) fn ss(&self) -> &[Segment] {
        &self.ss
    }

    pub(crate) fn segments_at(&self, vi: usize) -> &[Idx<Segment>] {
        self.incident.get(vi).map_or(&[][..], |s| &s[..])
    }

    pub(crate) fn point(&self, vi: usize) -> Point {
        self.points[vi]
    }

    /// The start and end points of a segment
    pub(crate) fn segment_points(&self, si: Idx<Segment>) -> (Point, Point) {
        let s = &self.ss[si];
        (self.points[s.start], self.points[s.end])
    }

    /// The vertex indices of a segment ordered low, high
    pub(crate) fn segment_lo_hi(&self, si: Idx<Segment>) -> (usize, usize) {
        let s = &self.ss[si];
        if self.points[s.start].less_than(&self.points[s.end]) {
            (s.start, s.end)
        } else {
            (s.end, s.start)
        }
    }

    /// Whether the segment is traversed from low to high
    pub(crate) fn is_upward(&self, si: Idx<Segment>) -> bool {
        let (start, end) = self.segment_points(si);
        start.less_than(&end)
    }

    pub(crate) fn is_horizontal(&self, si: Idx<Segment>) -> bool {
        let (start, end) = self.segment_points(si);
        start.equal_y(&end)
    }

    /// Whether `p` is one of the endpoints of the segment
    pub(crate) fn segment_ends_at(&self, si: Idx<Segment>, p: &Point) -> bool {
        let (start, end) = self.segment_points(si);
        start.equal(p) || end.equal(p)
    }

    /// Split the polygon along `diagonals` into sub-polygons, each given as a counterclockwise ring of
    /// vertex indices.
    ///
    /// A diagonal between two segments joins their start vertices.
    pub fn split(&self, diagonals: &[Diagonal]) -> Result<Vec<Vec<usize>>, TriangulationError> {
        let mut hs: Vec<(usize, usize)> = self.ss.iter().map(|s| (s.start, s.end)).collect();
        let mut seen = HashSet::new();
        for d in diagonals {
            let (sa, sb) = d.segments();
            let (a, b) = match (self.ss.get(sa), self.ss.get(sb)) {
                (Some(a), Some(b)) => (a.start, b.start),
                _ => return Err(TriangulationError::internal(format!("Diagonal {} refers to a missing segment", d))),
            };
            if a == b || !seen.insert((a.min(b), a.max(b))) {
                continue;
            }
            hs.push((a, b));
            hs.push((b, a));
        }

        let mut outgoing: Vec<SmallVec<[usize; 4]>> = vec![SmallVec::new(); self.points.len()];
        for (hi, &(from, _)) in hs.iter().enumerate() {
            outgoing[from].push(hi);
        }

        let angle = |from: usize, to: usize| {
            let (p, q) = (self.points[from], self.points[to]);
            (q.y - p.y).atan2(q.x - p.x)
        };

        // The face continues along the first outgoing edge clockwise from the reversed incoming edge
        let next_edge = |h: usize| -> Result<usize, TriangulationError> {
            let (u, v) = hs[h];
            let back = angle(v, u);
            outgoing[v].iter()
                .copied()
                .min_by_key(|&e| {
                    let to = hs[e].1;
                    if to == u {
                        OrderedFloat(TAU)
                    } else {
                        OrderedFloat((back - angle(v, to)).rem_euclid(TAU))
                    }
                })
                .ok_or_else(|| TriangulationError::internal(format!("Vertex v{} has no outgoing edge", v)))
        };

        let mut used = vec![false; hs.len()];
        let mut faces = Vec::with_capacity(seen.len() + self.contours.len());
        for h_first in 0..hs.len() {
            if used[h_first] {
                continue;
            }
            let mut face = Vec::new();
            let mut h = h_first;
            loop {
                if used[h] {
                    return Err(TriangulationError::internal(format!("Edge v{} -> v{} belongs to two sub-polygons", hs[h].0, hs[h].1)));
                }
                used[h] = true;
                face.push(hs[h].0);
                h = next_edge(h)?;
                if h == h_first {
                    break;
                }
            }
            faces.push(face);
        }

        debug!("Split {} contours along {} diagonals into {} sub-polygons", self.contours.len(), seen.len(), faces.len());
        Ok(faces)
    }
}

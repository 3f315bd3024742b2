//! Planar contiguity graph with a deterministic rotation system.
//!
//! # Structure
//!
//! Every undirected adjacency pair `(u, v)` is represented as two
//! independent directed **half-edges**, `u→v` and `v→u`.  Each half-edge
//! carries:
//!
//! * `origin` — the point it leaves from
//! * `dest`   — the point it arrives at
//! * `next`   — the successor chosen by the rotation system: among the
//!   half-edges leaving `dest` (its *fan*), the one reached by the smallest
//!   counter-clockwise turn out of the reversed incoming direction
//!
//! The two directions of an edge are separate arena entries with separate
//! `next` links; no twin pointer is kept.  Walking `next` repeatedly from
//! any half-edge traces the boundary of one face of the planar subdivision.
//!
//! # Indexing
//!
//! All elements live in flat `Vec`s addressed by `PointId` and
//! `HalfEdgeId`.  The graph is immutable once built; face tracing keeps its
//! own marking state (see `FaceTracer`).

use std::cmp::Ordering;
use std::collections::VecDeque;

use ahash::AHashSet;
use geo::Coord;
use smallvec::SmallVec;

use crate::angle::{direction, turn_degrees};
use crate::error::GraphError;
use crate::ids::{HalfEdgeId, PointId};
use crate::trace::{FaceSet, FaceTracer};

/// Half-edges leaving one point, in creation order.  Contiguity vertices
/// have low degree, so fans stay inline.
type Fan = SmallVec<[HalfEdgeId; 8]>;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A directed half-edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HalfEdge {
    /// Point this half-edge leaves from.
    pub origin: PointId,
    /// Point this half-edge arrives at.
    pub dest: PointId,
    /// The half-edge leaving `dest` that continues the face walk.
    pub next: HalfEdgeId,
}

// ---------------------------------------------------------------------------
// PlanarGraph
// ---------------------------------------------------------------------------

/// A planar graph over point locations with a fixed rotation system.
///
/// Built once from points and adjacency pairs, then read-only.  `next`
/// links are assigned during construction, so every face walk is a
/// deterministic path through a functional graph.
#[derive(Debug)]
pub struct PlanarGraph {
    points: Vec<Coord<f64>>,
    half_edges: Vec<HalfEdge>,
    /// Fan of each point, indexed by `PointId.0`.
    fans: Vec<Fan>,
    /// Sorted normalized turn angles over the destination fan of each
    /// half-edge, indexed by `HalfEdgeId.0`.  Diagnostics only; the
    /// traversal never reads these.
    turn_angles: Vec<Vec<f64>>,
}

impl PlanarGraph {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Build a graph from point coordinates and undirected adjacency pairs.
    ///
    /// Each pair may be listed once or symmetrically; duplicates are
    /// ignored.  Both directions of every pair become half-edges, appended
    /// to their origin's fan in input order.
    ///
    /// Fails with [`GraphError::DegenerateGeometry`] if a pair is a
    /// self-loop, references a point outside `0..points.len()`, or joins
    /// two points with identical coordinates (the edge direction would be
    /// undefined).  Near-coincident points are accepted; snapping them is
    /// the caller's concern.
    pub fn new(points: &[Coord<f64>], pairs: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut graph = Self {
            points: points.to_vec(),
            half_edges: Vec::with_capacity(pairs.len() * 2),
            fans: vec![Fan::new(); points.len()],
            turn_angles: Vec::new(),
        };

        let mut seen: AHashSet<(usize, usize)> = AHashSet::with_capacity(pairs.len() * 2);
        for &(i, j) in pairs {
            graph.add_half_edge(i, j, &mut seen)?;
            graph.add_half_edge(j, i, &mut seen)?;
        }

        graph.assign_successors()?;
        Ok(graph)
    }

    /// Build a graph from per-point neighbor lists, the adjacency form
    /// produced by rook/queen contiguity builders: `neighbors[i]` lists the
    /// points adjacent to point `i`.  The relation may be given one-sided
    /// or symmetrically; the missing direction is filled in either way.
    pub fn from_neighbor_lists(
        points: &[Coord<f64>],
        neighbors: &[Vec<usize>],
    ) -> Result<Self, GraphError> {
        if neighbors.len() != points.len() {
            return Err(GraphError::DegenerateGeometry(format!(
                "{} neighbor lists for {} points",
                neighbors.len(),
                points.len()
            )));
        }
        let pairs: Vec<(usize, usize)> = neighbors
            .iter()
            .enumerate()
            .flat_map(|(i, adj)| adj.iter().map(move |&j| (i, j)))
            .collect();
        Self::new(points, &pairs)
    }

    /// Create the half-edge `i→j` unless it already exists.
    fn add_half_edge(
        &mut self,
        i: usize,
        j: usize,
        seen: &mut AHashSet<(usize, usize)>,
    ) -> Result<(), GraphError> {
        if i >= self.points.len() || j >= self.points.len() {
            return Err(GraphError::DegenerateGeometry(format!(
                "adjacency pair ({i}, {j}) references a point outside 0..{}",
                self.points.len()
            )));
        }
        if i == j {
            return Err(GraphError::DegenerateGeometry(format!(
                "adjacency pair ({i}, {j}) is a self-loop"
            )));
        }
        if !seen.insert((i, j)) {
            return Ok(());
        }
        if self.points[i] == self.points[j] {
            return Err(GraphError::DegenerateGeometry(format!(
                "points {i} and {j} coincide at ({}, {})",
                self.points[i].x, self.points[i].y
            )));
        }

        let id = HalfEdgeId(self.half_edges.len());
        // Placeholder `next`; assigned once all fans are complete.
        self.half_edges.push(HalfEdge { origin: PointId(i), dest: PointId(j), next: id });
        self.fans[i].push(id);
        Ok(())
    }

    /// Assign `next` for every half-edge by the rotation rule: sort the
    /// destination fan by normalized turn angle out of the reversed
    /// incoming direction and take the minimum.  The reverse half-edge is a
    /// legal candidate; it measures exactly 360° and sorts last, so it only
    /// wins at dead-end points of degree one.
    ///
    /// Ties at identical angles (collinear candidates) break by destination
    /// point id, independent of the order adjacency pairs arrived in.
    fn assign_successors(&mut self) -> Result<(), GraphError> {
        let mut candidates: Vec<(f64, HalfEdgeId)> = Vec::new();

        for id in 0..self.half_edges.len() {
            let edge = self.half_edges[id];
            let fan = &self.fans[edge.dest.0];
            if fan.is_empty() {
                // Unreachable through `new` (fans are built symmetrically),
                // kept as a guard on the malformed-adjacency contract.
                return Err(GraphError::DegenerateGeometry(format!(
                    "point {} is a destination but has no outgoing half-edges",
                    edge.dest
                )));
            }

            let in_dir = direction(self.points[edge.dest.0], self.points[edge.origin.0]);
            candidates.clear();
            candidates.extend(fan.iter().map(|&cand| {
                let out = self.half_edges[cand.0];
                let out_dir = direction(self.points[out.origin.0], self.points[out.dest.0]);
                (turn_degrees(in_dir, out_dir), cand)
            }));
            candidates.sort_by(|a, b| {
                a.0.partial_cmp(&b.0)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| self.half_edges[a.1.0].dest.cmp(&self.half_edges[b.1.0].dest))
            });

            self.half_edges[id].next = candidates[0].1;
            self.turn_angles.push(candidates.iter().map(|&(angle, _)| angle).collect());
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Counts and accessors
    // -----------------------------------------------------------------------

    #[inline] pub fn num_points(&self) -> usize { self.points.len() }
    #[inline] pub fn num_half_edges(&self) -> usize { self.half_edges.len() }

    #[inline] pub fn point(&self, id: PointId) -> Coord<f64> { self.points[id.0] }
    #[inline] pub fn points(&self) -> &[Coord<f64>] { &self.points }

    #[inline] pub fn half_edge(&self, id: HalfEdgeId) -> &HalfEdge { &self.half_edges[id.0] }

    /// Half-edges leaving `point`, in creation order.
    #[inline] pub fn fan(&self, point: PointId) -> &[HalfEdgeId] { &self.fans[point.0] }

    /// Number of neighbors of `point`.
    #[inline] pub fn degree(&self, point: PointId) -> usize { self.fans[point.0].len() }

    /// Iterate over all half-edge ids in arena order.
    pub fn half_edge_ids(&self) -> impl Iterator<Item = HalfEdgeId> {
        (0..self.half_edges.len()).map(HalfEdgeId)
    }

    /// Iterate over the neighbors of `point`, in fan order.
    pub fn neighbors(&self, point: PointId) -> impl Iterator<Item = PointId> + '_ {
        self.fans[point.0].iter().map(|&he| self.half_edges[he.0].dest)
    }

    /// The half-edge from `u` to `v`, if the pair is adjacent.
    pub fn half_edge_between(&self, u: PointId, v: PointId) -> Option<HalfEdgeId> {
        self.fans[u.0].iter().copied().find(|&he| self.half_edges[he.0].dest == v)
    }

    /// Sorted normalized turn angles recorded while choosing `next` for
    /// `he`, one per half-edge in `fan(he.dest)`.  Diagnostics only.
    #[inline] pub fn turn_angles(&self, he: HalfEdgeId) -> &[f64] { &self.turn_angles[he.0] }

    // -----------------------------------------------------------------------
    // Topology queries
    // -----------------------------------------------------------------------

    /// Partition all points into maximal connected components under the
    /// adjacency relation.  Isolated points form singleton components.
    /// Components are ordered by smallest member; members are ascending.
    ///
    /// The outer-face rule is only meaningful per component; callers with
    /// disconnected input should split it here and build one graph per
    /// component.
    pub fn connected_components(&self) -> Vec<Vec<PointId>> {
        let mut seen = vec![false; self.points.len()];
        let mut components = Vec::new();
        let mut queue: VecDeque<PointId> = VecDeque::new();

        for start in 0..self.points.len() {
            if seen[start] {
                continue;
            }
            seen[start] = true;
            queue.push_back(PointId(start));

            let mut component = Vec::new();
            while let Some(point) = queue.pop_front() {
                component.push(point);
                for neighbor in self.neighbors(point) {
                    if !seen[neighbor.0] {
                        seen[neighbor.0] = true;
                        queue.push_back(neighbor);
                    }
                }
            }
            component.sort_unstable();
            components.push(component);
        }
        components
    }

    /// Returns `true` if the graph has at most one connected component.
    pub fn is_contiguous(&self) -> bool {
        self.connected_components().len() <= 1
    }

    // -----------------------------------------------------------------------
    // Tracing
    // -----------------------------------------------------------------------

    /// Enumerate all faces and designate the outer one.
    /// Convenience for `FaceTracer::new(self).trace()`.
    pub fn trace(&self) -> Result<FaceSet, GraphError> {
        FaceTracer::new(self).trace()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Face enumeration by rotation-system walk.
//!
//! Every half-edge has exactly one outgoing `next` link fixed at
//! construction, so the walk from any half-edge is a deterministic path
//! through a functional graph: it either closes into a cycle through its
//! start or runs into a previously completed face.  Sweeping all
//! half-edges in a fixed order therefore partitions them into disjoint
//! closed loops — the faces of the subdivision — in O(M) for a well-formed
//! rotation system.
//!
//! The face with the most half-edges is the outer (unbounded) face; its
//! edges, taken undirected, bound the union of all regions.

use ahash::AHashSet;
use geo::{Coord, LineString};

use crate::error::GraphError;
use crate::graph::PlanarGraph;
use crate::ids::{FaceId, HalfEdgeId, PointId};

// ---------------------------------------------------------------------------
// Face
// ---------------------------------------------------------------------------

/// A closed walk of half-edges: the destination of each half-edge is the
/// origin of the following one, and the last returns to the first.
///
/// Faces borrow nothing; they hold arena ids in traversal order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    pub(crate) half_edges: Vec<HalfEdgeId>,
}

impl Face {
    /// Number of half-edges in the walk.
    #[inline] pub fn len(&self) -> usize { self.half_edges.len() }

    /// The walk's half-edge ids, in traversal order.
    #[inline] pub fn half_edges(&self) -> &[HalfEdgeId] { &self.half_edges }

    /// The walk as `(origin, destination)` point pairs, in traversal order.
    pub fn edge_pairs<'g>(
        &'g self,
        graph: &'g PlanarGraph,
    ) -> impl Iterator<Item = (PointId, PointId)> + 'g {
        self.half_edges.iter().map(|&he| {
            let edge = graph.half_edge(he);
            (edge.origin, edge.dest)
        })
    }

    /// The walk as a closed coordinate ring (first point repeated last).
    pub fn ring(&self, graph: &PlanarGraph) -> LineString<f64> {
        let mut coords: Vec<Coord<f64>> = self
            .half_edges
            .iter()
            .map(|&he| graph.point(graph.half_edge(he).origin))
            .collect();
        if let Some(&first) = coords.first() {
            coords.push(first);
        }
        LineString::new(coords)
    }
}

// ---------------------------------------------------------------------------
// FaceSet
// ---------------------------------------------------------------------------

/// The complete face partition of a graph's half-edges, with the outer
/// face designated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceSet {
    faces: Vec<Face>,
    outer: Option<FaceId>,
}

impl FaceSet {
    #[inline] pub fn num_faces(&self) -> usize { self.faces.len() }
    #[inline] pub fn faces(&self) -> &[Face] { &self.faces }
    #[inline] pub fn face(&self, id: FaceId) -> &Face { &self.faces[id.0] }

    /// The outer face: the face with the greatest number of half-edges,
    /// first discovered winning ties.  `None` only for a graph with no
    /// half-edges.
    ///
    /// On a disconnected graph this is merely the globally longest walk and
    /// has no meaning as a shared outer boundary; split such input with
    /// `PlanarGraph::connected_components` and trace each component.
    #[inline] pub fn outer_id(&self) -> Option<FaceId> { self.outer }

    pub fn outer(&self) -> Option<&Face> {
        self.outer.map(|id| &self.faces[id.0])
    }

    /// The outer face's half-edges as undirected boundary edges,
    /// canonicalized to `(low, high)` point pairs and deduplicated (a
    /// dead-end edge appears in both directions in the outer walk), in
    /// first-traversal order.
    pub fn boundary_edges(&self, graph: &PlanarGraph) -> Vec<(PointId, PointId)> {
        let Some(outer) = self.outer() else {
            return Vec::new();
        };
        let mut seen: AHashSet<(PointId, PointId)> = AHashSet::with_capacity(outer.len());
        let mut edges = Vec::with_capacity(outer.len());
        for (origin, dest) in outer.edge_pairs(graph) {
            let key = if origin <= dest { (origin, dest) } else { (dest, origin) };
            if seen.insert(key) {
                edges.push(key);
            }
        }
        edges
    }
}

// ---------------------------------------------------------------------------
// FaceTracer
// ---------------------------------------------------------------------------

/// Partitions a graph's half-edges into faces.
///
/// The tracer owns the visited bit-array, so the graph stays immutable and
/// separate graph/tracer pairs never share state (disconnected components
/// can be traced concurrently on separate graphs).
pub struct FaceTracer<'g> {
    graph: &'g PlanarGraph,
    visited: Vec<bool>,
}

impl<'g> FaceTracer<'g> {
    pub fn new(graph: &'g PlanarGraph) -> Self {
        Self { graph, visited: vec![false; graph.num_half_edges()] }
    }

    /// Enumerate every face and designate the outer one.
    ///
    /// Half-edges are swept in `(origin, dest)` order.  Each unvisited
    /// half-edge seeds a walk along `next` links; a walk that returns to
    /// its seed becomes a face and marks its members visited, while a walk
    /// that runs into a completed face or repeats internally is discarded
    /// without marking anything.  A half-edge still unclaimed after the
    /// sweep means the rotation system is not a permutation of the arena;
    /// that is an [`GraphError::InvariantViolation`] and no partial face
    /// list is returned.
    pub fn trace(mut self) -> Result<FaceSet, GraphError> {
        let mut order: Vec<HalfEdgeId> = self.graph.half_edge_ids().collect();
        order.sort_unstable_by_key(|&he| {
            let edge = self.graph.half_edge(he);
            (edge.origin, edge.dest)
        });

        let mut on_walk = vec![false; self.graph.num_half_edges()];
        let mut faces = Vec::new();

        for &seed in &order {
            if self.visited[seed.0] {
                continue;
            }
            if let Some(walk) = self.walk(seed, &mut on_walk) {
                for &he in &walk {
                    self.visited[he.0] = true;
                }
                faces.push(Face { half_edges: walk });
            }
        }

        let traced: usize = faces.iter().map(Face::len).sum();
        if traced != self.graph.num_half_edges() {
            return Err(GraphError::InvariantViolation(format!(
                "face walks covered {traced} of {} half-edges",
                self.graph.num_half_edges()
            )));
        }

        let outer = Self::select_outer(&faces);
        Ok(FaceSet { faces, outer })
    }

    /// Follow `next` links from `seed` until the walk closes (returning the
    /// loop) or dead-ends on a completed face or an internal repeat
    /// (returning `None`).  `on_walk` is scratch space, cleared on exit.
    fn walk(&self, seed: HalfEdgeId, on_walk: &mut [bool]) -> Option<Vec<HalfEdgeId>> {
        let mut walk = vec![seed];
        on_walk[seed.0] = true;

        let mut current = self.graph.half_edge(seed).next;
        let closed = loop {
            if current == seed {
                break true;
            }
            if self.visited[current.0] || on_walk[current.0] {
                break false;
            }
            on_walk[current.0] = true;
            walk.push(current);
            current = self.graph.half_edge(current).next;
        };

        for &he in &walk {
            on_walk[he.0] = false;
        }
        closed.then_some(walk)
    }

    /// Longest face wins; the first discovered wins ties.
    fn select_outer(faces: &[Face]) -> Option<FaceId> {
        let mut outer: Option<FaceId> = None;
        for (index, face) in faces.iter().enumerate() {
            let longer = match outer {
                Some(best) => face.len() > faces[best.0].len(),
                None => true,
            };
            if longer {
                outer = Some(FaceId(index));
            }
        }
        outer
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

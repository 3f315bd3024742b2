//! Face enumeration and outer-boundary tracing for planar contiguity
//! graphs.
//!
//! Given a set of point locations (e.g. region centroids) and a symmetric
//! neighbor relation over them, this crate builds the planar graph's
//! rotation system — per point, the angular order of incident edges — and
//! partitions its directed half-edges into the closed loops bounding each
//! face of the subdivision.  The longest loop is the outer face; its
//! edges, taken undirected, bound the union of all regions.
//!
//! Two components, built bottom-up:
//!
//! * [`PlanarGraph`] — owns point coordinates and per-point half-edge
//!   fans, each half-edge annotated with a deterministic `next` successor
//!   chosen by angular sorting.  Pure construction from points and
//!   adjacency pairs.
//! * [`FaceTracer`] — consumes a graph and walks `next` links to
//!   partition all half-edges into disjoint faces, then selects the outer
//!   face by the longest-walk rule.
//!
//! The crate does no file, network, or drawing work: deriving adjacency
//! from source geometry and rendering or exporting the result belong to
//! the caller.  Input with self-intersecting straight-line geometry is not
//! rejected, but its face decomposition is undefined.
//!
//! ```
//! use facegraph::PlanarGraph;
//! use geo::Coord;
//!
//! let points = [
//!     Coord { x: 0.0, y: 0.0 },
//!     Coord { x: 1.0, y: 0.0 },
//!     Coord { x: 0.0, y: 1.0 },
//! ];
//! let graph = PlanarGraph::new(&points, &[(0, 1), (1, 2), (2, 0)])?;
//! let faces = graph.trace()?;
//!
//! // A triangle has two faces: its interior and the unbounded outside.
//! assert_eq!(faces.num_faces(), 2);
//! assert_eq!(faces.boundary_edges(&graph).len(), 3);
//! # Ok::<(), facegraph::GraphError>(())
//! ```

mod angle;
mod error;
mod graph;
mod ids;
mod trace;

pub use error::GraphError;
pub use graph::{HalfEdge, PlanarGraph};
pub use ids::{FaceId, HalfEdgeId, PointId};
pub use trace::{Face, FaceSet, FaceTracer};

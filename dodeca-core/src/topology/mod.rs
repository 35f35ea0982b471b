//! Dodecahedron edge topology.
//!
//! The 30 edges are generated by symmetry: five identical strips of six
//! edges, strip `s` rotated by `s` positions around every ring. The strip
//! order is also the physical wiring order of the LED strands, so the
//! generated sequence is significant and must not be sorted.

mod directed;

pub use directed::{successor_table, DirectedEdge, SuccessorEdges};

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TableError};
use crate::geometry::constants::{RINGS, RING_SIZE, VERTEX_COUNT};
use crate::geometry::Vertex3;

/// Number of strips
pub const STRIPS: usize = 5;

/// Edges per strip
pub const EDGES_PER_STRIP: usize = 6;

/// Total edge count
pub const EDGE_COUNT: usize = STRIPS * EDGES_PER_STRIP;

/// Incident edges per vertex
pub const VERTEX_DEGREE: usize = 3;

/// Relative tolerance when comparing edge lengths
const LENGTH_TOLERANCE: f64 = 1e-6;

/// An edge between two vertex indices
///
/// Stored in wiring direction (`v1` → `v2`); equality of the underlying
/// undirected edge is given by [`Edge::key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub v1: usize,
    pub v2: usize,
}

impl Edge {
    /// Create a new edge
    pub const fn new(v1: usize, v2: usize) -> Self {
        Self { v1, v2 }
    }

    /// Unordered key, smaller index first
    pub fn key(&self) -> (usize, usize) {
        (self.v1.min(self.v2), self.v1.max(self.v2))
    }

    /// Whether `v` is one of the endpoints
    pub fn touches(&self, v: usize) -> bool {
        self.v1 == v || self.v2 == v
    }
}

/// Flat vertex index of ring `ring`, position `pos` (taken modulo 5)
pub fn vertex_index(ring: usize, pos: usize) -> Result<usize> {
    if ring >= RINGS {
        return Err(TableError::RingIndexOutOfRange { ring });
    }
    Ok(ring * RING_SIZE + pos % RING_SIZE)
}

/// The six edges of one strip
///
/// In order: south cap edge, cap to ring 1, ring 1 to ring 2, ring 2 to
/// ring 3, north cap edge, and the connector from ring 2 back to the next
/// ring-1 vertex.
pub fn strip_edges(strip: usize) -> Result<[Edge; EDGES_PER_STRIP]> {
    let v1 = vertex_index(0, strip)?;
    let v2 = vertex_index(0, strip + 1)?;
    let v3 = vertex_index(1, strip + 1)?;
    let v4 = vertex_index(2, strip + 1)?;
    let v5 = vertex_index(3, strip + 1)?;
    let v6 = vertex_index(3, strip + 2)?;
    let v7 = vertex_index(1, strip + 2)?;

    Ok([
        Edge::new(v1, v2),
        Edge::new(v2, v3),
        Edge::new(v3, v4),
        Edge::new(v4, v5),
        Edge::new(v5, v6),
        Edge::new(v4, v7),
    ])
}

/// All 30 edges in wiring order
pub fn dodecahedron_edges() -> Result<Vec<Edge>> {
    let mut edges = Vec::with_capacity(EDGE_COUNT);
    for strip in 0..STRIPS {
        edges.extend(strip_edges(strip)?);
    }
    Ok(edges)
}

/// Check that `edges` is the edge set of a dodecahedron graph
///
/// 30 edges, valid endpoints, no self-loops, no repeated unordered pair,
/// every vertex of degree 3, and a single connected component.
pub fn validate_edges(edges: &[Edge]) -> Result<()> {
    if edges.len() != EDGE_COUNT {
        return Err(TableError::EdgeCount {
            expected: EDGE_COUNT,
            actual: edges.len(),
        });
    }

    let mut seen = HashSet::with_capacity(edges.len());
    let mut degree = [0usize; VERTEX_COUNT];
    for edge in edges {
        if edge.v1 == edge.v2 || edge.v1 >= VERTEX_COUNT || edge.v2 >= VERTEX_COUNT {
            return Err(TableError::InvalidEdge {
                a: edge.v1,
                b: edge.v2,
            });
        }
        if !seen.insert(edge.key()) {
            return Err(TableError::DuplicateEdge {
                a: edge.v1,
                b: edge.v2,
            });
        }
        degree[edge.v1] += 1;
        degree[edge.v2] += 1;
    }

    if let Some((vertex, &d)) = degree.iter().enumerate().find(|(_, &d)| d != VERTEX_DEGREE) {
        return Err(TableError::VertexDegree { vertex, degree: d });
    }

    let adjacency = build_adjacency(edges);
    let mut visited = [false; VERTEX_COUNT];
    let mut queue = VecDeque::from([0usize]);
    visited[0] = true;
    while let Some(v) = queue.pop_front() {
        for &n in &adjacency[v] {
            if !visited[n] {
                visited[n] = true;
                queue.push_back(n);
            }
        }
    }
    if visited.iter().any(|&v| !v) {
        return Err(TableError::Disconnected);
    }

    Ok(())
}

fn build_adjacency(edges: &[Edge]) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::with_capacity(VERTEX_DEGREE); VERTEX_COUNT];
    for edge in edges {
        adjacency[edge.v1].push(edge.v2);
        adjacency[edge.v2].push(edge.v1);
    }
    adjacency
}

/// The validated edge graph
#[derive(Debug, Clone)]
pub struct Topology {
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
}

impl Topology {
    /// Generate and validate the edge set
    pub fn build() -> Result<Self> {
        let edges = dodecahedron_edges()?;
        validate_edges(&edges)?;
        let adjacency = build_adjacency(&edges);
        debug!(edges = edges.len(), "generated edge topology");
        Ok(Self { edges, adjacency })
    }

    /// All edges in wiring order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edge by index
    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    /// The six edges of one strip
    pub fn strip(&self, strip: usize) -> Option<&[Edge]> {
        let start = strip.checked_mul(EDGES_PER_STRIP)?;
        self.edges.get(start..start + EDGES_PER_STRIP)
    }

    /// Neighbours of a vertex
    pub fn neighbors(&self, vertex: usize) -> Option<&[usize]> {
        self.adjacency.get(vertex).map(|v| v.as_slice())
    }

    /// Index of the edge joining `a` and `b`, if any
    pub fn edge_between(&self, a: usize, b: usize) -> Option<usize> {
        let key = Edge::new(a, b).key();
        self.edges.iter().position(|e| e.key() == key)
    }

    /// Face count by Euler's formula, `F = 2 − V + E`
    pub fn face_count(&self) -> usize {
        2 + self.edges.len() - VERTEX_COUNT
    }

    /// Check the edges against vertex positions
    ///
    /// Every edge must have the minimum vertex-to-vertex distance, and every
    /// vertex pair at that distance must be an edge.
    pub fn check_geometry(&self, vertices: &[Vertex3]) -> Result<()> {
        let mut shortest = f64::INFINITY;
        for (i, a) in vertices.iter().enumerate() {
            for b in &vertices[i + 1..] {
                shortest = shortest.min(a.distance(b));
            }
        }
        let tolerance = shortest * LENGTH_TOLERANCE;

        let keys: HashSet<_> = self.edges.iter().map(Edge::key).collect();
        for (i, a) in vertices.iter().enumerate() {
            for (j, b) in vertices.iter().enumerate().skip(i + 1) {
                let is_short = (a.distance(b) - shortest).abs() <= tolerance;
                if is_short != keys.contains(&(i, j)) {
                    return Err(TableError::EdgeGeometry { a: i, b: j });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Dodecahedron;

    #[test]
    fn test_vertex_index() {
        assert_eq!(vertex_index(0, 0).unwrap(), 0);
        assert_eq!(vertex_index(2, 3).unwrap(), 13);
        assert_eq!(vertex_index(3, 6).unwrap(), 16);
        assert_eq!(vertex_index(1, 5).unwrap(), 5);
        assert!(matches!(
            vertex_index(4, 0),
            Err(TableError::RingIndexOutOfRange { ring: 4 })
        ));
    }

    #[test]
    fn test_first_strip() {
        let strip = strip_edges(0).unwrap();
        let pairs: Vec<_> = strip.iter().map(|e| (e.v1, e.v2)).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 6), (6, 11), (11, 16), (16, 17), (11, 7)]);
    }

    #[test]
    fn test_last_strip_wraps() {
        let strip = strip_edges(4).unwrap();
        let pairs: Vec<_> = strip.iter().map(|e| (e.v1, e.v2)).collect();
        assert_eq!(pairs, vec![(4, 0), (0, 5), (5, 10), (10, 15), (15, 16), (10, 6)]);
    }

    #[test]
    fn test_generated_edges_validate() {
        let edges = dodecahedron_edges().unwrap();
        assert_eq!(edges.len(), EDGE_COUNT);
        validate_edges(&edges).unwrap();
    }

    #[test]
    fn test_every_vertex_degree_three() {
        let topo = Topology::build().unwrap();
        for v in 0..VERTEX_COUNT {
            assert_eq!(topo.neighbors(v).unwrap().len(), VERTEX_DEGREE, "vertex {}", v);
        }
        assert!(topo.neighbors(VERTEX_COUNT).is_none());
    }

    #[test]
    fn test_validate_rejects_duplicate() {
        let mut edges = dodecahedron_edges().unwrap();
        edges[29] = Edge::new(edges[0].v2, edges[0].v1);
        assert!(matches!(
            validate_edges(&edges),
            Err(TableError::DuplicateEdge { a: 1, b: 0 })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_edges() {
        let mut edges = dodecahedron_edges().unwrap();
        edges[3] = Edge::new(4, 4);
        assert!(matches!(validate_edges(&edges), Err(TableError::InvalidEdge { .. })));

        edges[3] = Edge::new(4, 20);
        assert!(matches!(validate_edges(&edges), Err(TableError::InvalidEdge { .. })));

        let short = dodecahedron_edges().unwrap()[..29].to_vec();
        assert!(matches!(
            validate_edges(&short),
            Err(TableError::EdgeCount { expected: 30, actual: 29 })
        ));
    }

    #[test]
    fn test_validate_rejects_wrong_degree() {
        let mut edges = dodecahedron_edges().unwrap();
        // Re-route {0, 1} to {0, 2}: vertex 1 drops to degree 2
        edges[0] = Edge::new(0, 2);
        assert!(matches!(
            validate_edges(&edges),
            Err(TableError::VertexDegree { vertex: 1, degree: 2 })
        ));
    }

    #[test]
    fn test_validate_rejects_disconnected() {
        // Two disjoint pentagonal prisms: 30 edges, degree 3 everywhere,
        // but two components.
        let mut edges = Vec::new();
        for base in [0, 10] {
            for i in 0..5 {
                edges.push(Edge::new(base + i, base + (i + 1) % 5));
                edges.push(Edge::new(base + 5 + i, base + 5 + (i + 1) % 5));
                edges.push(Edge::new(base + i, base + 5 + i));
            }
        }
        assert_eq!(edges.len(), EDGE_COUNT);
        assert!(matches!(validate_edges(&edges), Err(TableError::Disconnected)));
    }

    #[test]
    fn test_euler_faces() {
        let topo = Topology::build().unwrap();
        assert_eq!(topo.face_count(), 12);
    }

    #[test]
    fn test_strips_and_lookup() {
        let topo = Topology::build().unwrap();
        assert_eq!(topo.strip(1).unwrap()[0], Edge::new(1, 2));
        assert!(topo.strip(5).is_none());
        assert_eq!(topo.edge_between(7, 11), Some(5));
        assert_eq!(topo.edge_between(0, 19), None);
    }

    #[test]
    fn test_edges_match_geometry() {
        let topo = Topology::build().unwrap();
        let solid = Dodecahedron::build().unwrap();
        topo.check_geometry(solid.vertices()).unwrap();
    }

    #[test]
    fn test_geometry_check_catches_rewired_edges() {
        let solid = Dodecahedron::build().unwrap();
        let mut topo = Topology::build().unwrap();
        // 0 and 2 are both on the south cap but not adjacent
        topo.edges[0] = Edge::new(0, 2);
        assert!(matches!(
            topo.check_geometry(solid.vertices()),
            Err(TableError::EdgeGeometry { .. })
        ));
    }
}

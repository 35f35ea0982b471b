//! Directed edges and the successor table.
//!
//! An animation walking the wireframe leaves each edge through one of its
//! two endpoints and must then turn left or right onto one of the two
//! other edges at that vertex. The successor table precomputes both turns
//! for both travel directions of every edge, using only integer arithmetic
//! on the quantized vertex table.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Edge, Topology};
use crate::error::{Result, TableError};
use crate::fixed::FIXMAX;
use crate::geometry::Vertex3i;

/// An edge together with a travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectedEdge {
    /// Index into the edge table
    pub edge: usize,
    /// Travelling from `v2` to `v1`
    pub backward: bool,
}

impl DirectedEdge {
    /// Create a new directed edge
    pub const fn new(edge: usize, backward: bool) -> Self {
        Self { edge, backward }
    }

    /// The same edge travelled the other way
    pub const fn uturn(&self) -> Self {
        Self::new(self.edge, !self.backward)
    }

    /// Start and end vertex in travel order
    pub fn endpoints(&self, topology: &Topology) -> Option<(usize, usize)> {
        let edge = topology.edge(self.edge)?;
        Some(oriented(edge, self.backward))
    }

    /// Vertex the edge is entered from
    pub fn start(&self, topology: &Topology) -> Option<usize> {
        self.endpoints(topology).map(|(start, _)| start)
    }

    /// Vertex the edge is left through
    pub fn end(&self, topology: &Topology) -> Option<usize> {
        self.endpoints(topology).map(|(_, end)| end)
    }

    /// Next edge when turning left or right at the end of this one
    pub fn successor(&self, left: bool, table: &[SuccessorEdges]) -> Option<DirectedEdge> {
        let s = table.get(self.edge)?;
        Some(match (self.backward, left) {
            (false, true) => s.left_forward,
            (false, false) => s.right_forward,
            (true, true) => s.left_backward,
            (true, false) => s.right_backward,
        })
    }
}

/// The four possible turns off one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessorEdges {
    pub left_forward: DirectedEdge,
    pub right_forward: DirectedEdge,
    pub left_backward: DirectedEdge,
    pub right_backward: DirectedEdge,
}

fn oriented(edge: &Edge, backward: bool) -> (usize, usize) {
    if backward {
        (edge.v2, edge.v1)
    } else {
        (edge.v1, edge.v2)
    }
}

type Vec3 = [i64; 3];

fn widen(v: &Vertex3i) -> Vec3 {
    [i64::from(v.x), i64::from(v.y), i64::from(v.z)]
}

fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: Vec3, b: Vec3) -> i64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn div(a: Vec3, n: i64) -> Vec3 {
    [a[0] / n, a[1] / n, a[2] / n]
}

/// Sorts the candidates at one vertex into (left, right)
///
/// `right` is the normal of the plane through the origin and the edge,
/// pointing to the right of the travel direction. Exactly one candidate
/// must lie on each side of that plane.
fn split_sides(
    edge: usize,
    right: Vec3,
    candidates: &[(DirectedEdge, Vec3)],
) -> Result<(DirectedEdge, DirectedEdge)> {
    let mut left_turn = None;
    let mut right_turn = None;
    for &(candidate, direction) in candidates {
        let slot = if dot(right, direction) > 0 {
            &mut right_turn
        } else {
            &mut left_turn
        };
        if slot.replace(candidate).is_some() {
            return Err(TableError::SuccessorSides { edge });
        }
    }
    match (left_turn, right_turn) {
        (Some(l), Some(r)) => Ok((l, r)),
        _ => Err(TableError::SuccessorSides { edge }),
    }
}

/// Build the successor table for every edge
///
/// For edge `v1 → v2` with midpoint `c`, the right-hand side going forward
/// is the direction of `c × (v2 − v1) / 32768`, and going backward of
/// `c × (v1 − v2) / 32768`. Each other edge at `v2` is oriented away from
/// `v2` and classified by the sign of its dot product with the forward
/// normal; likewise at `v1` with the backward normal.
pub fn successor_table(topology: &Topology, vertices: &[Vertex3i]) -> Result<Vec<SuccessorEdges>> {
    let edges = topology.edges();
    let position = |edge: &Edge, v: usize| {
        vertices
            .get(v)
            .map(widen)
            .ok_or(TableError::InvalidEdge { a: edge.v1, b: edge.v2 })
    };
    let scale = i64::from(FIXMAX);

    let mut table = Vec::with_capacity(edges.len());
    for (index, edge) in edges.iter().enumerate() {
        let p1 = position(edge, edge.v1)?;
        let p2 = position(edge, edge.v2)?;
        let center = div([p1[0] + p2[0], p1[1] + p2[1], p1[2] + p2[2]], 2);
        let right_forward = div(cross(center, sub(p2, p1)), scale);
        let right_backward = div(cross(center, sub(p1, p2)), scale);

        let mut at_start = Vec::with_capacity(2);
        let mut at_end = Vec::with_capacity(2);
        for (other_index, other) in edges.iter().enumerate() {
            if other_index == index {
                continue;
            }
            for (vertex, bucket) in [(edge.v1, &mut at_start), (edge.v2, &mut at_end)] {
                if other.touches(vertex) {
                    let turn = DirectedEdge::new(other_index, other.v2 == vertex);
                    let (from, to) = oriented(other, turn.backward);
                    let direction = sub(position(other, to)?, position(other, from)?);
                    bucket.push((turn, direction));
                }
            }
        }

        let (left_forward, right_forward) = split_sides(index, right_forward, &at_end)?;
        let (left_backward, right_backward) = split_sides(index, right_backward, &at_start)?;
        table.push(SuccessorEdges {
            left_forward,
            right_forward,
            left_backward,
            right_backward,
        });
    }

    debug!(edges = table.len(), "built successor table");
    Ok(table)
}

//! Walking the wireframe with the successor table

use std::collections::HashSet;

use dodeca_core::topology::{successor_table, DirectedEdge, SuccessorEdges, Topology};
use dodeca_core::Dodecahedron;

fn setup() -> (Topology, Vec<SuccessorEdges>) {
    let topology = Topology::build().expect("Failed to build topology");
    let vertices = Dodecahedron::build()
        .and_then(|d| d.quantized())
        .expect("Failed to build vertices");
    let table = successor_table(&topology, &vertices).expect("Failed to build successors");
    (topology, table)
}

fn walk(start: DirectedEdge, left: bool, steps: usize, table: &[SuccessorEdges]) -> Vec<DirectedEdge> {
    let mut path = vec![start];
    let mut current = start;
    for _ in 0..steps {
        current = current.successor(left, table).expect("edge index out of range");
        path.push(current);
    }
    path
}

#[test]
fn constant_turns_circle_a_pentagon() {
    let (_, table) = setup();
    for edge in 0..table.len() {
        for backward in [false, true] {
            for left in [true, false] {
                let start = DirectedEdge::new(edge, backward);
                let path = walk(start, left, 5, &table);
                assert_eq!(path[5], start, "edge {} backward {} left {}", edge, backward, left);
                let distinct: HashSet<_> = path[..5].iter().map(|d| d.edge).collect();
                assert_eq!(distinct.len(), 5);
            }
        }
    }
}

#[test]
fn left_loops_are_the_twelve_faces() {
    let (topology, table) = setup();
    let mut faces = HashSet::new();
    for edge in 0..table.len() {
        for backward in [false, true] {
            let path = walk(DirectedEdge::new(edge, backward), true, 4, &table);
            let mut face: Vec<usize> = path.iter().map(|d| d.edge).collect();
            face.sort_unstable();
            faces.insert(face);
        }
    }
    assert_eq!(faces.len(), topology.face_count());
}

#[test]
fn walk_is_continuous() {
    let (topology, table) = setup();
    let path = walk(DirectedEdge::new(0, false), true, 40, &table);
    for pair in path.windows(2) {
        assert_eq!(pair[0].end(&topology), pair[1].start(&topology));
    }
}

#[test]
fn alternating_turns_never_reverse() {
    let (_, table) = setup();
    let mut current = DirectedEdge::new(7, false);
    for step in 0..60 {
        let next = current.successor(step % 2 == 0, &table).unwrap();
        assert_ne!(next, current.uturn());
        assert_ne!(next.edge, current.edge);
        current = next;
    }
}

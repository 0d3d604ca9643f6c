// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A one-stroke puzzle: an ordered edge list and its remaining-use total.
//!
//! Storage order matters. It fixes the order of starting vertices and of
//! reachable neighbours, and therefore the order in which solutions are found.

use serde::Serialize;

use super::edge::{Edge, EdgeId, VertexId};

/// An ordered multigraph whose edges must each be walked `count` times.
///
/// Invariant: `total_remaining` equals the sum of all edge counts at every
/// observation point. The puzzle is solved exactly when it reaches zero.
///
/// `Clone` is the deep copy handed to each search task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Puzzle {
    edges: Vec<Edge>,
    #[serde(skip)]
    total_remaining: u32,
}

impl Puzzle {
    /// Build a puzzle from its edge list, deriving the remaining-use total.
    pub fn new(edges: Vec<Edge>) -> Self {
        let total_remaining = edges.iter().map(|e| u32::from(e.count)).sum();
        Self {
            edges,
            total_remaining,
        }
    }

    /// All edges in storage order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The edge stored at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    /// Number of edge uses still required.
    pub fn total_remaining(&self) -> u32 {
        self.total_remaining
    }

    /// Whether every required edge use has been consumed.
    pub fn is_solved(&self) -> bool {
        self.total_remaining == 0
    }

    /// Distinct vertices touched by any edge, in first-seen order.
    ///
    /// Exhausted edges still contribute their endpoints.
    pub fn starting_vertices(&self) -> Vec<VertexId> {
        let mut vertices = Vec::new();
        for edge in &self.edges {
            push_unique(&mut vertices, edge.point_a);
            push_unique(&mut vertices, edge.point_b);
        }
        vertices
    }

    /// Neighbours that can be reached from `from` in one step right now.
    ///
    /// Edges are scanned in storage order; for each edge the `point_a` side is
    /// considered before the `point_b` side. Parallel edges to the same
    /// neighbour collapse into one entry.
    pub fn reachable_from(&self, from: VertexId) -> Vec<VertexId> {
        let mut reachable = Vec::new();
        for edge in &self.edges {
            if edge.point_a == from && edge.can_traverse(edge.point_a, edge.point_b) {
                push_unique(&mut reachable, edge.point_b);
            }
            if edge.point_b == from && edge.can_traverse(edge.point_b, edge.point_a) {
                push_unique(&mut reachable, edge.point_a);
            }
        }
        reachable
    }

    /// First edge in storage order joining `a` and `b`, in either orientation.
    ///
    /// The edge's count and direction are not considered.
    pub fn find_edge_between(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.edges.iter().position(|e| e.joins(a, b))
    }

    /// The edge the search consumes to step `from → to`.
    ///
    /// Among edges joining the two vertices that can currently be walked in
    /// that direction, a one-way edge is preferred over a two-way one, and
    /// ties go to storage order. Spending the constrained edge first never
    /// loses a solution, since a two-way edge can stand in for it later.
    pub fn find_traversable_edge(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        let mut bidirectional = None;
        for (id, edge) in self.edges.iter().enumerate() {
            if !edge.joins(from, to) || !edge.can_traverse(from, to) {
                continue;
            }
            if edge.direction.unidirectional {
                return Some(id);
            }
            bidirectional.get_or_insert(id);
        }
        bidirectional
    }

    /// Consume one use of edge `id` while stepping `from → to`.
    ///
    /// # Panics
    ///
    /// Panics if the edge is exhausted, naming the edge and the step.
    pub fn visit_edge(&mut self, id: EdgeId, from: VertexId, to: VertexId) {
        let edge = &mut self.edges[id];
        assert!(
            edge.count > 0,
            "invariant violated: edge #{} ({}-{}) is exhausted but was visited stepping {} -> {}",
            id,
            edge.point_a,
            edge.point_b,
            from,
            to
        );
        edge.visit();
        self.total_remaining -= 1;
    }

    /// Restore an edge counter (trail rewind only).
    pub(crate) fn set_edge_count(&mut self, id: EdgeId, count: u16) {
        self.edges[id].count = count;
    }

    /// Restore the remaining-use total (trail rewind only).
    pub(crate) fn set_total_remaining(&mut self, total: u32) {
        self.total_remaining = total;
    }
}

fn push_unique(vertices: &mut Vec<VertexId>, v: VertexId) {
    if !vertices.contains(&v) {
        vertices.push(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Puzzle {
        Puzzle::new(vec![Edge::new(1, 2, 1), Edge::new(2, 3, 2), Edge::new(3, 1, 3)])
    }

    #[test]
    fn test_total_remaining_is_sum_of_counts() {
        assert_eq!(triangle().total_remaining(), 6);
        assert!(!triangle().is_solved());
        assert!(Puzzle::new(vec![]).is_solved());
    }

    #[test]
    fn test_starting_vertices_first_seen_order() {
        let p = Puzzle::new(vec![Edge::new(3, 1, 1), Edge::new(1, 2, 0), Edge::new(2, 3, 1)]);
        assert_eq!(p.starting_vertices(), vec![3, 1, 2]);
    }

    #[test]
    fn test_find_edge_between_either_orientation() {
        let p = triangle();
        assert_eq!(p.find_edge_between(1, 2), Some(0));
        assert_eq!(p.find_edge_between(3, 2), Some(1));
        assert_eq!(p.edge(1).count, 2);
        assert_eq!(p.find_edge_between(1, 4), None);
    }

    #[test]
    fn test_reachable_skips_exhausted_edges() {
        let p = Puzzle::new(vec![Edge::new(1, 2, 1), Edge::new(2, 3, 1), Edge::new(1, 3, 0)]);
        assert_eq!(p.reachable_from(1), vec![2]);
        assert_eq!(p.reachable_from(2), vec![1, 3]);
    }

    #[test]
    fn test_reachable_collapses_parallel_edges() {
        let p = Puzzle::new(vec![Edge::new(1, 2, 1), Edge::new(2, 1, 1), Edge::new(1, 3, 1)]);
        assert_eq!(p.reachable_from(1), vec![2, 3]);
    }

    #[test]
    fn test_reachable_respects_direction() {
        let p = Puzzle::new(vec![Edge::one_way(1, 2, 1), Edge::new(2, 3, 1)]);
        assert_eq!(p.reachable_from(1), vec![2]);
        assert_eq!(p.reachable_from(2), vec![3]);
    }

    #[test]
    fn test_visit_edge_updates_total() {
        let mut p = Puzzle::new(vec![Edge::new(1, 2, 2)]);
        p.visit_edge(0, 1, 2);
        assert_eq!(p.total_remaining(), 1);
        assert_eq!(p.edge(0).count, 1);
    }

    #[test]
    #[should_panic(expected = "edge #0 (1-2) is exhausted but was visited stepping 2 -> 1")]
    fn test_visit_exhausted_edge_names_step() {
        let mut p = Puzzle::new(vec![Edge::new(1, 2, 0)]);
        p.visit_edge(0, 2, 1);
    }

    #[test]
    fn test_find_traversable_prefers_one_way() {
        let p = Puzzle::new(vec![Edge::new(1, 2, 1), Edge::one_way(1, 2, 1)]);
        assert_eq!(p.find_traversable_edge(1, 2), Some(1));
        assert_eq!(p.find_traversable_edge(2, 1), Some(0));
    }

    #[test]
    fn test_find_traversable_skips_exhausted() {
        let p = Puzzle::new(vec![Edge::new(1, 2, 0), Edge::new(2, 1, 1)]);
        assert_eq!(p.find_edge_between(1, 2), Some(0));
        assert_eq!(p.find_traversable_edge(1, 2), Some(1));
        assert_eq!(p.find_traversable_edge(1, 3), None);
    }

    #[test]
    fn test_clone_is_deep() {
        let p = triangle();
        let mut copy = p.clone();
        copy.visit_edge(0, 1, 2);
        assert_eq!(p.edge(0).count, 1);
        assert_eq!(p.total_remaining(), 6);
        assert_eq!(copy.total_remaining(), 5);
    }

    #[test]
    fn test_serialize_shape() {
        let p = Puzzle::new(vec![Edge::new(1, 2, 1)]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(
            json,
            r#"{"Edges":[{"PointA":1,"PointB":2,"Count":1,"Direction":{"From":0,"To":0,"Unidirectional":false}}]}"#
        );
    }
}

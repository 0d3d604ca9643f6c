// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Multigraph edges with a remaining-use counter.
//!
//! An edge joins two vertices and must be walked `count` more times. The
//! endpoints and the [`Direction`] are fixed once the edge is built; `count`
//! is the only field the search mutates.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Vertex identifier (16 bits in the puzzle file format).
pub type VertexId = u16;

/// Index of an edge within its puzzle's storage order.
///
/// The search threads an `EdgeId` rather than an endpoint pair so that the
/// slot it restores on backtrack is exactly the slot it consumed.
pub type EdgeId = usize;

/// An edge of a one-stroke puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Edge {
    pub point_a: VertexId,
    pub point_b: VertexId,
    /// Number of times this edge must still be traversed.
    #[serde(default)]
    pub count: u16,
    #[serde(default)]
    pub direction: Direction,
}

impl Edge {
    /// Create a bidirectional edge.
    pub fn new(point_a: VertexId, point_b: VertexId, count: u16) -> Self {
        Self {
            point_a,
            point_b,
            count,
            direction: Direction::bidirectional(),
        }
    }

    /// Create an edge that may only be walked `point_a → point_b`.
    pub fn one_way(point_a: VertexId, point_b: VertexId, count: u16) -> Self {
        Self {
            point_a,
            point_b,
            count,
            direction: Direction::one_way(point_a, point_b),
        }
    }

    /// Whether this edge may be walked `from → to` right now.
    ///
    /// False once the edge is exhausted. The caller is responsible for `from`
    /// and `to` being this edge's endpoints.
    #[inline]
    pub fn can_traverse(&self, from: VertexId, to: VertexId) -> bool {
        self.count > 0 && self.direction.allows(from, to)
    }

    /// Whether `{a, b}` is this edge's unordered endpoint pair.
    #[inline]
    pub fn joins(&self, a: VertexId, b: VertexId) -> bool {
        (self.point_a == a && self.point_b == b) || (self.point_a == b && self.point_b == a)
    }

    /// Whether `v` is one of this edge's endpoints.
    #[inline]
    pub fn touches(&self, v: VertexId) -> bool {
        self.point_a == v || self.point_b == v
    }

    /// Consume one use of this edge.
    ///
    /// # Panics
    ///
    /// Panics if the edge is already exhausted. Reachability and consumption
    /// have gone out of sync and no further result can be trusted.
    pub fn visit(&mut self) {
        assert!(
            self.count > 0,
            "trying to visit already exhausted edge {}-{}",
            self.point_a,
            self.point_b
        );
        self.count -= 1;
    }
}

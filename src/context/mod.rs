// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context for one stroke search.
//!
//! A SearchContext owns everything a single search task mutates:
//! - its private copy of the puzzle (edge counters and remaining total)
//! - the in-progress path
//! - the trail that undoes both on backtrack
//! - statistics
//!
//! Nothing in a context is shared, so one context per starting vertex can run
//! on its own thread with no locking.

use crate::graph::{EdgeId, Puzzle, VertexId};
use crate::state::{Counters, Statistics};
use crate::trail::{Trail, TrailRestore, TrailSlot};

/// Path slots reserved up front; longer walks grow the path on demand.
const INITIAL_PATH: usize = 256;

/// Search context combining a puzzle copy, path, and trail.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     puzzle: Puzzle,          // Owned deep copy, counters mutate
///     path: Vec<VertexId>,     // Grows on descent, truncated on rewind
///     trail: Trail,            // Undo log for both of the above
///     statistics: Statistics,  // Monotonic, not trailed
/// }
/// ```
///
/// # Example
///
/// ```
/// use stroke_search::context::SearchContext;
/// use stroke_search::graph::{Edge, Puzzle};
///
/// let mut ctx = SearchContext::new(Puzzle::new(vec![Edge::new(1, 2, 1)]), 1);
/// let checkpoint = ctx.trail.len();
/// ctx.traverse(2);
/// assert_eq!(ctx.path(), &[1, 2]);
/// assert!(ctx.puzzle().is_solved());
///
/// ctx.rewind_to(checkpoint);
/// assert_eq!(ctx.path(), &[1]);
/// assert_eq!(ctx.puzzle().total_remaining(), 1);
/// ```
#[derive(Debug)]
pub struct SearchContext {
    puzzle: Puzzle,
    path: Vec<VertexId>,
    /// Trail for backtracking
    pub trail: Trail,
    /// Counters for this search
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context that walks `puzzle` starting from `start`.
    ///
    /// The start vertex is the first element of the path.
    pub fn new(puzzle: Puzzle, start: VertexId) -> Self {
        let edge_uses = puzzle.total_remaining() as usize;
        let mut path = Vec::with_capacity(edge_uses.min(INITIAL_PATH) + 1);
        path.push(start);
        Self {
            puzzle,
            path,
            trail: Trail::with_capacity(edge_uses),
            statistics: Statistics::new(),
        }
    }

    /// This context's puzzle copy in its current state.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Give the puzzle copy back, e.g. to check it was fully restored.
    pub fn into_puzzle(self) -> Puzzle {
        self.puzzle
    }

    /// The walk so far, starting vertex first.
    pub fn path(&self) -> &[VertexId] {
        &self.path
    }

    /// The vertex the walk is currently at.
    pub fn current_vertex(&self) -> VertexId {
        // The start vertex is pushed at construction and the trail never
        // truncates below the length it had when first recorded.
        self.path[self.path.len() - 1]
    }

    /// Number of edges consumed so far.
    pub fn edges_walked(&self) -> usize {
        self.path.len() - 1
    }

    /// Step from the current vertex to `to`, consuming one edge use.
    ///
    /// The edge counter, the remaining total, and the path length are all
    /// recorded on the trail first. Returns the consumed edge.
    ///
    /// # Panics
    ///
    /// Panics if no edge can currently carry the step. The neighbour was
    /// offered by `reachable_from`, so this means the two have drifted apart.
    pub fn traverse(&mut self, to: VertexId) -> EdgeId {
        let from = self.current_vertex();
        let Some(edge_id) = self.puzzle.find_traversable_edge(from, to) else {
            panic!(
                "invariant violated: {} was offered as reachable from {} but no edge can carry the step",
                to, from
            );
        };

        let edge_count = self.puzzle.edge(edge_id).count;
        self.trail
            .record_change(TrailSlot::EdgeCount(edge_id), u64::from(edge_count));
        self.trail.record_change(
            TrailSlot::TotalRemaining,
            u64::from(self.puzzle.total_remaining()),
        );
        self.trail
            .record_change(TrailSlot::PathLength, self.path.len() as u64);

        self.puzzle.visit_edge(edge_id, from, to);
        self.path.push(to);
        self.statistics.increment_counter(Counters::EdgeVisits);
        edge_id
    }

    /// Rewind the trail to `position`, restoring puzzle counters and path.
    pub fn rewind_to(&mut self, position: usize) {
        let Self {
            puzzle,
            path,
            trail,
            ..
        } = self;
        trail.rewind_to(position, &mut Restorer { puzzle, path });
    }
}

/// Borrowed view of the trailed parts of a context.
///
/// Split out so the trail can be borrowed mutably alongside the state it
/// restores.
struct Restorer<'a> {
    puzzle: &'a mut Puzzle,
    path: &'a mut Vec<VertexId>,
}

impl TrailRestore for Restorer<'_> {
    fn restore(&mut self, slot: TrailSlot, old_value: u64) {
        match slot {
            TrailSlot::EdgeCount(id) => self.puzzle.set_edge_count(id, old_value as u16),
            TrailSlot::TotalRemaining => self.puzzle.set_total_remaining(old_value as u32),
            TrailSlot::PathLength => self.path.truncate(old_value as usize),
        }
    }
}

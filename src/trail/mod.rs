// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the stroke search.
//!
//! Every mutation of search state records the slot it touched and the value
//! it overwrote. Rewinding to an earlier trail length replays those records
//! newest first, so each slot gets back exactly the value it held when the
//! trail was that long. The engine keeps the positions it needs on its own
//! stack.

use crate::graph::EdgeId;

/// Steps of trail space reserved up front; deeper searches grow on demand.
const INITIAL_STEPS: usize = 256;

/// A piece of search state that the trail can restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailSlot {
    /// Remaining-use counter of one edge.
    EdgeCount(EdgeId),
    /// The puzzle's remaining-use total.
    TotalRemaining,
    /// Length of the in-progress path.
    PathLength,
}

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy)]
struct TrailEntry {
    slot: TrailSlot,
    /// The value before the change (stored as u64)
    old_value: u64,
}

/// State that can be put back from trail entries.
///
/// Implemented by the search context, which owns both the trail and the
/// state the trail describes.
pub trait TrailRestore {
    /// Write `old_value` back into `slot`.
    fn restore(&mut self, slot: TrailSlot, old_value: u64);
}

/// The trail system for backtracking.
///
/// Each search context owns its own trail, so independent searches running
/// in parallel never share one.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trail for a search that consumes up to `edge_uses` edges.
    ///
    /// Each consumed edge records three entries. Only a bounded prefix is
    /// reserved, since most searches dead-end long before using every edge.
    pub fn with_capacity(edge_uses: usize) -> Self {
        Self {
            entries: Vec::with_capacity(edge_uses.min(INITIAL_STEPS) * 3),
        }
    }

    /// Rewind to trail length `position`, restoring `target`.
    pub fn rewind_to<R: TrailRestore>(&mut self, position: usize, target: &mut R) {
        while self.entries.len() > position {
            if let Some(entry) = self.entries.pop() {
                target.restore(entry.slot, entry.old_value);
            }
        }
    }

    /// Record a state change in the trail.
    pub(crate) fn record_change(&mut self, slot: TrailSlot, old_value: u64) {
        self.entries.push(TrailEntry { slot, old_value });
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

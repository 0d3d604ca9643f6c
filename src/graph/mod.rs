// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Graph model for one-stroke puzzles.
//!
//! This module contains the value types the search operates on:
//! - Direction: Optional one-way constraint on an edge
//! - Edge: Two endpoints, a remaining-use counter, and a Direction
//! - Puzzle: Ordered edge list plus the derived total of remaining uses
//!
//! Topology (endpoints, direction) never changes after construction. Only the
//! use counters change, and only on a private copy owned by one search task.

pub mod direction;
pub mod edge;
pub mod puzzle;

// Re-export for convenience
pub use direction::Direction;
pub use edge::{Edge, EdgeId, VertexId};
pub use puzzle::Puzzle;

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive solver for one-stroke drawing puzzles.
//!
//! A puzzle is a multigraph whose edges each carry a number of required
//! traversals and, optionally, a one-way restriction. A solution is a walk
//! that consumes every required traversal exactly once, in one continuous
//! stroke. The solver finds all of them.
//!
//! ```
//! use stroke_search::graph::{Edge, Puzzle};
//!
//! let puzzle = Puzzle::new(vec![
//!     Edge::one_way(1, 2, 1),
//!     Edge::new(2, 3, 1),
//!     Edge::new(3, 1, 1),
//! ]);
//! let solutions = stroke_search::solve(&puzzle);
//! assert_eq!(solutions.into_inner(), vec![vec![1, 2, 3, 1], vec![2, 3, 1, 2], vec![3, 1, 2, 3]]);
//! ```
//!
//! # Architecture
//!
//! ## Search
//!
//! Each search runs a short predicate program on a backtracking engine:
//!
//! 1. **StrokePredicate**: one round per step, choosing the next neighbour
//! 2. **Counting**: tallies the solution
//! 3. **ReportPredicate**: hands the finished walk to a sink
//! 4. **FailPredicate**: forces backtracking into the next alternative
//!
//! Every step is recorded on a trail (edge counter, remaining total, path
//! length) so backtracking restores state exactly, with no recursion.
//!
//! ## Parallelization
//!
//! The solver runs one independent search per starting vertex on a rayon
//! pool. Each search owns a private copy of the puzzle, so there is no shared
//! mutable state, and results are merged in starting-vertex order.
//!
//! ## Around the core
//!
//! - [`loader`]: JSON puzzle files
//! - [`catalog`]: named puzzles confined to one directory
//! - [`render`]: clean and JSON output
//! - [`logging`]: `tracing` setup for the binary

pub mod catalog;
pub mod context;
pub mod engine;
pub mod errors;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod predicates;
pub mod render;
pub mod sink;
pub mod solver;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use errors::{CatalogError, PuzzleError, SolveError};
pub use graph::{Direction, Edge, Puzzle};
pub use sink::Solutions;
pub use solver::{count, solve, Solver, SolverConfig};
pub use trail::Trail;

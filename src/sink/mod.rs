// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Destinations for completed strokes.
//!
//! A search task reports every solving walk to a [`SolutionSink`]. The task
//! owns its sink outright; the solver only sees sinks again after every task
//! has finished, when it merges their outputs in starting-vertex order.
//!
//! Two sinks exist:
//! - [`Collector`] keeps a copy of every path
//! - [`Counter`] keeps only a tally, for when the paths themselves are not needed

pub mod solutions;

pub use solutions::{Solution, Solutions};

use std::fmt::Debug;

use crate::graph::VertexId;

/// Receiver of solving walks for one search task.
pub trait SolutionSink: Debug + Default + Send {
    /// What a finished sink yields, and what merged sinks yield.
    type Output: Send;

    /// Record one complete stroke.
    ///
    /// `path` is the engine's working buffer; implementations must copy
    /// anything they keep.
    fn record(&mut self, path: &[VertexId]);

    /// Consume the sink, yielding what it gathered.
    fn finish(self) -> Self::Output;

    /// Combine per-task outputs, given in task order, into one.
    fn merge(parts: Vec<Self::Output>) -> Self::Output;
}

/// Sink that stores every reported path in discovery order.
#[derive(Debug, Default)]
pub struct Collector {
    solutions: Vec<Solution>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths recorded so far.
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }
}

impl SolutionSink for Collector {
    type Output = Solutions;

    fn record(&mut self, path: &[VertexId]) {
        self.solutions.push(path.to_vec());
    }

    fn finish(self) -> Solutions {
        Solutions::from(self.solutions)
    }

    fn merge(parts: Vec<Solutions>) -> Solutions {
        parts.into_iter().flatten().collect()
    }
}

/// Sink that only counts reported paths.
#[derive(Debug, Default)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths recorded so far.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl SolutionSink for Counter {
    type Output = u64;

    fn record(&mut self, _path: &[VertexId]) {
        self.count += 1;
    }

    fn finish(self) -> u64 {
        self.count
    }

    fn merge(parts: Vec<u64>) -> u64 {
        parts.into_iter().sum()
    }
}

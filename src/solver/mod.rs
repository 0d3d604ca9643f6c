// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Orchestrates one search per starting vertex and merges the results.
//!
//! # Parallelization
//!
//! - The caller's puzzle is only read: once to list starting vertices, then
//!   once per task to take a private copy
//! - Each task gets its own [`SearchContext`] and its own sink, so the search
//!   itself shares no mutable state and takes no locks
//! - Tasks run on a rayon pool; the indexed `collect` joins them and keeps
//!   results in starting-vertex order regardless of which task finishes first
//!
//! The join is scoped to a single `solve`/`count` call, so concurrent calls
//! never wait on each other's tasks.
//!
//! A panic inside any task (an exhausted edge being visited) is re-raised on
//! the calling thread once the fan-out joins.

pub mod config;

pub use config::SolverConfig;

use rayon::prelude::*;
use tracing::{debug, debug_span, info};

use crate::context::SearchContext;
use crate::engine::EngineBuilder;
use crate::errors::SolveError;
use crate::graph::{Puzzle, VertexId};
use crate::predicates::{FailPredicate, ReportPredicate, StrokePredicate};
use crate::sink::{Collector, Counter, SolutionSink, Solutions};
use crate::state::{Counters, Statistics};

/// Find every one-stroke drawing of `puzzle`.
///
/// Solutions are grouped by starting vertex, in the order the vertices first
/// appear in the edge list, and within a group in discovery order.
///
/// ```
/// use stroke_search::graph::{Edge, Puzzle};
///
/// let triangle = Puzzle::new(vec![Edge::new(1, 2, 1), Edge::new(2, 3, 1), Edge::new(3, 1, 1)]);
/// let solutions = stroke_search::solve(&triangle);
/// assert_eq!(solutions.len(), 6);
/// assert_eq!(solutions.as_slice()[0], vec![1, 2, 3, 1]);
/// ```
pub fn solve(puzzle: &Puzzle) -> Solutions {
    Solver::default().solve(puzzle)
}

/// Count the one-stroke drawings of `puzzle` without storing them.
pub fn count(puzzle: &Puzzle) -> u64 {
    Solver::default().count(puzzle)
}

/// A configured solver.
///
/// Building one may fail when a dedicated thread pool is requested; running
/// it cannot.
#[derive(Debug, Default)]
pub struct Solver {
    config: SolverConfig,
    pool: Option<rayon::ThreadPool>,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Result<Self, SolveError> {
        let pool = match config.threads {
            Some(threads) if config.parallel => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("stroke-search-{i}"))
                    .build()?,
            ),
            _ => None,
        };
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find every one-stroke drawing of `puzzle`.
    pub fn solve(&self, puzzle: &Puzzle) -> Solutions {
        self.run::<Collector>(puzzle)
    }

    /// Count the one-stroke drawings of `puzzle`, storing no paths.
    pub fn count(&self, puzzle: &Puzzle) -> u64 {
        self.run::<Counter>(puzzle)
    }

    /// Search from every starting vertex into sinks of type `S` and merge them.
    pub fn run<S: SolutionSink>(&self, puzzle: &Puzzle) -> S::Output {
        let starts = puzzle.starting_vertices();
        info!(
            starting_vertices = starts.len(),
            edge_uses = puzzle.total_remaining(),
            parallel = self.config.parallel,
            "Searching for one-stroke drawings"
        );

        let tasks: Vec<(S::Output, Statistics)> = if self.config.parallel {
            let fan_out = || -> Vec<(S::Output, Statistics)> {
                starts
                    .par_iter()
                    .map(|&start| run_task::<S>(puzzle, start))
                    .collect()
            };
            match &self.pool {
                Some(pool) => pool.install(fan_out),
                None => fan_out(),
            }
        } else {
            starts
                .iter()
                .map(|&start| run_task::<S>(puzzle, start))
                .collect()
        };

        let mut totals = Statistics::new();
        let mut outputs = Vec::with_capacity(tasks.len());
        for (output, statistics) in tasks {
            totals.merge(&statistics);
            outputs.push(output);
        }

        info!(
            solutions = totals.get(Counters::Solutions),
            dead_ends = totals.get(Counters::DeadEnds),
            edge_visits = totals.get(Counters::EdgeVisits),
            "Search complete"
        );
        S::merge(outputs)
    }
}

/// One task: a private puzzle copy and sink, searched from `start`.
fn run_task<S: SolutionSink>(puzzle: &Puzzle, start: VertexId) -> (S::Output, Statistics) {
    let _span = debug_span!("stroke_task", start).entered();

    let mut ctx = SearchContext::new(puzzle.clone(), start);
    let mut sink = S::default();
    let statistics = search_from(&mut ctx, &mut sink);

    debug!(
        solutions = statistics.get(Counters::Solutions),
        dead_ends = statistics.get(Counters::DeadEnds),
        "Task finished"
    );
    (sink.finish(), statistics)
}

/// Exhaustively search `ctx` from its current vertex, reporting into `sink`.
///
/// On return the context's puzzle and path are back to their state on entry.
/// Returns the context's statistics.
///
/// ```
/// use stroke_search::context::SearchContext;
/// use stroke_search::graph::{Edge, Puzzle};
/// use stroke_search::sink::Counter;
/// use stroke_search::solver::search_from;
///
/// let puzzle = Puzzle::new(vec![Edge::new(1, 2, 2), Edge::new(2, 3, 1)]);
/// let mut ctx = SearchContext::new(puzzle.clone(), 2);
/// let mut counter = Counter::new();
/// search_from(&mut ctx, &mut counter);
///
/// assert_eq!(counter.count(), 1);
/// assert_eq!(ctx.puzzle(), &puzzle);
/// ```
pub fn search_from<S: SolutionSink>(ctx: &mut SearchContext, sink: &mut S) -> Statistics {
    let mut engine = EngineBuilder::new()
        .add(Box::new(StrokePredicate::new()))
        .add(Statistics::counting_predicate(Counters::Solutions, None))
        .add(Box::new(ReportPredicate::new(sink)))
        .terminal(Box::new(FailPredicate))
        .build();

    engine.search(ctx);

    let (tries, retries) = engine.statistics();
    debug!(tries, retries, "Engine exhausted");
    ctx.statistics
}

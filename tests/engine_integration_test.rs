// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine.
//!
//! These tests validate that the engine correctly:
//! - Runs predicates in sequence
//! - Handles Choices and retry_pred correctly
//! - Backtracks on failure, restoring the context via the trail
//! - Supports SuccessSamePredicate for multi-round predicates

mod common;

use common::*;
use stroke_search::context::SearchContext;
use stroke_search::engine::EngineBuilder;
use stroke_search::predicates::{FailPredicate, ReportPredicate, StrokePredicate};
use stroke_search::sink::{Collector, Counter, SolutionSink};
use stroke_search::solver::{search_from, Solver, SolverConfig};
use stroke_search::state::{Counters, Statistics};
use stroke_search::{Predicate, PredicateResult};

/// Walks one edge per round for a fixed number of rounds, then succeeds.
#[derive(Debug)]
struct FixedWalk(Vec<u16>);

impl Predicate for FixedWalk {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        match self.0.get(round) {
            Some(&to) => {
                ctx.traverse(to);
                PredicateResult::SuccessSamePredicate
            }
            None => PredicateResult::Success,
        }
    }

    fn name(&self) -> &str {
        "FixedWalk"
    }
}

/// Records the path it sees on every try.
#[derive(Debug)]
struct Observe<'s>(&'s mut Vec<Vec<u16>>);

impl Predicate for Observe<'_> {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        self.0.push(ctx.path().to_vec());
        PredicateResult::Success
    }
}

#[test]
fn test_fixed_walk_then_fail_restores() {
    let mut ctx = SearchContext::new(double_edge(), 2);
    let mut seen = Vec::new();
    {
        let mut engine = EngineBuilder::new()
            .add(Box::new(FixedWalk(vec![1, 2, 3])))
            .add(Box::new(Observe(&mut seen)))
            .terminal(Box::new(FailPredicate))
            .build();
        engine.search(&mut ctx);

        // Four FixedWalk rounds, Observe, Fail.
        let (tries, retries) = engine.statistics();
        assert_eq!(tries, 6);
        assert_eq!(retries, 0);
    }

    assert_eq!(seen, vec![vec![2, 1, 2, 3]]);
    assert_eq!(ctx.path(), &[2]);
    assert_eq!(ctx.puzzle(), &double_edge());
    assert!(ctx.trail.is_empty());
}

#[test]
fn test_stroke_program_reports_each_solution_once() {
    let mut ctx = SearchContext::new(triangle(), 1);
    let mut collector = Collector::new();
    {
        let mut engine = EngineBuilder::new()
            .add(Box::new(StrokePredicate::new()))
            .add(Box::new(ReportPredicate::new(&mut collector)))
            .terminal(Box::new(FailPredicate))
            .build();
        engine.search(&mut ctx);
    }
    assert_eq!(collector.solutions(), &[vec![1, 2, 3, 1], vec![1, 3, 2, 1]]);
}

#[test]
fn test_search_from_counts_dead_ends() {
    // From 2 the walk 2-1 strands before reaching 2-3.
    let mut ctx = SearchContext::new(line(), 2);
    let mut counter = Counter::new();
    let statistics = search_from(&mut ctx, &mut counter);

    assert_eq!(counter.count(), 0);
    assert_eq!(statistics.get(Counters::Solutions), 0);
    assert_eq!(statistics.get(Counters::DeadEnds), 2);
    assert_eq!(statistics.get(Counters::EdgeVisits), 2);
}

#[test]
fn test_search_from_statistics_accumulate_solutions() {
    let mut ctx = SearchContext::new(house(), 1);
    let mut counter = Counter::new();
    let statistics: Statistics = search_from(&mut ctx, &mut counter);

    assert_eq!(counter.count(), 44);
    assert_eq!(statistics.get(Counters::Solutions), 44);
    assert_eq!(ctx.puzzle(), &house());
}

/// Sink that refuses to record anything.
#[derive(Debug, Default)]
struct Exploding;

impl SolutionSink for Exploding {
    type Output = ();

    fn record(&mut self, path: &[u16]) {
        panic!("refusing to record {path:?}");
    }

    fn finish(self) {}

    fn merge(_parts: Vec<()>) {}
}

#[test]
#[should_panic(expected = "refusing to record")]
fn test_task_panic_reaches_caller() {
    let solver = Solver::new(SolverConfig::default().with_threads(2)).unwrap();
    solver.run::<Exploding>(&triangle());
}

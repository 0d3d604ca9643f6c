// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The predicate protocol the engine drives.
//!
//! A stroke search is the program `Stroke → Counting → Report → Fail`.
//! [`StrokePredicate`](crate::predicates::StrokePredicate) is the only one
//! with alternatives: at round `r` it has walked `r` edges and offers each
//! reachable neighbour as a choice. The rest succeed once and never offer
//! anything, and `Fail` sends the engine back for the next neighbour.
//!
//! # Example
//!
//! A predicate that only lets walks through if they end where they began,
//! spliced in front of the report:
//!
//! ```
//! use stroke_search::context::SearchContext;
//! use stroke_search::engine::{EngineBuilder, Predicate, PredicateResult};
//! use stroke_search::graph::{Edge, Puzzle};
//! use stroke_search::predicates::{FailPredicate, ReportPredicate, StrokePredicate};
//! use stroke_search::sink::Collector;
//!
//! #[derive(Debug)]
//! struct ClosedOnly;
//!
//! impl Predicate for ClosedOnly {
//!     fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         if ctx.path().first() == ctx.path().last() {
//!             PredicateResult::Success
//!         } else {
//!             PredicateResult::Failure
//!         }
//!     }
//! }
//!
//! // 1-2 twice and 2-3 once: drawings exist, but none is closed.
//! let puzzle = Puzzle::new(vec![Edge::new(1, 2, 2), Edge::new(2, 3, 1)]);
//! let mut ctx = SearchContext::new(puzzle, 2);
//! let mut closed = Collector::new();
//! let mut engine = EngineBuilder::new()
//!     .add(Box::new(StrokePredicate::new()))
//!     .add(Box::new(ClosedOnly))
//!     .add(Box::new(ReportPredicate::new(&mut closed)))
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//! engine.search(&mut ctx);
//! drop(engine);
//! assert!(closed.solutions().is_empty());
//! ```

use std::fmt::Debug;
use crate::context::SearchContext;

/// What a predicate tells the engine to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Go on to the next predicate in the program.
    Success,

    /// Run this predicate again at `round + 1`. The stroke predicate returns
    /// this after each step.
    SuccessSamePredicate,

    /// Backtrack.
    Failure,

    /// `retry_pred(round, choice)` is called for each choice in `0..n`,
    /// with state rewound before each one.
    Choices(usize),
}

/// A predicate that never succeeds, and so may end a program.
pub trait TerminalPredicate: Predicate {}

/// One step of a search program.
///
/// `try_pred` is called on first arrival at a round. A predicate that
/// answered `Choices(n)` then gets `retry_pred` once per choice; one that
/// answered `Success` or `SuccessSamePredicate` fails when backtracked into.
/// State changed through the context's trailed methods is undone by the
/// engine, so predicates never restore anything themselves.
pub trait Predicate: Debug {
    /// First attempt at `round`. Rounds start at 0 and advance on each
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Take alternative `choice` at `round`. Returning `Choices` here is a
    /// programming error and panics in the engine.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name used in panic messages.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

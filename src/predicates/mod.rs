// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the stroke search.
//! Each predicate represents a choice point in the search space.
//!
//! # Organization
//!
//! - `stroke`: StrokePredicate, one round per consumed edge
//! - `report`: ReportPredicate, hands a finished stroke to a sink
//! - Built-in predicates: `FailPredicate`
//!
//! A full search from one starting vertex is the program
//! `Stroke → Counting(Solutions) → Report → Fail`: the stroke predicate only
//! succeeds on a solving walk, and the final `Fail` forces the engine to
//! backtrack into every remaining alternative.

pub mod report;
pub mod stroke;

// Re-export main predicates for convenience
pub use report::ReportPredicate;
pub use stroke::StrokePredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. It's a terminal predicate
/// that ends a search path, similar to Prolog's `fail.` built-in.
///
/// # Example
///
/// ```
/// use stroke_search::context::SearchContext;
/// use stroke_search::engine::EngineBuilder;
/// use stroke_search::graph::{Edge, Puzzle};
/// use stroke_search::predicates::{FailPredicate, StrokePredicate};
///
/// let mut ctx = SearchContext::new(Puzzle::new(vec![Edge::new(1, 2, 1)]), 1);
/// let mut engine = EngineBuilder::new()
///     .add(Box::new(StrokePredicate::new()))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust every walk then fail
/// engine.search(&mut ctx);
/// assert_eq!(ctx.path(), &[1]);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

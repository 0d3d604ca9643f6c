// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail system to provide
//! automatic state restoration on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! The engine follows a WAM-like execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//!
//! The stroke search runs one predicate per consumed edge, so the explicit
//! stack plays the role of recursion without growing the thread's call stack.
//!
//! # Example
//!
//! ```
//! use stroke_search::engine::{EngineBuilder, Predicate, PredicateResult};
//! use stroke_search::context::SearchContext;
//! use stroke_search::graph::Puzzle;
//! use stroke_search::predicates::FailPredicate;
//!
//! #[derive(Debug)]
//! struct SimplePredicate;
//!
//! impl Predicate for SimplePredicate {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         PredicateResult::Success
//!     }
//! }
//!
//! let mut ctx = SearchContext::new(Puzzle::new(vec![]), 1);
//! // All programs must end with a terminal predicate
//! let mut engine = EngineBuilder::new()
//!     .add(Box::new(SimplePredicate))
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//!
//! engine.search(&mut ctx);
//! assert_eq!(engine.statistics(), (2, 0));
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the trail system. Predicates may borrow
/// from the caller for `'a` (for example, a result sink).
pub struct SearchEngine<'a> {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate + 'a>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl<'a> SearchEngine<'a> {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which guarantees the sequence ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate + 'a>>) -> Self {
        Self {
            predicates,
            stack: Vec::new(),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search until every alternative is exhausted.
    ///
    /// Results are delivered through side effects of the predicates. When the
    /// search returns, `ctx` has been rewound to the trail position it had on
    /// entry, so every trailed value is back to its original state.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without a
    /// terminal predicate), or if a predicate panics.
    pub fn search(&mut self, ctx: &mut SearchContext) {
        self.stack.clear();
        self.try_count = 0;
        self.retry_count = 0;

        let base = ctx.trail.len();
        if self.predicates.is_empty() {
            return;
        }

        self.stack.push(StackEntry::new(0, 0, base));

        // Main execution loop
        while let Some(entry) = self.stack.last_mut() {
            // Rewind trail to this entry's checkpoint
            ctx.rewind_to(entry.trail_checkpoint);

            if !entry.in_choice_mode {
                // Call mode: try_pred
                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);

                match result {
                    PredicateResult::Success => {
                        self.exhaust_top();
                        self.push_next_predicate(ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.exhaust_top();
                        self.push_same_predicate(ctx);
                    }
                    PredicateResult::Failure => {
                        // Backtrack
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        // Enter choice mode
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = ctx.trail.len();
                        }
                    }
                }
            } else {
                // Choice mode: retry_pred
                if entry.current_choice >= entry.num_choices {
                    // Backtrack
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => {
                        self.push_next_predicate(ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.push_same_predicate(ctx);
                    }
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) => {
                        panic!(
                            "{}::retry_pred returned invalid result: {:?}",
                            self.predicates[pred_idx].name(),
                            result
                        );
                    }
                }
            }
        }

        ctx.rewind_to(base);
    }

    /// Mark the top entry as having no alternatives left.
    ///
    /// A predicate that succeeded without offering choices must fail when the
    /// search backtracks into it.
    fn exhaust_top(&mut self) {
        if let Some(entry) = self.stack.last_mut() {
            entry.in_choice_mode = true;
            entry.current_choice = 0;
            entry.num_choices = 0;
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with a terminal predicate).
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let next_index = self.top_index() + 1;

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without a terminal predicate. \
                 All programs must end with a predicate that never succeeds."
            );
        }

        self.stack
            .push(StackEntry::new(next_index, 0, ctx.trail.len()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        let (pred_index, round) = self
            .stack
            .last()
            .map(|e| (e.predicate_index, e.round))
            .unwrap_or_default();

        self.stack
            .push(StackEntry::new(pred_index, round + 1, ctx.trail.len()));
    }

    fn top_index(&self) -> usize {
        self.stack.last().map_or(0, |e| e.predicate_index)
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder that assembles a predicate program ending in a terminal predicate.
///
/// ```
/// use stroke_search::engine::EngineBuilder;
/// use stroke_search::predicates::{FailPredicate, StrokePredicate};
///
/// let engine = EngineBuilder::new()
///     .add(Box::new(StrokePredicate::new()))
///     .terminal(Box::new(FailPredicate))
///     .build();
/// # let _ = engine;
/// ```
pub struct EngineBuilder<'a> {
    predicates: Vec<Box<dyn Predicate + 'a>>,
}

impl<'a> EngineBuilder<'a> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate + 'a>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Close the program with a terminal predicate.
    pub fn terminal<T: TerminalPredicate + 'a>(mut self, predicate: Box<T>) -> TerminatedProgram<'a> {
        self.predicates.push(predicate);
        TerminatedProgram {
            predicates: self.predicates,
        }
    }
}

impl Default for EngineBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// A predicate program known to end in a terminal predicate.
pub struct TerminatedProgram<'a> {
    predicates: Vec<Box<dyn Predicate + 'a>>,
}

impl<'a> TerminatedProgram<'a> {
    pub fn build(self) -> SearchEngine<'a> {
        SearchEngine::new(self.predicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Puzzle};
    use crate::predicates::FailPredicate;

    fn empty_context() -> SearchContext {
        SearchContext::new(Puzzle::new(vec![]), 1)
    }

    /// Test predicate that always succeeds.
    #[derive(Debug)]
    struct AlwaysSucceed;

    impl Predicate for AlwaysSucceed {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    /// Test predicate that offers `n` choices, all of which succeed.
    #[derive(Debug)]
    struct Branch(usize);

    impl Predicate for Branch {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Choices(self.0)
        }

        fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, _choice: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    /// Walks the only edge of a one-edge puzzle, then stops.
    #[derive(Debug)]
    struct WalkOnce;

    impl Predicate for WalkOnce {
        fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            if ctx.puzzle().is_solved() {
                return PredicateResult::Failure;
            }
            ctx.traverse(2);
            PredicateResult::Success
        }
    }

    #[test]
    fn test_success_then_fail() {
        let mut ctx = empty_context();
        let mut engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(FailPredicate))
            .build();

        engine.search(&mut ctx);
        assert_eq!(engine.statistics(), (2, 0)); // AlwaysSucceed + Fail, no retries
    }

    #[test]
    fn test_choices_are_all_retried() {
        let mut ctx = empty_context();
        let mut engine = EngineBuilder::new()
            .add(Box::new(Branch(3)))
            .add(Box::new(Branch(2)))
            .terminal(Box::new(FailPredicate))
            .build();

        engine.search(&mut ctx);
        let (tries, retries) = engine.statistics();
        // One try of the outer Branch, three of the inner, six of Fail.
        assert_eq!(tries, 10);
        assert_eq!(retries, 3 + 6);
    }

    #[test]
    fn test_search_restores_context() {
        let mut ctx = SearchContext::new(Puzzle::new(vec![Edge::new(1, 2, 1)]), 1);
        let mut engine = EngineBuilder::new()
            .add(Box::new(WalkOnce))
            .terminal(Box::new(FailPredicate))
            .build();

        engine.search(&mut ctx);
        assert_eq!(ctx.trail.len(), 0);
        assert_eq!(ctx.path(), &[1]);
        assert_eq!(ctx.puzzle().total_remaining(), 1);
    }

    #[test]
    fn test_immediate_failure() {
        let mut ctx = empty_context();
        let mut engine = EngineBuilder::new().terminal(Box::new(FailPredicate)).build();

        engine.search(&mut ctx);
        assert_eq!(engine.statistics(), (1, 0));
    }

    #[test]
    fn test_empty_predicates() {
        let mut ctx = empty_context();
        let mut engine = SearchEngine::new(vec![]);

        engine.search(&mut ctx);
        assert_eq!(engine.statistics(), (0, 0));
    }

    #[test]
    #[should_panic(expected = "Invalid predicate sequence")]
    fn test_invalid_program_without_terminal() {
        let mut ctx = empty_context();
        let mut engine = SearchEngine::new(vec![
            Box::new(AlwaysSucceed), // Missing terminal predicate!
        ]);

        engine.search(&mut ctx); // Should panic
    }
}

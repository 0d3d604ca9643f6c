// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! StrokePredicate - Extends the walk one edge per round.
//!
//! Round `r` runs with `r` edges already consumed and the walk standing on
//! the last vertex of the path. The predicate offers one choice per
//! reachable neighbour; choosing a neighbour consumes the connecting edge
//! (trailed) and moves to round `r + 1`.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::graph::VertexId;
use crate::state::Counters;

/// StrokePredicate walks the puzzle depth first.
///
/// # Choices
///
/// For each round the choices are `reachable_from(current)` in order:
/// - Choice 0 → first reachable neighbour
/// - Choice 1 → second reachable neighbour
/// - ...
///
/// This order fixes the order in which solutions are discovered.
///
/// # Termination
///
/// When nothing is reachable the walk is maximal. It succeeds (moving on to
/// whatever reports it) only if every required edge use was consumed and at
/// least one edge was walked; otherwise it is a dead end and fails.
#[derive(Debug, Default)]
pub struct StrokePredicate {
    /// Neighbours offered at each round, indexed by round.
    choices: Vec<Vec<VertexId>>,
}

impl StrokePredicate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Predicate for StrokePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        debug_assert_eq!(
            round,
            ctx.edges_walked(),
            "round {} does not match the {} edges walked",
            round,
            ctx.edges_walked()
        );

        let reachable = ctx.puzzle().reachable_from(ctx.current_vertex());
        if reachable.is_empty() {
            if ctx.puzzle().is_solved() && round > 0 {
                return PredicateResult::Success;
            }
            if !ctx.puzzle().is_solved() {
                ctx.statistics.increment_counter(Counters::DeadEnds);
            }
            return PredicateResult::Failure;
        }

        let n = reachable.len();
        if self.choices.len() <= round {
            self.choices.resize_with(round + 1, Vec::new);
        }
        // Deeper rounds are stale once we are back at this round; they are
        // overwritten before being read again.
        self.choices[round] = reachable;
        PredicateResult::Choices(n)
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        let to = self.choices[round][choice];
        ctx.traverse(to);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "Stroke"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Puzzle};

    fn triangle() -> Puzzle {
        Puzzle::new(vec![Edge::new(1, 2, 1), Edge::new(2, 3, 1), Edge::new(3, 1, 1)])
    }

    #[test]
    fn test_try_pred_offers_reachable_neighbours() {
        let mut ctx = SearchContext::new(triangle(), 1);
        let mut pred = StrokePredicate::new();

        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Choices(2));
        assert_eq!(pred.choices[0], vec![2, 3]);
    }

    #[test]
    fn test_retry_pred_walks_choice() {
        let mut ctx = SearchContext::new(triangle(), 1);
        let mut pred = StrokePredicate::new();
        pred.try_pred(&mut ctx, 0);

        assert_eq!(pred.retry_pred(&mut ctx, 0, 1), PredicateResult::SuccessSamePredicate);
        assert_eq!(ctx.path(), &[1, 3]);
        assert_eq!(ctx.puzzle().total_remaining(), 2);
    }

    #[test]
    fn test_solved_walk_succeeds() {
        let mut ctx = SearchContext::new(Puzzle::new(vec![Edge::new(1, 2, 1)]), 1);
        let mut pred = StrokePredicate::new();
        pred.try_pred(&mut ctx, 0);
        pred.retry_pred(&mut ctx, 0, 0);

        assert_eq!(pred.try_pred(&mut ctx, 1), PredicateResult::Success);
    }

    #[test]
    fn test_dead_end_fails_and_is_counted() {
        // The 3-4 edge can never be reached from 1.
        let puzzle = Puzzle::new(vec![Edge::new(1, 2, 1), Edge::new(3, 4, 1)]);
        let mut ctx = SearchContext::new(puzzle, 1);
        let mut pred = StrokePredicate::new();
        pred.try_pred(&mut ctx, 0);
        pred.retry_pred(&mut ctx, 0, 0);

        assert_eq!(pred.try_pred(&mut ctx, 1), PredicateResult::Failure);
        assert_eq!(ctx.statistics.get(Counters::DeadEnds), 1);
    }

    #[test]
    fn test_zero_length_walk_is_not_a_solution() {
        let mut ctx = SearchContext::new(Puzzle::new(vec![Edge::new(1, 2, 0)]), 1);
        let mut pred = StrokePredicate::new();

        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert_eq!(ctx.statistics.get(Counters::DeadEnds), 0);
    }
}

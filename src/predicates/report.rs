// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ReportPredicate - Hands the current stroke to a sink.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::sink::SolutionSink;

/// Records `ctx.path()` into a borrowed sink, then succeeds.
///
/// The sink is borrowed for the lifetime of the engine, so the caller gets it
/// back as soon as the engine is dropped.
#[derive(Debug)]
pub struct ReportPredicate<'s, S: SolutionSink> {
    sink: &'s mut S,
}

impl<'s, S: SolutionSink> ReportPredicate<'s, S> {
    pub fn new(sink: &'s mut S) -> Self {
        Self { sink }
    }
}

impl<S: SolutionSink> Predicate for ReportPredicate<'_, S> {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        self.sink.record(ctx.path());
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Report"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Puzzle};
    use crate::sink::Collector;

    #[test]
    fn test_report_records_current_path() {
        let mut ctx = SearchContext::new(Puzzle::new(vec![Edge::new(1, 2, 1)]), 1);
        ctx.traverse(2);

        let mut collector = Collector::new();
        let mut pred = ReportPredicate::new(&mut collector);
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Success);

        assert_eq!(collector.solutions(), &[vec![1, 2]]);
    }
}

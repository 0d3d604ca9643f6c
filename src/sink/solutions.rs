// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solution and Solutions value types.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::graph::VertexId;
use crate::render::SolutionPrinter;

/// One complete stroke: the vertices visited, starting vertex first.
pub type Solution = Vec<VertexId>;

/// All strokes found by a solve, in deterministic order.
///
/// Serializes as a plain nested list, e.g. `[[1,2,3,1],[1,3,2,1]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solutions(Vec<Solution>);

impl Solutions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Solution] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Solution> {
        self.0
    }

    /// Render with `printer` into `out`.
    pub fn print_with<P: SolutionPrinter + ?Sized>(&self, printer: &P, out: &mut dyn Write) -> io::Result<()> {
        printer.print(self, out)
    }
}

impl From<Vec<Solution>> for Solutions {
    fn from(solutions: Vec<Solution>) -> Self {
        Self(solutions)
    }
}

impl FromIterator<Solution> for Solutions {
    fn from_iter<I: IntoIterator<Item = Solution>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Solutions {
    type Item = Solution;
    type IntoIter = std::vec::IntoIter<Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Solutions {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

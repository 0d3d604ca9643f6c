// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common puzzles shared across integration tests.

#![allow(dead_code)]

use stroke_search::graph::{Edge, Puzzle, VertexId};

/// Triangle 1-2, 2-3, 3-1, each walked once.
pub fn triangle() -> Puzzle {
    Puzzle::new(vec![Edge::new(1, 2, 1), Edge::new(2, 3, 1), Edge::new(3, 1, 1)])
}

/// Triangle whose 1-2 edge may only be walked 1 → 2.
pub fn directional_triangle() -> Puzzle {
    Puzzle::new(vec![Edge::one_way(1, 2, 1), Edge::new(2, 3, 1), Edge::new(3, 1, 1)])
}

/// 1-2 walked twice, then 2-3 once.
pub fn double_edge() -> Puzzle {
    Puzzle::new(vec![Edge::new(1, 2, 2), Edge::new(2, 3, 1)])
}

/// The path 1-2-3, which can only be drawn from an end.
pub fn line() -> Puzzle {
    Puzzle::new(vec![Edge::new(1, 2, 1), Edge::new(2, 3, 1)])
}

/// A single edge that needs no traversal.
pub fn zero_count() -> Puzzle {
    Puzzle::new(vec![Edge::new(1, 2, 0)])
}

/// Two edges that share no vertex.
pub fn disconnected() -> Puzzle {
    Puzzle::new(vec![Edge::new(1, 2, 1), Edge::new(3, 4, 1)])
}

/// The "house of Nikolaus": a square 1-2-3-4 with both diagonals and a roof
/// apex 5 over the 3-4 side.
///
/// ```text
///       5
///      / \
///     4---3
///     |\ /|
///     | X |
///     |/ \|
///     1---2
/// ```
///
/// Vertices 1 and 2 are the only odd ones, so every drawing starts at one of
/// them; there are 44 from each.
pub fn house() -> Puzzle {
    Puzzle::new(vec![
        Edge::new(1, 2, 1),
        Edge::new(2, 3, 1),
        Edge::new(3, 4, 1),
        Edge::new(4, 1, 1),
        Edge::new(1, 3, 1),
        Edge::new(2, 4, 1),
        Edge::new(4, 5, 1),
        Edge::new(5, 3, 1),
    ])
}

/// Replay `solution` on a copy of `puzzle`, returning the copy.
///
/// Panics if some step has no edge left to carry it.
pub fn replay(puzzle: &Puzzle, solution: &[VertexId]) -> Puzzle {
    let mut copy = puzzle.clone();
    for step in solution.windows(2) {
        let (from, to) = (step[0], step[1]);
        let id = copy
            .find_traversable_edge(from, to)
            .unwrap_or_else(|| panic!("no edge left for step {from} -> {to} in {solution:?}"));
        copy.visit_edge(id, from, to);
    }
    copy
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reading puzzle descriptions from JSON.
//!
//! The format is the one puzzle editors already produce:
//!
//! ```json
//! {"Edges": [{"PointA": 1, "PointB": 2, "Count": 1,
//!             "Direction": {"From": 1, "To": 2, "Unidirectional": true}}]}
//! ```
//!
//! `Count` and `Direction` may be omitted. Unknown fields, such as the point
//! coordinates a drawing UI stores alongside the edges, are ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::errors::PuzzleError;
use crate::graph::{Edge, Puzzle};

/// Wire shape of a puzzle file, before validation.
#[derive(Debug, Deserialize)]
struct PuzzleDescription {
    #[serde(rename = "Edges", default)]
    edges: Vec<Edge>,
}

impl Puzzle {
    /// Parse and validate a puzzle from JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, PuzzleError> {
        let description: PuzzleDescription = serde_json::from_slice(bytes)?;
        validate(&description.edges)?;
        Ok(Puzzle::new(description.edges))
    }

    /// Parse and validate a puzzle from a JSON string.
    ///
    /// ```
    /// use stroke_search::graph::Puzzle;
    ///
    /// let puzzle = Puzzle::from_json_str(r#"{"Edges": [{"PointA": 1, "PointB": 2, "Count": 2}]}"#).unwrap();
    /// assert_eq!(puzzle.total_remaining(), 2);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, PuzzleError> {
        Self::from_json_slice(json.as_bytes())
    }
}

/// Read a puzzle file.
pub fn load_puzzle(path: impl AsRef<Path>) -> Result<Puzzle, PuzzleError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let puzzle = Puzzle::from_json_slice(&bytes)?;
    debug!(
        path = %path.display(),
        edges = puzzle.edges().len(),
        edge_uses = puzzle.total_remaining(),
        "Loaded puzzle"
    );
    Ok(puzzle)
}

/// A one-way direction must run along its own edge.
fn validate(edges: &[Edge]) -> Result<(), PuzzleError> {
    for (index, edge) in edges.iter().enumerate() {
        let direction = edge.direction;
        if direction.unidirectional && !edge.joins(direction.from, direction.to) {
            return Err(PuzzleError::InvalidDirection {
                index,
                point_a: edge.point_a,
                point_b: edge.point_b,
                from: direction.from,
                to: direction.to,
            });
        }
    }
    Ok(())
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for everything around the search core.
//!
//! The search itself has no recoverable errors: a puzzle with no stroke is
//! an empty result, and an exhausted edge being visited is a panic. These
//! types cover loading puzzles, locating them in a catalog, and setting up
//! the worker pool.

use std::path::PathBuf;

use crate::graph::VertexId;

/// Errors that can occur while reading a puzzle description.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("Could not read puzzle file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid puzzle JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(
        "Edge #{index} ({point_a}-{point_b}) is one-way {from} -> {to}, which does not match its endpoints"
    )]
    InvalidDirection {
        index: usize,
        point_a: VertexId,
        point_b: VertexId,
        from: VertexId,
        to: VertexId,
    },
}

/// Errors that can occur while resolving a puzzle by name.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Puzzle directory {path} is not accessible: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid puzzle name {0:?}")]
    InvalidName(String),

    #[error("Unknown puzzle {0:?}")]
    UnknownPuzzle(String),

    #[error("Puzzle index {path} is invalid: {source}")]
    Index {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}

/// Errors that can occur while setting up a solve.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("Could not build search thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

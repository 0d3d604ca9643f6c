// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver configuration.

use serde::{Deserialize, Serialize};

/// How the solver schedules its per-vertex searches.
///
/// ```
/// use stroke_search::solver::SolverConfig;
///
/// let config: SolverConfig = serde_json::from_str(r#"{"threads": 2}"#).unwrap();
/// assert!(config.parallel);
/// assert_eq!(config.threads, Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Run one task per starting vertex in parallel. When false, tasks run
    /// one after another on the calling thread.
    pub parallel: bool,
    /// Size of a dedicated worker pool. `None` uses rayon's global pool,
    /// which has one worker per CPU.
    pub threads: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

impl SolverConfig {
    /// Use a dedicated pool of `threads` workers.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Run every task on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-task search bookkeeping that is not part of the puzzle itself.
//!
//! The puzzle copy and the in-progress path live in
//! [`SearchContext`](crate::context::SearchContext) and are tracked on the
//! trail. Statistics are not: counters only ever grow during a search.

pub mod statistics;

pub use statistics::{Counters, Statistics};

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! One-way constraint attached to an edge.

use serde::{Deserialize, Serialize};

use super::edge::VertexId;

/// Optional traversal constraint on an edge.
///
/// When `unidirectional` is false the edge may be walked either way and
/// `from`/`to` carry no meaning. When true, only `from → to` is legal.
///
/// Field names follow the puzzle file format (`From`, `To`, `Unidirectional`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Direction {
    #[serde(default)]
    pub from: VertexId,
    #[serde(default)]
    pub to: VertexId,
    #[serde(default)]
    pub unidirectional: bool,
}

impl Direction {
    /// An edge that may be traversed either way.
    pub const fn bidirectional() -> Self {
        Self {
            from: 0,
            to: 0,
            unidirectional: false,
        }
    }

    /// An edge that may only be traversed `from → to`.
    pub const fn one_way(from: VertexId, to: VertexId) -> Self {
        Self {
            from,
            to,
            unidirectional: true,
        }
    }

    /// Whether a step `from → to` respects this constraint.
    #[inline]
    pub fn allows(&self, from: VertexId, to: VertexId) -> bool {
        !self.unidirectional || (self.from == from && self.to == to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bidirectional_allows_both_ways() {
        let d = Direction::bidirectional();
        assert!(d.allows(1, 2));
        assert!(d.allows(2, 1));
    }

    #[test]
    fn test_one_way_allows_single_direction() {
        let d = Direction::one_way(1, 2);
        assert!(d.allows(1, 2));
        assert!(!d.allows(2, 1));
        assert!(!d.allows(1, 3));
    }

    #[test]
    fn test_default_is_bidirectional() {
        assert_eq!(Direction::default(), Direction::bidirectional());
    }

    #[test]
    fn test_deserialize_partial_direction() {
        let d: Direction = serde_json::from_str(r#"{"From": 3, "To": 4, "Unidirectional": true}"#).unwrap();
        assert_eq!(d, Direction::one_way(3, 4));

        let d: Direction = serde_json::from_str("{}").unwrap();
        assert!(!d.unidirectional);
    }
}

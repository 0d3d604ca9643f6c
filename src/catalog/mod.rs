// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A directory of named puzzles.
//!
//! ```text
//! puzzles/
//!   puzzles.json     [{"Name": "House", "JsonFile": "house.json"}, ...]
//!   house.json
//!   star.json
//! ```
//!
//! Names come from untrusted callers, so a name only ever resolves to a
//! `<name>.json` file that lives inside the catalog directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::CatalogError;
use crate::graph::Puzzle;
use crate::loader::load_puzzle;

/// File listing the catalog's puzzles for display.
pub const INDEX_FILE: &str = "puzzles.json";

/// One row of the catalog index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogEntry {
    pub name: String,
    pub json_file: String,
}

#[derive(Debug, Clone)]
pub struct PuzzleCatalog {
    root: PathBuf,
}

impl PuzzleCatalog {
    /// Open the catalog stored in `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let root = dir.canonicalize().map_err(|source| CatalogError::Directory {
            path: dir.to_path_buf(),
            source,
        })?;
        if !root.is_dir() {
            return Err(CatalogError::Directory {
                path: dir.to_path_buf(),
                source: std::io::Error::other("not a directory"),
            });
        }
        Ok(Self { root })
    }

    /// The canonical catalog directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Entries of the index file, or none if the catalog has no index.
    pub fn entries(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        let path = self.root.join(INDEX_FILE);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(CatalogError::Directory { path, source }),
        };
        serde_json::from_slice(&bytes).map_err(|source| CatalogError::Index { path, source })
    }

    /// Path of the puzzle file called `name`.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, CatalogError> {
        if !is_valid_name(name) {
            return Err(CatalogError::InvalidName(name.to_string()));
        }
        let candidate = self.root.join(format!("{name}.json"));
        let path = candidate
            .canonicalize()
            .map_err(|_| CatalogError::UnknownPuzzle(name.to_string()))?;
        // A symlink may still point outside the catalog.
        if !path.starts_with(&self.root) || !path.is_file() {
            return Err(CatalogError::UnknownPuzzle(name.to_string()));
        }
        debug!(name, path = %path.display(), "Resolved puzzle");
        Ok(path)
    }

    /// Load the puzzle called `name`.
    pub fn load(&self, name: &str) -> Result<Puzzle, CatalogError> {
        let path = self.resolve(name)?;
        Ok(load_puzzle(path)?)
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

//! Boundary result types consumed by front ends.
//!
//! All of these are request-scoped: built during one locate/scan/list call
//! and handed to the caller, never retained by the engine.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A located file with its match confidence.
///
/// Exact matches carry a score of 1.0. Fuzzy matches carry the similarity
/// ratio that cleared the cutoff. The two are never mixed in one result
/// set: fuzzy matches exist only when zero exact matches do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub path: PathBuf,
    pub score: f64,
}

impl Match {
    pub fn exact(path: PathBuf) -> Self {
        Self { path, score: 1.0 }
    }
}

/// Metadata for one file found during a catalog walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub modified: DateTime<Utc>,
    /// Lower-cased extension without the dot; `None` when the name has no
    /// extension.
    pub extension: Option<String>,
}

/// A walk entry that was skipped instead of aborting the operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: String,
}

impl SkippedEntry {
    pub fn new(path: PathBuf, reason: impl ToString) -> Self {
        Self {
            path,
            reason: reason.to_string(),
        }
    }
}

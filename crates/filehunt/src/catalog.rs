//! Read-only directory cataloging: file listings and storage totals.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{EngineError, Result};
use crate::types::{FileRecord, SkippedEntry};

/// Everything found in one catalog walk.
#[derive(Debug, Default)]
pub struct Listing {
    /// Records in walk-encounter (pre-order) order.
    pub records: Vec<FileRecord>,
    pub skipped: Vec<SkippedEntry>,
}

/// Walks `root` and produces a record per readable file.
///
/// Per-file stat failures become skip entries; they never abort the walk.
/// Records are transient: nothing is persisted between calls.
pub fn list_files(root: &Path) -> Result<Listing> {
    if !root.is_dir() {
        return Err(EngineError::InvalidRoot(root.to_path_buf()));
    }
    let mut listing = Listing::default();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                let path = error.path().map(Path::to_path_buf).unwrap_or_default();
                listing.skipped.push(SkippedEntry::new(path, &error));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        match file_record(&entry) {
            Ok(record) => listing.records.push(record),
            Err(reason) => {
                listing
                    .skipped
                    .push(SkippedEntry::new(entry.into_path(), reason));
            }
        }
    }
    Ok(listing)
}

/// Sums the sizes of all readable files under `root`.
pub fn total_size_bytes(root: &Path) -> Result<u64> {
    Ok(list_files(root)?.records.iter().map(|record| record.size).sum())
}

/// `list_files` followed by a stable sort on modification time.
///
/// Ties keep their walk-encounter order in both directions, so "first" and
/// "last" are deterministic for a given tree snapshot.
pub fn sort_by_modified(root: &Path, descending: bool) -> Result<Vec<FileRecord>> {
    let mut records = list_files(root)?.records;
    if descending {
        records.sort_by(|a, b| b.modified.cmp(&a.modified));
    } else {
        records.sort_by(|a, b| a.modified.cmp(&b.modified));
    }
    Ok(records)
}

fn file_record(entry: &walkdir::DirEntry) -> std::result::Result<FileRecord, String> {
    let metadata = entry.metadata().map_err(|error| error.to_string())?;
    let modified = metadata.modified().map_err(|error| error.to_string())?;
    Ok(FileRecord {
        name: entry.file_name().to_string_lossy().into_owned(),
        path: entry.path().to_path_buf(),
        size: metadata.len(),
        modified: modified.into(),
        extension: entry
            .path()
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase()),
    })
}

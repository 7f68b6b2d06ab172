//! Duplicate detection and removal keyed on content digests.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use walkdir::WalkDir;

use crate::error::{EngineError, Result};
use crate::trash::{RecycleBin, SystemTrash};
use crate::types::SkippedEntry;

/// What one dedupe pass did: which files went to the recycle bin and which
/// entries were skipped, with why.
#[derive(Debug, Default)]
pub struct DedupeOutcome {
    /// Removed duplicates, in walk-encounter order.
    pub removed: Vec<PathBuf>,
    pub skipped: Vec<SkippedEntry>,
}

/// Removes byte-identical copies under one subtree.
///
/// Single-threaded by design: removal is destructive, and the
/// first-seen-wins invariant depends on a stable walk order that parallel
/// workers would have to re-synchronize on. Digest equality is treated as
/// content identity; the collision risk of the hash is accepted.
pub struct DeduplicationScanner {
    bin: Box<dyn RecycleBin>,
}

impl Default for DeduplicationScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl DeduplicationScanner {
    /// Scanner that disposes duplicates into the operating system trash.
    pub fn new() -> Self {
        Self::with_bin(Box::new(SystemTrash))
    }

    /// Scanner with an injected disposal capability.
    pub fn with_bin(bin: Box<dyn RecycleBin>) -> Self {
        Self { bin }
    }

    /// Walks `root` once in pre-order, hashing every readable file.
    ///
    /// The first file seen with a given digest is kept and never touched;
    /// every later file with the same digest is sent to the recycle bin.
    /// Unreadable files and failed disposals become skip entries, never
    /// fatal. Running the scan again over an unchanged tree removes
    /// nothing. Concurrent mutation of the tree by another process is out
    /// of scope and may produce a missed or spurious duplicate.
    pub fn deduplicate(&self, root: &Path) -> Result<DedupeOutcome> {
        if !root.is_dir() {
            return Err(EngineError::InvalidRoot(root.to_path_buf()));
        }
        let started = Instant::now();
        let mut first_seen: HashMap<blake3::Hash, PathBuf> = HashMap::new();
        let mut outcome = DedupeOutcome::default();

        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    let path = error.path().map(Path::to_path_buf).unwrap_or_default();
                    outcome.skipped.push(SkippedEntry::new(path, &error));
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.into_path();
            let digest = match digest_file(&path) {
                Ok(digest) => digest,
                Err(error) => {
                    outcome.skipped.push(SkippedEntry::new(path, error));
                    continue;
                }
            };
            match first_seen.entry(digest) {
                Entry::Occupied(_) => match self.bin.dispose(&path) {
                    Ok(()) => outcome.removed.push(path),
                    Err(error) => {
                        log::warn!(
                            "dedupe disposal failed path={} error={}",
                            path.display(),
                            error,
                        );
                        outcome.skipped.push(SkippedEntry::new(path, error));
                    }
                },
                Entry::Vacant(slot) => {
                    slot.insert(path);
                }
            }
        }

        log::info!(
            "dedupe root={} removed={} skipped={} elapsed_ms={}",
            root.display(),
            outcome.removed.len(),
            outcome.skipped.len(),
            started.elapsed().as_millis(),
        );
        Ok(outcome)
    }
}

/// Hashes the full content of one file without holding it all in memory.
fn digest_file(path: &Path) -> io::Result<blake3::Hash> {
    let mut hasher = blake3::Hasher::new();
    let mut file = File::open(path)?;
    io::copy(&mut file, &mut hasher)?;
    Ok(hasher.finalize())
}

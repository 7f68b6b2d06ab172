//! Staged exact-name search.
//!
//! Stage one walks the priority roots in order, single-threaded, because
//! stable, user-predictable results matter more than throughput there.
//! Stage two runs only when stage one found nothing: every mounted volume
//! gets its own worker thread, all sharing one cancel flag and one result
//! channel.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use walkdir::WalkDir;

use crate::cancel::CancelFlag;

/// Directory names the exhaustive stage never descends into: OS installs,
/// program installs, per-user caches, and the Unix pseudo-filesystems.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "Windows",
    "Program Files",
    "Program Files (x86)",
    "AppData",
    "proc",
    "sys",
    "dev",
    "run",
    "snap",
];

/// Searches the priority roots in their fixed order, pre-order within each
/// root, stopping the moment `max_results` matches have accumulated.
///
/// Unreadable entries are skipped and the walk continues. The first root
/// that satisfies the cap ends the search without touching later roots.
pub fn search_priority_roots(
    roots: &[PathBuf],
    target: &str,
    max_results: usize,
) -> Vec<PathBuf> {
    let needle = target.to_lowercase();
    let mut found = Vec::new();
    for root in roots {
        collect_exact(root, &needle, max_results, &[], &CancelFlag::new(), &mut found);
        if found.len() >= max_results {
            break;
        }
    }
    found
}

/// Exhaustive stage: one worker thread per volume, each walking its whole
/// tree with the exclusion list applied and stopping once it alone holds
/// `max_results` matches.
///
/// Batches arrive in completion order, so results are unordered across
/// volumes. Once the cap is met the remaining workers are cancelled
/// best-effort and left to finish naturally; the last accepted batch can
/// push the total past the cap, so callers truncate.
pub fn search_volumes(
    volumes: &[PathBuf],
    target: &str,
    max_results: usize,
    excluded: &[String],
) -> Vec<PathBuf> {
    let needle = target.to_lowercase();
    let cancel = CancelFlag::new();
    let (batch_tx, batch_rx) = mpsc::channel::<Vec<PathBuf>>();

    for volume in volumes {
        let batch_tx = batch_tx.clone();
        let cancel = cancel.clone();
        let needle = needle.clone();
        let excluded = excluded.to_vec();
        let volume = volume.clone();
        thread::spawn(move || {
            let mut matches = Vec::new();
            collect_exact(&volume, &needle, max_results, &excluded, &cancel, &mut matches);
            // The receiver is gone if the cap was met without us.
            let _ = batch_tx.send(matches);
        });
    }
    drop(batch_tx);

    let mut found = Vec::new();
    while let Ok(batch) = batch_rx.recv() {
        found.extend(batch);
        if found.len() >= max_results {
            cancel.cancel();
            break;
        }
    }
    found
}

fn is_excluded(name: &std::ffi::OsStr, excluded: &[String]) -> bool {
    name.to_str()
        .is_some_and(|name| excluded.iter().any(|skip| name == skip))
}

/// Walks one root, appending files whose lower-cased name equals `needle`
/// until the cap is reached or the flag trips.
fn collect_exact(
    root: &Path,
    needle: &str,
    max_results: usize,
    excluded: &[String],
    cancel: &CancelFlag,
    found: &mut Vec<PathBuf>,
) {
    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        !(entry.file_type().is_dir() && is_excluded(entry.file_name(), excluded))
    });
    for (counter, entry) in walker.enumerate() {
        if cancel.is_cancelled_sparse(counter) {
            return;
        }
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                log::debug!("locate skip under {}: {}", root.display(), error);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().to_lowercase() == needle {
            found.push(entry.into_path());
            if found.len() >= max_results {
                return;
            }
        }
    }
}

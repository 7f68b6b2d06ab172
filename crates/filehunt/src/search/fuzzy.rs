//! Similarity fallback for when exact search finds nothing.
//!
//! Scoped to the priority roots only: fuzzy-scoring an entire filesystem
//! is too slow and too unreliable to be worth it.

use std::path::PathBuf;

use walkdir::WalkDir;

use crate::types::Match;

/// Normalized similarity between two filenames, in [0, 1].
///
/// Case-insensitive and symmetric; 1.0 means identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// Scores every filename under the given roots and returns the single best
/// candidate, provided it clears `cutoff`.
///
/// Strict `>` tracking means the first-seen candidate in walk order wins
/// ties. This is a full scan with no early exit: the best match is not
/// known until every candidate has been scored.
pub fn best_match(roots: &[PathBuf], target: &str, cutoff: f64) -> Option<Match> {
    let needle = target.to_lowercase();
    let mut best: Option<Match> = None;

    for root in roots {
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    log::debug!("fuzzy skip under {}: {}", root.display(), error);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let score = strsim::normalized_levenshtein(
                &needle,
                &entry.file_name().to_string_lossy().to_lowercase(),
            );
            if best.as_ref().map_or(true, |held| score > held.score) {
                best = Some(Match {
                    path: entry.into_path(),
                    score,
                });
            }
        }
    }

    best.filter(|found| found.score >= cutoff)
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn similarity_is_symmetric() {
        for (a, b) in [
            ("report.pdf", "repot.pdf"),
            ("ghost.txt", "zebra.png"),
            ("", "x"),
        ] {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn identical_names_score_one() {
        assert_eq!(similarity("notes.txt", "NOTES.TXT"), 1.0);
    }

    #[test]
    fn one_edit_clears_the_cutoff() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("report.pdf"));

        let found = best_match(&[temp.path().to_path_buf()], "repot.pdf", 0.6).unwrap();
        assert_eq!(found.path, temp.path().join("report.pdf"));
        assert!(found.score >= 0.6);
    }

    #[test]
    fn nothing_similar_yields_none() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("zzzzzzzz.bin"));

        assert!(best_match(&[temp.path().to_path_buf()], "ghost.txt", 0.6).is_none());
    }

    #[test]
    fn first_seen_wins_score_ties() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        // Both are one substitution away from the target, so their scores tie.
        touch(&first.path().join("ab.txt"));
        touch(&second.path().join("cb.txt"));

        let roots = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        let found = best_match(&roots, "bb.txt", 0.6).unwrap();
        assert_eq!(found.path, first.path().join("ab.txt"));
    }
}

//! File location: staged exact search with a fuzzy fallback.

pub mod exact;
pub mod fuzzy;

use std::path::PathBuf;
use std::time::Instant;

use crate::roots;
use crate::types::Match;
use crate::volumes;

/// Fuzzy candidates below this similarity are discarded.
pub const DEFAULT_FUZZY_CUTOFF: f64 = 0.6;

/// Tuning knobs for [`FileLocator`].
#[derive(Debug, Clone)]
pub struct LocatorConfig {
    /// Ordered roots for the fast stage and the fuzzy fallback.
    pub priority_roots: Vec<PathBuf>,
    /// Fixed volume list for the exhaustive stage; `None` enumerates the
    /// mounted volumes fresh on every locate call.
    pub volumes: Option<Vec<PathBuf>>,
    /// Directory names the exhaustive stage never descends into.
    pub excluded_dirs: Vec<String>,
    /// Minimum similarity for a fuzzy result.
    pub fuzzy_cutoff: f64,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            priority_roots: roots::priority_roots(),
            volumes: None,
            excluded_dirs: exact::DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            fuzzy_cutoff: DEFAULT_FUZZY_CUTOFF,
        }
    }
}

impl LocatorConfig {
    pub fn with_priority_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.priority_roots = roots;
        self
    }

    pub fn with_volumes(mut self, volumes: Vec<PathBuf>) -> Self {
        self.volumes = Some(volumes);
        self
    }

    pub fn with_excluded_dirs(mut self, names: Vec<String>) -> Self {
        self.excluded_dirs = names;
        self
    }

    pub fn with_fuzzy_cutoff(mut self, cutoff: f64) -> Self {
        self.fuzzy_cutoff = cutoff;
        self
    }
}

/// Entry point for locating a file by bare name.
///
/// Pure composition: runs the exact stages, falls through to the fuzzy
/// stage only when they found nothing, and caps the result count. Every
/// call scans the live filesystem; nothing is cached between calls.
#[derive(Debug, Default)]
pub struct FileLocator {
    config: LocatorConfig,
}

impl FileLocator {
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    /// Locates `filename` and returns up to `max_results` matches.
    ///
    /// Matching is case-insensitive on filenames, never on full paths.
    /// Exact matches score 1.0. When both exact stages come up empty the
    /// single best fuzzy candidate is returned instead, or nothing when no
    /// candidate clears the cutoff. An empty result is a defined state,
    /// not an error.
    pub fn locate(&self, filename: &str, max_results: usize) -> Vec<Match> {
        if filename.trim().is_empty() {
            return Vec::new();
        }
        let max_results = max_results.max(1);
        let started = Instant::now();

        let mut paths =
            exact::search_priority_roots(&self.config.priority_roots, filename, max_results);

        if paths.is_empty() {
            let volumes = match &self.config.volumes {
                Some(fixed) => fixed.clone(),
                None => volumes::mounted_volumes(),
            };
            paths =
                exact::search_volumes(&volumes, filename, max_results, &self.config.excluded_dirs);
            // A worker's final batch can push past the cap.
            paths.truncate(max_results);
        }

        if !paths.is_empty() {
            log::info!(
                "locate name={} exact_matches={} elapsed_ms={}",
                filename,
                paths.len(),
                started.elapsed().as_millis(),
            );
            return paths.into_iter().map(Match::exact).collect();
        }

        let matches: Vec<Match> =
            fuzzy::best_match(&self.config.priority_roots, filename, self.config.fuzzy_cutoff)
                .into_iter()
                .collect();
        log::info!(
            "locate name={} fuzzy_matches={} elapsed_ms={}",
            filename,
            matches.len(),
            started.elapsed().as_millis(),
        );
        matches
    }

    /// Convenience for the common single-result lookup.
    pub fn locate_first(&self, filename: &str) -> Option<Match> {
        self.locate(filename, 1).into_iter().next()
    }
}

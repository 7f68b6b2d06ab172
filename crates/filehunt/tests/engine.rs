//! End-to-end exercises of the public locate and dedupe APIs.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use filehunt::{DeduplicationScanner, FileLocator, LocatorConfig, RecycleBin};
use tempfile::TempDir;

fn touch(path: &Path) {
    File::create(path).unwrap();
}

fn locator(priority: &TempDir, volume: &TempDir) -> FileLocator {
    FileLocator::new(
        LocatorConfig::default()
            .with_priority_roots(vec![priority.path().to_path_buf()])
            .with_volumes(vec![volume.path().to_path_buf()]),
    )
}

#[test]
fn exact_priority_hit_short_circuits_everything_else() {
    let priority = TempDir::new().unwrap();
    let volume = TempDir::new().unwrap();
    touch(&priority.path().join("budget.xlsx"));
    // A near-miss name that fuzzy would love, and a volume copy that the
    // exhaustive stage would find; neither may appear in the result.
    touch(&priority.path().join("budget2.xlsx"));
    touch(&volume.path().join("budget.xlsx"));

    let matches = locator(&priority, &volume).locate("budget.xlsx", 1);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].path, priority.path().join("budget.xlsx"));
    assert_eq!(matches[0].score, 1.0);
}

#[test]
fn volume_stage_runs_only_when_priority_roots_are_empty() {
    let priority = TempDir::new().unwrap();
    let volume = TempDir::new().unwrap();
    fs::create_dir(volume.path().join("deep")).unwrap();
    touch(&volume.path().join("deep/archive.zip"));

    let matches = locator(&priority, &volume).locate("archive.zip", 5);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].path, volume.path().join("deep/archive.zip"));
    assert_eq!(matches[0].score, 1.0);
}

#[test]
fn fuzzy_fallback_returns_the_close_name() {
    let priority = TempDir::new().unwrap();
    let volume = TempDir::new().unwrap();
    touch(&priority.path().join("report.pdf"));

    let matches = locator(&priority, &volume).locate("repot.pdf", 1);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].path, priority.path().join("report.pdf"));
    assert!(matches[0].score >= 0.6);
    assert!(matches[0].score < 1.0);
}

#[test]
fn nothing_similar_anywhere_yields_empty() {
    let priority = TempDir::new().unwrap();
    let volume = TempDir::new().unwrap();
    touch(&priority.path().join("zzzzzzzzzz.bin"));

    let matches = locator(&priority, &volume).locate("ghost.txt", 3);
    assert!(matches.is_empty());
}

#[test]
fn locate_result_is_always_capped() {
    let priority = TempDir::new().unwrap();
    let volume = TempDir::new().unwrap();
    for i in 0..3 {
        let dir = volume.path().join(format!("d{i}"));
        fs::create_dir(&dir).unwrap();
        touch(&dir.join("song.mp3"));
    }

    let matches = locator(&priority, &volume).locate("song.mp3", 2);
    assert_eq!(matches.len(), 2);
}

struct HoldingBin {
    dir: PathBuf,
}

impl RecycleBin for HoldingBin {
    fn dispose(&self, path: &Path) -> io::Result<()> {
        fs::rename(path, self.dir.join(path.file_name().unwrap()))
    }
}

#[test]
fn locate_then_dedupe_round_trip() {
    let tree = TempDir::new().unwrap();
    let holding = TempDir::new().unwrap();
    fs::create_dir(tree.path().join("copies")).unwrap();
    fs::write(tree.path().join("notes.txt"), "important").unwrap();
    fs::write(tree.path().join("copies/notes.txt"), "important").unwrap();

    let scanner = DeduplicationScanner::with_bin(Box::new(HoldingBin {
        dir: holding.path().to_path_buf(),
    }));
    let outcome = scanner.deduplicate(tree.path()).unwrap();
    assert_eq!(outcome.removed.len(), 1);

    // The surviving copy is still locatable afterwards.
    let locator = FileLocator::new(
        LocatorConfig::default()
            .with_priority_roots(vec![tree.path().to_path_buf()])
            .with_volumes(Vec::new()),
    );
    let matches = locator.locate("notes.txt", 5);
    assert_eq!(matches.len(), 1);
    assert!(matches[0].path.is_file());
}

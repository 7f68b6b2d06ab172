//! Resolution of logical folder names to validated root directories.

use std::path::{Path, PathBuf};

use crate::error::{EngineError, Result};

/// Well-known user directories in priority order.
///
/// The order is load-bearing: the fast locate stage searches these front to
/// back and the first root that satisfies the result cap wins, so result
/// determinism comes entirely from this list.
pub fn priority_roots() -> Vec<PathBuf> {
    [
        dirs::desktop_dir(),
        dirs::download_dir(),
        dirs::document_dir(),
        dirs::picture_dir(),
        dirs::audio_dir(),
        dirs::video_dir(),
    ]
    .into_iter()
    .flatten()
    .filter(|path| path.is_dir())
    .collect()
}

fn well_known_dir(alias: &str) -> Option<PathBuf> {
    match alias {
        "desktop" => dirs::desktop_dir(),
        "documents" => dirs::document_dir(),
        "downloads" => dirs::download_dir(),
        "pictures" => dirs::picture_dir(),
        "videos" => dirs::video_dir(),
        "music" => dirs::audio_dir(),
        _ => None,
    }
}

/// Resolves caller input to an existing root directory.
///
/// Accepts a well-known alias ("downloads"), an absolute path, or a bare
/// name relative to the home directory. Aliases are matched
/// case-insensitively. Returns `InvalidRoot` when nothing matching exists
/// on disk.
pub fn resolve_root(input: &str) -> Result<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidRoot(PathBuf::new()));
    }

    if let Some(dir) = well_known_dir(&trimmed.to_lowercase()) {
        if dir.is_dir() {
            return Ok(dir);
        }
    }

    let candidate = PathBuf::from(trimmed);
    if candidate.is_absolute() {
        if candidate.is_dir() {
            return Ok(candidate);
        }
        return Err(EngineError::InvalidRoot(candidate));
    }

    if let Some(home) = dirs::home_dir() {
        let guess = home.join(trimmed);
        if guess.is_dir() {
            return Ok(guess);
        }
    }
    Err(EngineError::InvalidRoot(candidate))
}

/// Ensures `path` exists as a directory and is writable.
///
/// Creates missing directories, then probes writability by creating an
/// unnamed temporary file inside. Failure is the hard
/// `DestinationUnwritable` error; it is never retried.
pub fn ensure_writable(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|error| EngineError::DestinationUnwritable {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })?;
    tempfile::tempfile_in(path)
        .map(|_| ())
        .map_err(|error| EngineError::DestinationUnwritable {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn absolute_directory_resolves_to_itself() {
        let temp = TempDir::new().unwrap();
        let resolved = resolve_root(temp.path().to_str().unwrap()).unwrap();
        assert_eq!(resolved, temp.path());
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            resolve_root("   "),
            Err(EngineError::InvalidRoot(_))
        ));
    }

    #[test]
    fn missing_absolute_path_is_rejected() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("not-here");
        assert!(matches!(
            resolve_root(gone.to_str().unwrap()),
            Err(EngineError::InvalidRoot(_))
        ));
    }

    #[test]
    fn ensure_writable_creates_missing_directories() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b/c");
        ensure_writable(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn priority_roots_exist() {
        for root in priority_roots() {
            assert!(root.is_dir());
        }
    }
}

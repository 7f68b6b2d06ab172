//! Reversible file disposal.

use std::io;
use std::path::Path;

/// Capability for removing a file recoverably instead of erasing it.
///
/// The dedupe scanner treats a disposal failure as a per-file skip, so
/// implementations should report errors rather than panic.
pub trait RecycleBin: Send + Sync {
    fn dispose(&self, path: &Path) -> io::Result<()>;
}

/// Disposal into the operating system trash / recycle bin.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTrash;

impl RecycleBin for SystemTrash {
    fn dispose(&self, path: &Path) -> io::Result<()> {
        trash::delete(path).map_err(io::Error::other)
    }
}

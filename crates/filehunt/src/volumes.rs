//! Enumeration of mounted storage volumes.

use std::path::PathBuf;

use sysinfo::Disks;

/// Lists the mount points of all currently accessible volumes.
///
/// The set is discovered fresh on every call and must not be cached across
/// locate operations; volumes can appear and disappear between runs.
pub fn mounted_volumes() -> Vec<PathBuf> {
    let disks = Disks::new_with_refreshed_list();
    let mut mounts: Vec<PathBuf> = disks
        .iter()
        .map(|disk| disk.mount_point().to_path_buf())
        .collect();
    mounts.sort();
    mounts.dedup();
    log::debug!("volume enumeration found {} mount points", mounts.len());
    mounts
}

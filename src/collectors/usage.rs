use crate::models::disk::DiskEntry;
use nix::sys::statvfs::statvfs;

/// Fill in statvfs counters for every registered disk.
///
/// A failed query (mount point gone since registration, permission change)
/// leaves that entry's counters at zero and moves on; one bad mount must
/// not take down the whole report.
pub fn collect(disks: &mut [DiskEntry]) {
    for disk in disks.iter_mut() {
        if let Ok(stat) = statvfs(disk.mount.as_str()) {
            disk.frsize = stat.fragment_size() as u64;
            disk.blocks = stat.blocks();
            disk.bfree = stat.blocks_free();
            disk.bavail = stat.blocks_available();
        }
    }
}

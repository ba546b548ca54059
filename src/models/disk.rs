/// One registered physical disk with its statvfs counters.
///
/// The block counters stay zero until the usage pass fills them in; a disk
/// whose statvfs query failed renders from those zeros rather than aborting
/// the report.
#[derive(Debug, Clone)]
pub struct DiskEntry {
    pub device: String,
    pub mount:  String,
    /// Allocation unit in bytes (statvfs f_frsize).
    pub frsize: u64,
    /// Total capacity in frsize blocks.
    pub blocks: u64,
    /// Free blocks, including the root-reserved portion.
    pub bfree:  u64,
    /// Free blocks usable by unprivileged users.
    pub bavail: u64,
}

impl DiskEntry {
    pub fn new(device: String, mount: String) -> Self {
        Self { device, mount, frsize: 0, blocks: 0, bfree: 0, bavail: 0 }
    }

    pub fn total_bytes(&self) -> u64 {
        self.blocks * self.frsize
    }

    pub fn avail_bytes(&self) -> u64 {
        self.bavail * self.frsize
    }

    /// df reports used = total - free (free counts the reserved blocks too).
    pub fn used_bytes(&self) -> u64 {
        self.total_bytes().saturating_sub(self.bfree * self.frsize)
    }

    /// df's percentage: used against used + available, not total capacity.
    pub fn use_pct(&self) -> u64 {
        let used = self.used_bytes();
        let denom = used + self.avail_bytes();
        if denom == 0 { return 0; }
        used * 100 / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(frsize: u64, blocks: u64, bfree: u64, bavail: u64) -> DiskEntry {
        let mut d = DiskEntry::new("/dev/sda1".into(), "/".into());
        d.frsize = frsize;
        d.blocks = blocks;
        d.bfree = bfree;
        d.bavail = bavail;
        d
    }

    #[test]
    fn use_pct_is_based_on_used_plus_avail() {
        // total=1000, free=400, avail=300 -> used=600, 600*100/900 = 66
        let d = entry(1, 1000, 400, 300);
        assert_eq!(d.used_bytes(), 600);
        assert_eq!(d.use_pct(), 66);
    }

    #[test]
    fn use_pct_guards_zero_denominator() {
        let d = entry(0, 0, 0, 0);
        assert_eq!(d.use_pct(), 0);
    }

    #[test]
    fn byte_totals_scale_by_fragment_size() {
        let d = entry(4096, 100, 25, 20);
        assert_eq!(d.total_bytes(), 409_600);
        assert_eq!(d.used_bytes(), 307_200);
        assert_eq!(d.avail_bytes(), 81_920);
    }
}

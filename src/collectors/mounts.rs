use crate::models::disk::DiskEntry;
use anyhow::{bail, Context, Result};

const MTAB_PATH: &str = "/etc/mtab";

/// Per-field limit for device paths and mount directories. A field of 128
/// bytes or more means a mangled mount table, which is treated as fatal.
pub const MAX_FIELD_LEN: usize = 128;

/// True if `device` names a physical disk partition.
///
/// SATA partitions look like /dev/sda1: family tag `sd`, trailing digit.
/// NVMe devices carry the `nv` tag and match on a trailing digit or a `p`
/// as the second-to-last character, so both /dev/nvme0n1p10 and the
/// whole-disk node /dev/nvme0n1 are reported, matching df.
pub fn is_physical_disk(device: &str) -> bool {
    let Some(rest) = device.strip_prefix("/dev/") else {
        return false;
    };
    let b = rest.as_bytes();
    if b.len() < 2 {
        return false;
    }
    match &b[..2] {
        b"sd" => b[b.len() - 1].is_ascii_digit(),
        b"nv" => b[b.len() - 1].is_ascii_digit() || b[b.len() - 2] == b'p',
        _ => false,
    }
}

fn read_mount_table() -> Result<String> {
    std::fs::read_to_string(MTAB_PATH)
        .with_context(|| format!("failed to open {}", MTAB_PATH))
}

/// Decode the mtab octal escapes getmntent would: \040 space, \011 tab,
/// \012 newline, \134 backslash. Anything else passes through untouched.
fn unescape_octal(field: &str) -> String {
    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 3 < bytes.len() {
            let decoded = match &bytes[i + 1..i + 4] {
                b"040" => Some(b' '),
                b"011" => Some(b'\t'),
                b"012" => Some(b'\n'),
                b"134" => Some(b'\\'),
                _ => None,
            };
            if let Some(byte) = decoded {
                out.push(byte);
                i += 4;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    // Only ASCII bytes are ever substituted, so this cannot actually lose data.
    String::from_utf8_lossy(&out).into_owned()
}

/// Lazy (device, mount dir) pairs from one mount-table snapshot, with
/// octal escapes decoded.
fn parse_mounts(content: &str) -> impl Iterator<Item = (String, String)> + '_ {
    content.lines().filter_map(|line| {
        let mut fields = line.split_whitespace();
        let device = fields.next()?;
        let mount = fields.next()?;
        Some((unescape_octal(device), unescape_octal(mount)))
    })
}

/// Count phase: how many mount entries currently look like physical disks.
/// The result sizes the registry for `register_disks`.
pub fn count_mounted_disks() -> Result<usize> {
    let content = read_mount_table()?;
    Ok(parse_mounts(&content)
        .filter(|(device, _)| is_physical_disk(device))
        .count())
}

/// Populate phase: re-read the mount table and copy up to `capacity` disk
/// entries. The table may have shrunk since the count, so the returned
/// registry can be shorter than `capacity`; it is never longer.
pub fn register_disks(capacity: usize) -> Result<Vec<DiskEntry>> {
    let content = read_mount_table()?;
    build_registry(parse_mounts(&content), capacity)
}

fn build_registry<I>(mounts: I, capacity: usize) -> Result<Vec<DiskEntry>>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut disks = Vec::with_capacity(capacity);

    for (device, mount) in mounts {
        if disks.len() == capacity {
            break;
        }
        if !is_physical_disk(&device) {
            continue;
        }
        if device.len() >= MAX_FIELD_LEN {
            bail!("device path <{}> exceeds the {} byte limit", device, MAX_FIELD_LEN);
        }
        if mount.len() >= MAX_FIELD_LEN {
            bail!("mount directory <{}> exceeds the {} byte limit", mount, MAX_FIELD_LEN);
        }
        disks.push(DiskEntry::new(device, mount));
    }
    Ok(disks)
}

use crate::models::disk::DiskEntry;
use crate::util::human::{fmt_scaled, scale};
use anyhow::Result;
use serde_json::{json, Value};

/// Print the header plus one row per registered disk.
pub fn print_table(disks: &[DiskEntry], human: bool) {
    println!("{}", header(human));
    for disk in disks {
        println!("{}", render_row(disk, human));
    }
}

fn header(human: bool) -> String {
    if human {
        format!(
            "{:<16}{:<6}{:<6}{:<6}{:<5}{}",
            "Filesystem", "Size", "Used", "Avai", "Use", "Mounted on"
        )
    } else {
        format!(
            "{:<20}{:<13}{:<13}{:<13}{:>4}  {}",
            "Filesystem", "1K-blocks", "Used", "Available", "Use", "Mounted on"
        )
    }
}

/// One column-aligned output row. Zero-filled entries (failed statvfs)
/// render as all-zero columns rather than erroring.
pub fn render_row(disk: &DiskEntry, human: bool) -> String {
    let total = disk.total_bytes();
    let used = disk.used_bytes();
    let avail = disk.avail_bytes();
    let pct = disk.use_pct();

    if human {
        let (total, p_total) = scale(total);
        let (used, p_used) = scale(used);
        let (avail, p_avail) = scale(avail);
        format!(
            "{:<16}{:>3}{:<3}{:>3}{:<3}{:>3}{:<2}{:>3}%  {}",
            disk.device, total, p_total, used, p_used, avail, p_avail, pct, disk.mount
        )
    } else {
        format!(
            "{:<20}{:<13}{:<13}{:<13}{:>3}%  {}",
            disk.device,
            total / 1024,
            used / 1024,
            avail / 1024,
            pct,
            disk.mount
        )
    }
}

/// One-shot machine-readable snapshot of the registry.
pub fn print_json(disks: &[DiskEntry]) -> Result<()> {
    let rows: Vec<Value> = disks
        .iter()
        .map(|disk| {
            json!({
                "device":     disk.device,
                "mountpoint": disk.mount,
                "total":      disk.total_bytes(),
                "used":       disk.used_bytes(),
                "avail":      disk.avail_bytes(),
                "total_hr":   fmt_scaled(disk.total_bytes()),
                "used_hr":    fmt_scaled(disk.used_bytes()),
                "avail_hr":   fmt_scaled(disk.avail_bytes()),
                "use_pct":    disk.use_pct(),
            })
        })
        .collect();

    let snapshot = json!({
        "dfree_version": "0.1",
        "timestamp": chrono::Local::now().to_rfc3339(),
        "disks": rows,
    });

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

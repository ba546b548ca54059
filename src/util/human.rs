/// Binary unit prefixes, smallest first.
const PREFIXES: [char; 6] = ['k', 'M', 'G', 'T', 'P', 'E'];

/// Scale a raw byte count to a human magnitude plus unit character.
///
/// The magnitude is promoted while it is at least 1000, but each promotion
/// divides by 1024. The asymmetry is deliberate and matches df: a value
/// must reach 1000 in its current unit before moving to the next one.
pub fn scale(bytes: u64) -> (u64, char) {
    let mut magnitude = bytes;
    let mut unit = 'B';
    for prefix in PREFIXES {
        if magnitude < 1000 {
            break;
        }
        magnitude /= 1024;
        unit = prefix;
    }
    (magnitude, unit)
}

/// "12M"-style rendering of a byte count, used by the JSON snapshot.
pub fn fmt_scaled(bytes: u64) -> String {
    let (magnitude, unit) = scale(bytes);
    format!("{}{}", magnitude, unit)
}

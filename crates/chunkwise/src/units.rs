const KB: u64 = 1 << 10;
const MB: u64 = 1 << 20;
const GB: u64 = 1 << 30;
const TB: u64 = 1 << 40;

/// Format a byte count for humans, e.g. `"64.00 KB"`.
///
/// Counts below one KB are printed as a bare integer.
pub fn human_readable_size(size: u64) -> String {
    let (unit, label) = match size {
        s if s < KB => return s.to_string(),
        s if s < MB => (KB, "KB"),
        s if s < GB => (MB, "MB"),
        s if s < TB => (GB, "GB"),
        _ => (TB, "TB"),
    };
    format!("{:.2} {label}", size as f64 / unit as f64)
}

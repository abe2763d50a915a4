const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

/// Bar value label: whole percent, halves rounded away from zero.
pub fn format_whole_percent(score: f64) -> String {
    format!("{:.0}%", score.round())
}

/// Tooltip value: two decimal places.
pub fn format_precise_percent(score: f64) -> String {
    format!("{score:.2}%")
}

pub fn format_file_size(bytes: u64) -> String {
    let value = bytes as f64;
    if value >= MIB {
        format!("{:.1} MB", value / MIB)
    } else if value >= KIB {
        format!("{:.1} KB", value / KIB)
    } else {
        let suffix = if bytes == 1 { "" } else { "s" };
        format!("{bytes} byte{suffix}")
    }
}

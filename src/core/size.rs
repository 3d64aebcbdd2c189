const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Render a byte count as `B`, `KB`, `MB` or `GB`.
///
/// The quotient is truncated before it is formatted, so `1536` renders as
/// `1KB`, not `1.5KB`.
pub fn format_size(bytes: u64) -> String {
    let (unit, suffix) = if bytes >= GIB {
        (GIB, "GB")
    } else if bytes >= MIB {
        (MIB, "MB")
    } else if bytes >= KIB {
        (KIB, "KB")
    } else {
        return bytes.to_string();
    };

    let value = format!("{:.1}", (bytes / unit) as f64);
    let value = value.strip_suffix(".0").unwrap_or(&value);
    format!("{value}{suffix}")
}

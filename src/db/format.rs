const MIB: f64 = 1024.0 * 1024.0;
const GIB_BYTES: i64 = 1024 * 1024 * 1024;

/// Renders a relation size for display.
///
/// Sizes of at least 1 GiB are shown in GB, everything else in MB, both with
/// two decimals rounded half-up. There is no KB unit: small tables show as
/// fractional MB.
pub fn format_size(bytes: i64) -> String {
    if bytes >= GIB_BYTES {
        format!("{:.2} GB", round_hundredths(bytes as f64 / GIB_BYTES as f64))
    } else {
        format!("{:.2} MB", round_hundredths(bytes as f64 / MIB))
    }
}

// `{:.2}` alone rounds exact ties to even, and page-aligned sizes hit ties
// (16 pages is exactly 0.125 MB).
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_gib_is_gb() {
        assert_eq!(format_size(1024 * 1024 * 1024), "1.00 GB");
    }

    #[test]
    fn one_byte_below_gib_stays_in_mb() {
        let formatted = format_size(1024 * 1024 * 1024 - 1);
        assert!(formatted.ends_with(" MB"), "got {formatted}");
        assert_eq!(formatted, "1024.00 MB");
    }

    #[test]
    fn small_tables_are_fractional_mb() {
        assert_eq!(format_size(8192), "0.01 MB");
        assert_eq!(format_size(0), "0.00 MB");
    }

    #[test]
    fn ties_round_half_up() {
        // 16 pages of 8 KiB
        assert_eq!(format_size(131072), "0.13 MB");
        // 1.125 GiB
        assert_eq!(format_size(9 * 1024 * 1024 * 1024 / 8), "1.13 GB");
        // 48 pages, 0.375 MB
        assert_eq!(format_size(393216), "0.38 MB");
    }

    #[test]
    fn large_tables_keep_two_decimals() {
        assert_eq!(format_size(5 * 1024 * 1024 * 1024 / 2), "2.50 GB");
        assert_eq!(format_size(1536 * 1024), "1.50 MB");
    }
}

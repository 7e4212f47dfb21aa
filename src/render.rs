//! Human readable rendering of traffic values.
//!
//! Values are scaled by powers of 1024 and shown with two decimals once they leave the plain
//! byte range.

const PREFIXES: [&str; 7] = ["", "K", "M", "G", "T", "P", "E"];

fn scale(value: u64) -> (f64, &'static str) {
    let mut scaled = value as f64;
    let mut prefix = 0;
    while scaled >= 1024.0 && prefix < PREFIXES.len() - 1 {
        scaled /= 1024.0;
        prefix += 1;
    }
    (scaled, PREFIXES[prefix])
}

fn render_scaled(value: u64, suffix: &str) -> String {
    match scale(value) {
        (_, "") => format!("{} B{}", value, suffix),
        (scaled, prefix) => format!("{:.2} {}B{}", scaled, prefix, suffix),
    }
}

/// A plain amount of bytes, e.g. `465.66 GB`.
pub fn bytes(value: u64) -> String {
    render_scaled(value, "")
}

/// A throughput in bytes per second, e.g. `11.44 MB/s`.
pub fn iobandwidth(value: u64) -> String {
    render_scaled(value, "/s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes() {
        assert_eq!(bytes(0), "0 B");
        assert_eq!(bytes(1023), "1023 B");
        assert_eq!(bytes(1024), "1.00 KB");
        assert_eq!(bytes(1536), "1.50 KB");
        assert_eq!(bytes(500_000_000_000), "465.66 GB");
        assert_eq!(bytes(300_000_000_000), "279.40 GB");
        assert_eq!(bytes(u64::MAX), "16.00 EB");
    }

    #[test]
    fn test_iobandwidth() {
        assert_eq!(iobandwidth(0), "0 B/s");
        assert_eq!(iobandwidth(12_000_000), "11.44 MB/s");
        assert_eq!(iobandwidth(8_000_000), "7.63 MB/s");
        assert_eq!(iobandwidth(10_000_000), "9.54 MB/s");
        assert_eq!(iobandwidth(20_000_000), "19.07 MB/s");
    }
}

//! Number formatting shared by summaries and reports.

/// Format a count with `,` thousands separators (`1234567` → `1,234,567`).
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Format a ratio with two decimals, or `∞` when it is unbounded.
#[must_use]
pub fn format_ratio(ratio: f64) -> String {
    if ratio.is_infinite() {
        "∞".to_string()
    } else {
        format!("{ratio:.2}")
    }
}

/// Integer percentage of `part` in `whole`, truncated; 0 when `whole` is 0.
#[must_use]
pub const fn percent(part: u64, whole: u64) -> u64 {
    if whole == 0 {
        0
    } else {
        part.saturating_mul(100) / whole
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(123_456), "123,456");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(2.0), "2.00");
        assert_eq!(format_ratio(f64::INFINITY), "∞");
        assert_eq!(format_ratio(0.0), "0.00");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(7, 10), 70);
        assert_eq!(percent(2, 3), 66);
        assert_eq!(percent(10, 10), 100);
    }
}

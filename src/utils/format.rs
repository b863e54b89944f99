//! Formatting utilities for display values.

/// Format a count with thousands separators (e.g. `12500` → `"12,500"`).
///
/// Used for the dataset statistics in the overview strip.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_small() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(999), "999");
    }

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(12500), "12,500");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_number_large() {
        assert_eq!(format_number(u64::MAX), "18,446,744,073,709,551,615");
    }
}

//! Numeric coercion utilities.

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_f64;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_f64("3"), Some(3.0));
        assert_eq!(parse_f64(" -2.5 "), Some(-2.5));
        assert_eq!(parse_f64("0.15"), Some(0.15));
    }

    #[test]
    fn rejects_garbage_and_empty() {
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("   "), None);
        assert_eq!(parse_f64("N/A"), None);
        assert_eq!(parse_f64("12abc"), None);
    }
}

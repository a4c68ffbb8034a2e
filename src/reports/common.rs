//! Shared formatting utilities for report generators.

use std::borrow::Cow;

/// Format a score for display: two decimal places, the convention every
/// chart surface uses. The underlying stored value is never altered.
#[must_use]
pub fn format_score(value: f64) -> String {
    format!("{value:.2}")
}

/// Format a fractional score as a whole percentage, the factor comparison
/// chart's convention.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{:.0}%", (value * 100.0).round())
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
#[must_use]
pub fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.5), "0.50");
        assert_eq!(format_score(0.666), "0.67");
        assert_eq!(format_score(0.0), "0.00");
        assert_eq!(format_score(1.0), "1.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.5), "50%");
        assert_eq!(format_percent(0.666), "67%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(1.0), "100%");
    }

    #[test]
    fn test_escape_csv_no_special_chars() {
        let result = escape_csv("hello world");
        assert_eq!(result, "hello world");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_csv_with_quotes() {
        let result = escape_csv("hello \"world\"");
        assert_eq!(result, "\"hello \"\"world\"\"\"");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn test_escape_csv_with_comma() {
        // Region names contain commas, so this path is hot.
        let result = escape_csv("EU, EFTA, and North America");
        assert_eq!(result, "\"EU, EFTA, and North America\"");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn test_escape_csv_with_newline() {
        let result = escape_csv("hello\nworld");
        assert_eq!(result, "\"hello\nworld\"");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn test_escape_csv_empty() {
        let result = escape_csv("");
        assert_eq!(result, "");
        assert!(matches!(result, Cow::Borrowed(_)));
    }
}

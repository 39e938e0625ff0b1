//! Pluralization helpers for report output.

/// Return "s" suffix for plural counts
///
/// - `plural_s(1)` -> `""` (1 error)
/// - `plural_s(3)` -> `"s"` (3 errors)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, e.g. `plural_count(2, "document")` -> `"2 documents"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "document"), "0 documents");
        assert_eq!(plural_count(1, "document"), "1 document");
        assert_eq!(plural_count(4, "error"), "4 errors");
    }
}

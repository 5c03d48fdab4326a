//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 sections)
/// - `plural_s(1)` -> `""` (1 section)
/// - `plural_s(5)` -> `"s"` (5 sections)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "warning"), "0 warnings");
        assert_eq!(plural_count(1, "warning"), "1 warning");
        assert_eq!(plural_count(3, "section"), "3 sections");
    }
}

//! String utilities for the domain layer.

/// Truncate a string to at most `max_chars` characters.
///
/// Counts Unicode scalar values rather than bytes, so multi-byte text is
/// never split mid-character. Returns the (possibly shortened) text and
/// whether anything was cut off.
pub fn truncate_chars(s: &str, max_chars: usize) -> (&str, bool) {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => (&s[..end], true),
        None => (s, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_chars("hello", 10), ("hello", false));
        assert_eq!(truncate_chars("hello world", 5), ("hello", true));
    }

    #[test]
    fn test_truncate_exact_length_is_untouched() {
        assert_eq!(truncate_chars("hello", 5), ("hello", false));
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_chars("دبي للتقنية", 3), ("دبي", true));
        assert_eq!(truncate_chars("👋🌍🎉", 2), ("👋🌍", true));
    }
}

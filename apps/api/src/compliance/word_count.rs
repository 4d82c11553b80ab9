use crate::compliance::models::WordCountResult;

/// Counts whitespace-delimited tokens and classifies them against an
/// inclusive `[min_words, max_words]` range.
pub fn check_word_count(text: &str, min_words: usize, max_words: usize) -> WordCountResult {
    let count = text.split_whitespace().count();

    WordCountResult {
        count,
        within_range: (min_words..=max_words).contains(&count),
        min_words,
        max_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::models::{DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS};

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    fn default_check(text: &str) -> WordCountResult {
        check_word_count(text, DEFAULT_MIN_WORDS, DEFAULT_MAX_WORDS)
    }

    #[test]
    fn test_lower_boundary() {
        assert!(default_check(&words(100)).within_range);
        assert!(!default_check(&words(99)).within_range);
    }

    #[test]
    fn test_upper_boundary() {
        assert!(default_check(&words(1000)).within_range);
        assert!(!default_check(&words(1001)).within_range);
    }

    #[test]
    fn test_runs_of_whitespace_collapse() {
        let r = default_check("  one\t\ttwo \n\n three\r\nfour   ");
        assert_eq!(r.count, 4);
    }

    #[test]
    fn test_empty_text_is_zero_and_out_of_range() {
        let r = default_check("");
        assert_eq!(r.count, 0);
        assert!(!r.within_range);

        assert_eq!(default_check(" \n\t ").count, 0);
    }

    #[test]
    fn test_custom_bounds() {
        let r = check_word_count("a b c", 3, 3);
        assert!(r.within_range);
        assert_eq!((r.min_words, r.max_words), (3, 3));
        assert!(!check_word_count("a b c d", 3, 3).within_range);
    }
}

// ABOUTME: Whitespace-delimited word counting.

/// Number of whitespace-delimited words. Empty and all-whitespace input
/// count as zero words.
pub fn count_words(input: &str) -> usize {
    input.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words() {
        assert_eq!(count_words("hello world"), 2);
        assert_eq!(count_words("  leading and trailing  "), 3);
        assert_eq!(count_words("tabs\tand\nnewlines"), 3);
    }

    #[test]
    fn blank_input_has_no_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words(" \t\n"), 0);
    }
}

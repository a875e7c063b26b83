/// Lowercases a raw token, strips ASCII punctuation from both ends and caps
/// the result at `max_len` characters. Interior punctuation is kept.
pub fn normalize(raw: &str, max_len: usize) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let lowered = raw.to_lowercase();
    let trimmed = lowered.trim_matches(|ch: char| ch.is_ascii_punctuation());

    if trimmed.chars().count() > max_len {
        trimmed.chars().take(max_len).collect()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::DEFAULT_MAX_WORD_LENGTH;

    fn norm(raw: &str) -> String {
        normalize(raw, DEFAULT_MAX_WORD_LENGTH)
    }

    #[test]
    fn strips_outer_punctuation_and_lowercases() {
        assert_eq!(norm("Hello!!"), "hello");
        assert_eq!(norm("\"Quoted,\""), "quoted");
        assert_eq!(norm("(BAD)"), "bad");
    }

    #[test]
    fn all_punctuation_becomes_empty() {
        assert_eq!(norm("---"), "");
        assert_eq!(norm("?!..."), "");
        assert_eq!(norm(""), "");
    }

    #[test]
    fn interior_punctuation_is_preserved() {
        assert_eq!(norm("can't"), "can't");
        assert_eq!(norm("'well-known'"), "well-known");
    }

    #[test]
    fn long_words_are_truncated() {
        let long = "a".repeat(80);
        assert_eq!(norm(&long).len(), DEFAULT_MAX_WORD_LENGTH);
        assert_eq!(normalize("...abcdef...", 3), "abc");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(normalize("Über!", 2), "üb");
    }
}

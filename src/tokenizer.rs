//! Tokenization of raw corpus text.
//!
//! A token is a whitespace-delimited word with every literal `.` and `,`
//! stripped, wherever it occurs. Case is preserved and no Unicode
//! normalization is applied: two tokens are equal exactly when their
//! characters are equal.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **NO_EMPTY_TOKENS**: the iterator never yields an empty string
//! 2. **WHITESPACE_UNIFORM**: space, tab, and newline are one delimiter
//!    class; a word split across a newline is never mis-split
//! 3. **RESTARTABLE**: the sequence is recomputed per call, never cached

/// Characters stripped from candidate words before they become tokens.
const STRIP_CHARS: [char; 2] = ['.', ','];

/// Clean a raw whitespace-delimited candidate into a token.
///
/// Returns `None` when stripping leaves nothing behind, e.g. a lone `.`
/// between two spaces.
pub fn clean_word(raw: &str) -> Option<String> {
    let token: String = raw.chars().filter(|c| !STRIP_CHARS.contains(c)).collect();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Tokenize text into a lazy stream of normalized words.
///
/// Splits on runs of whitespace, cleans each candidate with [`clean_word`],
/// and drops candidates that clean to nothing. The returned iterator
/// borrows `text` and does no work until driven.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(clean_word)
}

/// Count the tokens in a text without collecting them.
pub fn token_count(text: &str) -> u64 {
    tokenize(text).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        tokenize(text).collect()
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(tokens("Project, DSA. Project"), ["Project", "DSA", "Project"]);
    }

    #[test]
    fn test_interior_punctuation_stripped() {
        assert_eq!(tokens("a.b,c"), ["abc"]);
    }

    #[test]
    fn test_whitespace_classes_uniform() {
        assert_eq!(tokens("one\ttwo\nthree  four"), ["one", "two", "three", "four"]);
    }

    #[test]
    fn test_no_empty_tokens() {
        // Lone punctuation cleans to nothing and must be dropped
        assert_eq!(tokens(". , .. ,,"), Vec::<String>::new());
        assert_eq!(tokens(""), Vec::<String>::new());
    }

    #[test]
    fn test_case_preserved() {
        assert_eq!(tokens("Project project PROJECT"), ["Project", "project", "PROJECT"]);
    }

    #[test]
    fn test_restartable() {
        let text = "alpha beta gamma";
        assert_eq!(tokens(text), tokens(text));
        assert_eq!(token_count(text), 3);
    }
}

//! Linear-scan baseline: counting without an index.
//!
//! Re-tokenizes the entire corpus for every query. This is the approach
//! every index variant is compared against: O(N) per query where N is
//! the corpus length, however many queries follow.

use crate::tokenizer::tokenize;

/// Count occurrences of `target` by scanning the whole text.
///
/// Tokenization rules match the indexed path exactly, so a scan and an
/// index built from the same text always agree. An empty target matches
/// nothing, since empty tokens are never produced.
pub fn scan_count(text: &str, target: &str) -> u64 {
    if target.is_empty() {
        return 0;
    }
    tokenize(text).filter(|token| token == target).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_matches_expected_counts() {
        let text = "Project DSA Project. Project, test";
        assert_eq!(scan_count(text, "Project"), 3);
        assert_eq!(scan_count(text, "DSA"), 1);
        assert_eq!(scan_count(text, "missing"), 0);
    }

    #[test]
    fn test_empty_target_is_zero() {
        assert_eq!(scan_count("some words here", ""), 0);
    }

    #[test]
    fn test_punctuation_stripped_before_compare() {
        assert_eq!(scan_count("stop. stop, stop", "stop"), 3);
    }
}

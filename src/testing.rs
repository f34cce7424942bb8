//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::builder::{build_index, BuiltIndex};
use crate::index::IndexKind;
use crate::tokenizer::tokenize;

/// The worked example corpus: tokenizes to
/// `["Project", "DSA", "Project", "Project", "test"]`.
pub const TINY_CORPUS: &str = "Project DSA Project. Project, test";

/// Collect the token stream for a text.
pub fn tokens_of(text: &str) -> Vec<String> {
    tokenize(text).collect()
}

/// Build every variant from the same text.
pub fn build_all_variants(text: &str) -> Vec<BuiltIndex> {
    IndexKind::ALL
        .iter()
        .map(|&kind| build_index(tokenize(text), kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiny_corpus_tokens() {
        assert_eq!(
            tokens_of(TINY_CORPUS),
            ["Project", "DSA", "Project", "Project", "test"]
        );
    }

    #[test]
    fn test_build_all_variants_covers_closed_set() {
        let built = build_all_variants(TINY_CORPUS);
        assert_eq!(built.len(), IndexKind::ALL.len());
        for b in &built {
            assert_eq!(b.tokens_indexed, 5);
        }
    }
}

//! Property-based tests using proptest.
//!
//! The hash index doubles as the reference oracle: it is the simplest
//! possible realization of the token→count contract, so every other
//! variant is checked against it on randomly generated corpora.

use freqdex::{
    build_index, scan_count, tokenize, BstIndex, FrequencyIndex, IndexKind, SortedArrayIndex,
};
use proptest::prelude::*;
use std::collections::HashMap;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Generate word-like strings. Mixed case on purpose: tokens are
/// case-sensitive and ordering is byte-wise.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{1,8}").unwrap()
}

/// Generate corpus text with varied separators and stray punctuation.
fn corpus_strategy() -> impl Strategy<Value = String> {
    let separator = prop_oneof![
        Just(" ".to_string()),
        Just("\n".to_string()),
        Just("\t".to_string()),
        Just(", ".to_string()),
        Just(". ".to_string()),
    ];
    prop::collection::vec((word_strategy(), separator), 0..60).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(word, sep)| format!("{word}{sep}"))
            .collect()
    })
}

/// Count tokens the obvious way, as ground truth.
fn oracle_counts(text: &str) -> HashMap<String, u64> {
    let mut counts = HashMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

// ============================================================================
// CROSS-VARIANT PROPERTIES
// ============================================================================

proptest! {
    /// Property: all four variants agree with the oracle on every token
    /// that occurs, on a probe that never occurs, and on unique_count.
    #[test]
    fn prop_variants_agree_with_oracle(corpus in corpus_strategy()) {
        let oracle = oracle_counts(&corpus);
        for kind in IndexKind::ALL {
            let built = build_index(tokenize(&corpus), kind);
            for (word, &count) in &oracle {
                prop_assert_eq!(built.index.lookup(word), count, "{} on {:?}", kind, word);
            }
            // Digits never appear in generated words
            prop_assert_eq!(built.index.lookup("0probe7"), 0);
            prop_assert_eq!(built.index.unique_count(), oracle.len(), "{}", kind);
        }
    }

    /// Property: counts conserve the token total: summing the count of
    /// every distinct token gives back the stream length.
    #[test]
    fn prop_count_conservation(corpus in corpus_strategy()) {
        let total = tokenize(&corpus).count() as u64;
        let oracle = oracle_counts(&corpus);
        for kind in IndexKind::ALL {
            let built = build_index(tokenize(&corpus), kind);
            prop_assert_eq!(built.tokens_indexed, total);
            let sum: u64 = oracle.keys().map(|w| built.index.lookup(w)).sum();
            prop_assert_eq!(sum, total, "{}", kind);
        }
    }

    /// Property: the linear scan agrees with the indexed answer for any
    /// word; the baseline and the indexes must be comparable.
    #[test]
    fn prop_scan_agrees_with_index(corpus in corpus_strategy(), probe in word_strategy()) {
        let built = build_index(tokenize(&corpus), IndexKind::Hash);
        prop_assert_eq!(scan_count(&corpus, &probe), built.index.lookup(&probe));
    }
}

// ============================================================================
// TOKENIZER PROPERTIES
// ============================================================================

proptest! {
    /// Property: tokens never come out empty and never contain the
    /// stripped punctuation or any whitespace.
    #[test]
    fn prop_tokens_are_clean(text in "[a-zA-Z., \t\n]{0,200}") {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains(['.', ',']));
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }

    /// Property: tokenization is restartable: two passes over the same
    /// text yield identical streams.
    #[test]
    fn prop_tokenize_restartable(text in "[a-zA-Z., \t\n]{0,200}") {
        let first: Vec<String> = tokenize(&text).collect();
        let second: Vec<String> = tokenize(&text).collect();
        prop_assert_eq!(first, second);
    }
}

// ============================================================================
// STRUCTURE-SPECIFIC PROPERTIES
// ============================================================================

proptest! {
    /// Property: binary search over the sealed array matches a plain map
    /// lookup for present and absent words alike.
    #[test]
    fn prop_binary_search_differential(
        words in prop::collection::vec(word_strategy(), 0..40),
        probe in word_strategy()
    ) {
        let mut sorted = SortedArrayIndex::new();
        let mut oracle: HashMap<String, u64> = HashMap::new();
        for word in &words {
            sorted.insert(word);
            *oracle.entry(word.clone()).or_insert(0) += 1;
        }
        sorted.seal();

        for word in &words {
            prop_assert_eq!(sorted.lookup(word), oracle[word.as_str()]);
        }
        prop_assert_eq!(
            sorted.lookup(&probe),
            oracle.get(&probe).copied().unwrap_or(0)
        );
    }

    /// Property: strictly ascending insertion degenerates the BST into a
    /// chain of height equal to the number of distinct tokens, and the
    /// chain still answers correctly.
    #[test]
    fn prop_bst_degrades_on_sorted_input(n in 1usize..50) {
        let mut bst = BstIndex::new();
        let words: Vec<String> = (0..n).map(|i| format!("w{i:03}")).collect();
        for word in &words {
            bst.insert(word);
        }
        prop_assert_eq!(bst.height(), n);
        prop_assert_eq!(bst.unique_count(), n);
        for word in &words {
            prop_assert_eq!(bst.lookup(word), 1);
        }
    }
}

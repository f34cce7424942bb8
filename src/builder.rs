//! Index construction from a token stream.
//!
//! One pass: every token goes to `insert`, the index is sealed, and the
//! wall-clock cost of exactly that work is recorded. The stream is lazy;
//! the builder never asks for its length and never buffers it.

use crate::index::{FrequencyIndex, IndexKind};
use std::time::{Duration, Instant};

/// A built, sealed, queryable index plus its build measurement.
pub struct BuiltIndex {
    /// The sealed index, ready for read-only queries.
    pub index: Box<dyn FrequencyIndex>,
    /// Wall time for draining the stream, inserting, and sealing. Corpus
    /// loading is never included.
    pub build_time: Duration,
    /// Number of non-empty tokens fed to the index. The sum of all counts
    /// held by the index equals this number.
    pub tokens_indexed: u64,
}

/// Drain `tokens` into a fresh index of the requested variant.
pub fn build_index(tokens: impl Iterator<Item = String>, kind: IndexKind) -> BuiltIndex {
    let start = Instant::now();
    let mut index = kind.new_index();
    let mut total = 0u64;
    for token in tokens {
        index.insert(&token);
        total += 1;
    }
    index.seal();
    BuiltIndex {
        index,
        build_time: start.elapsed(),
        tokens_indexed: total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_build_consumes_stream_once() {
        let text = "Project DSA Project. Project, test";
        for kind in IndexKind::ALL {
            let built = build_index(tokenize(text), kind);
            assert_eq!(built.tokens_indexed, 5, "{kind}");
            assert_eq!(built.index.lookup("Project"), 3, "{kind}");
            assert_eq!(built.index.unique_count(), 3, "{kind}");
        }
    }

    #[test]
    fn test_empty_stream_builds_empty_index() {
        let built = build_index(std::iter::empty(), IndexKind::SortedArray);
        assert_eq!(built.tokens_indexed, 0);
        assert_eq!(built.index.unique_count(), 0);
        assert_eq!(built.index.lookup("anything"), 0);
    }
}

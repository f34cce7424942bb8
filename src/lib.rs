//! In-memory word-frequency indexes with comparative benchmarks.
//!
//! This crate builds a frequency index over a tokenized text corpus and
//! answers exact-match word-count queries through four interchangeable
//! index structures, so their build-time/query-time trade-offs can be
//! measured against each other and against an index-free linear scan.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ tokenizer.rs │────▶│  builder.rs  │────▶│  harness.rs  │
//! │  (tokenize)  │     │ (build_index)│     │ (run, report)│
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │                     │
//!                             ▼                     ▼
//!                      ┌─────────────────────────────────┐
//!                      │            index/               │
//!                      │  (FrequencyIndex: HashIndex,    │
//!                      │   TrieIndex, BstIndex,          │
//!                      │   SortedArrayIndex)             │
//!                      └─────────────────────────────────┘
//! ```
//!
//! # Variants
//!
//! | Variant           | Insert          | Lookup          | Notes                       |
//! |-------------------|-----------------|-----------------|-----------------------------|
//! | `HashIndex`       | O(1) expected   | O(1) expected   | the baseline                |
//! | `TrieIndex`       | O(token length) | O(token length) | corpus-size independent     |
//! | `BstIndex`        | O(height)       | O(height)       | degrades on sorted input    |
//! | `SortedArrayIndex`| O(1) staged     | O(log U)        | one sort at seal time       |
//!
//! # Usage
//!
//! ```
//! use freqdex::{build_index, tokenize, IndexKind};
//!
//! let corpus = "Project DSA Project. Project, test";
//! let built = build_index(tokenize(corpus), IndexKind::Trie);
//! assert_eq!(built.index.lookup("Project"), 3);
//! assert_eq!(built.index.unique_count(), 3);
//! ```

// Module declarations
mod builder;
pub mod corpus;
mod error;
mod harness;
mod index;
mod scan;
mod tokenizer;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use builder::{build_index, BuiltIndex};
pub use corpus::{generate_corpus, CorpusSource};
pub use error::HarnessError;
pub use harness::{
    default_suite, run, run_scenario, BaselineTiming, Comparison, HarnessConfig, RunReport,
    Scenario, ScenarioOutcome, ScenarioReport, ScenarioSpec, VariantTiming, WordCount,
    DEFAULT_REPEAT_COUNT, DEFAULT_SEED, DEFAULT_STREAM_QUERIES,
};
pub use index::{BstIndex, FrequencyIndex, HashIndex, IndexKind, SortedArrayIndex, TrieIndex};
pub use scan::scan_count;
pub use tokenizer::{clean_word, token_count, tokenize};

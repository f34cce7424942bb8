// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Frequency indexes: the data structures that make word counts fast.
//!
//! Four index types over the same write-once/read-many contract, each with
//! a different build/query trade-off:
//! - **Hash table**: expected O(1) insert and lookup, the baseline
//! - **Trie**: O(token length) insert and lookup, independent of corpus size
//! - **Binary search tree**: O(height), degrades on sorted insertion order
//! - **Sorted array**: one O(U log U) sort at seal time, O(log U) lookup

mod bst;
mod hash;
mod sorted;
mod trie;

pub use bst::BstIndex;
pub use hash::HashIndex;
pub use sorted::SortedArrayIndex;
pub use trie::TrieIndex;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Write-once/read-many mapping from token to occurrence count.
///
/// Implementations are built by feeding every token of a corpus to
/// [`insert`](FrequencyIndex::insert), sealed once, then queried read-only.
/// All query-side operations are total: absent tokens and degenerate
/// (empty) tokens report a count of 0, never an error.
pub trait FrequencyIndex {
    /// Record one occurrence of `token`.
    ///
    /// Repeated inserts of the same token increment a single logical entry.
    fn insert(&mut self, token: &str);

    /// Occurrence count for `token`, 0 if it was never inserted.
    fn lookup(&self, token: &str) -> u64;

    /// Number of distinct tokens currently held.
    fn unique_count(&self) -> usize;

    /// Finish the build phase.
    ///
    /// Called exactly once by the builder after the token stream is
    /// drained, before any lookup. Most variants have nothing to do here;
    /// the sorted array materializes and sorts its backing sequence.
    fn seal(&mut self) {}

    /// Which variant this index is, for report labeling.
    fn kind(&self) -> IndexKind;
}

/// The closed set of index variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexKind {
    /// Direct hash table, the "instant lookup" baseline.
    Hash,
    /// Prefix tree keyed per character.
    Trie,
    /// Unbalanced binary search tree.
    Bst,
    /// Sorted array with binary search.
    SortedArray,
}

impl IndexKind {
    /// Every variant, in report order.
    pub const ALL: [IndexKind; 4] = [
        IndexKind::Hash,
        IndexKind::Trie,
        IndexKind::Bst,
        IndexKind::SortedArray,
    ];

    /// Stable lowercase name used in reports and CLI arguments.
    pub fn name(self) -> &'static str {
        match self {
            IndexKind::Hash => "hash",
            IndexKind::Trie => "trie",
            IndexKind::Bst => "bst",
            IndexKind::SortedArray => "sorted",
        }
    }

    /// Construct an empty index of this variant.
    pub fn new_index(self) -> Box<dyn FrequencyIndex> {
        match self {
            IndexKind::Hash => Box::new(HashIndex::new()),
            IndexKind::Trie => Box::new(TrieIndex::new()),
            IndexKind::Bst => Box::new(BstIndex::new()),
            IndexKind::SortedArray => Box::new(SortedArrayIndex::new()),
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IndexKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hash" => Ok(IndexKind::Hash),
            "trie" => Ok(IndexKind::Trie),
            "bst" => Ok(IndexKind::Bst),
            "sorted" => Ok(IndexKind::SortedArray),
            other => Err(format!(
                "unknown index variant '{other}' (expected hash, trie, bst, or sorted)"
            )),
        }
    }
}

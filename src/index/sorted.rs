// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sorted array index with binary search lookup.
//!
//! Inserts accumulate in a staging hash table; sealing materializes a
//! `(token, count)` sequence sorted once by byte-lexicographic token order.
//! The sort happens exactly once, after the last insert, never
//! incrementally per insert. Lookup is a midpoint binary search over the
//! sealed sequence; an exhausted range answers 0.
//!
//! Binary search is authoritative. There is no fallback to the staging
//! table on a miss; a silent fallback would mask a broken search instead
//! of surfacing it.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SORTED_AFTER_SEAL**: entries are strictly ascending by token
//! 2. **SINGLE_SORT**: `seal` sorts once; inserts never reorder anything
//! 3. **COUNTS_PRESERVED**: sealing moves counts verbatim from staging

use super::{FrequencyIndex, IndexKind};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Two-phase index: hash-staged build, sorted-array queries.
#[derive(Debug, Default)]
pub struct SortedArrayIndex {
    staging: HashMap<String, u64>,
    entries: Vec<(String, u64)>,
    sealed: bool,
}

impl SortedArrayIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binary search over the sealed entries.
    fn binary_search(&self, token: &str) -> u64 {
        let mut lo = 0usize;
        let mut hi = self.entries.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            let (word, count) = &self.entries[mid];
            match token.cmp(word.as_str()) {
                Ordering::Equal => return *count,
                Ordering::Greater => lo = mid + 1,
                Ordering::Less => hi = mid,
            }
        }
        0
    }
}

impl FrequencyIndex for SortedArrayIndex {
    fn insert(&mut self, token: &str) {
        debug_assert!(!self.sealed, "insert after seal");
        *self.staging.entry(token.to_string()).or_insert(0) += 1;
    }

    fn lookup(&self, token: &str) -> u64 {
        if self.sealed {
            self.binary_search(token)
        } else {
            // Build phase: answer from staging so the contract stays total
            self.staging.get(token).copied().unwrap_or(0)
        }
    }

    fn unique_count(&self) -> usize {
        if self.sealed {
            self.entries.len()
        } else {
            self.staging.len()
        }
    }

    fn seal(&mut self) {
        self.entries = self.staging.drain().collect();
        self.entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        self.sealed = true;
    }

    fn kind(&self) -> IndexKind {
        IndexKind::SortedArray
    }
}

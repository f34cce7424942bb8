//! Error types for the benchmark harness.
//!
//! The index operations themselves are total functions and have no error
//! type. Errors exist only at the edges: obtaining the corpus, and
//! validating scenario configuration. A degenerate query (empty target)
//! is not an error: lookup answers 0.

use std::fmt;
use std::path::PathBuf;

/// Errors surfaced by corpus loading and scenario configuration.
///
/// A `SourceUnavailable` is fatal for the scenario that hit it, never for
/// the whole run: the harness records it and moves on to the next
/// scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// The corpus file could not be read.
    SourceUnavailable { path: PathBuf, reason: String },
    /// A randomized query stream was configured with no candidate words.
    EmptyVocabulary,
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::SourceUnavailable { path, reason } => {
                write!(f, "corpus unavailable at {}: {}", path.display(), reason)
            }
            HarnessError::EmptyVocabulary => {
                write!(f, "randomized query stream needs a non-empty vocabulary")
            }
        }
    }
}

impl std::error::Error for HarnessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = HarnessError::SourceUnavailable {
            path: PathBuf::from("/tmp/missing.txt"),
            reason: "No such file or directory".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("/tmp/missing.txt"));
        assert!(message.contains("No such file"));
    }
}

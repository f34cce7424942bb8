//! Corpus sources and synthetic corpus generation.
//!
//! The harness never reaches into the filesystem itself; it asks a
//! [`CorpusSource`] for the full text and treats any failure as fatal for
//! the current scenario only. The synthetic generator reproduces the
//! repeated-sentence corpus the benchmarks were originally tuned on.

use crate::error::HarnessError;
use std::fs;
use std::path::PathBuf;

/// The sentence the synthetic corpus repeats.
pub const SAMPLE_SENTENCE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
     Project DSA requires analysis of algorithms versus machine learning efficiency. ";

/// Default repeat count for [`generate_corpus`] (~650 KB of text).
pub const DEFAULT_REPEATS: usize = 5000;

/// Default lookup target used by the CLI.
pub const DEFAULT_TARGET: &str = "Project";

/// The fixed 20-word query vocabulary used by the multi-word and
/// randomized-stream scenarios. Mixes frequent corpus words with common
/// English words that never appear, so misses are exercised too.
pub const QUERY_VOCABULARY: [&str; 20] = [
    "Project",
    "DSA",
    "algorithms",
    "machine",
    "learning",
    "efficiency",
    "analysis",
    "requires",
    "Lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "versus",
    "of",
    "and",
    "the",
];

/// Produce a synthetic corpus of `repeats` copies of [`SAMPLE_SENTENCE`].
pub fn generate_corpus(repeats: usize) -> String {
    SAMPLE_SENTENCE.repeat(repeats)
}

/// Where a scenario's corpus text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    /// Text held directly in the configuration.
    Inline(String),
    /// Text read from a file at load time.
    File(PathBuf),
}

impl CorpusSource {
    /// Obtain the corpus text.
    ///
    /// File reads are performed on every call, so a scenario that runs after
    /// a failed one gets a fresh chance at the file.
    pub fn load(&self) -> Result<String, HarnessError> {
        match self {
            CorpusSource::Inline(text) => Ok(text.clone()),
            CorpusSource::File(path) => {
                fs::read_to_string(path).map_err(|e| HarnessError::SourceUnavailable {
                    path: path.clone(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Short human label for reports.
    pub fn describe(&self) -> String {
        match self {
            CorpusSource::Inline(text) => format!("<inline, {} bytes>", text.len()),
            CorpusSource::File(path) => path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_generate_corpus_repeats() {
        let corpus = generate_corpus(3);
        assert_eq!(corpus.len(), SAMPLE_SENTENCE.len() * 3);
        assert!(corpus.starts_with("Lorem ipsum"));
    }

    #[test]
    fn test_inline_load() {
        let source = CorpusSource::Inline("some text".to_string());
        assert_eq!(source.load().unwrap(), "some text");
    }

    #[test]
    fn test_file_load_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "corpus on disk").unwrap();
        let source = CorpusSource::File(file.path().to_path_buf());
        assert_eq!(source.load().unwrap(), "corpus on disk");
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let source = CorpusSource::File(PathBuf::from("/nonexistent/corpus.txt"));
        match source.load() {
            Err(HarnessError::SourceUnavailable { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/corpus.txt"));
            }
            other => panic!("expected SourceUnavailable, got {other:?}"),
        }
    }
}

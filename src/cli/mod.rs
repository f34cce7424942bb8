// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the freqdex command-line interface.
//!
//! Three subcommands: `generate` to write a synthetic corpus, `count` for
//! a one-off word count through a chosen index variant, and `bench` to run
//! the comparative scenario suite. `bench` prints human-readable tables by
//! default and a JSON document with `--json`.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use freqdex::corpus::{DEFAULT_REPEATS, DEFAULT_TARGET, QUERY_VOCABULARY};
use freqdex::{IndexKind, Scenario, DEFAULT_REPEAT_COUNT, DEFAULT_SEED, DEFAULT_STREAM_QUERIES};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "freqdex",
    about = "Word-frequency index builder and benchmark harness",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a synthetic corpus file (a repeated sample sentence)
    Generate {
        /// Output path for the corpus file
        #[arg(short, long)]
        output: PathBuf,

        /// Number of copies of the sample sentence
        #[arg(short, long, default_value_t = DEFAULT_REPEATS)]
        repeats: usize,
    },

    /// Count one word in a corpus through a chosen index variant
    Count {
        /// Corpus file to index
        #[arg(short, long)]
        corpus: PathBuf,

        /// Word to count
        word: String,

        /// Index variant to build (hash, trie, bst, sorted)
        #[arg(long, default_value = "hash")]
        variant: IndexKind,
    },

    /// Run benchmark scenarios and print a comparative report
    Bench {
        /// Corpus file shared by every scenario
        #[arg(short, long)]
        corpus: PathBuf,

        /// Scenarios to run; defaults to the full suite
        #[arg(long = "scenario")]
        scenarios: Vec<ScenarioArg>,

        /// Variants to exercise; defaults to all four
        #[arg(long = "variant")]
        variants: Vec<IndexKind>,

        /// Target word for the single and repeated scenarios
        #[arg(long, default_value = DEFAULT_TARGET)]
        target: String,

        /// Seed for the randomized query stream
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Emit the full report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
}

/// Scenario selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenarioArg {
    /// One build, one lookup
    Single,
    /// One build, the fixed 20-word query list
    Multi,
    /// One build, the same lookup 1000 times
    Repeated,
    /// One build, 5000 seeded-random queries
    Random,
}

impl ScenarioArg {
    /// Expand a CLI selection into a concrete scenario.
    pub fn to_scenario(self, target: &str) -> Scenario {
        let vocabulary: Vec<String> = QUERY_VOCABULARY.iter().map(|w| w.to_string()).collect();
        match self {
            ScenarioArg::Single => Scenario::SingleQuery {
                target: target.to_string(),
            },
            ScenarioArg::Multi => Scenario::MultiWord {
                targets: vocabulary,
            },
            ScenarioArg::Repeated => Scenario::Repeated {
                target: target.to_string(),
                times: DEFAULT_REPEAT_COUNT,
            },
            ScenarioArg::Random => Scenario::RandomStream {
                vocabulary,
                queries: DEFAULT_STREAM_QUERIES,
            },
        }
    }
}

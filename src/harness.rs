//! Benchmark harness: scenarios, timing, and comparative reports.
//!
//! Each scenario builds every requested index variant from the same corpus
//! text, issues the scenario's query load against each one, runs the same
//! load through the linear-scan baseline, and reports wall-clock build and
//! query time separately. The query plan (including the randomized stream)
//! is fixed before any timing starts, so every variant and the baseline
//! answer exactly the same sequence of queries.
//!
//! Scenarios are isolated: a corpus that fails to load kills the scenario
//! that asked for it and nothing else. The run report carries one outcome
//! per scenario, completed or failed.

use crate::builder::build_index;
use crate::corpus::{CorpusSource, QUERY_VOCABULARY};
use crate::error::HarnessError;
use crate::index::IndexKind;
use crate::scan::scan_count;
use crate::tokenizer::{token_count, tokenize};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Lookups issued by the repeated-query scenario unless configured.
pub const DEFAULT_REPEAT_COUNT: usize = 1000;

/// Queries drawn by the randomized-stream scenario unless configured
/// (50 simulated users issuing 100 queries each).
pub const DEFAULT_STREAM_QUERIES: usize = 50 * 100;

/// Seed for the randomized query stream unless configured.
pub const DEFAULT_SEED: u64 = 42;

// ============================================================================
// SCENARIOS
// ============================================================================

/// A query workload to run against every variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scenario {
    /// One build, one lookup of a fixed target word.
    SingleQuery { target: String },
    /// One build, sequential lookups of a fixed ordered word list. The
    /// baseline path re-scans the whole corpus once per word.
    MultiWord { targets: Vec<String> },
    /// One build, the same lookup repeated `times` times (a hot query).
    Repeated { target: String, times: usize },
    /// One build, `queries` lookups drawn uniformly from `vocabulary`
    /// with a seeded RNG.
    RandomStream {
        vocabulary: Vec<String>,
        queries: usize,
    },
}

impl Scenario {
    /// Stable scenario name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::SingleQuery { .. } => "single-query",
            Scenario::MultiWord { .. } => "multi-word",
            Scenario::Repeated { .. } => "repeated",
            Scenario::RandomStream { .. } => "random-stream",
        }
    }

    /// One-line workload description for reports.
    pub fn describe(&self) -> String {
        match self {
            Scenario::SingleQuery { target } => format!("one lookup of {target:?}"),
            Scenario::MultiWord { targets } => {
                format!("{} distinct lookups", targets.len())
            }
            Scenario::Repeated { target, times } => {
                format!("{target:?} looked up {times} times")
            }
            Scenario::RandomStream { vocabulary, queries } => format!(
                "{queries} randomized queries over {} candidates",
                vocabulary.len()
            ),
        }
    }

    fn validate(&self) -> Result<(), HarnessError> {
        if let Scenario::RandomStream { vocabulary, .. } = self {
            if vocabulary.is_empty() {
                return Err(HarnessError::EmptyVocabulary);
            }
        }
        Ok(())
    }

    /// The words a scenario touches, plus the query plan as indices into
    /// that word list. Resolving the plan up front keeps RNG work out of
    /// the timed query phase and gives every variant an identical load.
    fn query_plan(&self, seed: u64) -> (Vec<String>, Vec<usize>) {
        match self {
            Scenario::SingleQuery { target } => (vec![target.clone()], vec![0]),
            Scenario::MultiWord { targets } => {
                let plan = (0..targets.len()).collect();
                (targets.clone(), plan)
            }
            Scenario::Repeated { target, times } => (vec![target.clone()], vec![0; *times]),
            Scenario::RandomStream { vocabulary, queries } => {
                let mut rng = StdRng::seed_from_u64(seed);
                let plan = (0..*queries)
                    .map(|_| rng.gen_range(0..vocabulary.len()))
                    .collect();
                (vocabulary.clone(), plan)
            }
        }
    }
}

/// A scenario plus an optional corpus override.
///
/// Most runs share one corpus across all scenarios; a spec-level source
/// lets a single scenario read from somewhere else (and fail alone if
/// that source is gone).
#[derive(Debug, Clone)]
pub struct ScenarioSpec {
    pub scenario: Scenario,
    pub source: Option<CorpusSource>,
}

impl From<Scenario> for ScenarioSpec {
    fn from(scenario: Scenario) -> Self {
        Self {
            scenario,
            source: None,
        }
    }
}

/// Explicit harness configuration. No globals: everything a run needs
/// travels in this struct.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Corpus shared by every scenario without its own override.
    pub source: CorpusSource,
    /// Variants to build and measure, in report order.
    pub variants: Vec<IndexKind>,
    /// Scenarios to run, in order.
    pub scenarios: Vec<ScenarioSpec>,
    /// Seed for the randomized query stream.
    pub seed: u64,
}

impl HarnessConfig {
    /// All four variants against the default scenario suite.
    pub fn new(source: CorpusSource) -> Self {
        Self {
            source,
            variants: IndexKind::ALL.to_vec(),
            scenarios: default_suite(),
            seed: DEFAULT_SEED,
        }
    }
}

/// The default scenario suite: multi-word, repeated, randomized stream,
/// then single-query, over the fixed query vocabulary.
pub fn default_suite() -> Vec<ScenarioSpec> {
    let vocabulary: Vec<String> = QUERY_VOCABULARY.iter().map(|w| w.to_string()).collect();
    vec![
        Scenario::MultiWord {
            targets: vocabulary.clone(),
        }
        .into(),
        Scenario::Repeated {
            target: crate::corpus::DEFAULT_TARGET.to_string(),
            times: DEFAULT_REPEAT_COUNT,
        }
        .into(),
        Scenario::RandomStream {
            vocabulary,
            queries: DEFAULT_STREAM_QUERIES,
        }
        .into(),
        Scenario::SingleQuery {
            target: crate::corpus::DEFAULT_TARGET.to_string(),
        }
        .into(),
    ]
}

// ============================================================================
// REPORTS
// ============================================================================

/// A word and the count the measured structure answered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Timings and results for one variant in one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct VariantTiming {
    pub variant: IndexKind,
    #[serde(rename = "build_ms", serialize_with = "ser_duration_ms")]
    pub build: Duration,
    #[serde(rename = "query_ms", serialize_with = "ser_duration_ms")]
    pub query: Duration,
    #[serde(rename = "total_ms", serialize_with = "ser_duration_ms")]
    pub total: Duration,
    /// Lookups issued during the query phase.
    pub queries: u64,
    /// Distinct tokens the built index holds.
    pub unique_count: usize,
    /// Count answered for each distinct word the scenario touched.
    pub results: Vec<WordCount>,
}

/// Timings and results for the no-index linear-scan baseline.
#[derive(Debug, Clone, Serialize)]
pub struct BaselineTiming {
    #[serde(rename = "query_ms", serialize_with = "ser_duration_ms")]
    pub query: Duration,
    /// Full corpus scans performed (one per query).
    pub queries: u64,
    pub results: Vec<WordCount>,
}

/// Which entry won and by how much.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// Variant with the lowest build+query total.
    pub fastest: IndexKind,
    /// Baseline scan time divided by the fastest variant's total.
    /// Above 1.0 the index pays for itself on this workload.
    pub speedup_vs_baseline: f64,
}

/// Everything measured for one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub detail: String,
    pub corpus: String,
    /// Non-empty tokens the tokenizer produced for this corpus.
    pub total_tokens: u64,
    pub variants: Vec<VariantTiming>,
    pub baseline: BaselineTiming,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
}

/// Per-scenario outcome: a report, or the error that stopped it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScenarioOutcome {
    Completed(ScenarioReport),
    Failed { scenario: String, error: String },
}

/// Outcomes for a whole harness run, in scenario order.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub scenarios: Vec<ScenarioOutcome>,
}

impl RunReport {
    /// True when at least one scenario failed.
    pub fn any_failed(&self) -> bool {
        self.scenarios
            .iter()
            .any(|outcome| matches!(outcome, ScenarioOutcome::Failed { .. }))
    }
}

fn ser_duration_ms<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64() * 1e3)
}

// ============================================================================
// EXECUTION
// ============================================================================

/// Run every configured scenario, collecting one outcome per scenario.
///
/// Failures never propagate across scenarios: a missing corpus file fails
/// its scenario and the run moves on.
pub fn run(config: &HarnessConfig) -> RunReport {
    let mut scenarios = Vec::with_capacity(config.scenarios.len());
    for spec in &config.scenarios {
        let source = spec.source.as_ref().unwrap_or(&config.source);
        let outcome = match run_scenario(source, &spec.scenario, &config.variants, config.seed) {
            Ok(report) => ScenarioOutcome::Completed(report),
            Err(err) => ScenarioOutcome::Failed {
                scenario: spec.scenario.name().to_string(),
                error: err.to_string(),
            },
        };
        scenarios.push(outcome);
    }
    RunReport { scenarios }
}

/// Run one scenario against one corpus source.
pub fn run_scenario(
    source: &CorpusSource,
    scenario: &Scenario,
    variants: &[IndexKind],
    seed: u64,
) -> Result<ScenarioReport, HarnessError> {
    scenario.validate()?;
    let text = source.load()?;
    let (words, plan) = scenario.query_plan(seed);

    let mut timings = Vec::with_capacity(variants.len());
    for &kind in variants {
        timings.push(measure_variant(&text, kind, &words, &plan));
    }

    let baseline = measure_baseline(&text, &words, &plan);
    let comparison = compare(&timings, &baseline);

    Ok(ScenarioReport {
        scenario: scenario.name().to_string(),
        detail: scenario.describe(),
        corpus: source.describe(),
        total_tokens: token_count(&text),
        variants: timings,
        baseline,
        comparison,
    })
}

/// Build one variant and push the full query plan through it.
///
/// Build and query phases are timed separately; `unique_count` runs
/// outside both timers (for the trie it is a full traversal and would
/// distort the query measurement).
fn measure_variant(text: &str, kind: IndexKind, words: &[String], plan: &[usize]) -> VariantTiming {
    let built = build_index(tokenize(text), kind);

    let mut counts = vec![0u64; words.len()];
    let start = Instant::now();
    for &word_idx in plan {
        counts[word_idx] = built.index.lookup(&words[word_idx]);
    }
    let query = start.elapsed();

    VariantTiming {
        variant: kind,
        build: built.build_time,
        query,
        total: built.build_time + query,
        queries: plan.len() as u64,
        unique_count: built.index.unique_count(),
        results: collect_results(words, &counts),
    }
}

/// Answer the same query plan with a full corpus scan per query.
fn measure_baseline(text: &str, words: &[String], plan: &[usize]) -> BaselineTiming {
    let mut counts = vec![0u64; words.len()];
    let start = Instant::now();
    for &word_idx in plan {
        counts[word_idx] = scan_count(text, &words[word_idx]);
    }
    let query = start.elapsed();

    BaselineTiming {
        query,
        queries: plan.len() as u64,
        results: collect_results(words, &counts),
    }
}

fn collect_results(words: &[String], counts: &[u64]) -> Vec<WordCount> {
    words
        .iter()
        .zip(counts)
        .map(|(word, &count)| WordCount {
            word: word.clone(),
            count,
        })
        .collect()
}

fn compare(timings: &[VariantTiming], baseline: &BaselineTiming) -> Option<Comparison> {
    let fastest = timings.iter().min_by_key(|t| t.total)?;
    let speedup = if fastest.total.is_zero() {
        f64::INFINITY
    } else {
        baseline.query.as_secs_f64() / fastest.total.as_secs_f64()
    };
    Some(Comparison {
        fastest: fastest.variant,
        speedup_vs_baseline: speedup,
    })
}

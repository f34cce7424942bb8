use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use freqdex::{
    build_index, generate_corpus, run, tokenize, CorpusSource, HarnessConfig, IndexKind,
};

mod cli;

use cli::display;
use cli::{Cli, Commands, ScenarioArg};

fn main() {
    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Generate { output, repeats } => run_generate(&output, repeats),
        Commands::Count {
            corpus,
            word,
            variant,
        } => run_count(&corpus, &word, variant),
        Commands::Bench {
            corpus,
            scenarios,
            variants,
            target,
            seed,
            json,
        } => run_bench(corpus, &scenarios, variants, &target, seed, json),
    };
    process::exit(code);
}

/// Write a synthetic corpus file.
fn run_generate(output: &Path, repeats: usize) -> i32 {
    let corpus = generate_corpus(repeats);
    match std::fs::write(output, &corpus) {
        Ok(()) => {
            println!("✅ corpus written to {}", output.display());
            println!("   {:.2} KB", corpus.len() as f64 / 1024.0);
            0
        }
        Err(e) => {
            eprintln!("❌ could not write {}: {}", output.display(), e);
            1
        }
    }
}

/// Build one index and answer one count.
fn run_count(corpus: &Path, word: &str, variant: IndexKind) -> i32 {
    let source = CorpusSource::File(corpus.to_path_buf());
    let text = match source.load() {
        Ok(text) => text,
        Err(e) => {
            eprintln!("❌ {e}");
            return 1;
        }
    };

    let built = build_index(tokenize(&text), variant);
    let start = Instant::now();
    let count = built.index.lookup(word);
    let query = start.elapsed();

    display::print_count(word, count, variant.name(), built.build_time, query);
    0
}

/// Run the scenario suite and print or serialize the report.
fn run_bench(
    corpus: PathBuf,
    scenarios: &[ScenarioArg],
    variants: Vec<IndexKind>,
    target: &str,
    seed: u64,
    json: bool,
) -> i32 {
    let mut config = HarnessConfig::new(CorpusSource::File(corpus));
    config.seed = seed;
    if !variants.is_empty() {
        config.variants = variants;
    }
    if !scenarios.is_empty() {
        config.scenarios = scenarios
            .iter()
            .map(|arg| arg.to_scenario(target).into())
            .collect();
    }

    let report = run(&config);

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(doc) => println!("{doc}"),
            Err(e) => {
                eprintln!("❌ could not serialize report: {e}");
                return 1;
            }
        }
    } else {
        display::print_run_report(&report);
    }

    i32::from(report.any_failed())
}

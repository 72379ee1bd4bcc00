//! `textmetrics` - score a batch of article texts and write one row per URL.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use rapid_textmetrics::loader::{attach_texts, load_lexicon, read_input_rows, write_records, OutputFormat};
use rapid_textmetrics::pipeline::observer::TracingObserver;
use rapid_textmetrics::pipeline::validation::ValidationEngine;
use rapid_textmetrics::{AnalysisSpec, MetricsEngine};

/// Sentiment and readability metrics for extracted articles
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON array of {"URL_ID", "URL"} objects
    #[arg(short, long)]
    input: PathBuf,

    /// Directory holding <URL_ID>.txt files
    #[arg(short, long, default_value = "extracted_articles")]
    texts_dir: PathBuf,

    /// Analysis spec (JSON); defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop-word directory (overrides the spec)
    #[arg(long)]
    stopwords_dir: Option<PathBuf>,

    /// Sentiment dictionary directory (overrides the spec)
    #[arg(long)]
    dictionary_dir: Option<PathBuf>,

    /// Output file
    #[arg(short, long, default_value = "Output.json")]
    output: PathBuf,

    /// Output format: json or tsv
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Worker threads (overrides the spec)
    #[arg(long)]
    threads: Option<usize>,
}

fn load_spec(args: &Args) -> Result<AnalysisSpec> {
    let mut spec = match &args.config {
        Some(path) => AnalysisSpec::from_path(path)
            .with_context(|| format!("loading analysis spec from {}", path.display()))?,
        None => AnalysisSpec::default(),
    };

    if let Some(dir) = &args.stopwords_dir {
        spec.lexicon.stopwords_dir = dir.clone();
    }
    if let Some(dir) = &args.dictionary_dir {
        spec.lexicon.dictionary_dir = dir.clone();
    }
    if args.threads.is_some() {
        spec.runtime.threads = args.threads;
    }

    let report = ValidationEngine::with_defaults()
        .ensure_valid(&spec)
        .context("analysis spec is invalid")?;
    for warning in report.warnings() {
        warn!(%warning, "Spec warning");
    }

    Ok(spec)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let spec = load_spec(&args)?;

    let lexicon = load_lexicon(&spec.lexicon);
    let rows = read_input_rows(&args.input)
        .with_context(|| format!("reading input list {}", args.input.display()))?;
    let docs = attach_texts(rows, &args.texts_dir);
    info!(documents = docs.len(), texts_dir = %args.texts_dir.display(), "Loaded input list");

    let engine = MetricsEngine::new(&lexicon).with_runtime(spec.runtime.clone());
    let output = match spec.runtime.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("building worker pool")?;
            pool.install(|| engine.run_observed(&docs, &mut TracingObserver))
        }
        None => engine.run_observed(&docs, &mut TracingObserver),
    };

    write_records(&args.output, &output.records, args.format)
        .with_context(|| format!("writing {}", args.output.display()))?;

    let skipped = output.skipped_ids();
    if !skipped.is_empty() {
        warn!(count = skipped.len(), ids = ?skipped, "Documents without scores");
    }
    info!(
        output = %args.output.display(),
        rows = output.records.len(),
        "Wrote metrics"
    );

    Ok(())
}

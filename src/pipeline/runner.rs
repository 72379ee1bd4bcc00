//! Batch runner: scores documents against a shared lexicon.
//!
//! [`MetricsEngine`] borrows an immutable [`Lexicon`] and scores any number
//! of documents against it. Large batches are scored in parallel with
//! rayon; the indexed collect keeps records in input order, so the output
//! is identical to a sequential run.
//!
//! ```
//! # use rapid_textmetrics::nlp::lexicon::Lexicon;
//! # use rapid_textmetrics::pipeline::runner::MetricsEngine;
//! # use rapid_textmetrics::types::Document;
//! let lexicon = Lexicon::from_lines(["the"], ["good"], ["bad"]);
//! let engine = MetricsEngine::new(&lexicon);
//! let output = engine.run(&[Document::new("1", "https://example.com", "The good part.")]);
//! assert_eq!(output.records[0].metrics.positive_score, 1);
//! ```

use rayon::prelude::*;
use tracing::info_span;

use crate::error::AnalysisResult;
use crate::nlp::lexicon::Lexicon;
use crate::pipeline::assembler::{assemble, score_text, DocumentOutcome};
use crate::pipeline::observer::{BatchClock, BatchObserver, BatchSummary, NoopObserver};
use crate::pipeline::spec::RuntimeSpec;
use crate::types::{Document, MetricsRecord, TextMetrics};

/// Records, per-document outcomes and a summary for one batch.
///
/// `records[i]` and `outcomes[i]` belong to input document `i`.
#[derive(Debug, Clone, Default)]
pub struct BatchOutput {
    pub records: Vec<MetricsRecord>,
    pub outcomes: Vec<DocumentOutcome>,
    pub summary: BatchSummary,
}

impl BatchOutput {
    /// Ids of documents that were zero-filled, in input order
    pub fn skipped_ids(&self) -> Vec<&str> {
        self.records
            .iter()
            .zip(&self.outcomes)
            .filter(|(_, outcome)| outcome.is_skipped())
            .map(|(record, _)| record.id.as_str())
            .collect()
    }
}

/// Scores documents against a borrowed lexicon
#[derive(Debug, Clone)]
pub struct MetricsEngine<'lex> {
    lexicon: &'lex Lexicon,
    runtime: RuntimeSpec,
}

impl<'lex> MetricsEngine<'lex> {
    pub fn new(lexicon: &'lex Lexicon) -> Self {
        Self {
            lexicon,
            runtime: RuntimeSpec::default(),
        }
    }

    /// Apply runtime limits from an [`AnalysisSpec`](super::spec::AnalysisSpec)
    pub fn with_runtime(mut self, runtime: RuntimeSpec) -> Self {
        self.runtime = runtime;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.lexicon
    }

    pub fn runtime(&self) -> &RuntimeSpec {
        &self.runtime
    }

    /// Score a single text
    pub fn analyze_text(&self, text: &str) -> AnalysisResult<TextMetrics> {
        score_text(text, self.lexicon, &self.runtime)
    }

    /// Build the output record for a single document
    pub fn analyze_document(&self, doc: &Document) -> (MetricsRecord, DocumentOutcome) {
        assemble(doc, self.lexicon, &self.runtime)
    }

    /// Score a batch without observation
    pub fn run(&self, docs: &[Document]) -> BatchOutput {
        self.run_observed(docs, &mut NoopObserver)
    }

    /// Score a batch, notifying `observer` in input order
    pub fn run_observed(&self, docs: &[Document], observer: &mut impl BatchObserver) -> BatchOutput {
        let _span = info_span!("metrics_batch", documents = docs.len()).entered();
        observer.on_batch_start(docs.len());
        let clock = BatchClock::start();

        let results: Vec<(MetricsRecord, DocumentOutcome)> =
            if docs.len() >= self.runtime.parallel_threshold() {
                docs.par_iter().map(|doc| self.analyze_document(doc)).collect()
            } else {
                docs.iter().map(|doc| self.analyze_document(doc)).collect()
            };

        let mut output = BatchOutput {
            records: Vec::with_capacity(results.len()),
            outcomes: Vec::with_capacity(results.len()),
            summary: BatchSummary {
                total: docs.len(),
                ..BatchSummary::default()
            },
        };

        for (index, (record, outcome)) in results.into_iter().enumerate() {
            match outcome {
                DocumentOutcome::Analyzed => output.summary.analyzed += 1,
                DocumentOutcome::Missing => output.summary.missing += 1,
                DocumentOutcome::Rejected { .. } => output.summary.rejected += 1,
            }
            observer.on_document(index, &record, &outcome);
            output.records.push(record);
            output.outcomes.push(outcome);
        }

        output.summary.elapsed = clock.elapsed();
        observer.on_batch_end(&output.summary);
        output
    }
}

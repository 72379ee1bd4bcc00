//! Record assembly: one output row per input document.
//!
//! A document with text is tokenized and scored; a document without text,
//! or one rejected by a runtime guard, gets a zero-filled record and is
//! flagged as skipped.

use crate::error::{AnalysisError, AnalysisResult};
use crate::metrics::compute_metrics;
use crate::nlp::lexicon::Lexicon;
use crate::pipeline::artifacts::TokenSet;
use crate::pipeline::spec::RuntimeSpec;
use crate::types::{Document, MetricsRecord, TextMetrics};

/// What happened to a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// Text was present and scored
    Analyzed,
    /// No text was available
    Missing,
    /// Text was present but not scored
    Rejected { reason: String },
}

impl DocumentOutcome {
    /// Skipped documents carry a zero-filled record
    pub fn is_skipped(&self) -> bool {
        !matches!(self, Self::Analyzed)
    }
}

/// Score raw text, honouring the runtime character limit
#[tracing::instrument(level = "debug", skip_all, fields(text_len = text.len()))]
pub fn score_text(text: &str, lexicon: &Lexicon, runtime: &RuntimeSpec) -> AnalysisResult<TextMetrics> {
    if let Some(limit) = runtime.max_chars {
        let chars = text.chars().count();
        if chars > limit {
            return Err(AnalysisError::DocumentTooLarge { chars, limit });
        }
    }
    let tokens = TokenSet::from_text(text, lexicon);
    Ok(compute_metrics(&tokens, lexicon))
}

/// Build the output record for one document
pub fn assemble(doc: &Document, lexicon: &Lexicon, runtime: &RuntimeSpec) -> (MetricsRecord, DocumentOutcome) {
    let (metrics, outcome) = match doc.raw_text.as_deref() {
        None => (TextMetrics::zeroed(), DocumentOutcome::Missing),
        Some(text) => match score_text(text, lexicon, runtime) {
            Ok(metrics) => (metrics, DocumentOutcome::Analyzed),
            Err(err) => (
                TextMetrics::zeroed(),
                DocumentOutcome::Rejected {
                    reason: err.to_string(),
                },
            ),
        },
    };

    (MetricsRecord::new(doc.id.clone(), doc.url.clone(), metrics), outcome)
}

//! Rapid TextMetrics
//!
//! Sentiment and readability metrics for plain-text documents.
//!
//! For each document the crate computes 13 numbers: positive and negative
//! scores from a word lexicon, polarity and subjectivity, sentence length,
//! complex-word statistics and the Gunning Fog index, syllables per word,
//! a personal pronoun count and the average word length.
//!
//! ```
//! use rapid_textmetrics::{analyze_text, Lexicon};
//!
//! let lexicon = Lexicon::from_lines(["this", "it", "is", "and"], ["love"], ["bad", "sad"]);
//! let metrics = analyze_text("I love this. It is bad and sad.", &lexicon);
//!
//! assert_eq!(metrics.positive_score, 1);
//! assert_eq!(metrics.negative_score, 2);
//! ```

pub mod error;
pub mod loader;
pub mod metrics;
pub mod nlp;
pub mod pipeline;
pub mod types;

pub use error::{AnalysisError, AnalysisResult};
pub use loader::{load_lexicon, OutputFormat};
pub use metrics::compute_metrics;
pub use nlp::lexicon::{Lexicon, LexiconBuilder};
pub use pipeline::{AnalysisSpec, BatchOutput, DocumentOutcome, MetricsEngine, TokenSet};
pub use types::{Document, InputRow, MetricsRecord, TextMetrics, COLUMNS};

/// Tokenize and score a single text with no runtime limits
pub fn analyze_text(text: &str, lexicon: &Lexicon) -> TextMetrics {
    let tokens = TokenSet::from_text(text, lexicon);
    compute_metrics(&tokens, lexicon)
}

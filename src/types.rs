//! Core data types shared across the crate
//!
//! [`TextMetrics`] is the 13-field numeric result for one document and
//! [`MetricsRecord`] wraps it with the document identifier and URL. Both
//! serialize with the exact column names consumers of the tabular export
//! depend on, in the order given by [`COLUMNS`].

use serde::{Deserialize, Deserializer, Serialize};

/// Output column names, in export order.
pub const COLUMNS: [&str; 15] = [
    "URL_ID",
    "URL",
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

/// A document handed to the engine by an upstream store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Identifier (`URL_ID`)
    pub id: String,
    /// Source URL, carried through untouched
    pub url: String,
    /// Extracted text; `None` when the source could not be retrieved
    pub raw_text: Option<String>,
}

impl Document {
    /// Create a document with text
    pub fn new(id: impl Into<String>, url: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            raw_text: Some(raw_text.into()),
        }
    }

    /// Create a document whose text is not available
    pub fn missing(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            raw_text: None,
        }
    }
}

/// One `(URL_ID, URL)` row of the input list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRow {
    #[serde(rename = "URL_ID", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl InputRow {
    /// Attach text (or its absence) to this row
    pub fn into_document(self, raw_text: Option<String>) -> Document {
        Document {
            id: self.id,
            url: self.url,
            raw_text,
        }
    }
}

/// Spreadsheet exports often carry numeric ids; accept both forms.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(f) if f.fract() == 0.0 => format!("{}", f as i64),
        RawId::Float(f) => f.to_string(),
    })
}

/// The 13 computed metrics for a single document.
///
/// `Default` is the zero-filled record used for skipped documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: usize,
    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: usize,
    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: f64,
    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: f64,
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: f64,
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub percentage_complex_words: f64,
    #[serde(rename = "FOG INDEX")]
    pub fog_index: f64,
    /// Always equal to `avg_sentence_length`; both columns are part of the schema.
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_words_per_sentence: f64,
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: usize,
    /// Count of stop-word-filtered words.
    #[serde(rename = "WORD COUNT")]
    pub word_count: usize,
    #[serde(rename = "SYLLABLE PER WORD")]
    pub syllable_per_word: f64,
    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronouns: usize,
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: f64,
}

impl TextMetrics {
    /// Zero-filled metrics
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Render the 13 values in column order
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.positive_score.to_string(),
            self.negative_score.to_string(),
            self.polarity_score.to_string(),
            self.subjectivity_score.to_string(),
            self.avg_sentence_length.to_string(),
            self.percentage_complex_words.to_string(),
            self.fog_index.to_string(),
            self.avg_words_per_sentence.to_string(),
            self.complex_word_count.to_string(),
            self.word_count.to_string(),
            self.syllable_per_word.to_string(),
            self.personal_pronouns.to_string(),
            self.avg_word_length.to_string(),
        ]
    }
}

/// A document's identity plus its metrics: one output row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    #[serde(rename = "URL_ID")]
    pub id: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(flatten)]
    pub metrics: TextMetrics,
}

impl MetricsRecord {
    pub fn new(id: impl Into<String>, url: impl Into<String>, metrics: TextMetrics) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            metrics,
        }
    }

    /// Render all 15 columns in [`COLUMNS`] order
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(COLUMNS.len());
        row.push(self.id.clone());
        row.push(self.url.clone());
        row.extend(self.metrics.to_row());
        row
    }
}

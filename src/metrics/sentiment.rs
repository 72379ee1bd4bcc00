//! Dictionary-based sentiment scores

use crate::nlp::lexicon::Lexicon;

use super::EPSILON;

/// Positive/negative counts and the two derived ratios
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SentimentScores {
    pub positive: usize,
    pub negative: usize,
    /// `(pos - neg) / (pos + neg + ε)`, in `(-1, 1)`
    pub polarity: f64,
    /// `(pos + neg) / (clean words + ε)`, in `[0, 1)`
    pub subjectivity: f64,
}

/// Score stop-word-filtered tokens against the lexicon
pub fn score_sentiment(clean_tokens: &[String], lexicon: &Lexicon) -> SentimentScores {
    let positive = clean_tokens.iter().filter(|w| lexicon.is_positive(w)).count();
    let negative = clean_tokens.iter().filter(|w| lexicon.is_negative(w)).count();

    let (pos, neg) = (positive as f64, negative as f64);
    let polarity = (pos - neg) / (pos + neg + EPSILON);
    let subjectivity = (pos + neg) / (clean_tokens.len() as f64 + EPSILON);

    SentimentScores {
        positive,
        negative,
        polarity,
        subjectivity,
    }
}

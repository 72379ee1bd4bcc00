//! Metrics calculator
//!
//! Turns a [`TokenSet`] and a [`Lexicon`] into the 13 [`TextMetrics`]
//! fields. Every ratio is guarded: an empty denominator yields `0`, and the
//! two sentiment ratios add [`EPSILON`] to their denominators instead.

pub mod pronouns;
pub mod readability;
pub mod sentiment;

use crate::nlp::lexicon::Lexicon;
use crate::pipeline::artifacts::TokenSet;
use crate::types::TextMetrics;

pub use pronouns::count_personal_pronouns;
pub use readability::{score_readability, ReadabilityScores};
pub use sentiment::{score_sentiment, SentimentScores};

/// Smoothing term for the polarity and subjectivity denominators
pub const EPSILON: f64 = 0.000001;

/// `num / den`, or `0` when `den` is zero
#[inline]
pub(crate) fn ratio(num: f64, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num / den as f64
    }
}

/// Compute all metrics for one tokenized document
pub fn compute_metrics(tokens: &TokenSet, lexicon: &Lexicon) -> TextMetrics {
    let sentiment = score_sentiment(&tokens.clean_tokens, lexicon);
    let readability = score_readability(&tokens.alpha_tokens, tokens.num_sentences());

    TextMetrics {
        positive_score: sentiment.positive,
        negative_score: sentiment.negative,
        polarity_score: sentiment.polarity,
        subjectivity_score: sentiment.subjectivity,
        avg_sentence_length: readability.avg_sentence_length,
        percentage_complex_words: readability.percentage_complex_words,
        fog_index: readability.fog_index,
        avg_words_per_sentence: readability.avg_sentence_length,
        complex_word_count: readability.complex_word_count,
        word_count: tokens.clean_tokens.len(),
        syllable_per_word: readability.syllable_per_word,
        personal_pronouns: count_personal_pronouns(&tokens.raw_tokens),
        avg_word_length: readability.avg_word_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn lexicon() -> Lexicon {
        Lexicon::from_lines(["this", "it", "is", "and"], ["love"], ["bad", "sad"])
    }

    fn metrics(text: &str, lexicon: &Lexicon) -> TextMetrics {
        compute_metrics(&TokenSet::from_text(text, lexicon), lexicon)
    }

    #[test]
    fn test_end_to_end_scenario() {
        let m = metrics("I love this. It is bad and sad.", &lexicon());

        assert_eq!(m.positive_score, 1);
        assert_eq!(m.negative_score, 2);
        assert!((m.polarity_score - (-1.0 / (3.0 + EPSILON))).abs() < TOL);
        assert!((m.subjectivity_score - 3.0 / (4.0 + EPSILON)).abs() < TOL);
        assert!((m.polarity_score + 0.3333).abs() < 1e-4);
        assert!((m.subjectivity_score - 0.75).abs() < 1e-6);

        // 8 alphabetic words over 2 sentences
        assert_eq!(m.avg_sentence_length, 4.0);
        assert_eq!(m.avg_words_per_sentence, m.avg_sentence_length);
        assert_eq!(m.word_count, 4);
        assert_eq!(m.personal_pronouns, 1);
        assert_eq!(m.complex_word_count, 0);
        assert_eq!(m.percentage_complex_words, 0.0);
        assert!((m.fog_index - 1.6).abs() < TOL);

        // i=1 love=1 this=1 it=1 is=1 bad=1 and=1 sad=1
        assert_eq!(m.syllable_per_word, 1.0);
        // 1+4+4+2+2+3+3+3 = 22 characters
        assert_eq!(m.avg_word_length, 22.0 / 8.0);
    }

    #[test]
    fn test_lowercase_sentence_start_keeps_preceding_word() {
        let lexicon = Lexicon::from_lines(["the", "were"], ["good"], Vec::<&str>::new());
        let m = metrics("The results were good. however, costs rose.", &lexicon);

        assert_eq!(m.positive_score, 1);
        // results good however costs rose
        assert_eq!(m.word_count, 5);
        // 7 alphabetic words over 2 sentences
        assert!((m.avg_sentence_length - 3.5).abs() < TOL);
    }

    #[test]
    fn test_every_repeated_sentence_counts() {
        let m = metrics(&"word. ".repeat(200), &Lexicon::empty());

        assert_eq!(m.word_count, 200);
        assert_eq!(m.avg_sentence_length, 1.0);
    }

    #[test]
    fn test_empty_text_is_all_zero() {
        assert_eq!(metrics("", &lexicon()), TextMetrics::zeroed());
        assert_eq!(metrics("   \n ", &lexicon()), TextMetrics::zeroed());
    }

    #[test]
    fn test_punctuation_only_text_is_all_zero() {
        let m = metrics("... ?!", &lexicon());
        assert_eq!(m, TextMetrics::zeroed());
    }

    #[test]
    fn test_sentiment_word_shadowed_by_stop_word_never_scores() {
        let lexicon = Lexicon::from_lines(["good"], ["good"], Vec::<&str>::new());
        let m = metrics("Good good good.", &lexicon);

        assert_eq!(m.positive_score, 0);
        assert_eq!(m.word_count, 0);
    }

    #[test]
    fn test_missing_sentiment_lists_score_zero() {
        let lexicon = Lexicon::from_lines(["the"], Vec::<&str>::new(), Vec::<&str>::new());
        let m = metrics("The excellent terrible results.", &lexicon);

        assert_eq!(m.positive_score, 0);
        assert_eq!(m.negative_score, 0);
        assert_eq!(m.polarity_score, 0.0);
        assert_eq!(m.subjectivity_score, 0.0);
        assert_eq!(m.word_count, 3);
    }

    #[test]
    fn test_pronouns_counted_on_raw_tokens() {
        // "we" and "my" are stop words here but still count as pronouns.
        let lexicon = Lexicon::from_lines(["we", "my", "us"], ["happy"], Vec::<&str>::new());
        let m = metrics("We think my team helped us in the US.", &lexicon);

        assert_eq!(m.personal_pronouns, 3);
    }

    #[test]
    fn test_complex_words() {
        let m = metrics("Communication is beautiful. Analysis closed.", &Lexicon::empty());

        // communication=5, is=1, beautiful=3, analysis=4, closed=0
        assert_eq!(m.complex_word_count, 3);
        assert!((m.percentage_complex_words - 0.6).abs() < TOL);
        assert!((m.avg_sentence_length - 2.5).abs() < TOL);
        assert!((m.fog_index - 0.4 * (2.5 + 0.6)).abs() < TOL);
        assert!((m.syllable_per_word - 13.0 / 5.0).abs() < TOL);
    }

    #[test]
    fn test_word_count_never_exceeds_alpha_tokens() {
        let lexicon = lexicon();
        let text = "It is what it is, and this is that.";
        let tokens = TokenSet::from_text(text, &lexicon);
        let m = compute_metrics(&tokens, &lexicon);
        assert!(m.word_count <= tokens.alpha_tokens.len());
    }

    #[test]
    fn test_ratio_guard() {
        assert_eq!(ratio(5.0, 0), 0.0);
        assert_eq!(ratio(5.0, 2), 2.5);
    }
}

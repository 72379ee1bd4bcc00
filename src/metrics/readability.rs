//! Readability scores: sentence length, complex words, Gunning fog

use crate::nlp::syllables::estimate_syllables;

use super::ratio;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReadabilityScores {
    /// Alphabetic words per sentence
    pub avg_sentence_length: f64,
    /// Fraction (not percent) of alphabetic words with more than two syllables
    pub percentage_complex_words: f64,
    /// `0.4 * (avg_sentence_length + percentage_complex_words)`
    pub fog_index: f64,
    pub complex_word_count: usize,
    pub syllable_per_word: f64,
    /// Mean character count of alphabetic words
    pub avg_word_length: f64,
}

/// Score lowercase alphabetic tokens given the document's sentence count
pub fn score_readability(alpha_tokens: &[String], sentence_count: usize) -> ReadabilityScores {
    let words = alpha_tokens.len();

    let mut complex_word_count = 0;
    let mut total_syllables = 0;
    let mut total_chars = 0;
    for word in alpha_tokens {
        let syllables = estimate_syllables(word);
        if syllables > 2 {
            complex_word_count += 1;
        }
        total_syllables += syllables;
        total_chars += word.chars().count();
    }

    let avg_sentence_length = ratio(words as f64, sentence_count);
    let percentage_complex_words = ratio(complex_word_count as f64, words);

    ReadabilityScores {
        avg_sentence_length,
        percentage_complex_words,
        fog_index: 0.4 * (avg_sentence_length + percentage_complex_words),
        complex_word_count,
        syllable_per_word: ratio(total_syllables as f64, words),
        avg_word_length: ratio(total_chars as f64, words),
    }
}

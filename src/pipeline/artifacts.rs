//! Typed intermediate results flowing between pipeline stages.
//!
//! A [`TokenSet`] is derived fresh for every document and dropped once its
//! metrics are computed; nothing here is persisted.

use crate::nlp::lexicon::Lexicon;
use crate::nlp::tokenizer::{is_alphabetic_token, split_sentences, tokenize_sentence};

/// Tokenizer output for one document.
///
/// | Field | Contents |
/// |-------|----------|
/// | `sentences` | sentence strings, in order |
/// | `raw_tokens` | every token, case preserved, punctuation included |
/// | `alpha_tokens` | lowercased tokens made only of letters |
/// | `clean_tokens` | `alpha_tokens` minus stop words |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    pub sentences: Vec<String>,
    pub raw_tokens: Vec<String>,
    pub alpha_tokens: Vec<String>,
    pub clean_tokens: Vec<String>,
}

impl TokenSet {
    /// Tokenize `text`, filtering stop words with `lexicon`
    pub fn from_text(text: &str, lexicon: &Lexicon) -> Self {
        let sentences = split_sentences(text);
        let raw_tokens: Vec<String> = sentences
            .iter()
            .flat_map(|s| tokenize_sentence(s))
            .collect();

        let alpha_tokens: Vec<String> = raw_tokens
            .iter()
            .filter(|t| is_alphabetic_token(t))
            .map(|t| t.to_lowercase())
            .collect();

        let clean_tokens: Vec<String> = alpha_tokens
            .iter()
            .filter(|t| !lexicon.is_stop_word(t))
            .cloned()
            .collect();

        Self {
            sentences,
            raw_tokens,
            alpha_tokens,
            clean_tokens,
        }
    }

    pub fn num_sentences(&self) -> usize {
        self.sentences.len()
    }

    /// Check if no tokens were produced
    pub fn is_empty(&self) -> bool {
        self.raw_tokens.is_empty()
    }
}

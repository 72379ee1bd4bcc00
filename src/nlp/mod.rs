//! Natural Language Processing components
//!
//! This module provides the sentiment lexicon, tokenization and syllable
//! estimation.

pub mod lexicon;
pub mod syllables;
pub mod tokenizer;

//! Sentiment lexicon
//!
//! A [`Lexicon`] holds the stop-word set and the positive/negative sentiment
//! sets. It is built once from raw lines with a [`LexiconBuilder`] and is
//! read-only afterwards, so a single instance can be borrowed by any number
//! of scoring threads.
//!
//! Sentiment words that also appear in the stop-word set are dropped at
//! construction time; scoring never has to re-check them.

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

/// Which of the three word sets an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Stop,
    Positive,
    Negative,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// Immutable three-set vocabulary used for sentiment scoring
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    stop_words: FxHashSet<String>,
    positive_words: FxHashSet<String>,
    negative_words: FxHashSet<String>,
}

impl Lexicon {
    /// Start building a lexicon from raw lines
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::new()
    }

    /// Build from one stop-word source and the two sentiment lists
    pub fn from_lines<S, P, N>(stop: S, positive: P, negative: N) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Self::builder()
            .stop_words(stop)
            .positive_words(positive)
            .negative_words(negative)
            .build()
    }

    /// An empty lexicon (every sentiment score is zero, nothing is filtered)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if a lowercase word is a stop word
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Check if a lowercase word is in the positive set
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive_words.contains(word)
    }

    /// Check if a lowercase word is in the negative set
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative_words.contains(word)
    }

    pub fn stop_words(&self) -> &FxHashSet<String> {
        &self.stop_words
    }

    pub fn positive_words(&self) -> &FxHashSet<String> {
        &self.positive_words
    }

    pub fn negative_words(&self) -> &FxHashSet<String> {
        &self.negative_words
    }

    /// Number of entries in a category
    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Stop => self.stop_words.len(),
            Category::Positive => self.positive_words.len(),
            Category::Negative => self.negative_words.len(),
        }
    }

    /// Check if every category is empty
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty() && self.positive_words.is_empty() && self.negative_words.is_empty()
    }
}

/// Collects raw lines and applies the normalization rules on [`build`](Self::build).
///
/// Stop-word sources may be added any number of times (one per file or
/// category); sentiment lines are only filtered once every stop-word source
/// is known.
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    stop_words: FxHashSet<String>,
    positive_lines: Vec<String>,
    negative_lines: Vec<String>,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop-word source. Lines may be `word|metadata` formatted.
    pub fn stop_words<I>(mut self, lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.add_stop_words(lines);
        self
    }

    /// Add a stop-word source in place
    pub fn add_stop_words<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.stop_words
            .extend(lines.into_iter().filter_map(|l| normalize_stop_entry(l.as_ref())));
    }

    /// Add lines of the positive word list
    pub fn positive_words<I>(mut self, lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.add_sentiment_words(Category::Positive, lines);
        self
    }

    /// Add lines of the negative word list
    pub fn negative_words<I>(mut self, lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.add_sentiment_words(Category::Negative, lines);
        self
    }

    /// Add sentiment lines in place. Stop-word lines go through
    /// [`add_stop_words`](Self::add_stop_words) instead.
    pub fn add_sentiment_words<I>(&mut self, category: Category, lines: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let target = match category {
            Category::Positive => &mut self.positive_lines,
            Category::Negative => &mut self.negative_lines,
            Category::Stop => {
                self.add_stop_words(lines);
                return;
            }
        };
        target.extend(lines.into_iter().map(|l| l.as_ref().to_string()));
    }

    /// Finalize into an immutable [`Lexicon`]
    pub fn build(self) -> Lexicon {
        let stop_words = self.stop_words;
        let positive_words = sentiment_set(&self.positive_lines, &stop_words);
        let negative_words = sentiment_set(&self.negative_lines, &stop_words);

        let lexicon = Lexicon {
            stop_words,
            positive_words,
            negative_words,
        };

        for category in [Category::Stop, Category::Positive, Category::Negative] {
            if lexicon.len(category) == 0 {
                warn!(
                    category = category.as_str(),
                    "lexicon category is empty; dependent scores will be zero"
                );
            }
        }
        debug!(
            stop = lexicon.stop_words.len(),
            positive = lexicon.positive_words.len(),
            negative = lexicon.negative_words.len(),
            "lexicon built"
        );

        lexicon
    }
}

/// Stop-word entries: text before the first `|`, trimmed and lowercased.
fn normalize_stop_entry(line: &str) -> Option<String> {
    let head = line.split('|').next().unwrap_or_default();
    normalize(head)
}

fn normalize(entry: &str) -> Option<String> {
    let word = entry.trim().to_lowercase();
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

fn sentiment_set(lines: &[String], stop_words: &FxHashSet<String>) -> FxHashSet<String> {
    lines
        .iter()
        .filter_map(|l| normalize(l))
        .filter(|w| !stop_words.contains(w))
        .collect()
}

//! Sentence and word tokenization
//!
//! Sentence boundaries follow the usual Punkt-style rules for English:
//! a run of `.`, `?` or `!` (optionally followed by closing quotes or
//! brackets) ends a sentence when followed by whitespace or end of text.
//! A lone period after an abbreviation or an initial does not, and neither
//! does an ellipsis followed by a lowercase word. A lone period after an
//! ordinary word always ends the sentence, whatever follows.
//!
//! Word tokenization follows Treebank conventions: punctuation becomes
//! separate tokens, the final period of each sentence is split off, and
//! clitics (`n't`, `'s`, `'ll`, ...) are separated from their host word.
//! Periods inside a token (`U.S.`, `3.14`, `e.g.`) are kept.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

/// Abbreviations that do not end a sentence when followed by a period.
static ABBREVIATIONS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "inc", "ltd", "corp", "jan",
        "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "fig",
        "gen", "gov", "sen", "rep", "capt", "col", "lt", "sgt", "mt", "dept", "approx", "e.g",
        "i.e", "a.m", "p.m", "u.s", "u.k",
    ]
    .into_iter()
    .collect()
});

const SENTENCE_TERMINATORS: &[char] = &['.', '?', '!'];

/// Characters that may trail a terminator and still belong to the sentence
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '”', '’', '»'];

/// Split off the front of a token
const OPENERS: &[char] = &['"', '`', '(', '[', '{', '<', '“', '‘', '«', '¿', '¡'];

/// Split off the end of a token
const TRAILERS: &[char] = &[
    '"', '\'', ')', ']', '}', '>', ',', ';', ':', '!', '?', '”', '’', '»', '…',
];

/// Always a token of their own, wherever they appear
const SEPARATORS: &[char] = &[
    ';', '@', '#', '$', '%', '&', '?', '!', '(', ')', '[', ']', '{', '}', '<', '>', '"', '“',
    '”', '…',
];

/// Split on these unless a digit follows (`1,000`, `10:30`)
const SOFT_SEPARATORS: &[char] = &[',', ':'];

const CLITICS: &[&str] = &["'ll", "'re", "'ve", "'s", "'m", "'d"];

/// Split raw text into sentences.
///
/// Returns an empty vector only for empty or whitespace-only text.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let n = chars.len();

    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < n {
        if !SENTENCE_TERMINATORS.contains(&chars[i].1) {
            i += 1;
            continue;
        }

        let run_start = i;
        while i < n && SENTENCE_TERMINATORS.contains(&chars[i].1) {
            i += 1;
        }
        let only_periods = chars[run_start..i].iter().all(|&(_, c)| c == '.');
        let lone_period = only_periods && i - run_start == 1;

        while i < n && CLOSERS.contains(&chars[i].1) {
            i += 1;
        }

        let end = if i == n { text.len() } else { chars[i].0 };
        if i < n && !chars[i].1.is_whitespace() {
            continue;
        }

        if only_periods {
            let continues = if lone_period {
                is_abbreviation_before(&text[start..chars[run_start].0])
            } else {
                next_word_is_lowercase(&text[end..])
            };
            if continues {
                continue;
            }
        }

        push_trimmed(&mut sentences, &text[start..end]);
        start = end;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}

/// Check the word immediately before a period
fn is_abbreviation_before(prefix: &str) -> bool {
    let word = match prefix.split_whitespace().last() {
        Some(w) => w.trim_start_matches(|c: char| OPENERS.contains(&c)),
        None => return false,
    };

    let mut letters = word.chars();
    if let (Some(c), None) = (letters.next(), letters.next()) {
        // Single-letter initial such as "J. R. R. Tolkien"
        return c.is_uppercase();
    }

    ABBREVIATIONS.contains(word.to_lowercase().as_str())
}

fn next_word_is_lowercase(rest: &str) -> bool {
    rest.trim_start()
        .chars()
        .find(|c| c.is_alphanumeric())
        .map_or(false, |c| c.is_lowercase())
}

/// Split raw text into word-level tokens, punctuation included, case preserved.
pub fn split_tokens(text: &str) -> Vec<String> {
    split_sentences(text)
        .iter()
        .flat_map(|s| tokenize_sentence(s))
        .collect()
}

/// Tokenize one sentence. The final period is split off only here.
pub fn tokenize_sentence(sentence: &str) -> Vec<String> {
    let chunks: Vec<&str> = sentence.split_whitespace().collect();
    let last = chunks.len().saturating_sub(1);

    let mut tokens = Vec::new();
    for (idx, chunk) in chunks.iter().enumerate() {
        tokenize_chunk(chunk, idx == last, &mut tokens);
    }
    tokens
}

fn tokenize_chunk(chunk: &str, sentence_final: bool, out: &mut Vec<String>) {
    let mut rest = chunk;

    // Leading punctuation
    while let Some(c) = rest.chars().next() {
        if rest.chars().count() > 1 && OPENERS.contains(&c) {
            out.push(c.to_string());
            rest = &rest[c.len_utf8()..];
        } else {
            break;
        }
    }

    // Trailing punctuation, collected back to front
    let mut trailing = Vec::new();
    let mut period_split = false;
    loop {
        if rest.len() > 3 && rest.ends_with("...") {
            trailing.push("...".to_string());
            rest = &rest[..rest.len() - 3];
            continue;
        }
        let Some(c) = rest.chars().next_back() else {
            break;
        };
        if rest.chars().count() < 2 {
            break;
        }
        let head = &rest[..rest.len() - c.len_utf8()];
        if TRAILERS.contains(&c) {
            trailing.push(c.to_string());
            rest = head;
        } else if c == '.' && sentence_final && !period_split && !head.ends_with('.') {
            trailing.push(".".to_string());
            rest = head;
            period_split = true;
        } else {
            break;
        }
    }

    split_inner(rest, out);
    out.extend(trailing.into_iter().rev());
}

/// Split separators inside a chunk, then clitics off each word piece
fn split_inner(core: &str, out: &mut Vec<String>) {
    if core.is_empty() {
        return;
    }
    if core.chars().all(|c| !c.is_alphanumeric()) {
        out.push(core.to_string());
        return;
    }

    let chars: Vec<(usize, char)> = core.char_indices().collect();
    let mut piece_start = 0;
    let mut i = 0;
    while i < chars.len() {
        let (pos, c) = chars[i];
        let next = chars.get(i + 1).map(|&(_, n)| n);

        let separator = SEPARATORS.contains(&c)
            || (SOFT_SEPARATORS.contains(&c) && !next.map_or(false, |n| n.is_ascii_digit()));
        let dash_pair = c == '-' && next == Some('-');

        if separator || dash_pair {
            split_clitics(&core[piece_start..pos], out);
            let width = if dash_pair { 2 } else { c.len_utf8() };
            out.push(core[pos..pos + width].to_string());
            piece_start = pos + width;
            i += if dash_pair { 2 } else { 1 };
            continue;
        }
        i += 1;
    }
    split_clitics(&core[piece_start..], out);
}

fn split_clitics(word: &str, out: &mut Vec<String>) {
    if word.is_empty() {
        return;
    }

    let normalized = word.replace('’', "'");
    let lower = normalized.to_lowercase();

    for (whole, split_at) in [("cannot", 3), ("gonna", 3), ("gotta", 3), ("wanna", 3)] {
        if lower == whole {
            out.push(word[..split_at].to_string());
            out.push(word[split_at..].to_string());
            return;
        }
    }

    // Byte offsets in `normalized` differ from `word` when a curly quote was
    // replaced, so measure the suffix in characters.
    let suffix_chars = if lower.len() > 3 && lower.ends_with("n't") {
        Some(3)
    } else {
        CLITICS
            .iter()
            .find(|clitic| lower.len() > clitic.len() && lower.ends_with(*clitic))
            .map(|clitic| clitic.chars().count())
    };

    match suffix_chars {
        Some(k) => {
            let cut = word
                .char_indices()
                .rev()
                .nth(k - 1)
                .map_or(0, |(idx, _)| idx);
            out.push(word[..cut].to_string());
            out.push(word[cut..].to_string());
        }
        None => out.push(word.to_string()),
    }
}

/// Letters only: general categories Lu, Ll, Lt, Lm and Lo.
///
/// Narrower than `char::is_alphabetic`, which also admits combining marks
/// and letter numbers such as `Ⅻ`.
static LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{L}+$").expect("valid letter pattern"));

/// Check a token is non-empty and made only of letters
#[inline]
pub fn is_alphabetic_token(token: &str) -> bool {
    LETTERS.is_match(token)
}

//! First-person pronoun counting
//!
//! A token counts when it starts with `I`, `we`, `my`, `ours` or `us`
//! (any case) followed by a word boundary. The exact token `US` is treated
//! as the country abbreviation and skipped.

use once_cell::sync::Lazy;
use regex::Regex;

static PRONOUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:I|we|my|ours|us)\b").expect("valid pronoun pattern"));

/// Check a single case-preserved token
pub fn is_personal_pronoun(token: &str) -> bool {
    token != "US" && PRONOUN.is_match(token)
}

/// Count personal pronouns among raw (case-preserved) tokens
pub fn count_personal_pronouns(raw_tokens: &[String]) -> usize {
    raw_tokens.iter().filter(|t| is_personal_pronoun(t)).count()
}

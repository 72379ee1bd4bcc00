//! Heuristic English syllable estimation
//!
//! Counts vowel-group onsets with a silent-e correction. The rules are
//! intentionally simple and must stay stable: downstream metrics
//! (complex-word detection, syllables per word) are compared against
//! previously published outputs.

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

#[inline]
fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Estimate the syllable count of a lowercase alphabetic word.
///
/// 1. Words ending in `es` or `ed` return `0` immediately.
/// 2. Otherwise count vowels that start a vowel run.
/// 3. Subtract one for a trailing `e`.
/// 4. Clamp to at least `1`.
///
/// The `es`/`ed` early return skips the clamp, so those words score `0`.
pub fn estimate_syllables(word: &str) -> usize {
    if word.ends_with("es") || word.ends_with("ed") {
        return 0;
    }

    let mut count: isize = 0;
    let mut prev_vowel = false;
    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    if word.ends_with('e') {
        count -= 1;
    }

    count.max(1) as usize
}

/// A word is complex when it has more than two estimated syllables
#[inline]
pub fn is_complex_word(word: &str) -> bool {
    estimate_syllables(word) > 2
}

use std::sync::LazyLock;

use regex::Regex;

/// A trailing silent pattern: `es` or `e` after a consonant other than `l`,
/// or an inflectional `ed`. Stripped before counting vowel runs.
static SILENT_ENDING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("this must never fail")
});

/// A syllable nucleus: a run of one or two vowel characters.
static VOWEL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").expect("this must never fail"));

/// Estimates the syllable count of a single word.
///
/// The estimate is heuristic: the word is lower-cased and reduced to ASCII
/// letters, short words count as one syllable, silent endings and a leading
/// `y` are stripped, and the remaining vowel runs are counted. A word with
/// letters but no vowel run (e.g. "mmm") still counts as one syllable.
///
/// Returns 0 only when the token contains no letters at all, so that line
/// sums skip stray punctuation and numerals.
#[must_use]
pub fn word_syllables(word: &str) -> usize {
    let cleaned: String = word
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect();

    if cleaned.is_empty() {
        return 0;
    }
    if cleaned.len() <= 3 {
        return 1;
    }

    let stripped = SILENT_ENDING.replace(&cleaned, "");
    let stem = stripped.strip_prefix('y').unwrap_or(stripped.as_ref());

    let nuclei = VOWEL_RUN.find_iter(stem).count();
    nuclei.max(1)
}

/// Estimates the syllable count of a whole line.
///
/// The line is split on whitespace and per-word estimates are summed;
/// tokens without letters contribute nothing.
#[must_use]
pub fn line_syllables(line: &str) -> usize {
    line.split_whitespace().map(word_syllables).sum()
}

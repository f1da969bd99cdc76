/// Extracts the end word of a line for rhyme comparison.
///
/// One trailing punctuation mark is stripped from the line, the line is
/// split on whitespace, and the last token is lower-cased. The result may
/// still contain interior punctuation; [`sounds_alike`] reduces words to
/// letters before comparing.
#[must_use]
pub fn end_word(line: &str) -> String {
    let trimmed = line.trim();
    let trimmed = trimmed
        .strip_suffix(['.', ',', '!', '?', ';', ':'])
        .unwrap_or(trimmed);
    trimmed
        .split_whitespace()
        .next_back()
        .unwrap_or("")
        .to_lowercase()
}

/// Judges whether two end words sound similar.
///
/// This is an orthographic proxy for rhyme, not phonetic analysis: words
/// are reduced to ASCII letters, identical words rhyme, and otherwise the
/// final `min(window, shorter length)` characters are compared. Words with
/// fewer than two letters never rhyme, which keeps stray punctuation
/// tokens from matching everything.
///
/// Symmetric in its arguments: `sounds_alike(a, b, w) == sounds_alike(b, a, w)`.
#[must_use]
pub fn sounds_alike(first: &str, second: &str, window: usize) -> bool {
    let first = letters_of(first);
    let second = letters_of(second);

    if first.len() < 2 || second.len() < 2 {
        return false;
    }
    if first == second {
        return true;
    }

    let k = window.min(first.len()).min(second.len());
    first[first.len() - k..] == second[second.len() - k..]
}

fn letters_of(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{end_word, sounds_alike};

    const WINDOW: usize = 3;

    #[test_case("Who kept all his cash in a bucket.", "bucket"; "trailing period stripped")]
    #[test_case("Shall I compare thee to a summer's day?", "day"; "trailing question mark")]
    #[test_case("  Splash, silence again  ", "again"; "surrounding whitespace")]
    #[test_case("NIGHT", "night"; "lower cased")]
    #[test_case("one", "one"; "single word line")]
    fn end_word_extraction(line: &str, expected: &str) {
        assert_eq!(end_word(line), expected);
    }

    #[test]
    fn end_word_strips_only_one_trailing_mark() {
        assert_eq!(end_word("wait..."), "wait..");
    }

    #[test_case("night", "light"; "shared ght suffix")]
    #[test_case("bucket", "nantucket"; "shared ket suffix")]
    #[test_case("away", "sway"; "shared way suffix")]
    #[test_case("singing", "ringing"; "shared ing suffix")]
    #[test_case("pond", "pond"; "identical words")]
    #[test_case("Pond!", "pond"; "identical after cleaning")]
    fn rhyming_pairs(a: &str, b: &str) {
        assert!(sounds_alike(a, b, WINDOW));
        assert!(sounds_alike(b, a, WINDOW), "must be symmetric");
    }

    #[test_case("cat", "hat"; "short words need full match")]
    #[test_case("day", "away"; "day versus way")]
    #[test_case("pond", "frog"; "unrelated words")]
    #[test_case("truckit", "nantucket"; "kit versus ket")]
    fn non_rhyming_pairs(a: &str, b: &str) {
        assert!(!sounds_alike(a, b, WINDOW));
        assert!(!sounds_alike(b, a, WINDOW), "must be symmetric");
    }

    #[test]
    fn short_cleaned_words_never_rhyme() {
        assert!(!sounds_alike("a", "a", WINDOW));
        assert!(!sounds_alike("I", "I", WINDOW));
        assert!(!sounds_alike("..", "night", WINDOW));
        assert!(!sounds_alike("o!", "o!", WINDOW));
    }

    #[test]
    fn window_caps_at_shorter_word() {
        // "on" has two letters, so only the final two are compared.
        assert!(sounds_alike("on", "upon", WINDOW));
    }

    #[test]
    fn wider_window_is_stricter() {
        assert!(sounds_alike("deranged", "changed", 3));
        assert!(!sounds_alike("deranged", "changed", 6));
    }
}

use nonempty::NonEmpty;

use super::{
    Form, Tolerances,
    poem::{Line, Poem},
    violation::{HaikuLine, Verdict, Violation},
};
use crate::analysis::{end_word, line_syllables, sounds_alike};

/// End-word pairings for the Shakespearean scheme (ABAB CDCD EFEF GG).
///
/// Only the quatrain cross-rhymes and the closing couplet are checked; the
/// middle quatrain is left to the poet.
const SHAKESPEAREAN_PAIRS: [(usize, usize); 5] = [(0, 2), (1, 3), (4, 6), (5, 7), (12, 13)];

/// End-word pairings for the Petrarchan scheme (ABBA ABBA ...).
const PETRARCHAN_PAIRS: [(usize, usize); 4] = [(0, 3), (1, 2), (4, 7), (5, 6)];

/// Limerick pairings for AABBA.
const LIMERICK_PAIRS: [(usize, usize); 3] = [(0, 1), (0, 4), (2, 3)];

/// Per-line syllable targets for a haiku.
const HAIKU_TARGETS: [(HaikuLine, usize); 3] = [
    (HaikuLine::First, 5),
    (HaikuLine::Second, 7),
    (HaikuLine::Third, 5),
];

/// The form rule engine.
///
/// A validator is a pure function of its inputs: it owns no resources,
/// performs no I/O, and two calls with the same arguments always produce
/// the same verdict. It is therefore freely shareable across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    tolerances: Tolerances,
}

impl Validator {
    /// Creates a validator with explicit tolerances.
    #[must_use]
    pub const fn new(tolerances: Tolerances) -> Self {
        Self { tolerances }
    }

    /// Validates a poem against a form.
    ///
    /// Checks short-circuit in a fixed order per form and the first violated
    /// rule is reported; violations are never aggregated. Empty or
    /// whitespace-only text is rejected before form dispatch. The `topic`
    /// matters only for acrostics; passing `None` (or an empty topic) skips
    /// the acrostic spelling check.
    #[must_use]
    pub fn validate(&self, text: &str, form: Form, topic: Option<&str>) -> Verdict {
        let Some(lines) = NonEmpty::from_vec(Poem::parse(text).into_lines()) else {
            return Verdict::Invalid(Violation::Empty);
        };

        let violation = match form {
            Form::Sonnet => self.check_sonnet(&lines),
            Form::Haiku => self.check_haiku(&lines),
            Form::Limerick => self.check_limerick(&lines),
            Form::Villanelle => check_line_count(Form::Villanelle, 19, &lines),
            Form::Acrostic => check_acrostic(&lines, topic),
            Form::Ballad => check_ballad(&lines),
            Form::Ode | Form::Epic | Form::FreeVerse => None,
        };

        violation.into()
    }

    fn check_sonnet(&self, lines: &NonEmpty<Line>) -> Option<Violation> {
        check_line_count(Form::Sonnet, 14, lines).or_else(|| {
            let ends = end_words(lines);
            let shakespearean = self.scheme_holds(&ends, &SHAKESPEAREAN_PAIRS);
            let petrarchan = self.scheme_holds(&ends, &PETRARCHAN_PAIRS);

            (!shakespearean && !petrarchan).then_some(Violation::SonnetScheme)
        })
    }

    fn check_haiku(&self, lines: &NonEmpty<Line>) -> Option<Violation> {
        check_line_count(Form::Haiku, 3, lines).or_else(|| {
            HAIKU_TARGETS
                .into_iter()
                .zip(lines.iter())
                .find_map(|((position, target), line)| {
                    let actual = line_syllables(line.as_str());
                    (actual.abs_diff(target) > self.tolerances.syllable_slack).then_some(
                        Violation::HaikuSyllables {
                            line: position,
                            target,
                            actual,
                        },
                    )
                })
        })
    }

    fn check_limerick(&self, lines: &NonEmpty<Line>) -> Option<Violation> {
        check_line_count(Form::Limerick, 5, lines).or_else(|| {
            let ends = end_words(lines);
            let holds = self.scheme_holds(&ends, &LIMERICK_PAIRS);

            (!holds).then_some(Violation::LimerickScheme)
        })
    }

    fn scheme_holds(&self, ends: &[String], pairs: &[(usize, usize)]) -> bool {
        pairs
            .iter()
            .all(|&(a, b)| sounds_alike(&ends[a], &ends[b], self.tolerances.rhyme_window))
    }
}

fn check_line_count(form: Form, expected: usize, lines: &NonEmpty<Line>) -> Option<Violation> {
    let actual = lines.len();
    (actual != expected).then_some(Violation::LineCount {
        form,
        expected,
        actual,
    })
}

fn check_acrostic(lines: &NonEmpty<Line>, topic: Option<&str>) -> Option<Violation> {
    let topic = topic.filter(|t| !t.is_empty())?;

    let derived: String = lines
        .iter()
        .flat_map(|line| line.first_char().to_lowercase())
        .collect();

    (derived != topic.to_lowercase()).then(|| Violation::AcrosticSpelling {
        expected: topic.to_string(),
        actual: derived.to_uppercase(),
    })
}

/// The minimum-length check runs before the quatrain-grouping check, so a
/// six-line ballad is reported as too short rather than badly grouped.
fn check_ballad(lines: &NonEmpty<Line>) -> Option<Violation> {
    let actual = lines.len();
    if actual < 8 {
        return Some(Violation::BalladTooShort { actual });
    }
    (actual % 4 != 0).then_some(Violation::BalladStanzas { actual })
}

fn end_words(lines: &NonEmpty<Line>) -> Vec<String> {
    lines.iter().map(|line| end_word(line.as_str())).collect()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{Form, Tolerances, Validator, Verdict};
    use crate::domain::violation::{HaikuLine, Violation};

    fn validate(text: &str, form: Form) -> Verdict {
        Validator::default().validate(text, form, None)
    }

    const POND_HAIKU: &str = "An old silent pond\nA frog jumps into the pond\nSplash, silence again";

    /// A sonnet whose end words satisfy the Shakespearean pairings
    /// (1/3, 2/4, 5/7, 6/8, 13/14).
    const SHAKESPEAREAN_SONNET: &str = "\
When morning breaks upon the hill in light,
The meadow wakes and stretches far away,
And every shadow slips into the night,
While branches in the rising breezes sway,
The river carries every leaf below,
Through valleys past the weathered standing stone,
And bends around the boulders in its flow,
Until it finds the quiet sea alone,
The middle verses wander as they please,
No rhyme is asked of them along the way,
They drift like pollen on a summer breeze,
And settle where the quiet grasses lay,
  So evening folds the meadow into fire,
  And every ember lifts in bright desire";

    #[test_case(Form::Ode; "ode")]
    #[test_case(Form::Epic; "epic")]
    #[test_case(Form::FreeVerse; "free verse")]
    #[test_case(Form::Sonnet; "sonnet")]
    #[test_case(Form::Acrostic; "acrostic")]
    fn empty_poem_is_rejected_before_dispatch(form: Form) {
        let verdict = validate("", form);
        assert_eq!(verdict.message().unwrap(), "Poem cannot be empty");

        let verdict = validate(" \n\t\n ", form);
        assert_eq!(verdict.message().unwrap(), "Poem cannot be empty");
    }

    #[test_case(Form::Ode; "ode")]
    #[test_case(Form::Epic; "epic")]
    #[test_case(Form::FreeVerse; "free verse")]
    fn unconstrained_forms_accept_anything(form: Form) {
        assert!(validate("one line", form).is_valid());
        assert!(validate(POND_HAIKU, form).is_valid());
    }

    #[test]
    fn haiku_within_tolerance_is_valid() {
        assert!(validate(POND_HAIKU, Form::Haiku).is_valid());
    }

    #[test]
    fn haiku_reports_first_line_mismatch() {
        // Estimated 1/6/2 syllables; the first line misses 5 by more than 1.
        let verdict = validate("Spring\nRain falls on the roof\nSoft sound", Form::Haiku);
        assert_eq!(
            verdict.violation().unwrap(),
            &Violation::HaikuSyllables {
                line: HaikuLine::First,
                target: 5,
                actual: 1
            }
        );
        assert_eq!(
            verdict.message().unwrap(),
            "First line should have ~5 syllables. Current: 1 syllables"
        );
    }

    #[test_case("one\ntwo"; "two lines")]
    #[test_case("one\ntwo\nthree\nfour"; "four lines")]
    fn haiku_line_count_is_exact(text: &str) {
        let verdict = validate(text, Form::Haiku);
        assert!(matches!(
            verdict.violation().unwrap(),
            Violation::LineCount {
                form: Form::Haiku,
                expected: 3,
                ..
            }
        ));
    }

    #[test]
    fn sonnet_with_shakespearean_scheme_is_valid() {
        assert!(validate(SHAKESPEAREAN_SONNET, Form::Sonnet).is_valid());
    }

    #[test]
    fn sonnet_with_petrarchan_scheme_is_valid() {
        // End words pair 1/4, 2/3, 5/8, 6/7; the sestet is unchecked.
        let octave_and_sestet = "\
The harbour holds the evening in its light,
The gulls come wheeling slowly into view,
And pass the fading shoreline in review,
Then vanish one by one into the night,
The tide rewrites the sand with patient call,
Erasing every footprint washed away,
And watching all the anchored vessels sway,
The dark now gathers gently over all,
Unrhymed the closing lines are free to roam,
Across whatever images they find,
A lantern in a window burning low,
A fishing boat that's slowly turning home,
The nets drawn in, the day's work left behind,
And overhead the first few stars aglow";
        assert!(validate(octave_and_sestet, Form::Sonnet).is_valid());
    }

    #[test_case(13; "thirteen lines")]
    #[test_case(15; "fifteen lines")]
    fn sonnet_line_count_reported_exactly(count: usize) {
        let text = vec!["a line of verse"; count].join("\n");
        let verdict = validate(&text, Form::Sonnet);
        assert_eq!(
            verdict.message().unwrap(),
            format!("A sonnet must have exactly 14 lines. Current: {count} lines")
        );
    }

    #[test]
    fn sonnet_with_neither_scheme_names_both() {
        // Fourteen lines whose end words share no three-letter suffix.
        let endings = [
            "meadow", "night", "stone", "river", "cloud", "ember", "forest", "lantern", "harbor",
            "willow", "sunrise", "thunder", "garden", "petal",
        ];
        let text: String = endings
            .iter()
            .map(|word| format!("a line that ends with {word}"))
            .collect::<Vec<_>>()
            .join("\n");

        let verdict = validate(&text, Form::Sonnet);
        assert_eq!(
            verdict.message().unwrap(),
            "A sonnet must follow either Shakespearean (ABAB CDCD EFEF GG) or Petrarchan (ABBA \
             ABBA...) rhyme scheme"
        );
    }

    #[test]
    fn limerick_with_aabba_scheme_is_valid() {
        let text = "\
There once was a cat from Nantucket,
Who carried her toys in a bucket,
She sang through the night,
To her mouse's delight,
Then hid every toy in the tucket";
        assert!(validate(text, Form::Limerick).is_valid());
    }

    #[test]
    fn limerick_with_scrambled_scheme_cites_aabba() {
        // The rhyming lines are 1/3 and 2/4 here, not AABBA.
        let text = "\
There once was a cat from Nantucket,
She sang through the night,
Who carried her toys in a bucket,
To her mouse's delight,
Then vanished without any warning";
        let verdict = validate(text, Form::Limerick);
        assert_eq!(
            verdict.message().unwrap(),
            "A limerick should follow AABBA rhyme scheme"
        );
    }

    #[test]
    fn limerick_line_count_is_exact() {
        let verdict = validate("one\ntwo\nthree\nfour", Form::Limerick);
        assert_eq!(
            verdict.message().unwrap(),
            "A limerick must have exactly 5 lines. Current: 4 lines"
        );
    }

    #[test]
    fn villanelle_checks_line_count_only() {
        let nineteen = vec!["any line at all"; 19].join("\n");
        assert!(validate(&nineteen, Form::Villanelle).is_valid());

        let eighteen = vec!["any line at all"; 18].join("\n");
        assert_eq!(
            validate(&eighteen, Form::Villanelle).message().unwrap(),
            "A villanelle must have exactly 19 lines. Current: 18 lines"
        );
    }

    #[test]
    fn acrostic_matches_topic_case_insensitively() {
        let text = "Curled up in sunlight\nAlways landing on her feet\nTail flicking softly";
        let verdict = Validator::default().validate(text, Form::Acrostic, Some("CAT"));
        assert!(verdict.is_valid());

        let verdict = Validator::default().validate(text, Form::Acrostic, Some("cat"));
        assert!(verdict.is_valid());
    }

    #[test]
    fn acrostic_reports_expected_and_actual() {
        let text = "Curled up in sunlight\nAlways landing on her feet\nRarely in a hurry";
        let verdict = Validator::default().validate(text, Form::Acrostic, Some("CAT"));
        assert_eq!(
            verdict.message().unwrap(),
            "An acrostic poem's first letters must spell \"CAT\". Current: \"CAR\""
        );
    }

    #[test]
    fn acrostic_without_topic_is_unchecked() {
        let text = "Whatever lines\nAt all";
        assert!(Validator::default().validate(text, Form::Acrostic, None).is_valid());
        assert!(
            Validator::default()
                .validate(text, Form::Acrostic, Some(""))
                .is_valid()
        );
    }

    #[test]
    fn ballad_minimum_is_checked_before_grouping() {
        // Seven lines fail both rules; the minimum-length message wins.
        let seven = vec!["a line of story"; 7].join("\n");
        assert_eq!(
            validate(&seven, Form::Ballad).message().unwrap(),
            "A ballad must have at least 8 lines (2 stanzas). Current: 7 lines"
        );
    }

    #[test]
    fn ballad_requires_quatrain_grouping() {
        let ten = vec!["a line of story"; 10].join("\n");
        assert_eq!(
            validate(&ten, Form::Ballad).message().unwrap(),
            "A ballad's lines should be in groups of 4. Current: 10 lines"
        );

        let twelve = vec!["a line of story"; 12].join("\n");
        assert!(validate(&twelve, Form::Ballad).is_valid());
    }

    #[test]
    fn validation_is_idempotent() {
        let validator = Validator::default();
        let first = validator.validate(POND_HAIKU, Form::Haiku, None);
        let second = validator.validate(POND_HAIKU, Form::Haiku, None);
        assert_eq!(first, second);

        let first = validator.validate("Spring\nRain\nSound", Form::Haiku, None);
        let second = validator.validate("Spring\nRain\nSound", Form::Haiku, None);
        assert_eq!(first, second);
    }

    #[test]
    fn tolerances_widen_the_haiku_band() {
        // 1/6/2 syllables: invalid at slack 1, valid at slack 5.
        let text = "Spring\nRain falls on the roof\nSoft sound";
        assert!(!validate(text, Form::Haiku).is_valid());

        let loose = Validator::new(Tolerances {
            syllable_slack: 5,
            rhyme_window: 3,
        });
        assert!(loose.validate(text, Form::Haiku, None).is_valid());
    }
}

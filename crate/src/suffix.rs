//! Suffix rules for nouns that are not in any of the built-in tables.
//!
//! Each direction has its own ordered list of rules, and the first rule that
//! matches wins. A rule is checked against the lower case word, but when it
//! fires it only replaces the suffix, so the rest of the word keeps whatever
//! case it had: "iPod" becomes "iPods", not "ipods".
use crate::{
    classical::{ClassicalFlags, Flag},
    tables::*,
    util,
};
use std::borrow::Cow;
use tracing::trace;

/// An extra condition a rule needs before it can fire.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Guard {
    Always,
    /// The letter before the suffix is a consonant. A "u" after a "q"
    /// counts as a consonant, so "soliloquy" becomes "soliloquies".
    AfterConsonant,
    /// The singular form ends with one of these strings. When
    /// singularizing, the singular form is the rule's output.
    SingularEndsWith(&'static [&'static str]),
    /// The singular form is one of these words, either alone or as the last
    /// word of a compound.
    SingularIsWord(&'static [&'static str]),
    /// The given classical flag is not set.
    Modern(Flag),
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct SuffixRule {
    pub(crate) suffix: &'static str,
    pub(crate) replacement: &'static str,
    pub(crate) guard: Guard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    ToPlural,
    ToSingular,
}

const fn rule(suffix: &'static str, replacement: &'static str, guard: Guard) -> SuffixRule {
    SuffixRule {
        suffix,
        replacement,
        guard,
    }
}

pub(crate) static TO_PLURAL_RULES: &[SuffixRule] = &[
    rule("ch", "chs", Guard::SingularEndsWith(CH_K_ENDINGS)),
    rule("sis", "ses", Guard::Always),
    rule("trix", "trices", Guard::Always),
    rule("s", "ses", Guard::Always),
    rule("x", "xes", Guard::Always),
    rule("z", "zes", Guard::Always),
    rule("ch", "ches", Guard::Always),
    rule("sh", "shes", Guard::Always),
    rule("y", "ies", Guard::AfterConsonant),
    rule("fe", "ves", Guard::SingularEndsWith(FE_VES_ENDINGS)),
    rule("fe", "ves", Guard::SingularIsWord(LIFE_WORDS)),
    rule("f", "ves", Guard::SingularEndsWith(F_VES_ENDINGS)),
    rule("o", "os", Guard::SingularEndsWith(O_OS_ENDINGS)),
    rule("o", "oes", Guard::AfterConsonant),
    rule("man", "mans", Guard::SingularEndsWith(MAN_MANS_ENDINGS)),
    rule("man", "men", Guard::Always),
    rule("ouse", "ice", Guard::SingularEndsWith(LOUSE_ENDINGS)),
    rule("child", "children", Guard::Always),
    rule("tooth", "teeth", Guard::Always),
    rule("foot", "feet", Guard::Always),
    rule("person", "people", Guard::Modern(Flag::Persons)),
    rule("", "s", Guard::Always),
];

// A rule whose replacement equals its suffix keeps the word as it is. Those
// rules stop words that are already singular from losing their final "s".
pub(crate) static TO_SINGULAR_RULES: &[SuffixRule] = &[
    rule("s", "s", Guard::SingularIsWord(S_ES_WORDS)),
    rule("us", "u", Guard::SingularIsWord(U_WORDS)),
    rule("us", "us", Guard::Always),
    rule("ss", "ss", Guard::Always),
    rule("sis", "sis", Guard::Always),
    rule("sses", "ss", Guard::Always),
    rule("ses", "sis", Guard::SingularIsWord(SIS_WORDS)),
    rule("uses", "use", Guard::SingularEndsWith(USE_ENDINGS)),
    rule("uses", "use", Guard::SingularIsWord(USE_WORDS)),
    rule("uses", "us", Guard::Always),
    rule("ses", "s", Guard::SingularIsWord(S_ES_WORDS)),
    rule("ses", "se", Guard::Always),
    rule("xes", "x", Guard::Always),
    rule("zzes", "zz", Guard::Always),
    rule("tzes", "tz", Guard::Always),
    rule("zes", "ze", Guard::Always),
    rule("ches", "che", Guard::SingularIsWord(CHE_WORDS)),
    rule("ches", "ch", Guard::Always),
    rule("shes", "sh", Guard::Always),
    rule("ies", "ie", Guard::SingularIsWord(IE_WORDS)),
    rule("ies", "y", Guard::AfterConsonant),
    rule("ves", "fe", Guard::SingularEndsWith(FE_VES_ENDINGS)),
    rule("ves", "fe", Guard::SingularIsWord(LIFE_WORDS)),
    rule("ves", "f", Guard::SingularEndsWith(F_VES_ENDINGS)),
    rule("ves", "ve", Guard::Always),
    rule("oes", "oe", Guard::SingularIsWord(OE_WORDS)),
    rule("oes", "o", Guard::Always),
    rule("men", "men", Guard::SingularIsWord(MEN_WORDS)),
    rule("men", "man", Guard::Always),
    rule("trices", "trix", Guard::Always),
    rule("ice", "ouse", Guard::SingularEndsWith(LOUSE_ENDINGS)),
    rule("eaux", "eau", Guard::Always),
    rule("ae", "a", Guard::Always),
    rule("children", "child", Guard::Always),
    rule("teeth", "tooth", Guard::Always),
    rule("feet", "foot", Guard::Always),
    rule("people", "person", Guard::Always),
    rule("s", "", Guard::Always),
];

impl SuffixRule {
    fn matches(&self, lower: &str, direction: Direction, flags: &ClassicalFlags) -> bool {
        let stem = match lower.strip_suffix(self.suffix) {
            Some(s) => s,
            None => return false,
        };
        if stem.is_empty() && self.replacement.is_empty() {
            return false;
        }

        match self.guard {
            Guard::Always => true,
            Guard::AfterConsonant => ends_with_consonant(stem),
            Guard::Modern(flag) => !flags.is_set(flag),
            Guard::SingularEndsWith(endings) => {
                let singular = self.singular_form(lower, stem, direction);
                endings.iter().any(|e| singular.ends_with(e))
            }
            Guard::SingularIsWord(words) => {
                let singular = self.singular_form(lower, stem, direction);
                words.iter().any(|w| util::ends_with_word(&singular, w))
            }
        }
    }

    fn singular_form<'s>(&self, lower: &'s str, stem: &str, direction: Direction) -> Cow<'s, str> {
        match direction {
            Direction::ToPlural => Cow::Borrowed(lower),
            Direction::ToSingular => Cow::Owned(format!("{}{}", stem, self.replacement)),
        }
    }

    // Replaces the suffix of the original word. If lowercasing changed the
    // word's length we can't cut the original safely, so we cut the lower
    // case version instead.
    fn rewrite<'a>(&self, word: &'a str, lower: &str) -> Cow<'a, str> {
        if self.suffix == self.replacement {
            return Cow::Borrowed(word);
        }

        let stem = match word.len().checked_sub(self.suffix.len()) {
            Some(cut) if word.len() == lower.len() && word.is_char_boundary(cut) => &word[..cut],
            _ => &lower[..lower.len() - self.suffix.len()],
        };
        let mut new = String::with_capacity(stem.len() + self.replacement.len());
        new.push_str(stem);
        new.push_str(self.replacement);
        Cow::Owned(new)
    }
}

fn ends_with_consonant(stem: &str) -> bool {
    let mut chars = stem.chars().rev();
    match chars.next() {
        Some('u') => chars.next() == Some('q'),
        Some(c) => c.is_ascii_alphabetic() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'),
        None => false,
    }
}

fn apply<'a>(
    word: &'a str,
    lower: &str,
    rules: &'static [SuffixRule],
    direction: Direction,
    flags: &ClassicalFlags,
) -> Option<Cow<'a, str>> {
    let (idx, rule) = rules
        .iter()
        .enumerate()
        .find(|(_, r)| r.matches(lower, direction, flags))?;
    let new = rule.rewrite(word, lower);
    trace!(
        word,
        suffix = rule.suffix,
        replacement = rule.replacement,
        idx,
        new = %new,
        "suffix rule matched"
    );
    Some(new)
}

/// Returns the plural of `word` according to the first matching rule. This
/// always finds a rule, since the last one just appends "s".
pub(crate) fn pluralize<'a>(
    word: &'a str,
    lower: &str,
    flags: &ClassicalFlags,
) -> Option<Cow<'a, str>> {
    apply(word, lower, TO_PLURAL_RULES, Direction::ToPlural, flags)
}

/// Returns the singular of `word` according to the first matching rule, or
/// `None` if the word does not look plural.
pub(crate) fn singularize<'a>(
    word: &'a str,
    lower: &str,
    flags: &ClassicalFlags,
) -> Option<Cow<'a, str>> {
    apply(word, lower, TO_SINGULAR_RULES, Direction::ToSingular, flags)
}

//! Pluralizing and singularizing nouns.
//!
//! A word goes through a fixed list of [steps](Step). The first step that
//! has an answer wins and the rest are skipped:
//!
//! 1. plurals defined with [def_noun](crate::Inflector::def_noun),
//! 2. the built-in irregular nouns, as selected by the classical flags,
//! 3. compounds like "mother-in-law", which only inflect their first word,
//! 4. the built-in irregular nouns again, for the last word of a phrase,
//! 5. nouns that never change, like "sheep" and "Chinese",
//! 6. the suffix rules.
//!
//! Whatever comes out keeps the case of the word that went in, so "Child"
//! becomes "Children" and "OX" becomes "OXEN".
use crate::{
    classical::ClassicalFlags,
    overrides::NounOverrides,
    suffix,
    tables::{
        CLASSICAL_PLURAL_OF, HERD, MODERN_PLURAL_OF, SINGULAR_OF, UNINFLECTED,
        UNINFLECTED_ENDINGS,
    },
    util::{self, CasePattern},
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use tracing::trace;

/// The state a single inflection reads from.
pub(crate) struct Context<'s> {
    pub(crate) flags: ClassicalFlags,
    pub(crate) nouns: &'s NounOverrides,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    Plural,
    Singular,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    UserDefined,
    Irregular,
    Compound,
    LastWord,
    Uninflected,
    Suffix,
}

const STEPS: &[Step] = &[
    Step::UserDefined,
    Step::Irregular,
    Step::Compound,
    Step::LastWord,
    Step::Uninflected,
    Step::Suffix,
];

// A head noun, then a space or dash, a preposition, and the rest of the
// phrase: "mother-in-law", "Man-at-Arms", "son of a gun".
static COMPOUND_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?s)\A(?P<head>[^ -].*?)(?P<tail>[ -]{}[ -].+)\z",
        util::PREPOSITION_REGEX_STR,
    ))
    .expect("Could not parse compound regex")
});

const COMMON_S_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Returns the plural of `word`.
pub(crate) fn plural<'a>(word: &'a str, cx: &Context<'_>) -> Cow<'a, str> {
    inflect(word, Target::Plural, cx)
}

/// Returns the singular of `word`.
pub(crate) fn singular<'a>(word: &'a str, cx: &Context<'_>) -> Cow<'a, str> {
    inflect(word, Target::Singular, cx)
}

// Whitespace around the word is put back on the result unchanged.
fn inflect<'a>(word: &'a str, target: Target, cx: &Context<'_>) -> Cow<'a, str> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return Cow::Borrowed(word);
    }

    let new = inflect_trimmed(trimmed, target, cx);
    if new == trimmed {
        return Cow::Borrowed(word);
    }
    if trimmed.len() == word.len() {
        return new;
    }

    let start = word.len() - word.trim_start().len();
    let end = start + trimmed.len();
    Cow::Owned(format!("{}{}{}", &word[..start], new, &word[end..]))
}

fn inflect_trimmed<'a>(word: &'a str, target: Target, cx: &Context<'_>) -> Cow<'a, str> {
    let lower = util::to_lowercase(word);
    STEPS
        .iter()
        .find_map(|&step| {
            let new = step.apply(word, &lower, target, cx)?;
            trace!(word, ?target, ?step, new = %new, "inflected noun");
            Some(new)
        })
        .unwrap_or(Cow::Borrowed(word))
}

impl Step {
    fn apply<'a>(
        self,
        word: &'a str,
        lower: &str,
        target: Target,
        cx: &Context<'_>,
    ) -> Option<Cow<'a, str>> {
        match self {
            Step::UserDefined => user_defined(word, lower, target, cx.nouns),
            Step::Irregular => irregular(word, lower, target, &cx.flags),
            Step::Compound => compound(word, target, cx),
            Step::LastWord => last_word(word, target, &cx.flags),
            Step::Uninflected => uninflected(word, lower),
            Step::Suffix => by_suffix(word, lower, target, &cx.flags),
        }
    }
}

fn user_defined<'a>(
    word: &'a str,
    lower: &str,
    target: Target,
    nouns: &NounOverrides,
) -> Option<Cow<'a, str>> {
    if nouns.is_empty() {
        return None;
    }

    let (forward, backward) = match target {
        Target::Plural => (nouns.plural_of(lower), nouns.singular_of(lower)),
        Target::Singular => (nouns.singular_of(lower), nouns.plural_of(lower)),
    };
    if let Some(new) = forward {
        return Some(util::fix_case(word, Cow::Owned(new.to_string())));
    }
    // The word is already in the form we want.
    backward.map(|_| Cow::Borrowed(word))
}

fn irregular<'a>(
    word: &'a str,
    lower: &str,
    target: Target,
    flags: &ClassicalFlags,
) -> Option<Cow<'a, str>> {
    match target {
        Target::Plural => {
            if flags.names && is_name(word, lower) {
                return Some(Cow::Borrowed(word));
            }
            if flags.herd && HERD.contains(lower) {
                return Some(Cow::Borrowed(word));
            }
            if let Some((flag, plural)) = CLASSICAL_PLURAL_OF.get(lower) {
                if flags.is_set(*flag) {
                    return Some(util::fix_case(word, Cow::Owned(plural.clone())));
                }
            }
            if let Some(plural) = MODERN_PLURAL_OF.get(lower) {
                return Some(util::fix_case(word, Cow::Owned(plural.clone())));
            }
            if SINGULAR_OF.contains_key(lower) {
                return Some(Cow::Borrowed(word));
            }
        }
        Target::Singular => {
            if let Some(singular) = SINGULAR_OF.get(lower) {
                return Some(util::fix_case(word, Cow::Owned(singular.clone())));
            }
            if MODERN_PLURAL_OF.contains_key(lower) {
                return Some(Cow::Borrowed(word));
            }
        }
    }
    None
}

// A capitalized single word ending in "-s" that isn't a noun we know, like
// "Jones" or "Hughes". Endings that mostly belong to common nouns ("Box",
// "Church", "Glass", "Bus", "Iris") are not names.
fn is_name(word: &str, lower: &str) -> bool {
    CasePattern::of(word) == CasePattern::Capitalized
        && !word.contains(|c: char| c == ' ' || c == '-')
        && !MODERN_PLURAL_OF.contains_key(lower)
        && !SINGULAR_OF.contains_key(lower)
        && !UNINFLECTED.contains(lower)
        && lower.ends_with('s')
        && !COMMON_S_ENDINGS.iter().any(|e| lower.ends_with(e))
}

fn compound<'a>(word: &'a str, target: Target, cx: &Context<'_>) -> Option<Cow<'a, str>> {
    let caps = COMPOUND_REGEX.captures(word)?;
    let head = caps.name("head")?.as_str();
    let tail = caps.name("tail")?.as_str();

    let new = inflect_trimmed(head, target, cx);
    if new == head {
        return Some(Cow::Borrowed(word));
    }
    Some(Cow::Owned(format!("{}{}", new, tail)))
}

fn last_word<'a>(word: &'a str, target: Target, flags: &ClassicalFlags) -> Option<Cow<'a, str>> {
    let (prefix, last) = util::split_last_word(word)?;
    let lower = util::to_lowercase(last);
    let new = irregular(last, &lower, target, flags)?;
    if new == last {
        return Some(Cow::Borrowed(word));
    }
    Some(Cow::Owned(format!("{}{}", prefix, new)))
}

fn uninflected<'a>(word: &'a str, lower: &str) -> Option<Cow<'a, str>> {
    let last = util::split_last_word(lower).map(|(_, l)| l).unwrap_or(lower);
    if UNINFLECTED.contains(lower) || UNINFLECTED.contains(last) {
        return Some(Cow::Borrowed(word));
    }
    if UNINFLECTED_ENDINGS.iter().any(|e| lower.ends_with(e)) {
        return Some(Cow::Borrowed(word));
    }
    if is_nationality(word, lower) {
        return Some(Cow::Borrowed(word));
    }
    None
}

// "Chinese", "Japanese", "Portuguese", but not "cheese" or "these".
fn is_nationality(word: &str, lower: &str) -> bool {
    if !lower.ends_with("ese") || lower.ends_with("eese") {
        return false;
    }
    let last = util::split_last_word(word).map(|(_, l)| l).unwrap_or(word);
    CasePattern::of(last) != CasePattern::Other
}

fn by_suffix<'a>(
    word: &'a str,
    lower: &str,
    target: Target,
    flags: &ClassicalFlags,
) -> Option<Cow<'a, str>> {
    // Numbers, punctuation and the like are left alone.
    if !word.chars().any(char::is_alphabetic) {
        return None;
    }
    let new = match target {
        Target::Plural => suffix::pluralize(word, lower, flags),
        Target::Singular => suffix::singularize(word, lower, flags),
    }?;
    Some(util::fix_case(word, new))
}

#[cfg(test)]
mod tests {
    use super::Context;
    use crate::{classical::ClassicalFlags, overrides::NounOverrides};
    use std::borrow::Cow;

    // Each line is a singular and its plural. Lines marked with "<" only
    // hold when pluralizing, and lines marked with ">" only hold when
    // singularizing.
    static CONVERSIONS_TEST_DATA: &str = r#"
        # irregular
        child           children
        Child           Children
        CHILD           CHILDREN
        man             men
        woman           women
        ox              oxen
        OX              OXEN
        mouse           mice
        louse           lice
        goose           geese
        mongoose        mongooses
        tooth           teeth
        foot            feet
        die             dice
        quiz            quizzes
        matrix          matrices
        basis           bases
        crisis          crises
        axis            axes
        datum           data
        criterion       criteria
        phenomenon      phenomena
        person          people
        Person          People
        index           indexes
        formula         formulas
        cactus          cactuses
        cow             cows
        passer-by       passers-by
        passer by       passers by
        runner-up       runners-up
        # last word of a phrase
        New Man         New Men
        grandchild      grandchildren
        big child       big children
        # compounds
        mother-in-law   mothers-in-law
        Mother-in-law   Mothers-in-law
        Man-at-Arms     Men-at-Arms
        son of a gun    sons of a gun
        # uninflected
        sheep           sheep
        deer            deer
        reindeer        reindeer
        goldfish        goldfish
        Iroquois        Iroquois
        smallpox        smallpox
        arthritis       arthritis
        series          series
        species         species
        news            news
        means           means
        information     information
        Chinese         Chinese
        Japanese        Japanese
        bison           bisons
        # suffixes
        box             boxes
        BOX             BOXES
        Box             Boxes
        bus             buses
        glass           glasses
        church          churches
        stomach         stomachs
        dish            dishes
        buzz            buzzes
        analysis        analyses
        aviatrix        aviatrices
        city            cities
        day             days
        knife           knives
        life            lives
        wolf            wolves
        roof            roofs
        olive           olives
        hero            heroes
        photo           photos
        radio           radios
        fireman         firemen
        human           humans
        omen            omens
        dormouse        dormice
        house           houses
        movie           movies
        shoe            shoes
        menu            menus
        gas             gases
        lens            lenses
        iPod            iPods
        < Jones         Joneses
        cheese          cheeses
        cat             cats
        > dog           dog
    "#;

    fn conversions() -> Vec<(&'static str, &'static str, Option<char>)> {
        CONVERSIONS_TEST_DATA
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(|l| {
                let (marker, rest) = match l.chars().next() {
                    Some(c @ '<') | Some(c @ '>') => (Some(c), l[1..].trim_start()),
                    _ => (None, l),
                };
                // Singulars can contain single spaces, so columns are split
                // on runs of two or more.
                let idx = rest
                    .find("  ")
                    .unwrap_or_else(|| panic!("no second column in {:?}", l));
                (rest[..idx].trim(), rest[idx..].trim(), marker)
            })
            .collect()
    }

    fn modern() -> (ClassicalFlags, NounOverrides) {
        (ClassicalFlags::default(), NounOverrides::default())
    }

    #[test]
    fn conversions_to_plural() {
        let (flags, nouns) = modern();
        let cx = Context {
            flags,
            nouns: &nouns,
        };
        for (singular, plural, marker) in conversions() {
            if marker == Some('>') {
                continue;
            }
            assert_eq!(
                super::plural(singular, &cx),
                plural,
                "plural({}) = {}",
                singular,
                plural,
            );
        }
    }

    #[test]
    fn conversions_to_singular() {
        let (flags, nouns) = modern();
        let cx = Context {
            flags,
            nouns: &nouns,
        };
        for (singular, plural, marker) in conversions() {
            if marker == Some('<') {
                continue;
            }
            let (from, to) = match marker {
                Some('>') => (singular, plural),
                _ => (plural, singular),
            };
            assert_eq!(
                super::singular(from, &cx),
                to,
                "singular({}) = {}",
                from,
                to,
            );
        }
    }

    #[test]
    fn known_forms_are_left_alone() {
        let (flags, nouns) = modern();
        let cx = Context {
            flags,
            nouns: &nouns,
        };
        let tests = [
            ("children", "child"),
            ("people", "person"),
            ("formulae", "formula"),
            ("indices", "index"),
            ("data", "datum"),
        ];
        for test in tests {
            assert_eq!(super::plural(test.0, &cx), test.0, "plural({})", test.0);
            assert_eq!(
                super::singular(test.1, &cx),
                test.1,
                "singular({})",
                test.1
            );
        }
    }

    #[test]
    fn classical_flags() {
        let nouns = NounOverrides::default();
        let mut flags = ClassicalFlags::default();
        flags.ancient = true;
        let cx = Context {
            flags,
            nouns: &nouns,
        };
        let tests = [
            ("formula", "formulae"),
            ("Formula", "Formulae"),
            ("index", "indices"),
            ("cactus", "cacti"),
            ("cow", "kine"),
            ("person", "people"),
            ("child", "children"),
            ("dog", "dogs"),
        ];
        for test in tests {
            assert_eq!(
                super::plural(test.0, &cx),
                test.1,
                "ancient plural({}) = {}",
                test.0,
                test.1,
            );
        }

        let mut flags = ClassicalFlags::default();
        flags.persons = true;
        let cx = Context {
            flags,
            nouns: &nouns,
        };
        assert_eq!(super::plural("person", &cx), "persons");
        assert_eq!(super::plural("salesperson", &cx), "salespersons");
        assert_eq!(super::plural("formula", &cx), "formulas");
        assert_eq!(super::singular("persons", &cx), "person");
        assert_eq!(super::singular("people", &cx), "person");
    }

    #[test]
    fn names_flag() {
        let nouns = NounOverrides::default();
        let mut flags = ClassicalFlags::default();
        flags.names = true;
        let cx = Context {
            flags,
            nouns: &nouns,
        };
        let tests = [
            ("Jones", "Jones"),
            ("Hughes", "Hughes"),
            ("Williams", "Williams"),
            ("Child", "Children"),
            ("Box", "Boxes"),
            ("Church", "Churches"),
            ("Glass", "Glasses"),
            ("Bus", "Buses"),
            ("Marx", "Marxes"),
            ("jones", "joneses"),
            ("JONES", "JONESES"),
            ("Smith", "Smiths"),
        ];
        for test in tests {
            assert_eq!(
                super::plural(test.0, &cx),
                test.1,
                "names plural({}) = {}",
                test.0,
                test.1,
            );
        }

        // Only pluralizing treats a word as a name.
        let tests = [
            ("Cats", "Cat"),
            ("Boxes", "Box"),
            ("big Cats", "big Cat"),
        ];
        for test in tests {
            assert_eq!(
                super::singular(test.0, &cx),
                test.1,
                "names singular({}) = {}",
                test.0,
                test.1,
            );
        }
    }

    #[test]
    fn classical_round_trips() {
        let nouns = NounOverrides::default();
        let cx = Context {
            flags: ClassicalFlags::uniform(true),
            nouns: &nouns,
        };
        for (singular, _, marker) in conversions() {
            if marker.is_some() {
                continue;
            }
            let plural = super::plural(singular, &cx);
            assert_eq!(
                super::singular(&plural, &cx),
                singular,
                "classical singular(plural({})) via {}",
                singular,
                plural,
            );
        }
    }

    #[test]
    fn herd_flag() {
        let nouns = NounOverrides::default();
        let mut flags = ClassicalFlags::default();
        flags.herd = true;
        let cx = Context {
            flags,
            nouns: &nouns,
        };
        let tests = [
            ("bison", "bison"),
            ("Elk", "Elk"),
            ("wildebeest", "wildebeest"),
            ("American bison", "American bison"),
            ("dog", "dogs"),
        ];
        for test in tests {
            assert_eq!(
                super::plural(test.0, &cx),
                test.1,
                "herd plural({}) = {}",
                test.0,
                test.1,
            );
        }
    }

    #[test]
    fn user_defined() {
        let mut nouns = NounOverrides::default();
        nouns.define("cow", "kine");
        nouns.define("child", "childs");
        nouns.define("mother-in-law", "mothers-in-laws");
        let cx = Context {
            flags: ClassicalFlags::default(),
            nouns: &nouns,
        };
        assert_eq!(super::plural("cow", &cx), "kine");
        assert_eq!(super::plural("Cow", &cx), "Kine");
        assert_eq!(super::plural("COW", &cx), "KINE");
        assert_eq!(super::plural("kine", &cx), "kine");
        assert_eq!(super::singular("kine", &cx), "cow");
        assert_eq!(super::singular("cow", &cx), "cow");
        assert_eq!(super::plural("child", &cx), "childs");
        assert_eq!(super::plural("mother-in-law", &cx), "mothers-in-laws");
    }

    #[test]
    fn user_defined_edges() {
        let mut nouns = NounOverrides::default();
        nouns.define("", "nothings");
        nouns.define("42", "forty-twos");
        let cx = Context {
            flags: ClassicalFlags::default(),
            nouns: &nouns,
        };
        assert_eq!(super::plural("", &cx), "");
        assert_eq!(super::plural("  ", &cx), "  ");
        assert_eq!(super::plural("42", &cx), "forty-twos");
        assert_eq!(super::singular("forty-twos", &cx), "42");
    }

    #[test]
    fn whitespace_and_empty() {
        let (flags, nouns) = modern();
        let cx = Context {
            flags,
            nouns: &nouns,
        };
        assert_eq!(super::plural("", &cx), "");
        assert_eq!(super::plural("   ", &cx), "   ");
        assert_eq!(super::plural(" cat ", &cx), " cats ");
        assert_eq!(super::singular("\tcats", &cx), "\tcat");
        assert_eq!(super::plural("123", &cx), "123");
        assert_eq!(super::plural("-", &cx), "-");
    }

    #[test]
    fn unchanged_words_are_borrowed() {
        let (flags, nouns) = modern();
        let cx = Context {
            flags,
            nouns: &nouns,
        };
        for word in ["sheep", "children", "Chinese", " 42 "] {
            assert!(
                matches!(super::plural(word, &cx), Cow::Borrowed(_)),
                "plural({}) is returned without allocating",
                word,
            );
        }
        for word in ["sheep", "mother-in-law", "cat"] {
            assert!(
                matches!(super::singular(word, &cx), Cow::Borrowed(_)),
                "singular({}) is returned without allocating",
                word,
            );
        }
    }
}

use std::borrow::Cow;

pub(crate) const PREPOSITION_REGEX_STR: &str = r#"(?:(?ix)
    about | above | across | after | among | around | athwart | at | before | behind |
    below | beneath | besides? | between | betwixt | beyond | but | by | during |
    except | for | from | into | in | near | off | of | onto | on | out | over |
    since | till | to | under | until | unto | upon | with)"#;

/// The case class of a word. Only three are recognized, and only the first
/// two change anything when reapplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CasePattern {
    /// Every letter is upper case ("DOG", "A").
    Upper,
    /// The first letter is upper case and every other letter is lower case
    /// ("Dog", "Mother-in-law").
    Capitalized,
    /// Anything else, including all lower case and words without letters.
    Other,
}

impl CasePattern {
    pub(crate) fn of(word: &str) -> Self {
        let mut letters = word.chars().filter(|c| c.is_alphabetic());
        let first = match letters.next() {
            Some(c) => c,
            None => return CasePattern::Other,
        };
        if !first.is_uppercase() {
            return CasePattern::Other;
        }

        let mut saw_upper = false;
        let mut saw_lower = false;
        for c in letters {
            if c.is_uppercase() {
                saw_upper = true;
            } else if c.is_lowercase() {
                saw_lower = true;
            }
        }
        match (saw_upper, saw_lower) {
            (_, false) => CasePattern::Upper,
            (false, true) => CasePattern::Capitalized,
            (true, true) => CasePattern::Other,
        }
    }
}

/// Applies the case class of `orig` to `new`. An upper case original makes
/// the whole result upper case, a capitalized original upper cases the first
/// letter of the result, and anything else leaves the result alone. This
/// returns the `new` Cow untouched whenever nothing needs to change.
pub(crate) fn fix_case<'a>(orig: &str, new: Cow<'a, str>) -> Cow<'a, str> {
    match CasePattern::of(orig) {
        CasePattern::Upper => {
            if new.chars().any(char::is_lowercase) {
                Cow::Owned(new.to_uppercase())
            } else {
                new
            }
        }
        CasePattern::Capitalized => match new.chars().next() {
            Some(c) if c.is_lowercase() => {
                let mut fixed = c.to_uppercase().collect::<String>();
                fixed.push_str(&new[c.len_utf8()..]);
                Cow::Owned(fixed)
            }
            _ => new,
        },
        CasePattern::Other => new,
    }
}

pub(crate) fn is_lowercase(word: &str) -> bool {
    !word.chars().any(char::is_uppercase)
}

/// Lowercases a word, borrowing it when it is already lower case.
pub(crate) fn to_lowercase(word: &str) -> Cow<'_, str> {
    if is_lowercase(word) {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.to_lowercase())
    }
}

/// Splits a phrase into everything up to and including its last space or
/// dash, and the last word. Returns `None` for a single word.
pub(crate) fn split_last_word(word: &str) -> Option<(&str, &str)> {
    let idx = word.rfind(|c| c == ' ' || c == '-')?;
    let (prefix, last) = word.split_at(idx + 1);
    if last.is_empty() {
        return None;
    }
    Some((prefix, last))
}

/// Returns true if `phrase` is `word`, or ends with `word` as its own space
/// or dash separated word.
pub(crate) fn ends_with_word(phrase: &str, word: &str) -> bool {
    if !phrase.ends_with(word) {
        return false;
    }
    let rest = &phrase[..phrase.len() - word.len()];
    rest.is_empty() || rest.ends_with(' ') || rest.ends_with('-')
}

//! Working out how two forms of a word relate to each other.
use crate::{
    classical::ClassicalFlags,
    noun::{self, Context},
};
use std::fmt;
use tracing::trace;

/// How two words relate to each other, as returned by
/// [Inflector::compare](crate::Inflector::compare).
///
/// The string forms are stable and can be relied on by callers that only
/// deal in text.
///
/// ```
/// use en_inflect::Comparison;
///
/// assert_eq!(Comparison::SingularToPlural.as_str(), "s:p");
/// assert_eq!(Comparison::Unrelated.to_string(), "");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// The words are the same, ignoring case.
    Eq,
    /// The second word is the plural of the first.
    SingularToPlural,
    /// The first word is the plural of the second.
    PluralToSingular,
    /// The words are two different plurals of the same singular, like
    /// "indexes" and "indices".
    PluralToPlural,
    Unrelated,
}

impl Comparison {
    /// Returns one of "eq", "s:p", "p:s", "p:p", or the empty string for
    /// unrelated words.
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Eq => "eq",
            Comparison::SingularToPlural => "s:p",
            Comparison::PluralToSingular => "p:s",
            Comparison::PluralToPlural => "p:p",
            Comparison::Unrelated => "",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn compare(word1: &str, word2: &str, cx: &Context<'_>) -> Comparison {
    let result = classify(&word1.to_lowercase(), &word2.to_lowercase(), cx);
    trace!(word1, word2, result = result.as_str(), "compared words");
    result
}

fn classify(word1: &str, word2: &str, cx: &Context<'_>) -> Comparison {
    if word1 == word2 {
        return Comparison::Eq;
    }
    if word1.is_empty() || word2.is_empty() {
        return Comparison::Unrelated;
    }

    // A word counts as the plural of another if it is either the plural we
    // would produce right now or the fully classical one.
    let classical = Context {
        flags: ClassicalFlags::uniform(true),
        nouns: cx.nouns,
    };
    let is_plural_of = |singular: &str, plural: &str| {
        [cx, &classical]
            .iter()
            .any(|cx| noun::plural(singular, cx) == plural)
    };

    if is_plural_of(word1, word2) {
        return Comparison::SingularToPlural;
    }
    if is_plural_of(word2, word1) {
        return Comparison::PluralToSingular;
    }
    if noun::singular(word1, cx) == noun::singular(word2, cx) {
        return Comparison::PluralToPlural;
    }
    Comparison::Unrelated
}

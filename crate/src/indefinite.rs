/*!
Indefinite article ("a" and "an") selection.

The article depends on how the first word of a phrase is pronounced, which
we can only guess at from its spelling. The guesses below handle spoken
letters ("an FBI agent", "a U-boat"), silent "h" ("an hour"), vowels that
sound like consonants ("a unicorn", "a eulogy"), and numbers ("an 8", "an
11-year-old"). Overrides registered on an [Inflector](crate::Inflector) are
checked before any of this.
*/
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use tracing::trace;

/// An indefinite article.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Article {
    A,
    An,
}

impl Article {
    /// Returns "a" or "an".
    pub fn as_str(&self) -> &'static str {
        match self {
            Article::A => "a",
            Article::An => "an",
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?x) \A [0-9] [0-9,]*").expect("Could not parse number regex"));

static ORDINAL_AN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ix) \A [aefhilmnorsx]   -?th $").expect("Could not parse ordinal an regex")
});

static ORDINAL_A_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ix) \A [bcdgjkpqtuvwyz] -?th $").expect("Could not parse ordinal a regex")
});

// The regex crate has no lookahead, so "houri" is excluded separately.
static SILENT_H_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ix) \A (?: euler | hour | heir | honest | hono )")
        .expect("Could not parse silent h regex")
});

static HOURI_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ix) \A houri").expect("Could not parse houri regex"));

static SINGLE_AN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ix) \A [aefhilmnorsx]   $").expect("Could not parse single an regex")
});

static SINGLE_A_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ix) \A [bcdgjkpqtuvwyz] $").expect("Could not parse single a regex")
});

// Strings of capitals that start with a letter whose name starts with a
// vowel sound, followed by another capital. These are read out letter by
// letter, unless they look like a real word (see below).
static ACRONYM_AN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?x) \A [FHLMNRSX][A-Z]").expect("Could not parse acronym an regex"));

static ACRONYM_WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    let re = r#"(?x)
        \A
        FJO | [HLMNS]Y.  | RY[EO] | SQU |
        (?:
            F[LR]? | [HL] | MN? | N | RH? | S[CHKLMNPTVW]? | X(?:YL)?
        ) [AEIOU]
    "#;
    Regex::new(re).expect("Could not parse acronym word regex")
});

static ABBREV_AN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?xi) \A [aefhilmnorsx][.-]").expect("Could not parse abbrev an regex")
});

static ABBREV_A_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?xi) \A [a-z][.-]").expect("Could not parse abbrev a regex"));

static CONSONANT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?xi) \A [^aeiouy]").expect("Could not parse consonant regex"));

// Vowels that are pronounced as "y" or "w": "eulogy", "ewe", "once",
// "unicorn", "usual".
static CONSONANT_VOWEL_REGEXES: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        r"(?xi) \A e [uw]",
        r"(?xi) \A onc?e \b",
        r"(?xi) \A uni (?: [^nmd] | mo)",
        r"(?xi) \A u [bcfhjkqrst] [aeiou]",
    ]
    .map(|re| Regex::new(re).expect("Could not parse consonant vowel regex"))
});

// Checked before the "u" rule above, which would otherwise catch "utter".
static UT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?xi) \A ut[th]").expect("Could not parse ut regex"));

static CAPITAL_U_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?x) \A U [NK] [AIEO]?").expect("Could not parse capital u regex")
});

static VOWEL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?xi) \A [aeiou]").expect("Could not parse vowel regex"));

// The beginnings of the English words that start with "y" followed by a
// consonant. Any other "y" + consonant start is taken to be an abbreviation.
static INITIAL_Y_AN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ix) \A y (?: b[lor] | cl[ea] | fere | gg | p[ios] | rou | tt)")
        .expect("Could not parse initial y an regex")
});

/// Returns the first whitespace-delimited token of `phrase`, or `None` if the
/// phrase is empty or only whitespace.
pub(crate) fn first_token(phrase: &str) -> Option<&str> {
    phrase.split_whitespace().next()
}

/// Guesses the article for `word` from its spelling alone. Only the start of
/// the word matters, so passing a whole phrase gives the same answer as
/// passing its first word.
pub fn article_for_word(word: &str) -> Article {
    let article = guess(word);
    trace!(word, article = article.as_str(), "guessed article");
    article
}

fn guess(word: &str) -> Article {
    if let Some(m) = NUMBER_REGEX.find(word) {
        return article_for_number(m.as_str());
    }

    // Spoken ordinals like "nth" and "x-th".
    if ORDINAL_A_REGEX.is_match(word) {
        return Article::A;
    }
    if ORDINAL_AN_REGEX.is_match(word) {
        return Article::An;
    }

    if SILENT_H_REGEX.is_match(word) && !HOURI_REGEX.is_match(word) {
        return Article::An;
    }
    if SINGLE_AN_REGEX.is_match(word) {
        return Article::An;
    }
    if SINGLE_A_REGEX.is_match(word) {
        return Article::A;
    }

    if ACRONYM_AN_REGEX.is_match(word) && !ACRONYM_WORD_REGEX.is_match(word) {
        return Article::An;
    }
    if ABBREV_AN_REGEX.is_match(word) {
        return Article::An;
    }
    if ABBREV_A_REGEX.is_match(word) {
        return Article::A;
    }

    if CONSONANT_REGEX.is_match(word) {
        return Article::A;
    }

    if UT_REGEX.is_match(word) {
        return Article::An;
    }
    if CONSONANT_VOWEL_REGEXES.iter().any(|re| re.is_match(word)) {
        return Article::A;
    }
    if CAPITAL_U_REGEX.is_match(word) {
        return Article::A;
    }

    if VOWEL_REGEX.is_match(word) {
        return Article::An;
    }

    // "y" before certain consonants sounds like "i".
    if INITIAL_Y_AN_REGEX.is_match(word) {
        return Article::An;
    }

    Article::A
}

// Numbers are read aloud: "8" is "eight", "11" is "eleven", "18,000" is
// "eighteen thousand", but "110" is "one hundred and ten".
fn article_for_number(digits: &str) -> Article {
    if digits.starts_with('8') {
        return Article::An;
    }
    if digits.starts_with("11") || digits.starts_with("18") {
        let count = digits.chars().filter(char::is_ascii_digit).count();
        if count % 3 == 2 {
            return Article::An;
        }
    }
    Article::A
}

/// Prefixes `phrase` with `article`. Whitespace before the first word is
/// dropped, and an empty or whitespace-only phrase is returned as is.
pub(crate) fn prefix(article: Article, phrase: &str) -> String {
    let trimmed = phrase.trim_start();
    if trimmed.is_empty() {
        return phrase.to_string();
    }
    format!("{} {}", article, trimmed)
}

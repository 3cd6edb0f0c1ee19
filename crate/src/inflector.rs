//! The [Inflector], which owns the classical flags and the user-defined
//! rules.
use crate::{
    classical::{ClassicalFlags, Flag},
    compare::{self, Comparison},
    error::Result,
    indefinite::{self, Article},
    noun::{self, Context},
    overrides::{ArticleOverrides, NounOverrides},
    util,
};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::borrow::Cow;
use tracing::{debug, trace};

static GLOBAL: Lazy<Inflector> = Lazy::new(Inflector::new);

/// An inflection engine with its own classical flags and user-defined rules.
///
/// Most code can use the process-wide instance returned by
/// [Inflector::global], which is also what the free functions in the crate
/// root use. Create your own with [Inflector::new] when you need settings
/// that don't leak into the rest of the program.
///
/// Each group of settings sits behind its own lock, so an `Inflector` can be
/// shared between threads. A definition or reset is never seen half done.
///
/// ```
/// use en_inflect::Inflector;
///
/// let inflector = Inflector::new();
/// assert_eq!(inflector.plural("formula"), "formulas");
///
/// inflector.classical_ancient(true);
/// assert_eq!(inflector.plural("formula"), "formulae");
///
/// inflector.def_noun("cow", "kine");
/// assert_eq!(inflector.plural("Cow"), "Kine");
/// assert_eq!(inflector.singular("kine"), "cow");
/// ```
#[derive(Debug, Default)]
pub struct Inflector {
    classical: RwLock<ClassicalFlags>,
    nouns: RwLock<NounOverrides>,
    articles: RwLock<ArticleOverrides>,
}

impl Inflector {
    /// Creates an inflector with every classical flag off and no
    /// user-defined rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an inflector with the given classical flags.
    pub fn with_flags(flags: ClassicalFlags) -> Self {
        Self {
            classical: RwLock::new(flags),
            ..Self::default()
        }
    }

    /// Returns the process-wide inflector.
    pub fn global() -> &'static Inflector {
        &GLOBAL
    }

    /// Returns the plural of `word`, or `word` itself if it has no plural
    /// form or is already plural. The result has the same case as `word`:
    /// "child" => "children", "Child" => "Children", "CHILD" => "CHILDREN".
    pub fn plural<'a>(&self, word: &'a str) -> Cow<'a, str> {
        let nouns = self.nouns.read();
        let cx = Context {
            flags: *self.classical.read(),
            nouns: &nouns,
        };
        noun::plural(word, &cx)
    }

    /// Returns the form of `word` that goes with `count`. A count of 1 or -1
    /// takes the singular. A count of 0 takes the singular if the zero flag
    /// is set. Anything else takes the plural.
    pub fn plural_count<'a>(&self, word: &'a str, count: i64) -> Cow<'a, str> {
        match count {
            1 | -1 => Cow::Borrowed(word),
            0 if self.is_classical_zero() => Cow::Borrowed(word),
            _ => self.plural(word),
        }
    }

    /// Returns the singular of `word`, or `word` itself if it is already
    /// singular or doesn't look like a plural.
    pub fn singular<'a>(&self, word: &'a str) -> Cow<'a, str> {
        let nouns = self.nouns.read();
        let cx = Context {
            flags: *self.classical.read(),
            nouns: &nouns,
        };
        noun::singular(word, &cx)
    }

    /// Returns the indefinite article for the first word of `phrase`.
    /// Returns `None` if the phrase is empty or only whitespace.
    pub fn article(&self, phrase: &str) -> Option<Article> {
        let word = indefinite::first_token(phrase)?;
        let lower = util::to_lowercase(word);
        if let Some(article) = self.articles.read().article_for(&lower) {
            trace!(word, article = article.as_str(), "user-defined article");
            return Some(article);
        }
        Some(indefinite::article_for_word(word))
    }

    /// Prefixes `phrase` with "a" or "an", depending on how its first word
    /// is pronounced: "an apple", "a European", "an honest cat". Whitespace
    /// before the first word is dropped. An empty phrase is returned as is.
    pub fn an(&self, phrase: &str) -> String {
        match self.article(phrase) {
            Some(article) => indefinite::prefix(article, phrase),
            None => phrase.to_string(),
        }
    }

    /// The same as [Inflector::an].
    pub fn a(&self, phrase: &str) -> String {
        self.an(phrase)
    }

    /// Works out how `word1` relates to `word2`, ignoring case.
    pub fn compare(&self, word1: &str, word2: &str) -> Comparison {
        let nouns = self.nouns.read();
        let cx = Context {
            flags: *self.classical.read(),
            nouns: &nouns,
        };
        compare::compare(word1, word2, &cx)
    }

    /// Makes `plural` the plural of `singular`, replacing any earlier
    /// definition. The singular is matched without regard to case. The
    /// plural is used as given, apart from matching the case of the word
    /// being inflected.
    pub fn def_noun(&self, singular: &str, plural: &str) {
        debug!(singular, plural, "defining noun");
        self.nouns.write().define(singular, plural);
    }

    /// Removes a plural defined with [Inflector::def_noun]. Returns false if
    /// there was no such definition. Built-in plurals can't be removed.
    pub fn undef_noun(&self, singular: &str) -> bool {
        let removed = self.nouns.write().undefine(singular);
        debug!(singular, removed, "undefining noun");
        removed
    }

    /// Removes every plural defined with [Inflector::def_noun].
    pub fn def_noun_reset(&self) {
        debug!("resetting user-defined nouns");
        self.nouns.write().reset();
    }

    /// Makes `word` always take "a".
    pub fn def_a(&self, word: &str) {
        debug!(word, "defining word that takes a");
        self.articles.write().define_word(word, Article::A);
    }

    /// Makes `word` always take "an".
    pub fn def_an(&self, word: &str) {
        debug!(word, "defining word that takes an");
        self.articles.write().define_word(word, Article::An);
    }

    /// Removes the article defined for `word` with [Inflector::def_a] or
    /// [Inflector::def_an]. Returns false if there was none.
    pub fn undef_a(&self, word: &str) -> bool {
        let removed = self.articles.write().undefine_word(word);
        debug!(word, removed, "undefining word article");
        removed
    }

    /// Makes every word that matches `pattern` take "a". The pattern must
    /// match the whole first word of a phrase and is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidPattern](crate::Error::InvalidPattern) if the
    /// pattern does not compile, in which case nothing is registered.
    pub fn def_a_pattern(&self, pattern: &str) -> Result<()> {
        self.def_pattern(pattern, Article::A)
    }

    /// Makes every word that matches `pattern` take "an". Patterns defined
    /// with [Inflector::def_a_pattern] are checked first.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidPattern](crate::Error::InvalidPattern) if the
    /// pattern does not compile, in which case nothing is registered.
    pub fn def_an_pattern(&self, pattern: &str) -> Result<()> {
        self.def_pattern(pattern, Article::An)
    }

    fn def_pattern(&self, pattern: &str, article: Article) -> Result<()> {
        debug!(pattern, article = article.as_str(), "defining article pattern");
        self.articles.write().define_pattern(pattern, article)
    }

    /// Removes the first "a" pattern registered with exactly this text.
    pub fn undef_a_pattern(&self, pattern: &str) -> bool {
        self.undef_pattern(pattern, Article::A)
    }

    /// Removes the first "an" pattern registered with exactly this text.
    pub fn undef_an_pattern(&self, pattern: &str) -> bool {
        self.undef_pattern(pattern, Article::An)
    }

    fn undef_pattern(&self, pattern: &str, article: Article) -> bool {
        let removed = self.articles.write().undefine_pattern(pattern, article);
        debug!(
            pattern,
            article = article.as_str(),
            removed,
            "undefining article pattern"
        );
        removed
    }

    /// Removes every user-defined article, for words and patterns alike.
    pub fn def_a_reset(&self) {
        debug!("resetting user-defined articles");
        self.articles.write().reset();
    }

    /// Sets every classical flag to `on`.
    pub fn classical_all(&self, on: bool) {
        debug!(on, "setting all classical flags");
        self.classical.write().set_all(on);
    }

    /// The same as [Inflector::classical_all].
    pub fn classical(&self, on: bool) {
        self.classical_all(on);
    }

    /// Prefer Latin and Greek plurals: "formulae", "indices", "cacti".
    pub fn classical_ancient(&self, on: bool) {
        self.set_flag(Flag::Ancient, on);
    }

    /// Pluralize "person" as "persons" rather than "people".
    pub fn classical_persons(&self, on: bool) {
        self.set_flag(Flag::Persons, on);
    }

    /// Leave capitalized names like "Jones" unchanged.
    pub fn classical_names(&self, on: bool) {
        self.set_flag(Flag::Names, on);
    }

    /// Leave game animals like "bison" unchanged.
    pub fn classical_herd(&self, on: bool) {
        self.set_flag(Flag::Herd, on);
    }

    /// Use the singular for a count of zero in [Inflector::plural_count].
    pub fn classical_zero(&self, on: bool) {
        self.set_flag(Flag::Zero, on);
    }

    fn set_flag(&self, flag: Flag, on: bool) {
        debug!(?flag, on, "setting classical flag");
        self.classical.write().set(flag, on);
    }

    /// Returns the value given to the most recent [Inflector::classical_all]
    /// call. This is not affected by setting individual flags.
    pub fn is_classical_all(&self) -> bool {
        self.classical.read().all
    }

    pub fn is_classical_ancient(&self) -> bool {
        self.classical.read().ancient
    }

    pub fn is_classical_persons(&self) -> bool {
        self.classical.read().persons
    }

    pub fn is_classical_names(&self) -> bool {
        self.classical.read().names
    }

    pub fn is_classical_herd(&self) -> bool {
        self.classical.read().herd
    }

    pub fn is_classical_zero(&self) -> bool {
        self.classical.read().zero
    }

    /// Returns a copy of all the classical flags.
    pub fn classical_flags(&self) -> ClassicalFlags {
        *self.classical.read()
    }
}

#[cfg(test)]
mod tests {
    use super::Inflector;
    use crate::{Article, Comparison, ClassicalFlags, Error};

    #[test]
    fn scenarios() {
        let inflector = Inflector::new();
        assert_eq!(inflector.plural("child"), "children");
        assert_eq!(inflector.plural("box"), "boxes");
        assert_eq!(inflector.singular("cacti"), "cactus");
        assert_eq!(inflector.an("apple"), "an apple");
        assert_eq!(inflector.an("European"), "a European");
        assert_eq!(inflector.an("honest cat"), "an honest cat");
        assert_eq!(inflector.compare("cat", "cats"), Comparison::SingularToPlural);
        assert_eq!(inflector.compare("indexes", "indices"), Comparison::PluralToPlural);
        assert_eq!(inflector.compare("cat", "dog"), Comparison::Unrelated);
    }

    #[test]
    fn round_trips() {
        let inflector = Inflector::new();
        let words = [
            "child", "man", "woman", "mouse", "tooth", "ox", "datum", "basis", "crisis", "matrix",
            "person", "index", "formula", "cactus", "passer-by", "box", "church", "city", "knife",
            "wolf", "hero", "fireman", "dormouse", "house", "movie", "menu", "bus", "glass",
        ];
        for word in words {
            let plural = inflector.plural(word);
            assert_eq!(
                inflector.singular(&plural),
                word,
                "singular(plural({})) = {}",
                word,
                word,
            );
            assert_eq!(
                inflector.plural(&inflector.singular(&plural)),
                plural,
                "plural(singular({})) = {}",
                plural,
                plural,
            );
        }
    }

    #[test]
    fn case_invariance() {
        let inflector = Inflector::new();
        let tests = [
            ("child", "children"),
            ("box", "boxes"),
            ("city", "cities"),
            ("person", "people"),
            ("sheep", "sheep"),
        ];
        for test in tests {
            let (word, plural) = test;
            assert_eq!(inflector.plural(word), plural);
            assert_eq!(inflector.plural(&word.to_uppercase()), plural.to_uppercase());
            let mut capitalized = word[..1].to_uppercase();
            capitalized.push_str(&word[1..]);
            let mut expect = plural[..1].to_uppercase();
            expect.push_str(&plural[1..]);
            assert_eq!(inflector.plural(&capitalized), expect);
        }
    }

    #[test]
    fn classical_case_invariance() {
        let inflector = Inflector::new();
        inflector.classical_all(true);
        for word in ["Cat", "Box", "CAT", "cat", "Child", "Formula"] {
            let plural = inflector.plural(word);
            assert_eq!(
                inflector.singular(&plural),
                word,
                "singular(plural({})) via {}",
                word,
                plural,
            );
        }
        assert_eq!(inflector.singular("Cats"), "Cat");
        assert_eq!(inflector.singular("Boxes"), "Box");
        assert_eq!(inflector.plural("Jones"), "Jones");
    }

    #[test]
    fn plural_count() {
        let inflector = Inflector::new();
        assert_eq!(inflector.plural_count("cat", 1), "cat");
        assert_eq!(inflector.plural_count("cat", -1), "cat");
        assert_eq!(inflector.plural_count("cat", 2), "cats");
        assert_eq!(inflector.plural_count("cat", -2), "cats");
        assert_eq!(inflector.plural_count("cat", 0), "cats");
        inflector.classical_zero(true);
        assert_eq!(inflector.plural_count("cat", 0), "cat");
        assert_eq!(inflector.plural_count("cat", 3), "cats");
    }

    #[test]
    fn noun_overrides() {
        let inflector = Inflector::new();
        assert_eq!(inflector.plural("child"), "children");

        inflector.def_noun("child", "childs");
        assert_eq!(inflector.plural("child"), "childs");
        inflector.def_noun("CHILD", "kids");
        assert_eq!(inflector.plural("Child"), "Kids");

        assert!(inflector.undef_noun("child"));
        assert_eq!(inflector.plural("child"), "children");
        assert!(!inflector.undef_noun("child"));
        assert!(!inflector.undef_noun("ox"), "built-in plurals can't be removed");
        assert_eq!(inflector.plural("ox"), "oxen");

        inflector.def_noun("thing", "");
        assert_eq!(inflector.plural("thing"), "");

        inflector.def_noun("Cow", "kine");
        assert_eq!(inflector.plural("cow"), "kine");
        assert_eq!(inflector.singular("kine"), "cow");
        assert_eq!(inflector.singular("Kine"), "Cow");
    }

    #[test]
    fn resets_restore_built_in_behavior() {
        let fresh = Inflector::new();
        let inflector = Inflector::new();
        inflector.def_noun("child", "childs");
        inflector.def_noun("cat", "kitties");
        inflector.def_an("European");
        inflector.def_a("apple");
        inflector.def_an_pattern("u.*").unwrap();
        inflector.def_a_pattern("h.*").unwrap();

        inflector.def_noun_reset();
        inflector.def_a_reset();
        inflector.def_noun_reset();
        inflector.def_a_reset();

        for word in ["child", "cat", "kitties", "childs"] {
            assert_eq!(inflector.plural(word), fresh.plural(word), "plural({})", word);
            assert_eq!(
                inflector.singular(word),
                fresh.singular(word),
                "singular({})",
                word
            );
        }
        for phrase in ["European", "apple", "umbrella", "honest cat"] {
            assert_eq!(inflector.an(phrase), fresh.an(phrase), "an({})", phrase);
        }
    }

    #[test]
    fn article_overrides() {
        let inflector = Inflector::new();
        inflector.def_an("European");
        assert_eq!(inflector.an("European union"), "an European union");
        assert_eq!(inflector.an("EUROPEAN"), "an EUROPEAN");
        inflector.def_a("european");
        assert_eq!(inflector.an("European"), "a European");
        assert!(inflector.undef_a("EUROPEAN"));
        assert!(!inflector.undef_a("European"));

        inflector.def_an_pattern("u.*").unwrap();
        assert_eq!(inflector.an("unicorn"), "an unicorn");
        inflector.def_a_pattern("un.*").unwrap();
        assert_eq!(inflector.an("unicorn"), "a unicorn");
        assert_eq!(inflector.an("Uber"), "an Uber");
        inflector.def_an("unicorn");
        assert_eq!(inflector.an("unicorn"), "an unicorn");

        assert!(inflector.undef_an_pattern("u.*"));
        assert!(!inflector.undef_an_pattern("u.*"));
        assert!(inflector.undef_a_pattern("un.*"));
        assert_eq!(inflector.an("Uber"), "a Uber");
    }

    #[test]
    fn invalid_pattern_registers_nothing() {
        let inflector = Inflector::new();
        match inflector.def_an_pattern("x(") {
            Err(Error::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "x("),
            Ok(()) => panic!("x( should not compile"),
        }
        assert!(!inflector.undef_an_pattern("x("));
        assert_eq!(inflector.an("xylophone"), "a xylophone");
    }

    #[test]
    fn article_edge_cases() {
        let inflector = Inflector::new();
        assert_eq!(inflector.an(""), "");
        assert_eq!(inflector.an("  "), "  ");
        assert_eq!(inflector.an("  apple pie"), "an apple pie");
        assert_eq!(inflector.a("hour"), "an hour");
        assert_eq!(inflector.article("cat"), Some(Article::A));
        assert_eq!(inflector.article(""), None);
    }

    #[test]
    fn classical_flags() {
        let inflector = Inflector::new();
        assert_eq!(inflector.classical_flags(), ClassicalFlags::default());

        inflector.classical_all(true);
        inflector.classical_persons(false);
        assert_eq!(inflector.plural("person"), "people");
        assert_eq!(inflector.plural("formula"), "formulae");
        assert!(inflector.is_classical_all());
        assert!(inflector.is_classical_ancient());
        assert!(!inflector.is_classical_persons());
        assert!(inflector.is_classical_names());
        assert!(inflector.is_classical_herd());
        assert!(inflector.is_classical_zero());

        inflector.classical(false);
        assert_eq!(inflector.classical_flags(), ClassicalFlags::default());
        inflector.classical_names(true);
        inflector.classical_herd(true);
        assert!(!inflector.is_classical_all());
        assert!(inflector.is_classical_names());
        assert_eq!(inflector.plural("Jones"), "Jones");
        assert_eq!(inflector.plural("bison"), "bison");
        assert_eq!(inflector.plural("formula"), "formulas");
    }

    #[test]
    fn independent_instances() {
        let modern = Inflector::new();
        let classical = Inflector::with_flags(ClassicalFlags::uniform(true));
        classical.def_noun("cat", "kitties");
        assert_eq!(modern.plural("formula"), "formulas");
        assert_eq!(classical.plural("formula"), "formulae");
        assert_eq!(modern.plural("cat"), "cats");
        assert_eq!(classical.plural("cat"), "kitties");
        assert!(classical.is_classical_all());
    }

    #[test]
    fn shared_between_threads() {
        let inflector = Inflector::new();
        std::thread::scope(|s| {
            for i in 0..4 {
                let inflector = &inflector;
                s.spawn(move || {
                    for _ in 0..100 {
                        if i % 2 == 0 {
                            inflector.def_noun("cat", "kitties");
                            inflector.def_noun_reset();
                        } else {
                            let plural = inflector.plural("cat");
                            assert!(plural == "cats" || plural == "kitties", "{}", plural);
                        }
                    }
                });
            }
        });
        assert_eq!(inflector.plural("cat"), "cats");
    }
}

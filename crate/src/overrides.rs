//! User-defined rules that take precedence over the built-in data.
use crate::{
    error::{Error, Result},
    indefinite::Article,
};
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;

/// Caller-defined noun plurals. Singulars are stored lower case so lookups
/// are case-insensitive, while plurals are stored exactly as given.
#[derive(Debug, Default)]
pub(crate) struct NounOverrides {
    plural_of: HashMap<String, String>,
    // The inverse of `plural_of`, keyed by the lower case plural. When two
    // singulars share a plural, the most recent definition wins.
    singular_of: HashMap<String, String>,
}

impl NounOverrides {
    pub(crate) fn define(&mut self, singular: &str, plural: &str) {
        let key = singular.to_lowercase();
        if let Some(old) = self.plural_of.insert(key.clone(), plural.to_string()) {
            self.forget_inverse(&key, &old);
        }
        if !plural.is_empty() {
            self.singular_of.insert(plural.to_lowercase(), key);
        }
    }

    /// Returns true if there was a definition to remove.
    pub(crate) fn undefine(&mut self, singular: &str) -> bool {
        let key = singular.to_lowercase();
        match self.plural_of.remove(&key) {
            Some(old) => {
                self.forget_inverse(&key, &old);
                true
            }
            None => false,
        }
    }

    // Only drops the inverse entry if it still points back at `key`. A later
    // definition may have claimed the same plural for another singular.
    fn forget_inverse(&mut self, key: &str, plural: &str) {
        let plural = plural.to_lowercase();
        let points_here = self
            .singular_of
            .get(&plural)
            .map(|s| s == key)
            .unwrap_or(false);
        if points_here {
            self.singular_of.remove(&plural);
        }
    }

    pub(crate) fn reset(&mut self) {
        self.plural_of.clear();
        self.singular_of.clear();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.plural_of.is_empty()
    }

    pub(crate) fn plural_of(&self, lower: &str) -> Option<&str> {
        self.plural_of.get(lower).map(String::as_str)
    }

    pub(crate) fn singular_of(&self, lower: &str) -> Option<&str> {
        self.singular_of.get(lower).map(String::as_str)
    }
}

#[derive(Debug)]
struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    fn new(source: &str) -> Result<Self> {
        let invalid = |e| Error::InvalidPattern {
            pattern: source.to_string(),
            source: e,
        };
        // Compiling the source on its own first means an unbalanced group
        // can't be closed off by the anchoring wrapper below.
        Regex::new(source).map_err(invalid)?;
        let regex = RegexBuilder::new(&format!(r"\A(?:{})\z", source))
            .case_insensitive(true)
            .build()
            .map_err(invalid)?;
        Ok(Pattern {
            source: source.to_string(),
            regex,
        })
    }
}

/// Caller-defined articles, for single words and for words matching a
/// pattern.
#[derive(Debug, Default)]
pub(crate) struct ArticleOverrides {
    words: HashMap<String, Article>,
    a_patterns: Vec<Pattern>,
    an_patterns: Vec<Pattern>,
}

impl ArticleOverrides {
    pub(crate) fn define_word(&mut self, word: &str, article: Article) {
        self.words.insert(word.to_lowercase(), article);
    }

    pub(crate) fn undefine_word(&mut self, word: &str) -> bool {
        self.words.remove(&word.to_lowercase()).is_some()
    }

    /// Compiles and registers `source`. Nothing is registered if the pattern
    /// does not compile.
    pub(crate) fn define_pattern(&mut self, source: &str, article: Article) -> Result<()> {
        let pattern = Pattern::new(source)?;
        self.patterns_mut(article).push(pattern);
        Ok(())
    }

    /// Removes the first pattern registered with exactly this source text.
    pub(crate) fn undefine_pattern(&mut self, source: &str, article: Article) -> bool {
        let patterns = self.patterns_mut(article);
        match patterns.iter().position(|p| p.source == source) {
            Some(idx) => {
                patterns.remove(idx);
                true
            }
            None => false,
        }
    }

    fn patterns_mut(&mut self, article: Article) -> &mut Vec<Pattern> {
        match article {
            Article::A => &mut self.a_patterns,
            Article::An => &mut self.an_patterns,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.words.clear();
        self.a_patterns.clear();
        self.an_patterns.clear();
    }

    /// Looks up the article for a lower case word. Exact words beat
    /// patterns, and "a" patterns beat "an" patterns.
    pub(crate) fn article_for(&self, lower: &str) -> Option<Article> {
        if let Some(article) = self.words.get(lower) {
            return Some(*article);
        }
        if self.a_patterns.iter().any(|p| p.regex.is_match(lower)) {
            return Some(Article::A);
        }
        if self.an_patterns.iter().any(|p| p.regex.is_match(lower)) {
            return Some(Article::An);
        }
        None
    }
}

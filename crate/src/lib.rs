// #![deny(missing_docs)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Pluralize and singularize English nouns, pick "a" or "an" for a phrase,
//! and work out how two forms of a word relate to each other.
//!
//! ```
//! use en_inflect::Comparison;
//!
//! assert_eq!(en_inflect::plural("child"), "children");
//! assert_eq!(en_inflect::plural("Box"), "Boxes");
//! assert_eq!(en_inflect::singular("cacti"), "cactus");
//! assert_eq!(en_inflect::an("honest cat"), "an honest cat");
//! assert_eq!(en_inflect::an("European"), "a European");
//! assert_eq!(
//!     en_inflect::compare("indexes", "indices"),
//!     Comparison::PluralToPlural,
//! );
//! ```
//!
//! # How Words Are Inflected
//!
//! Every word is checked against, in order:
//!
//! 1. plurals and articles you defined yourself,
//! 2. a built-in table of irregular nouns ("mouse" => "mice"),
//! 3. nouns that don't change in the plural ("sheep", "series", "Chinese"),
//! 4. a list of suffix rules ("box" => "boxes", "city" => "cities", "knife"
//!    => "knives").
//!
//! The result always has the same case as the word that went in. An upper
//! case word gives an upper case result, a capitalized word gives a
//! capitalized result, and for anything else the result is left as it was
//! computed.
//!
//! # Classical Plurals
//!
//! By default you get modern plurals: "formulas", "people", "bisons". The
//! classical flags switch on older forms, one family at a time. See
//! [ClassicalFlags] for the list.
//!
//! # Global and Local Settings
//!
//! The free functions in this module all use one process-wide [Inflector].
//! Anything you define or switch on through them is seen by the whole
//! program. If you need settings of your own, create an [Inflector] and call
//! its methods instead.
//!
//! # Logging
//!
//! This crate emits [tracing](https://docs.rs/tracing) events. Definitions
//! and flag changes are logged at debug level, and the rule that produced
//! each result is logged at trace level. Nothing is logged unless your
//! program installs a subscriber.

mod classical;
mod compare;
mod error;
mod indefinite;
mod inflector;
mod noun;
mod overrides;
mod suffix;
mod tables;
mod util;

pub use crate::{
    classical::ClassicalFlags,
    compare::Comparison,
    error::{Error, Result},
    indefinite::{article_for_word, Article},
    inflector::Inflector,
};
use std::borrow::Cow;

/// Returns the plural of `word`. See [Inflector::plural].
pub fn plural(word: &str) -> Cow<'_, str> {
    Inflector::global().plural(word)
}

/// Returns the form of `word` that goes with `count`. See
/// [Inflector::plural_count].
pub fn plural_count(word: &str, count: i64) -> Cow<'_, str> {
    Inflector::global().plural_count(word, count)
}

/// Returns the singular of `word`. See [Inflector::singular].
pub fn singular(word: &str) -> Cow<'_, str> {
    Inflector::global().singular(word)
}

/// Prefixes `phrase` with "a" or "an". See [Inflector::an].
pub fn an(phrase: &str) -> String {
    Inflector::global().an(phrase)
}

/// The same as [an].
pub fn a(phrase: &str) -> String {
    Inflector::global().a(phrase)
}

/// Returns the article for the first word of `phrase`. See
/// [Inflector::article].
pub fn article(phrase: &str) -> Option<Article> {
    Inflector::global().article(phrase)
}

/// Works out how `word1` relates to `word2`. See [Inflector::compare].
pub fn compare(word1: &str, word2: &str) -> Comparison {
    Inflector::global().compare(word1, word2)
}

/// Defines the plural of a noun. See [Inflector::def_noun].
pub fn def_noun(singular: &str, plural: &str) {
    Inflector::global().def_noun(singular, plural)
}

/// Removes a noun definition. See [Inflector::undef_noun].
pub fn undef_noun(singular: &str) -> bool {
    Inflector::global().undef_noun(singular)
}

/// Removes all noun definitions. See [Inflector::def_noun_reset].
pub fn def_noun_reset() {
    Inflector::global().def_noun_reset()
}

/// Makes `word` take "a". See [Inflector::def_a].
pub fn def_a(word: &str) {
    Inflector::global().def_a(word)
}

/// Makes `word` take "an". See [Inflector::def_an].
pub fn def_an(word: &str) {
    Inflector::global().def_an(word)
}

/// Removes an article definition for a word. See [Inflector::undef_a].
pub fn undef_a(word: &str) -> bool {
    Inflector::global().undef_a(word)
}

/// Makes words matching `pattern` take "a". See [Inflector::def_a_pattern].
///
/// # Errors
///
/// Returns [Error::InvalidPattern] if the pattern does not compile.
pub fn def_a_pattern(pattern: &str) -> Result<()> {
    Inflector::global().def_a_pattern(pattern)
}

/// Makes words matching `pattern` take "an". See
/// [Inflector::def_an_pattern].
///
/// # Errors
///
/// Returns [Error::InvalidPattern] if the pattern does not compile.
pub fn def_an_pattern(pattern: &str) -> Result<()> {
    Inflector::global().def_an_pattern(pattern)
}

/// Removes an "a" pattern. See [Inflector::undef_a_pattern].
pub fn undef_a_pattern(pattern: &str) -> bool {
    Inflector::global().undef_a_pattern(pattern)
}

/// Removes an "an" pattern. See [Inflector::undef_an_pattern].
pub fn undef_an_pattern(pattern: &str) -> bool {
    Inflector::global().undef_an_pattern(pattern)
}

/// Removes all article definitions. See [Inflector::def_a_reset].
pub fn def_a_reset() {
    Inflector::global().def_a_reset()
}

/// Sets every classical flag. See [Inflector::classical_all].
pub fn classical_all(on: bool) {
    Inflector::global().classical_all(on)
}

/// The same as [classical_all].
pub fn classical(on: bool) {
    Inflector::global().classical(on)
}

/// See [Inflector::classical_ancient].
pub fn classical_ancient(on: bool) {
    Inflector::global().classical_ancient(on)
}

/// See [Inflector::classical_persons].
pub fn classical_persons(on: bool) {
    Inflector::global().classical_persons(on)
}

/// See [Inflector::classical_names].
pub fn classical_names(on: bool) {
    Inflector::global().classical_names(on)
}

/// See [Inflector::classical_herd].
pub fn classical_herd(on: bool) {
    Inflector::global().classical_herd(on)
}

/// See [Inflector::classical_zero].
pub fn classical_zero(on: bool) {
    Inflector::global().classical_zero(on)
}

/// See [Inflector::is_classical_all].
pub fn is_classical_all() -> bool {
    Inflector::global().is_classical_all()
}

/// See [Inflector::is_classical_ancient].
pub fn is_classical_ancient() -> bool {
    Inflector::global().is_classical_ancient()
}

/// See [Inflector::is_classical_persons].
pub fn is_classical_persons() -> bool {
    Inflector::global().is_classical_persons()
}

/// See [Inflector::is_classical_names].
pub fn is_classical_names() -> bool {
    Inflector::global().is_classical_names()
}

/// See [Inflector::is_classical_herd].
pub fn is_classical_herd() -> bool {
    Inflector::global().is_classical_herd()
}

/// See [Inflector::is_classical_zero].
pub fn is_classical_zero() -> bool {
    Inflector::global().is_classical_zero()
}

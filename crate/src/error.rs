//! The error type returned when registering article patterns.

use thiserror::Error;

/// A specialized [Result](std::result::Result) for operations that can fail.
pub type Result<T> = std::result::Result<T, Error>;

/// The only thing that can go wrong is handing
/// [`Inflector::def_a_pattern`](crate::Inflector::def_a_pattern) or
/// [`Inflector::def_an_pattern`](crate::Inflector::def_an_pattern) a pattern
/// that does not compile. When that happens nothing is registered.
#[derive(Debug, Error)]
pub enum Error {
    #[error("`{pattern}` is not a valid pattern: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

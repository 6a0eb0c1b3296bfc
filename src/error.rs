use std::fmt;
use thiserror::Error;

/// Which evaluation outcome a builder option applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    True,
    False,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::True => write!(f, "true"),
            Polarity::False => write!(f, "false"),
        }
    }
}

/// Configuration errors raised while building a proposition.
///
/// These are construction-time errors only. Evaluation itself never returns
/// a `DictumError`: failures inside caller-supplied predicate or producer
/// closures propagate to the caller of `is_satisfied_by` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictumError {
    /// A polarity has no statement and no assertion source to fall back on.
    #[error("no assertion source for the {polarity} outcome; set a statement or a when-{polarity} source")]
    MissingAssertions { polarity: Polarity },

    /// More than one assertion source was configured for the same polarity.
    #[error("conflicting assertion sources for the {polarity} outcome; exactly one may be active")]
    ConflictingAssertions { polarity: Polarity },

    /// More than one metadata source was configured for the same polarity.
    #[error("conflicting metadata sources for the {polarity} outcome; exactly one may be active")]
    ConflictingMetadata { polarity: Polarity },

    /// An exactly-N quantifier was declared with a count of zero.
    #[error("exactly-satisfied quantifier requires a count of at least one")]
    EmptyQuantifier,
}

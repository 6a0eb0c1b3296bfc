//! # Dictum
//!
//! **Boolean propositions that explain themselves**
//!
//! Dictum lets you build named, typed boolean propositions over a model
//! value, compose them with logical operators, and evaluate them to get
//! more than true/false: every evaluation produces a judgement tree that
//! knows which sub-propositions caused the outcome and can render a
//! one-line reason, a multi-line justification, and a statement.
//!
//! ## Quick Start
//!
//! ```rust
//! use dictum::leaf;
//!
//! let even = leaf("even", |n: &i32| n % 2 == 0);
//! let small = leaf("small", |n: &i32| n.abs() < 10);
//! let nice = even & small;
//!
//! let judgement = nice.is_satisfied_by(&4);
//! assert!(judgement.satisfied());
//! assert_eq!(judgement.reason(), "even & small");
//!
//! let judgement = nice.is_satisfied_by(&12);
//! assert_eq!(judgement.reason(), "even & !small");
//! ```
//!
//! ## Core Concepts
//!
//! ### Propositions
//! A proposition is a reusable boolean rule over a model type. Leaves wrap
//! a predicate plus assertion text per outcome; composites combine other
//! propositions with `and`, `or`, `xor`, `negate` and the short-circuiting
//! `and_also` / `or_else`.
//!
//! ### Judgements
//! Evaluating a proposition yields an immutable judgement tree. Each node
//! records its outcome, the assertions and metadata it carries, and the
//! causal subset of its children. Re-evaluation builds a fresh tree; the
//! proposition is never mutated.
//!
//! ### Quantifiers
//! `all_satisfied`, `any_satisfied`, `none_satisfied` and `n_satisfied`
//! apply a proposition across a sequence of models and judge the group,
//! with callbacks over an [`Evaluation`] summary.

pub mod error;
pub mod judgement;
pub mod proposition;
pub mod quantifier;

mod render;

pub use error::{DictumError, Polarity};
pub use judgement::{Judgement, Operator};
pub use proposition::{leaf, LeafBuilder, Proposition, WrapBuilder};
pub use quantifier::{
    all_satisfied, any_satisfied, n_satisfied, none_satisfied, Evaluation, QuantifierBuilder,
};

/// Result type for dictum construction-time operations
pub type DictumResult<T> = Result<T, DictumError>;

#[cfg(test)]
mod tests;

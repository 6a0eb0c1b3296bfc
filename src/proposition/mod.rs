//! Composable propositions and the binary operator engine.
//!
//! A [`Proposition`] is an immutable tree of leaves and logical
//! connectives. Evaluating it against a model produces a fresh
//! [`Judgement`] tree; the proposition itself is never mutated, so one
//! proposition can be evaluated against any number of models.

pub mod leaf;
pub mod wrap;

pub use leaf::{leaf, LeafBuilder};
pub use wrap::WrapBuilder;

use crate::judgement::{Judgement, Operator};
use leaf::Leaf;
use std::fmt;
use std::rc::Rc;
use wrap::Wrap;

/// A named, typed boolean proposition over a model of type `T`, carrying
/// metadata of type `M` (assertion strings by default).
pub struct Proposition<T, M = String> {
    pub(crate) kind: Kind<T, M>,
}

pub(crate) enum Kind<T, M> {
    Leaf(Leaf<T, M>),
    /// An externally supplied evaluation function. This is the seam the
    /// fluent builder layer and the quantifier engine plug into.
    Adapter(Rc<dyn Fn(&T) -> Judgement<M>>),
    Not(Box<Proposition<T, M>>),
    And(Box<Proposition<T, M>>, Box<Proposition<T, M>>),
    Or(Box<Proposition<T, M>>, Box<Proposition<T, M>>),
    Xor(Box<Proposition<T, M>>, Box<Proposition<T, M>>),
    AndAlso(Box<Proposition<T, M>>, Box<Proposition<T, M>>),
    OrElse {
        left: Box<Proposition<T, M>>,
        right: Box<Proposition<T, M>>,
        state: ElseState,
    },
    Wrap(Wrap<T, M>),
}

/// Rendering state of an or-else node under negation.
///
/// The cycle is OR-ELSE -> NOR -> OR -> NOR -> ... Applied negations are
/// tracked here by parity instead of nesting NOT wrappers; only the label
/// and the polarity change, the short-circuiting evaluation does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElseState {
    OrElse,
    Nor,
    Or,
}

impl ElseState {
    pub(crate) fn negated(self) -> Self {
        match self {
            ElseState::OrElse | ElseState::Or => ElseState::Nor,
            ElseState::Nor => ElseState::Or,
        }
    }

    fn operator(self) -> Operator {
        match self {
            ElseState::OrElse => Operator::OrElse,
            ElseState::Nor => Operator::Nor,
            ElseState::Or => Operator::Or,
        }
    }

    fn inverts(self) -> bool {
        matches!(self, ElseState::Nor)
    }
}

impl<T, M> Proposition<T, M> {
    pub(crate) fn from_kind(kind: Kind<T, M>) -> Self {
        Self { kind }
    }

    /// Wrap an external evaluation function as a proposition node.
    ///
    /// The function receives the model and must return a fully built
    /// judgement; [`Judgement::leaf`] covers the common case.
    pub fn from_fn(eval: impl Fn(&T) -> Judgement<M> + 'static) -> Self {
        Self {
            kind: Kind::Adapter(Rc::new(eval)),
        }
    }

    /// The declared name of this node, if any.
    pub fn statement(&self) -> Option<&str> {
        match &self.kind {
            Kind::Leaf(leaf) => leaf.statement.as_deref(),
            Kind::Wrap(wrap) => wrap.statement.as_deref(),
            _ => None,
        }
    }

    /// Logical AND: both operands are evaluated and both are always causal.
    pub fn and(self, other: Self) -> Self {
        Self::from_kind(Kind::And(Box::new(self), Box::new(other)))
    }

    /// Inclusive OR: both operands are evaluated eagerly. The true operands
    /// are causal when any is true; both are causal when both are false.
    pub fn or(self, other: Self) -> Self {
        Self::from_kind(Kind::Or(Box::new(self), Box::new(other)))
    }

    /// Exclusive OR. Every xor is a fresh pairwise node: chains keep their
    /// construction grouping because regrouping changes causal meaning.
    pub fn xor(self, other: Self) -> Self {
        Self::from_kind(Kind::Xor(Box::new(self), Box::new(other)))
    }

    /// Short-circuit AND. When the left operand is false the right operand
    /// is never evaluated and the left alone is causal.
    pub fn and_also(self, other: Self) -> Self {
        Self::from_kind(Kind::AndAlso(Box::new(self), Box::new(other)))
    }

    /// Short-circuit OR. When the left operand is true the right operand is
    /// never evaluated and the left alone is causal.
    pub fn or_else(self, other: Self) -> Self {
        Self::from_kind(Kind::OrElse {
            left: Box::new(self),
            right: Box::new(other),
            state: ElseState::OrElse,
        })
    }

    /// Logical negation. Involutive: negating a negation returns the
    /// original operand. Negating an or-else node steps its rendering
    /// state (OR-ELSE -> NOR -> OR -> NOR) rather than wrapping it.
    pub fn negate(self) -> Self {
        match self.kind {
            Kind::Not(inner) => *inner,
            Kind::OrElse { left, right, state } => Self::from_kind(Kind::OrElse {
                left,
                right,
                state: state.negated(),
            }),
            kind => Self::from_kind(Kind::Not(Box::new(Self { kind }))),
        }
    }
}

impl<T, M: Clone> Proposition<T, M> {
    /// Evaluate against a model, producing a fresh judgement tree.
    ///
    /// Left operands are always evaluated first. Failures inside caller
    /// closures propagate untouched; no partially built judgement is ever
    /// observable.
    pub fn is_satisfied_by(&self, model: &T) -> Judgement<M> {
        match &self.kind {
            Kind::Leaf(leaf) => leaf.evaluate(model),
            Kind::Adapter(eval) => eval(model),
            Kind::Not(inner) => {
                let cause = inner.is_satisfied_by(model);
                Judgement::node(!cause.satisfied(), Operator::Not, vec![cause])
            }
            Kind::And(left, right) => {
                let lhs = left.is_satisfied_by(model);
                let rhs = right.is_satisfied_by(model);
                let satisfied = lhs.satisfied() && rhs.satisfied();
                Judgement::node(satisfied, Operator::And, vec![lhs, rhs])
            }
            Kind::Or(left, right) => {
                let lhs = left.is_satisfied_by(model);
                let rhs = right.is_satisfied_by(model);
                let satisfied = lhs.satisfied() || rhs.satisfied();
                let causes = if satisfied {
                    [lhs, rhs].into_iter().filter(Judgement::satisfied).collect()
                } else {
                    vec![lhs, rhs]
                };
                Judgement::node(satisfied, Operator::Or, causes)
            }
            Kind::Xor(left, right) => {
                let lhs = left.is_satisfied_by(model);
                let rhs = right.is_satisfied_by(model);
                let satisfied = lhs.satisfied() != rhs.satisfied();
                Judgement::node(satisfied, Operator::Xor, vec![lhs, rhs])
            }
            Kind::AndAlso(left, right) => {
                let lhs = left.is_satisfied_by(model);
                if !lhs.satisfied() {
                    return Judgement::node(false, Operator::AndAlso, vec![lhs]);
                }
                let rhs = right.is_satisfied_by(model);
                let satisfied = rhs.satisfied();
                Judgement::node(satisfied, Operator::AndAlso, vec![lhs, rhs])
            }
            Kind::OrElse { left, right, state } => {
                let lhs = left.is_satisfied_by(model);
                let (base, causes) = if lhs.satisfied() {
                    (true, vec![lhs])
                } else {
                    let rhs = right.is_satisfied_by(model);
                    (rhs.satisfied(), vec![lhs, rhs])
                };
                let satisfied = if state.inverts() { !base } else { base };
                Judgement::node(satisfied, state.operator(), causes)
            }
            Kind::Wrap(wrap) => wrap.evaluate(model),
        }
    }
}

impl<T: 'static, M: Clone + 'static> Proposition<T, M> {
    /// Convert into the common assertion-string metadata domain.
    ///
    /// Operands with different metadata types cannot be merged structurally;
    /// converting each side first lets them compose, with every introducing
    /// tier contributing its assertions as metadata.
    pub fn explain(self) -> Proposition<T, String> {
        Proposition::from_fn(move |model: &T| self.is_satisfied_by(model).into_explanation())
    }
}

impl<T, M: Clone> Clone for Proposition<T, M> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
        }
    }
}

impl<T, M: Clone> Clone for Kind<T, M> {
    fn clone(&self) -> Self {
        match self {
            Kind::Leaf(leaf) => Kind::Leaf(leaf.clone()),
            Kind::Adapter(eval) => Kind::Adapter(Rc::clone(eval)),
            Kind::Not(inner) => Kind::Not(inner.clone()),
            Kind::And(l, r) => Kind::And(l.clone(), r.clone()),
            Kind::Or(l, r) => Kind::Or(l.clone(), r.clone()),
            Kind::Xor(l, r) => Kind::Xor(l.clone(), r.clone()),
            Kind::AndAlso(l, r) => Kind::AndAlso(l.clone(), r.clone()),
            Kind::OrElse { left, right, state } => Kind::OrElse {
                left: left.clone(),
                right: right.clone(),
                state: *state,
            },
            Kind::Wrap(wrap) => Kind::Wrap(wrap.clone()),
        }
    }
}

impl<T, M> fmt::Debug for Proposition<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            Kind::Leaf(_) => "leaf",
            Kind::Adapter(_) => "adapter",
            Kind::Not(_) => "not",
            Kind::And(_, _) => "and",
            Kind::Or(_, _) => "or",
            Kind::Xor(_, _) => "xor",
            Kind::AndAlso(_, _) => "and_also",
            Kind::OrElse { state, .. } => match state {
                ElseState::OrElse => "or_else",
                ElseState::Nor => "nor",
                ElseState::Or => "or",
            },
            Kind::Wrap(_) => "wrap",
        };
        f.debug_struct("Proposition")
            .field("kind", &kind)
            .field("statement", &self.statement())
            .finish()
    }
}

impl<T, M> std::ops::BitAnd for Proposition<T, M> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl<T, M> std::ops::BitOr for Proposition<T, M> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl<T, M> std::ops::BitXor for Proposition<T, M> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.xor(rhs)
    }
}

impl<T, M> std::ops::Not for Proposition<T, M> {
    type Output = Self;

    fn not(self) -> Self {
        self.negate()
    }
}

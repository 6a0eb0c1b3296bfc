//! Higher-order quantifiers: evaluate one proposition across a sequence of
//! models and judge the group.
//!
//! Causal attribution follows the quantifier tables: all-satisfied cites
//! the false children when any child is false; the other quantifiers cite
//! the true children whenever at least one child is true. Only when the
//! relevant subset is empty does the full child set explain the outcome.

mod evaluation;

pub use evaluation::Evaluation;

use crate::error::{DictumError, Polarity};
use crate::judgement::{push_unique, Judgement, Operator};
use crate::proposition::Proposition;
use crate::DictumResult;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuantifierKind {
    All,
    Any,
    None,
    Exactly(usize),
}

impl QuantifierKind {
    fn operator(self) -> Operator {
        match self {
            QuantifierKind::All => Operator::AllSatisfied,
            QuantifierKind::Any => Operator::AnySatisfied,
            QuantifierKind::None => Operator::NoneSatisfied,
            QuantifierKind::Exactly(n) => Operator::NSatisfied(n),
        }
    }
}

/// Every model must satisfy the underlying proposition.
pub fn all_satisfied<T, M>(underlying: Proposition<T, M>) -> QuantifierBuilder<T, M> {
    QuantifierBuilder::new(QuantifierKind::All, underlying)
}

/// At least one model must satisfy the underlying proposition.
pub fn any_satisfied<T, M>(underlying: Proposition<T, M>) -> QuantifierBuilder<T, M> {
    QuantifierBuilder::new(QuantifierKind::Any, underlying)
}

/// No model may satisfy the underlying proposition.
pub fn none_satisfied<T, M>(underlying: Proposition<T, M>) -> QuantifierBuilder<T, M> {
    QuantifierBuilder::new(QuantifierKind::None, underlying)
}

/// Exactly `n` models must satisfy the underlying proposition. A count of
/// zero is rejected when the builder is built.
pub fn n_satisfied<T, M>(n: usize, underlying: Proposition<T, M>) -> QuantifierBuilder<T, M> {
    QuantifierBuilder::new(QuantifierKind::Exactly(n), underlying)
}

type AssertionFn<T, M> = Rc<dyn for<'e> Fn(&Evaluation<'e, T, M>) -> String>;
type AssertionsFn<T, M> = Rc<dyn for<'e> Fn(&Evaluation<'e, T, M>) -> Vec<String>>;
type MetadataFn<T, M> = Rc<dyn for<'e> Fn(&Evaluation<'e, T, M>) -> M>;
type MetadataManyFn<T, M> = Rc<dyn for<'e> Fn(&Evaluation<'e, T, M>) -> Vec<M>>;

enum OutcomeAssertions<T, M> {
    Text(String),
    Compute(AssertionFn<T, M>),
    ComputeMany(AssertionsFn<T, M>),
}

enum OutcomeMetadata<T, M> {
    Value(M),
    Compute(MetadataFn<T, M>),
    ComputeMany(MetadataManyFn<T, M>),
}

impl<T, M> OutcomeAssertions<T, M> {
    fn resolve(&self, evaluation: &Evaluation<'_, T, M>) -> Vec<String> {
        match self {
            OutcomeAssertions::Text(text) => vec![text.clone()],
            OutcomeAssertions::Compute(produce) => vec![produce(evaluation)],
            OutcomeAssertions::ComputeMany(produce) => produce(evaluation),
        }
    }
}

impl<T, M: Clone> OutcomeMetadata<T, M> {
    fn resolve(&self, evaluation: &Evaluation<'_, T, M>) -> Vec<M> {
        match self {
            OutcomeMetadata::Value(value) => vec![value.clone()],
            OutcomeMetadata::Compute(produce) => vec![produce(evaluation)],
            OutcomeMetadata::ComputeMany(produce) => produce(evaluation),
        }
    }
}

/// Builder for quantified propositions.
pub struct QuantifierBuilder<T, M = String> {
    kind: QuantifierKind,
    underlying: Proposition<T, M>,
    statement: Option<String>,
    when_true: Vec<OutcomeAssertions<T, M>>,
    when_false: Vec<OutcomeAssertions<T, M>>,
    metadata_true: Vec<OutcomeMetadata<T, M>>,
    metadata_false: Vec<OutcomeMetadata<T, M>>,
}

impl<T, M> QuantifierBuilder<T, M> {
    fn new(kind: QuantifierKind, underlying: Proposition<T, M>) -> Self {
        Self {
            kind,
            underlying,
            statement: None,
            when_true: Vec::new(),
            when_false: Vec::new(),
            metadata_true: Vec::new(),
            metadata_false: Vec::new(),
        }
    }

    pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
        self.statement = Some(statement.into());
        self
    }

    pub fn when_true(mut self, text: impl Into<String>) -> Self {
        self.when_true.push(OutcomeAssertions::Text(text.into()));
        self
    }

    pub fn when_true_computed(
        mut self,
        produce: impl for<'e> Fn(&Evaluation<'e, T, M>) -> String + 'static,
    ) -> Self {
        self.when_true
            .push(OutcomeAssertions::Compute(Rc::new(produce)));
        self
    }

    pub fn when_true_yields(
        mut self,
        produce: impl for<'e> Fn(&Evaluation<'e, T, M>) -> Vec<String> + 'static,
    ) -> Self {
        self.when_true
            .push(OutcomeAssertions::ComputeMany(Rc::new(produce)));
        self
    }

    pub fn when_false(mut self, text: impl Into<String>) -> Self {
        self.when_false.push(OutcomeAssertions::Text(text.into()));
        self
    }

    pub fn when_false_computed(
        mut self,
        produce: impl for<'e> Fn(&Evaluation<'e, T, M>) -> String + 'static,
    ) -> Self {
        self.when_false
            .push(OutcomeAssertions::Compute(Rc::new(produce)));
        self
    }

    pub fn when_false_yields(
        mut self,
        produce: impl for<'e> Fn(&Evaluation<'e, T, M>) -> Vec<String> + 'static,
    ) -> Self {
        self.when_false
            .push(OutcomeAssertions::ComputeMany(Rc::new(produce)));
        self
    }

    pub fn when_true_metadata(mut self, value: M) -> Self {
        self.metadata_true.push(OutcomeMetadata::Value(value));
        self
    }

    pub fn when_true_metadata_computed(
        mut self,
        produce: impl for<'e> Fn(&Evaluation<'e, T, M>) -> M + 'static,
    ) -> Self {
        self.metadata_true
            .push(OutcomeMetadata::Compute(Rc::new(produce)));
        self
    }

    pub fn when_true_metadata_yields(
        mut self,
        produce: impl for<'e> Fn(&Evaluation<'e, T, M>) -> Vec<M> + 'static,
    ) -> Self {
        self.metadata_true
            .push(OutcomeMetadata::ComputeMany(Rc::new(produce)));
        self
    }

    pub fn when_false_metadata(mut self, value: M) -> Self {
        self.metadata_false.push(OutcomeMetadata::Value(value));
        self
    }

    pub fn when_false_metadata_computed(
        mut self,
        produce: impl for<'e> Fn(&Evaluation<'e, T, M>) -> M + 'static,
    ) -> Self {
        self.metadata_false
            .push(OutcomeMetadata::Compute(Rc::new(produce)));
        self
    }

    pub fn when_false_metadata_yields(
        mut self,
        produce: impl for<'e> Fn(&Evaluation<'e, T, M>) -> Vec<M> + 'static,
    ) -> Self {
        self.metadata_false
            .push(OutcomeMetadata::ComputeMany(Rc::new(produce)));
        self
    }
}

impl<T: 'static, M: Clone + 'static> QuantifierBuilder<T, M> {
    /// Validate the configuration and produce a proposition over model
    /// sequences, composable like any other proposition.
    pub fn build(self) -> DictumResult<Proposition<Vec<T>, M>> {
        if self.kind == QuantifierKind::Exactly(0) {
            return Err(DictumError::EmptyQuantifier);
        }
        let quantifier = Quantifier {
            kind: self.kind,
            underlying: self.underlying,
            statement: self.statement,
            when_true: single(self.when_true, Polarity::True)?,
            when_false: single(self.when_false, Polarity::False)?,
            metadata_true: single_metadata(self.metadata_true, Polarity::True)?,
            metadata_false: single_metadata(self.metadata_false, Polarity::False)?,
        };
        Ok(Proposition::from_fn(move |models: &Vec<T>| {
            quantifier.evaluate(models)
        }))
    }
}

fn single<T, M>(
    mut sources: Vec<OutcomeAssertions<T, M>>,
    polarity: Polarity,
) -> DictumResult<Option<OutcomeAssertions<T, M>>> {
    if sources.len() > 1 {
        return Err(DictumError::ConflictingAssertions { polarity });
    }
    Ok(sources.pop())
}

fn single_metadata<T, M>(
    mut sources: Vec<OutcomeMetadata<T, M>>,
    polarity: Polarity,
) -> DictumResult<Option<OutcomeMetadata<T, M>>> {
    if sources.len() > 1 {
        return Err(DictumError::ConflictingMetadata { polarity });
    }
    Ok(sources.pop())
}

struct Quantifier<T, M> {
    kind: QuantifierKind,
    underlying: Proposition<T, M>,
    statement: Option<String>,
    when_true: Option<OutcomeAssertions<T, M>>,
    when_false: Option<OutcomeAssertions<T, M>>,
    metadata_true: Option<OutcomeMetadata<T, M>>,
    metadata_false: Option<OutcomeMetadata<T, M>>,
}

impl<T, M: Clone> Quantifier<T, M> {
    fn evaluate(&self, models: &[T]) -> Judgement<M> {
        let results: Vec<Judgement<M>> = models
            .iter()
            .map(|model| self.underlying.is_satisfied_by(model))
            .collect();
        let true_count = results.iter().filter(|r| r.satisfied()).count();
        let satisfied = match self.kind {
            QuantifierKind::All => true_count == results.len(),
            QuantifierKind::Any => true_count > 0,
            QuantifierKind::None => true_count == 0,
            QuantifierKind::Exactly(n) => true_count == n,
        };

        let indices_where = |keep: bool| -> Vec<usize> {
            results
                .iter()
                .enumerate()
                .filter(|(_, result)| result.satisfied() == keep)
                .map(|(i, _)| i)
                .collect()
        };
        let causal: Vec<usize> = match self.kind {
            QuantifierKind::All => {
                if true_count < results.len() {
                    indices_where(false)
                } else {
                    (0..results.len()).collect()
                }
            }
            _ => {
                if true_count > 0 {
                    indices_where(true)
                } else {
                    (0..results.len()).collect()
                }
            }
        };

        let evaluation = Evaluation::new(models, &results, &causal);
        let assertion_source = if satisfied {
            &self.when_true
        } else {
            &self.when_false
        };
        let mut own_assertions = Vec::new();
        if let Some(source) = assertion_source {
            for assertion in source.resolve(&evaluation) {
                push_unique(&mut own_assertions, assertion);
            }
        }
        let metadata_source = if satisfied {
            &self.metadata_true
        } else {
            &self.metadata_false
        };
        let (metadata, introduced_metadata) = match metadata_source {
            Some(source) => (source.resolve(&evaluation), true),
            None => (Vec::new(), false),
        };

        let causes = causal.iter().map(|&i| results[i].clone()).collect();
        Judgement {
            satisfied,
            operator: self.kind.operator(),
            statement: self.statement.clone(),
            own_assertions,
            metadata,
            introduced_metadata,
            causes,
        }
    }
}

//! Wrapping layers: rename a proposition or override its assertions and
//! metadata per polarity.
//!
//! A wrap that supplies nothing new is a pure pass-through tier: it forwards
//! its child's assertions and metadata verbatim and is collapsed when
//! metadata tiers are enumerated.

use crate::error::{DictumError, Polarity};
use crate::judgement::{push_unique, Judgement, Operator};
use crate::proposition::{Kind, Proposition};
use crate::DictumResult;
use std::rc::Rc;

impl<T, M> Proposition<T, M> {
    /// Give this proposition a name without overriding anything.
    pub fn with_statement(self, statement: impl Into<String>) -> Self {
        Self::from_kind(Kind::Wrap(Wrap {
            inner: Box::new(self),
            statement: Some(statement.into()),
            when_true: None,
            when_false: None,
            metadata_true: None,
            metadata_false: None,
        }))
    }

    /// Start a wrapping layer that overrides assertions or metadata.
    pub fn wrap(self) -> WrapBuilder<T, M> {
        WrapBuilder {
            inner: self,
            statement: None,
            when_true: Vec::new(),
            when_false: Vec::new(),
            metadata_true: Vec::new(),
            metadata_false: Vec::new(),
        }
    }
}

pub(crate) struct Wrap<T, M> {
    inner: Box<Proposition<T, M>>,
    pub(crate) statement: Option<String>,
    when_true: Option<WrapAssertions<T, M>>,
    when_false: Option<WrapAssertions<T, M>>,
    metadata_true: Option<WrapMetadata<T, M>>,
    metadata_false: Option<WrapMetadata<T, M>>,
}

pub(crate) enum WrapAssertions<T, M> {
    Text(String),
    Compute(Rc<dyn Fn(&T, &Judgement<M>) -> String>),
    ComputeMany(Rc<dyn Fn(&T, &Judgement<M>) -> Vec<String>>),
}

pub(crate) enum WrapMetadata<T, M> {
    Value(M),
    Compute(Rc<dyn Fn(&T, &Judgement<M>) -> M>),
    ComputeMany(Rc<dyn Fn(&T, &Judgement<M>) -> Vec<M>>),
}

impl<T, M> WrapAssertions<T, M> {
    fn resolve(&self, model: &T, cause: &Judgement<M>) -> Vec<String> {
        match self {
            WrapAssertions::Text(text) => vec![text.clone()],
            WrapAssertions::Compute(produce) => vec![produce(model, cause)],
            WrapAssertions::ComputeMany(produce) => produce(model, cause),
        }
    }
}

impl<T, M: Clone> WrapMetadata<T, M> {
    fn resolve(&self, model: &T, cause: &Judgement<M>) -> Vec<M> {
        match self {
            WrapMetadata::Value(value) => vec![value.clone()],
            WrapMetadata::Compute(produce) => vec![produce(model, cause)],
            WrapMetadata::ComputeMany(produce) => produce(model, cause),
        }
    }
}

impl<T, M: Clone> Wrap<T, M> {
    pub(crate) fn evaluate(&self, model: &T) -> Judgement<M> {
        let cause = self.inner.is_satisfied_by(model);
        let satisfied = cause.satisfied();
        let source = if satisfied {
            &self.when_true
        } else {
            &self.when_false
        };
        let mut own_assertions = Vec::new();
        if let Some(source) = source {
            for assertion in source.resolve(model, &cause) {
                push_unique(&mut own_assertions, assertion);
            }
        }
        let metadata_source = if satisfied {
            &self.metadata_true
        } else {
            &self.metadata_false
        };
        let (metadata, introduced_metadata) = match metadata_source {
            Some(source) => (source.resolve(model, &cause), true),
            None => (Vec::new(), false),
        };
        Judgement {
            satisfied,
            operator: Operator::Wrap,
            statement: self.statement.clone(),
            own_assertions,
            metadata,
            introduced_metadata,
            causes: vec![cause],
        }
    }
}

/// Builder for wrapping layers. A polarity with no assertion source simply
/// forwards its child's assertions, so nothing here is mandatory; the only
/// build-time errors are conflicting sources for the same polarity.
pub struct WrapBuilder<T, M = String> {
    inner: Proposition<T, M>,
    statement: Option<String>,
    when_true: Vec<WrapAssertions<T, M>>,
    when_false: Vec<WrapAssertions<T, M>>,
    metadata_true: Vec<WrapMetadata<T, M>>,
    metadata_false: Vec<WrapMetadata<T, M>>,
}

impl<T, M> WrapBuilder<T, M> {
    pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
        self.statement = Some(statement.into());
        self
    }

    pub fn when_true(mut self, text: impl Into<String>) -> Self {
        self.when_true.push(WrapAssertions::Text(text.into()));
        self
    }

    pub fn when_true_computed(
        mut self,
        produce: impl Fn(&T, &Judgement<M>) -> String + 'static,
    ) -> Self {
        self.when_true.push(WrapAssertions::Compute(Rc::new(produce)));
        self
    }

    pub fn when_true_yields(
        mut self,
        produce: impl Fn(&T, &Judgement<M>) -> Vec<String> + 'static,
    ) -> Self {
        self.when_true
            .push(WrapAssertions::ComputeMany(Rc::new(produce)));
        self
    }

    pub fn when_false(mut self, text: impl Into<String>) -> Self {
        self.when_false.push(WrapAssertions::Text(text.into()));
        self
    }

    pub fn when_false_computed(
        mut self,
        produce: impl Fn(&T, &Judgement<M>) -> String + 'static,
    ) -> Self {
        self.when_false
            .push(WrapAssertions::Compute(Rc::new(produce)));
        self
    }

    pub fn when_false_yields(
        mut self,
        produce: impl Fn(&T, &Judgement<M>) -> Vec<String> + 'static,
    ) -> Self {
        self.when_false
            .push(WrapAssertions::ComputeMany(Rc::new(produce)));
        self
    }

    pub fn when_true_metadata(mut self, value: M) -> Self {
        self.metadata_true.push(WrapMetadata::Value(value));
        self
    }

    pub fn when_true_metadata_computed(
        mut self,
        produce: impl Fn(&T, &Judgement<M>) -> M + 'static,
    ) -> Self {
        self.metadata_true.push(WrapMetadata::Compute(Rc::new(produce)));
        self
    }

    pub fn when_true_metadata_yields(
        mut self,
        produce: impl Fn(&T, &Judgement<M>) -> Vec<M> + 'static,
    ) -> Self {
        self.metadata_true
            .push(WrapMetadata::ComputeMany(Rc::new(produce)));
        self
    }

    pub fn when_false_metadata(mut self, value: M) -> Self {
        self.metadata_false.push(WrapMetadata::Value(value));
        self
    }

    pub fn when_false_metadata_computed(
        mut self,
        produce: impl Fn(&T, &Judgement<M>) -> M + 'static,
    ) -> Self {
        self.metadata_false
            .push(WrapMetadata::Compute(Rc::new(produce)));
        self
    }

    pub fn when_false_metadata_yields(
        mut self,
        produce: impl Fn(&T, &Judgement<M>) -> Vec<M> + 'static,
    ) -> Self {
        self.metadata_false
            .push(WrapMetadata::ComputeMany(Rc::new(produce)));
        self
    }

    pub fn build(self) -> DictumResult<Proposition<T, M>> {
        let when_true = single_assertions(self.when_true, Polarity::True)?;
        let when_false = single_assertions(self.when_false, Polarity::False)?;
        let metadata_true = single_metadata(self.metadata_true, Polarity::True)?;
        let metadata_false = single_metadata(self.metadata_false, Polarity::False)?;
        Ok(Proposition::from_kind(Kind::Wrap(Wrap {
            inner: Box::new(self.inner),
            statement: self.statement,
            when_true,
            when_false,
            metadata_true,
            metadata_false,
        })))
    }
}

fn single_assertions<T, M>(
    mut sources: Vec<WrapAssertions<T, M>>,
    polarity: Polarity,
) -> DictumResult<Option<WrapAssertions<T, M>>> {
    if sources.len() > 1 {
        return Err(DictumError::ConflictingAssertions { polarity });
    }
    Ok(sources.pop())
}

fn single_metadata<T, M>(
    mut sources: Vec<WrapMetadata<T, M>>,
    polarity: Polarity,
) -> DictumResult<Option<WrapMetadata<T, M>>> {
    if sources.len() > 1 {
        return Err(DictumError::ConflictingMetadata { polarity });
    }
    Ok(sources.pop())
}

impl<T, M> Clone for WrapAssertions<T, M> {
    fn clone(&self) -> Self {
        match self {
            WrapAssertions::Text(text) => WrapAssertions::Text(text.clone()),
            WrapAssertions::Compute(f) => WrapAssertions::Compute(Rc::clone(f)),
            WrapAssertions::ComputeMany(f) => WrapAssertions::ComputeMany(Rc::clone(f)),
        }
    }
}

impl<T, M: Clone> Clone for WrapMetadata<T, M> {
    fn clone(&self) -> Self {
        match self {
            WrapMetadata::Value(value) => WrapMetadata::Value(value.clone()),
            WrapMetadata::Compute(f) => WrapMetadata::Compute(Rc::clone(f)),
            WrapMetadata::ComputeMany(f) => WrapMetadata::ComputeMany(Rc::clone(f)),
        }
    }
}

impl<T, M: Clone> Clone for Wrap<T, M> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            statement: self.statement.clone(),
            when_true: self.when_true.clone(),
            when_false: self.when_false.clone(),
            metadata_true: self.metadata_true.clone(),
            metadata_false: self.metadata_false.clone(),
        }
    }
}

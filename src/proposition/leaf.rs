//! Leaf propositions: a predicate plus per-polarity assertion and metadata
//! sources.

use crate::error::{DictumError, Polarity};
use crate::judgement::{push_unique, Judgement, Operator};
use crate::proposition::{Kind, Proposition};
use crate::{render, DictumResult};
use std::rc::Rc;

/// Build a named leaf proposition with default assertions.
///
/// When satisfied the assertion is the statement itself; when not, the
/// negation marker form (`!name`). For custom assertion text or metadata,
/// use [`LeafBuilder`].
pub fn leaf<T>(
    statement: impl Into<String>,
    predicate: impl Fn(&T) -> bool + 'static,
) -> Proposition<T, String> {
    let statement = statement.into();
    Proposition::from_kind(Kind::Leaf(Leaf {
        statement: Some(statement.clone()),
        predicate: Rc::new(predicate),
        when_true: AssertionSource::Marker(statement.clone()),
        when_false: AssertionSource::Marker(statement),
        metadata_true: None,
        metadata_false: None,
    }))
}

pub(crate) struct Leaf<T, M> {
    pub(crate) statement: Option<String>,
    predicate: Rc<dyn Fn(&T) -> bool>,
    when_true: AssertionSource<T>,
    when_false: AssertionSource<T>,
    metadata_true: Option<MetadataSource<T, M>>,
    metadata_false: Option<MetadataSource<T, M>>,
}

pub(crate) enum AssertionSource<T> {
    /// Statement fallback: the name when true, `!name` when false.
    Marker(String),
    Text(String),
    Compute(Rc<dyn Fn(&T) -> String>),
    ComputeMany(Rc<dyn Fn(&T) -> Vec<String>>),
}

pub(crate) enum MetadataSource<T, M> {
    Value(M),
    Compute(Rc<dyn Fn(&T) -> M>),
    ComputeMany(Rc<dyn Fn(&T) -> Vec<M>>),
}

impl<T> AssertionSource<T> {
    fn resolve(&self, model: &T, satisfied: bool) -> Vec<String> {
        match self {
            AssertionSource::Marker(name) => {
                if satisfied {
                    vec![name.clone()]
                } else {
                    vec![format!("!{}", render::embed(name))]
                }
            }
            AssertionSource::Text(text) => vec![text.clone()],
            AssertionSource::Compute(produce) => vec![produce(model)],
            AssertionSource::ComputeMany(produce) => produce(model),
        }
    }
}

impl<T, M: Clone> MetadataSource<T, M> {
    fn resolve(&self, model: &T) -> Vec<M> {
        match self {
            MetadataSource::Value(value) => vec![value.clone()],
            MetadataSource::Compute(produce) => vec![produce(model)],
            MetadataSource::ComputeMany(produce) => produce(model),
        }
    }
}

impl<T, M: Clone> Leaf<T, M> {
    pub(crate) fn evaluate(&self, model: &T) -> Judgement<M> {
        let satisfied = (self.predicate)(model);
        let source = if satisfied {
            &self.when_true
        } else {
            &self.when_false
        };
        let mut own_assertions = Vec::new();
        for assertion in source.resolve(model, satisfied) {
            push_unique(&mut own_assertions, assertion);
        }
        let metadata_source = if satisfied {
            &self.metadata_true
        } else {
            &self.metadata_false
        };
        let (metadata, introduced_metadata) = match metadata_source {
            Some(source) => (source.resolve(model), true),
            None => (Vec::new(), false),
        };
        Judgement {
            satisfied,
            operator: Operator::Leaf,
            statement: self.statement.clone(),
            own_assertions,
            metadata,
            introduced_metadata,
            causes: Vec::new(),
        }
    }
}

/// Builder for leaf propositions with explicit per-polarity sources.
///
/// Exactly one assertion source may be active per polarity; the statement
/// acts as the fallback when none is given. Violations are reported by
/// [`build`](LeafBuilder::build) as [`DictumError`]s.
pub struct LeafBuilder<T, M = String> {
    statement: Option<String>,
    predicate: Rc<dyn Fn(&T) -> bool>,
    when_true: Vec<AssertionSource<T>>,
    when_false: Vec<AssertionSource<T>>,
    metadata_true: Vec<MetadataSource<T, M>>,
    metadata_false: Vec<MetadataSource<T, M>>,
}

impl<T, M> LeafBuilder<T, M> {
    pub fn new(predicate: impl Fn(&T) -> bool + 'static) -> Self {
        Self {
            statement: None,
            predicate: Rc::new(predicate),
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
        self.when_true.push(AssertionSource::Text(text.into()));
        self
    }

    pub fn when_true_computed(mut self, produce: impl Fn(&T) -> String + 'static) -> Self {
        self.when_true.push(AssertionSource::Compute(Rc::new(produce)));
        self
    }

    pub fn when_true_yields(mut self, produce: impl Fn(&T) -> Vec<String> + 'static) -> Self {
        self.when_true
            .push(AssertionSource::ComputeMany(Rc::new(produce)));
        self
    }

    pub fn when_false(mut self, text: impl Into<String>) -> Self {
        self.when_false.push(AssertionSource::Text(text.into()));
        self
    }

    pub fn when_false_computed(mut self, produce: impl Fn(&T) -> String + 'static) -> Self {
        self.when_false
            .push(AssertionSource::Compute(Rc::new(produce)));
        self
    }

    pub fn when_false_yields(mut self, produce: impl Fn(&T) -> Vec<String> + 'static) -> Self {
        self.when_false
            .push(AssertionSource::ComputeMany(Rc::new(produce)));
        self
    }

    pub fn when_true_metadata(mut self, value: M) -> Self {
        self.metadata_true.push(MetadataSource::Value(value));
        self
    }

    pub fn when_true_metadata_computed(mut self, produce: impl Fn(&T) -> M + 'static) -> Self {
        self.metadata_true.push(MetadataSource::Compute(Rc::new(produce)));
        self
    }

    pub fn when_true_metadata_yields(mut self, produce: impl Fn(&T) -> Vec<M> + 'static) -> Self {
        self.metadata_true
            .push(MetadataSource::ComputeMany(Rc::new(produce)));
        self
    }

    pub fn when_false_metadata(mut self, value: M) -> Self {
        self.metadata_false.push(MetadataSource::Value(value));
        self
    }

    pub fn when_false_metadata_computed(mut self, produce: impl Fn(&T) -> M + 'static) -> Self {
        self.metadata_false
            .push(MetadataSource::Compute(Rc::new(produce)));
        self
    }

    pub fn when_false_metadata_yields(mut self, produce: impl Fn(&T) -> Vec<M> + 'static) -> Self {
        self.metadata_false
            .push(MetadataSource::ComputeMany(Rc::new(produce)));
        self
    }

    pub fn build(self) -> DictumResult<Proposition<T, M>> {
        let when_true = resolve_assertions(self.when_true, &self.statement, Polarity::True)?;
        let when_false = resolve_assertions(self.when_false, &self.statement, Polarity::False)?;
        let metadata_true = resolve_metadata(self.metadata_true, Polarity::True)?;
        let metadata_false = resolve_metadata(self.metadata_false, Polarity::False)?;
        Ok(Proposition::from_kind(Kind::Leaf(Leaf {
            statement: self.statement,
            predicate: self.predicate,
            when_true,
            when_false,
            metadata_true,
            metadata_false,
        })))
    }
}

fn resolve_assertions<T>(
    mut sources: Vec<AssertionSource<T>>,
    statement: &Option<String>,
    polarity: Polarity,
) -> DictumResult<AssertionSource<T>> {
    if sources.len() > 1 {
        return Err(DictumError::ConflictingAssertions { polarity });
    }
    match sources.pop() {
        Some(source) => Ok(source),
        None => match statement {
            Some(name) => Ok(AssertionSource::Marker(name.clone())),
            None => Err(DictumError::MissingAssertions { polarity }),
        },
    }
}

fn resolve_metadata<T, M>(
    mut sources: Vec<MetadataSource<T, M>>,
    polarity: Polarity,
) -> DictumResult<Option<MetadataSource<T, M>>> {
    if sources.len() > 1 {
        return Err(DictumError::ConflictingMetadata { polarity });
    }
    Ok(sources.pop())
}

impl<T> Clone for AssertionSource<T> {
    fn clone(&self) -> Self {
        match self {
            AssertionSource::Marker(name) => AssertionSource::Marker(name.clone()),
            AssertionSource::Text(text) => AssertionSource::Text(text.clone()),
            AssertionSource::Compute(f) => AssertionSource::Compute(Rc::clone(f)),
            AssertionSource::ComputeMany(f) => AssertionSource::ComputeMany(Rc::clone(f)),
        }
    }
}

impl<T, M: Clone> Clone for MetadataSource<T, M> {
    fn clone(&self) -> Self {
        match self {
            MetadataSource::Value(value) => MetadataSource::Value(value.clone()),
            MetadataSource::Compute(f) => MetadataSource::Compute(Rc::clone(f)),
            MetadataSource::ComputeMany(f) => MetadataSource::ComputeMany(Rc::clone(f)),
        }
    }
}

impl<T, M: Clone> Clone for Leaf<T, M> {
    fn clone(&self) -> Self {
        Self {
            statement: self.statement.clone(),
            predicate: Rc::clone(&self.predicate),
            when_true: self.when_true.clone(),
            when_false: self.when_false.clone(),
            metadata_true: self.metadata_true.clone(),
            metadata_false: self.metadata_false.clone(),
        }
    }
}

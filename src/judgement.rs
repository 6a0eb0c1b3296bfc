//! The evaluated result tree.
//!
//! A [`Judgement`] is produced once per `is_satisfied_by` call and owned by
//! the caller. It records whether the proposition held, which assertions and
//! metadata the outcome carries, and which immediate children causally
//! explain it. The textual renderings (`reason`, `justification`,
//! `statement`) and the propagated views (`assertions`, `metadata`,
//! `root_assertions`, `underlying`) are all computed on demand by walking
//! `causes`; nothing is cached.

use crate::render;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// Tag identifying how a judgement node was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Leaf,
    And,
    Or,
    Xor,
    Not,
    AndAlso,
    OrElse,
    /// A negated or-else node. Rendering state, not a distinct connective:
    /// the underlying evaluation is still short-circuiting or-else.
    Nor,
    AllSatisfied,
    AnySatisfied,
    NoneSatisfied,
    NSatisfied(usize),
    Wrap,
}

impl Operator {
    /// Binary connectives whose same-tag chains render flat.
    pub(crate) fn flattens(self) -> bool {
        matches!(
            self,
            Operator::And | Operator::AndAlso | Operator::Or | Operator::OrElse
        )
    }

    pub(crate) fn is_binary(self) -> bool {
        matches!(
            self,
            Operator::And
                | Operator::Or
                | Operator::Xor
                | Operator::AndAlso
                | Operator::OrElse
                | Operator::Nor
        )
    }

    pub(crate) fn is_quantifier(self) -> bool {
        matches!(
            self,
            Operator::AllSatisfied
                | Operator::AnySatisfied
                | Operator::NoneSatisfied
                | Operator::NSatisfied(_)
        )
    }

    fn type_name(self) -> &'static str {
        match self {
            Operator::Leaf => "leaf",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Xor => "xor",
            Operator::Not => "not",
            Operator::AndAlso => "and_also",
            Operator::OrElse => "or_else",
            Operator::Nor => "nor",
            Operator::AllSatisfied => "all_satisfied",
            Operator::AnySatisfied => "any_satisfied",
            Operator::NoneSatisfied => "none_satisfied",
            Operator::NSatisfied(_) => "n_satisfied",
            Operator::Wrap => "wrap",
        }
    }
}

/// One node of an evaluated result tree.
///
/// Immutable once constructed. `causes` is always a subset of the node's
/// immediate operands; deep explanations are reached by recursing into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Judgement<M> {
    pub(crate) satisfied: bool,
    pub(crate) operator: Operator,
    pub(crate) statement: Option<String>,
    pub(crate) own_assertions: Vec<String>,
    pub(crate) metadata: Vec<M>,
    pub(crate) introduced_metadata: bool,
    pub(crate) causes: Vec<Judgement<M>>,
}

impl<M> Judgement<M> {
    /// Build a leaf judgement directly.
    ///
    /// This is the adapter seam for external builders: anything that can
    /// produce an evaluated boolean plus assertion text can participate in
    /// composition via [`Proposition::from_fn`](crate::Proposition::from_fn).
    pub fn leaf(satisfied: bool, assertions: Vec<String>) -> Self {
        let mut own_assertions = Vec::new();
        for assertion in assertions {
            push_unique(&mut own_assertions, assertion);
        }
        Self {
            satisfied,
            operator: Operator::Leaf,
            statement: None,
            own_assertions,
            metadata: Vec::new(),
            introduced_metadata: false,
            causes: Vec::new(),
        }
    }

    pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
        self.statement = Some(statement.into());
        self
    }

    /// Attach metadata, marking this node as a tier that introduced it.
    pub fn with_metadata(mut self, metadata: Vec<M>) -> Self {
        self.metadata = metadata;
        self.introduced_metadata = true;
        self
    }

    /// Internal constructor for operator nodes: no overrides, everything
    /// forwarded from `causes`.
    pub(crate) fn node(satisfied: bool, operator: Operator, causes: Vec<Judgement<M>>) -> Self {
        Self {
            satisfied,
            operator,
            statement: None,
            own_assertions: Vec::new(),
            metadata: Vec::new(),
            introduced_metadata: false,
            causes,
        }
    }

    pub fn satisfied(&self) -> bool {
        self.satisfied
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The declared name, if one was given at construction.
    pub fn statement_name(&self) -> Option<&str> {
        self.statement.as_deref()
    }

    /// Assertions this node itself contributes; empty for pass-through nodes.
    pub fn own_assertions(&self) -> &[String] {
        &self.own_assertions
    }

    /// Whether this tier introduced new metadata rather than forwarding it.
    pub fn introduced_metadata(&self) -> bool {
        self.introduced_metadata
    }

    /// The causally responsible subset of immediate children.
    pub fn causes(&self) -> &[Judgement<M>] {
        &self.causes
    }

    /// The assertions explaining this node: its own overrides when present,
    /// otherwise the ordered-distinct union of its causes' assertions.
    pub fn assertions(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_assertions(&mut out);
        out
    }

    fn collect_assertions(&self, out: &mut Vec<String>) {
        if self.own_assertions.is_empty() {
            for cause in &self.causes {
                cause.collect_assertions(out);
            }
        } else {
            for assertion in &self.own_assertions {
                push_unique(out, assertion.clone());
            }
        }
    }

    /// The deepest assertions reachable by following `causes` to its end;
    /// the most specific explanation regardless of wrapping layers.
    pub fn root_assertions(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_root_assertions(&mut out);
        out
    }

    fn collect_root_assertions(&self, out: &mut Vec<String>) {
        if self.causes.is_empty() {
            for assertion in self.assertions() {
                push_unique(out, assertion);
            }
        } else {
            for cause in &self.causes {
                cause.collect_root_assertions(out);
            }
        }
    }

    /// The metadata carried for this node's polarity: its own values when it
    /// introduced a tier, otherwise the ordered-distinct union forwarded
    /// from its causes. A layer that merely republishes its child's values
    /// never duplicates them.
    pub fn metadata(&self) -> Vec<&M>
    where
        M: PartialEq,
    {
        let mut out = Vec::new();
        self.collect_metadata(&mut out);
        out
    }

    fn collect_metadata<'a>(&'a self, out: &mut Vec<&'a M>)
    where
        M: PartialEq,
    {
        if self.introduced_metadata {
            for value in &self.metadata {
                if !out.iter().any(|existing| *existing == value) {
                    out.push(value);
                }
            }
        } else {
            for cause in &self.causes {
                cause.collect_metadata(out);
            }
        }
    }

    /// The metadata tiers beneath this node, with pass-through layers
    /// collapsed: only tiers that introduced new metadata appear.
    pub fn underlying(&self) -> Vec<&Judgement<M>> {
        let mut out = Vec::new();
        for cause in &self.causes {
            cause.collect_underlying(&mut out);
        }
        out
    }

    fn collect_underlying<'a>(&'a self, out: &mut Vec<&'a Judgement<M>>) {
        if self.introduced_metadata {
            out.push(self);
        } else {
            for cause in &self.causes {
                cause.collect_underlying(out);
            }
        }
    }

    /// Single-line boolean-expression-style rendering of this judgement.
    pub fn reason(&self) -> String {
        render::reason(self)
    }

    /// Indented multi-line rendering of the causal tree, four spaces per
    /// level.
    pub fn justification(&self) -> String {
        render::justification(self)
    }

    /// The declared name, or the assertion text when no name was given.
    pub fn statement(&self) -> String {
        match &self.statement {
            Some(name) => name.clone(),
            None => self.assertions().join(", "),
        }
    }

    /// Re-key the metadata into the common assertion-string domain: each
    /// tier that introduced metadata contributes its assertion text instead.
    /// This is how operands with different metadata types compose.
    pub fn into_explanation(self) -> Judgement<String> {
        let metadata = if self.introduced_metadata {
            self.assertions()
        } else {
            Vec::new()
        };
        Judgement {
            satisfied: self.satisfied,
            operator: self.operator,
            statement: self.statement,
            own_assertions: self.own_assertions,
            metadata,
            introduced_metadata: self.introduced_metadata,
            causes: self
                .causes
                .into_iter()
                .map(Judgement::into_explanation)
                .collect(),
        }
    }
}

pub(crate) fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

impl<M> fmt::Display for Judgement<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason())
    }
}

// ---------------------------
// Serialize implementations
// ---------------------------

impl Serialize for Operator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Operator::NSatisfied(n) => {
                let mut st = serializer.serialize_struct("operator", 2)?;
                st.serialize_field("type", self.type_name())?;
                st.serialize_field("n", n)?;
                st.end()
            }
            other => {
                let mut st = serializer.serialize_struct("operator", 1)?;
                st.serialize_field("type", other.type_name())?;
                st.end()
            }
        }
    }
}

impl<M> Serialize for Judgement<M>
where
    M: Serialize + PartialEq,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let fields = if self.statement.is_some() { 6 } else { 5 };
        let mut st = serializer.serialize_struct("judgement", fields)?;
        st.serialize_field("satisfied", &self.satisfied)?;
        st.serialize_field("operator", &self.operator)?;
        if let Some(statement) = &self.statement {
            st.serialize_field("statement", statement)?;
        }
        st.serialize_field("assertions", &self.assertions())?;
        st.serialize_field("metadata", &self.metadata())?;
        st.serialize_field("causes", &self.causes)?;
        st.end()
    }
}

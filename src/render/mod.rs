//! Text rendering for judgement trees.
//!
//! Three serializers share the machinery here: the one-line reason, the
//! indented justification tree, and statement embedding. All of them walk
//! `causes` only; they never reach past a node's immediate children.

mod justification;
mod reason;

pub(crate) use justification::justification;
pub(crate) use reason::reason;

use crate::judgement::{Judgement, Operator};

/// Total precedence order: OR-family < AND-family < XOR < atoms.
/// NOT is transparent and takes its operand's effective precedence.
pub(crate) fn precedence(op: Operator) -> u8 {
    match op {
        Operator::Or | Operator::OrElse | Operator::Nor => 1,
        Operator::And | Operator::AndAlso => 2,
        Operator::Xor => 3,
        _ => 4,
    }
}

pub(crate) fn symbol(op: Operator) -> &'static str {
    match op {
        Operator::And => "&",
        Operator::AndAlso => "&&",
        Operator::Or => "|",
        Operator::OrElse | Operator::Nor => "||",
        Operator::Xor => "^",
        _ => "",
    }
}

pub(crate) fn keyword(op: Operator) -> String {
    match op {
        Operator::And | Operator::AndAlso => "AND".to_string(),
        Operator::Or => "OR".to_string(),
        Operator::OrElse => "OR ELSE".to_string(),
        Operator::Nor => "NOR".to_string(),
        Operator::Xor => "XOR".to_string(),
        Operator::AllSatisfied => "ALL SATISFIED".to_string(),
        Operator::AnySatisfied => "ANY SATISFIED".to_string(),
        Operator::NoneSatisfied => "NONE SATISFIED".to_string(),
        Operator::NSatisfied(n) => format!("{} SATISFIED", n),
        Operator::Leaf | Operator::Not | Operator::Wrap => String::new(),
    }
}

/// Parenthesize text for substitution into a larger rendered expression.
///
/// Statement and assertion text that contains whitespace or structural
/// tokens would concatenate ambiguously, so it is bracketed unless it is
/// already fully bracketed. A leading `!` is the renderer's own negation
/// marker and never forces brackets by itself.
pub(crate) fn embed(text: &str) -> String {
    let core = text.strip_prefix('!').unwrap_or(text);
    let structural = |c: char| matches!(c, '&' | '|' | '^' | '!' | '(' | ')');
    let ambiguous = core.chars().any(|c| c.is_whitespace() || structural(c));
    if ambiguous && !fully_bracketed(core) {
        format!("({})", text)
    } else {
        text.to_string()
    }
}

/// True when the text is one balanced parenthesized group.
fn fully_bracketed(text: &str) -> bool {
    if !(text.starts_with('(') && text.ends_with(')')) {
        return false;
    }
    let mut depth: i32 = 0;
    let last = text.len() - 1;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
                if depth == 0 && i < last {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// A node that contributes nothing of its own and should render as its
/// single cause: NOT (its operand carries the polarity already), a renaming
/// wrap without overrides, and a short-circuited binary node.
pub(crate) fn transparent_child<M>(judgement: &Judgement<M>) -> Option<&Judgement<M>> {
    match judgement.operator {
        Operator::Not => judgement.causes.first(),
        Operator::Wrap if judgement.own_assertions.is_empty() => judgement.causes.first(),
        op if op.is_binary() && judgement.causes.len() == 1 => judgement.causes.first(),
        _ => None,
    }
}

/// The causal children of a binary node, with same-tag associative chains
/// spliced flat. Only tags with the flatten flag collapse, and only into an
/// unnamed child built with the identical tag; XOR children always stay
/// grouped pairwise.
pub(crate) fn flatten_children<M>(judgement: &Judgement<M>) -> Vec<&Judgement<M>> {
    let mut out = Vec::new();
    collect(judgement.operator, &judgement.causes, &mut out);
    out
}

fn collect<'a, M>(tag: Operator, causes: &'a [Judgement<M>], out: &mut Vec<&'a Judgement<M>>) {
    for cause in causes {
        let mergeable = tag.flattens()
            && cause.operator == tag
            && cause.own_assertions.is_empty()
            && cause.statement.is_none()
            && cause.causes.len() > 1;
        if mergeable {
            collect(tag, &cause.causes, out);
        } else {
            out.push(cause);
        }
    }
}

//! Indented justification tree rendering.

use super::{flatten_children, keyword, transparent_child};
use crate::judgement::Judgement;

const INDENT: &str = "    ";

pub(crate) fn justification<M>(judgement: &Judgement<M>) -> String {
    let mut lines = Vec::new();
    push_lines(judgement, 0, &mut lines);
    lines.join("\n")
}

fn push_lines<M>(judgement: &Judgement<M>, depth: usize, out: &mut Vec<String>) {
    if let Some(inner) = transparent_child(judgement) {
        push_lines(inner, depth, out);
        return;
    }

    let pad = INDENT.repeat(depth);

    if !judgement.own_assertions.is_empty() {
        // Overriding nodes label themselves with their own assertions, then
        // indent whatever causal structure sits beneath them.
        for assertion in &judgement.own_assertions {
            out.push(format!("{}{}", pad, assertion));
        }
        for cause in &judgement.causes {
            push_lines(cause, depth + 1, out);
        }
        return;
    }

    if judgement.causes.is_empty() {
        // No causes and no overrides: degenerate to the statement line.
        out.push(format!("{}{}", pad, judgement.statement()));
        return;
    }

    if judgement.operator.is_quantifier() {
        out.push(format!("{}{}", pad, keyword(judgement.operator)));
        for cause in &judgement.causes {
            push_lines(cause, depth + 1, out);
        }
        return;
    }

    // A binary node with two or more causal children: operator keyword,
    // then one indent level per (flattened) child.
    out.push(format!("{}{}", pad, keyword(judgement.operator)));
    for child in flatten_children(judgement) {
        push_lines(child, depth + 1, out);
    }
}

//! One-line reason rendering.
//!
//! A leaf contributes its own polarity's assertion text; a composite joins
//! its (flattened) causal children with the operator symbol, bracketing a
//! side only when its effective precedence is strictly lower than the
//! parent's. XOR operands are the exception: a composite operand of or
//! under XOR is always bracketed, because regrouping an XOR chain changes
//! its causal meaning.

use super::{embed, flatten_children, precedence, symbol, transparent_child};
use crate::judgement::{Judgement, Operator};

pub(crate) fn reason<M>(judgement: &Judgement<M>) -> String {
    render(judgement, None)
}

struct Context {
    precedence: u8,
    xor: bool,
}

fn render<M>(judgement: &Judgement<M>, parent: Option<&Context>) -> String {
    if let Some(inner) = transparent_child(judgement) {
        return render(inner, parent);
    }

    if !judgement.operator.is_binary() || judgement.causes.len() < 2 {
        // Leaves, wraps with overrides, and quantifier nodes render as a
        // single embedded atom of assertion text.
        let text = judgement.assertions().join(", ");
        return match parent {
            Some(_) => embed(&text),
            None => text,
        };
    }

    let op = judgement.operator;
    let context = Context {
        precedence: precedence(op),
        xor: op == Operator::Xor,
    };
    let separator = format!(" {} ", symbol(op));
    let parts: Vec<String> = flatten_children(judgement)
        .into_iter()
        .map(|child| render(child, Some(&context)))
        .collect();
    let text = parts.join(&separator);

    match parent {
        Some(outer) if context.precedence < outer.precedence || outer.xor || context.xor => {
            format!("({})", text)
        }
        _ => text,
    }
}

use dictum::{leaf, Operator, Proposition};

fn fails(name: &str) -> Proposition<()> {
    let name = name.to_string();
    leaf(name, |_: &()| false)
}

#[test]
fn or_else_negation_cycles_through_nor_and_or() {
    let or_else = fails("primary").or_else(fails("backup"));
    assert_eq!(or_else.is_satisfied_by(&()).operator(), Operator::OrElse);
    assert!(!or_else.is_satisfied_by(&()).satisfied());

    let nor = or_else.negate();
    let judgement = nor.is_satisfied_by(&());
    assert_eq!(judgement.operator(), Operator::Nor);
    assert!(judgement.satisfied());
    assert_eq!(judgement.justification(), "NOR\n    !primary\n    !backup");

    let or = nor.negate();
    let judgement = or.is_satisfied_by(&());
    assert_eq!(judgement.operator(), Operator::Or);
    assert!(!judgement.satisfied());
    assert_eq!(judgement.justification(), "OR\n    !primary\n    !backup");

    let nor_again = or.negate();
    let judgement = nor_again.is_satisfied_by(&());
    assert_eq!(judgement.operator(), Operator::Nor);
    assert!(judgement.satisfied());
}

#[test]
fn plain_negation_is_involutive() {
    let base = fails("ready");
    let twice = base.clone().negate().negate();

    let original = base.is_satisfied_by(&());
    let round_trip = twice.is_satisfied_by(&());
    assert_eq!(original, round_trip);
}

#[test]
fn stacked_negations_collapse_to_parity() {
    let a = leaf("a", |_: &()| true);
    let b = fails("b");
    let c = fails("c");

    let policy = a & !!!(b | c);
    let judgement = policy.is_satisfied_by(&());
    assert!(judgement.satisfied());
    assert_eq!(judgement.reason(), "a & (!b | !c)");
}

#[test]
fn negation_is_invisible_in_the_rendered_text() {
    let negated = fails("ready").negate();
    let judgement = negated.is_satisfied_by(&());
    // The leaf's polarity carries the marker; the NOT node adds nothing.
    assert!(judgement.satisfied());
    assert_eq!(judgement.reason(), "!ready");
    assert_eq!(judgement.justification(), "!ready");
}

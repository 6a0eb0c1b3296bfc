use dictum::{all_satisfied, any_satisfied, n_satisfied, none_satisfied, LeafBuilder, Proposition};

fn even() -> Proposition<i32> {
    LeafBuilder::new(|n: &i32| n % 2 == 0)
        .when_true_computed(|n| format!("{} is even", n))
        .when_false_computed(|n| format!("{} is odd", n))
        .build()
        .unwrap()
}

#[test]
fn exactly_two_cites_the_even_members() {
    let exactly_two = n_satisfied(2, even())
        .with_statement("exactly two even")
        .when_true("two are even")
        .when_false("not exactly two even")
        .build()
        .unwrap();

    let judgement = exactly_two.is_satisfied_by(&vec![1, 3, 4, 6]);
    assert!(judgement.satisfied());
    assert_eq!(judgement.assertions(), vec!["two are even".to_string()]);
    assert_eq!(
        judgement.root_assertions(),
        vec!["4 is even".to_string(), "6 is even".to_string()]
    );
    assert_eq!(
        judgement.justification(),
        "two are even\n    4 is even\n    6 is even"
    );
}

#[test]
fn exactly_two_with_no_even_members_cites_them_all() {
    let exactly_two = n_satisfied(2, even()).build().unwrap();
    let judgement = exactly_two.is_satisfied_by(&vec![1, 3, 5, 7]);
    assert!(!judgement.satisfied());
    assert_eq!(
        judgement.root_assertions(),
        vec![
            "1 is odd".to_string(),
            "3 is odd".to_string(),
            "5 is odd".to_string(),
            "7 is odd".to_string(),
        ]
    );
}

#[test]
fn quantifier_justification_uses_the_operator_keyword() {
    let judgement = all_satisfied(even())
        .build()
        .unwrap()
        .is_satisfied_by(&vec![2, 5, 8]);
    assert!(!judgement.satisfied());
    assert_eq!(judgement.justification(), "ALL SATISFIED\n    5 is odd");
}

#[test]
fn quantifiers_compose_with_binary_operators() {
    let some_even = any_satisfied(even())
        .with_statement("some even")
        .when_true("some even")
        .when_false("none even")
        .build()
        .unwrap();
    let no_negatives = none_satisfied(
        LeafBuilder::new(|n: &i32| *n < 0)
            .when_true_computed(|n| format!("{} is negative", n))
            .when_false_computed(|n| format!("{} is non-negative", n))
            .build()
            .unwrap(),
    )
    .with_statement("no negatives")
    .when_true("no negatives")
    .when_false("negatives present")
    .build()
    .unwrap();

    let combined = some_even.and(no_negatives);

    let judgement = combined.is_satisfied_by(&vec![1, 2, 3]);
    assert!(judgement.satisfied());
    assert_eq!(judgement.reason(), "(some even) & (no negatives)");

    let judgement = combined.is_satisfied_by(&vec![1, -2, 3]);
    assert!(!judgement.satisfied());
    assert_eq!(judgement.reason(), "(some even) & (negatives present)");
}

use crate::{
    all_satisfied, any_satisfied, leaf, n_satisfied, none_satisfied, DictumError, LeafBuilder,
    Operator, Proposition,
};

fn even() -> Proposition<i32> {
    LeafBuilder::new(|n: &i32| n % 2 == 0)
        .when_true_computed(|n| format!("{} is even", n))
        .when_false_computed(|n| format!("{} is odd", n))
        .build()
        .unwrap()
}

#[test]
fn all_satisfied_cites_every_child_when_they_all_hold() {
    let group = all_satisfied(even()).build().unwrap();
    let judgement = group.is_satisfied_by(&vec![2, 4, 6]);
    assert!(judgement.satisfied());
    assert_eq!(judgement.operator(), Operator::AllSatisfied);
    assert_eq!(judgement.causes().len(), 3);
}

#[test]
fn all_satisfied_cites_only_the_false_children() {
    let group = all_satisfied(even()).build().unwrap();
    let judgement = group.is_satisfied_by(&vec![2, 3, 4, 5]);
    assert!(!judgement.satisfied());
    assert_eq!(judgement.causes().len(), 2);
    assert_eq!(
        judgement.assertions(),
        vec!["3 is odd".to_string(), "5 is odd".to_string()]
    );
}

#[test]
fn any_satisfied_cites_only_the_true_children() {
    let group = any_satisfied(even()).build().unwrap();
    let judgement = group.is_satisfied_by(&vec![1, 2, 3]);
    assert!(judgement.satisfied());
    assert_eq!(judgement.operator(), Operator::AnySatisfied);
    assert_eq!(judgement.assertions(), vec!["2 is even".to_string()]);
}

#[test]
fn any_satisfied_cites_every_child_when_none_hold() {
    let group = any_satisfied(even()).build().unwrap();
    let judgement = group.is_satisfied_by(&vec![1, 3]);
    assert!(!judgement.satisfied());
    assert_eq!(
        judgement.assertions(),
        vec!["1 is odd".to_string(), "3 is odd".to_string()]
    );
}

#[test]
fn none_satisfied_cites_the_offending_true_children() {
    let group = none_satisfied(even()).build().unwrap();
    let judgement = group.is_satisfied_by(&vec![1, 2, 3, 4]);
    assert!(!judgement.satisfied());
    assert_eq!(judgement.operator(), Operator::NoneSatisfied);
    assert_eq!(
        judgement.assertions(),
        vec!["2 is even".to_string(), "4 is even".to_string()]
    );
}

#[test]
fn exactly_n_forwards_the_deep_assertions_of_the_true_subset() {
    let group = n_satisfied(2, even()).build().unwrap();
    let judgement = group.is_satisfied_by(&vec![1, 3, 4, 6]);
    assert!(judgement.satisfied());
    assert_eq!(judgement.operator(), Operator::NSatisfied(2));
    assert_eq!(
        judgement.root_assertions(),
        vec!["4 is even".to_string(), "6 is even".to_string()]
    );
}

#[test]
fn exactly_n_with_no_true_children_cites_them_all() {
    let group = n_satisfied(2, even()).build().unwrap();
    let judgement = group.is_satisfied_by(&vec![1, 3, 5, 7]);
    assert!(!judgement.satisfied());
    assert_eq!(judgement.causes().len(), 4);
    assert_eq!(
        judgement.assertions(),
        vec![
            "1 is odd".to_string(),
            "3 is odd".to_string(),
            "5 is odd".to_string(),
            "7 is odd".to_string(),
        ]
    );
}

#[test]
fn exactly_n_cites_the_true_subset_even_when_the_count_misses() {
    let group = n_satisfied(2, even()).build().unwrap();
    let judgement = group.is_satisfied_by(&vec![2, 4, 6, 1]);
    assert!(!judgement.satisfied());
    assert_eq!(judgement.causes().len(), 3);
    assert_eq!(
        judgement.assertions(),
        vec![
            "2 is even".to_string(),
            "4 is even".to_string(),
            "6 is even".to_string(),
        ]
    );
}

#[test]
fn exactly_zero_is_rejected_at_build_time() {
    let result = n_satisfied(0, even()).build();
    assert!(matches!(result, Err(DictumError::EmptyQuantifier)));
}

#[test]
fn outcome_callbacks_see_the_evaluation_summary() {
    let group = all_satisfied(even())
        .with_statement("all even")
        .when_true_computed(|evaluation| format!("all {} are even", evaluation.count()))
        .when_false_computed(|evaluation| {
            format!(
                "{} of {} are odd",
                evaluation.false_count(),
                evaluation.count()
            )
        })
        .build()
        .unwrap();

    assert_eq!(
        group.is_satisfied_by(&vec![2, 4]).assertions(),
        vec!["all 2 are even".to_string()]
    );
    assert_eq!(
        group.is_satisfied_by(&vec![2, 3, 5]).assertions(),
        vec!["2 of 3 are odd".to_string()]
    );
}

#[test]
fn callbacks_can_inspect_causal_models() {
    let group = none_satisfied(even())
        .when_false_computed(|evaluation| {
            let offenders: Vec<String> = evaluation
                .causal_models()
                .into_iter()
                .map(|n| n.to_string())
                .collect();
            format!("even numbers present: {}", offenders.join(", "))
        })
        .build()
        .unwrap();

    let judgement = group.is_satisfied_by(&vec![1, 2, 3, 4]);
    assert_eq!(
        judgement.assertions(),
        vec!["even numbers present: 2, 4".to_string()]
    );
}

#[test]
fn quantifiers_compose_like_any_other_proposition() {
    let some_even = any_satisfied(even())
        .with_statement("some even")
        .when_true("some even")
        .when_false("none even")
        .build()
        .unwrap();
    let non_empty = leaf("non-empty", |models: &Vec<i32>| !models.is_empty());
    let combined = non_empty.and(some_even);

    let judgement = combined.is_satisfied_by(&vec![1, 2]);
    assert!(judgement.satisfied());
    assert_eq!(
        judgement.assertions(),
        vec!["non-empty".to_string(), "some even".to_string()]
    );

    let judgement = combined.is_satisfied_by(&vec![]);
    assert!(!judgement.satisfied());
}

#[test]
fn empty_sequences_follow_vacuous_truth() {
    let models: Vec<i32> = Vec::new();
    assert!(all_satisfied(even())
        .build()
        .unwrap()
        .is_satisfied_by(&models)
        .satisfied());
    assert!(!any_satisfied(even())
        .build()
        .unwrap()
        .is_satisfied_by(&models)
        .satisfied());
    assert!(none_satisfied(even())
        .build()
        .unwrap()
        .is_satisfied_by(&models)
        .satisfied());
}

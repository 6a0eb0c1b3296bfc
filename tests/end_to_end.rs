use dictum::{all_satisfied, leaf, LeafBuilder, Proposition};

#[derive(Debug, Clone, PartialEq)]
struct Application {
    applicant: String,
    age: u32,
    monthly_income: u32,
    verified: bool,
}

fn application(applicant: &str, age: u32, monthly_income: u32, verified: bool) -> Application {
    Application {
        applicant: applicant.to_string(),
        age,
        monthly_income,
        verified,
    }
}

fn adult() -> Proposition<Application> {
    leaf("adult", |a: &Application| a.age >= 18)
}

fn verified() -> Proposition<Application> {
    leaf("verified", |a: &Application| a.verified)
}

fn sufficient_income() -> Proposition<Application> {
    LeafBuilder::new(|a: &Application| a.monthly_income >= 2_000)
        .with_statement("sufficient income")
        .when_false_computed(|a| format!("{} earns under the threshold", a.applicant))
        .build()
        .unwrap()
}

fn eligible() -> Proposition<Application> {
    adult().and_also(verified() & sufficient_income())
}

#[test]
fn an_accepted_application_explains_every_check() {
    let judgement = eligible().is_satisfied_by(&application("ada", 34, 5_200, true));
    assert!(judgement.satisfied());
    // AND and AND-ALSO share a precedence tier, so no brackets between them.
    assert_eq!(judgement.reason(), "adult && verified & (sufficient income)");
    assert_eq!(
        judgement.justification(),
        "AND\n    adult\n    AND\n        verified\n        sufficient income"
    );
}

#[test]
fn a_rejected_application_cites_only_the_failing_guard() {
    let judgement = eligible().is_satisfied_by(&application("kim", 16, 3_000, true));
    assert!(!judgement.satisfied());
    assert_eq!(judgement.reason(), "!adult");
    assert_eq!(judgement.assertions(), vec!["!adult".to_string()]);
}

#[test]
fn custom_failure_text_reaches_the_rendered_output() {
    let judgement = eligible().is_satisfied_by(&application("sam", 40, 1_200, true));
    assert!(!judgement.satisfied());
    assert_eq!(
        judgement.reason(),
        "adult && verified & (sam earns under the threshold)"
    );
}

#[test]
fn a_named_policy_wraps_the_whole_expression() {
    let policy = eligible()
        .wrap()
        .with_statement("loan policy")
        .when_true("application accepted")
        .when_false("application rejected")
        .build()
        .unwrap();

    let judgement = policy.is_satisfied_by(&application("ada", 34, 5_200, true));
    assert!(judgement.satisfied());
    assert_eq!(judgement.statement(), "loan policy");
    assert_eq!(judgement.reason(), "application accepted");
    assert_eq!(
        judgement.root_assertions(),
        vec![
            "adult".to_string(),
            "verified".to_string(),
            "sufficient income".to_string(),
        ]
    );
}

#[test]
fn wrap_callbacks_see_the_model_and_the_inner_judgement() {
    let policy = eligible()
        .wrap()
        .when_false_computed(|a: &Application, inner| {
            format!("{} rejected: {}", a.applicant, inner.assertions().join(", "))
        })
        .build()
        .unwrap();

    let judgement = policy.is_satisfied_by(&application("kim", 16, 3_000, true));
    assert_eq!(
        judgement.assertions(),
        vec!["kim rejected: !adult".to_string()]
    );
}

#[test]
fn metadata_travels_with_the_verdict() {
    #[derive(Debug, Clone, PartialEq)]
    struct Advice(&'static str);

    let checked: Proposition<Application, Advice> = LeafBuilder::new(|a: &Application| a.verified)
        .with_statement("verified")
        .when_false_metadata(Advice("submit identity documents"))
        .build()
        .unwrap();

    let judgement = checked.is_satisfied_by(&application("kim", 30, 3_000, false));
    assert!(!judgement.satisfied());
    assert_eq!(
        judgement.metadata(),
        vec![&Advice("submit identity documents")]
    );
}

#[test]
fn a_batch_of_applications_is_judged_as_a_group() {
    let batch = all_satisfied(eligible())
        .with_statement("clean batch")
        .when_true("every application is eligible")
        .when_false_computed(|evaluation| {
            format!("{} applications are ineligible", evaluation.causal_count())
        })
        .build()
        .unwrap();

    let applications = vec![
        application("ada", 34, 5_200, true),
        application("kim", 16, 3_000, true),
        application("sam", 40, 1_200, true),
    ];
    let judgement = batch.is_satisfied_by(&applications);
    assert!(!judgement.satisfied());
    assert_eq!(
        judgement.assertions(),
        vec!["2 applications are ineligible".to_string()]
    );
    assert_eq!(judgement.causes().len(), 2);
}

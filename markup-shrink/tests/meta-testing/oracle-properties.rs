//! The fragile oracle: "decoded text never contains the letter s"
//!
//! The oracle is false for plenty of trees, which makes it a good workout
//! for the shrinker. It is also fooled by anything the decoder rejects,
//! because decode failures read as empty text.

use markup_shrink::*;

fn no_letter_s(tree: &Markup) -> bool {
    !tree.plain_text().contains('s')
}

fn weight(tree: &Markup) -> usize {
    tree.size() + tree.node_count()
}

fn expect_failure(result: TestResult) -> (String, usize) {
    match result {
        TestResult::Fail {
            counterexample,
            shrinks_performed,
            ..
        } => (counterexample, shrinks_performed),
        other => panic!("Expected the oracle to fail, got:\n{other}"),
    }
}

pub fn test_oracle_shrinks_to_single_s() {
    let prop = for_all_arbitrary::<Markup, _>(no_letter_s)
        .with_examples(vec![Markup::text("is")])
        .with_show(|tree| format!("{tree:?}"));

    let (counterexample, shrinks) = expect_failure(prop.run(&Config::default()));
    assert_eq!(counterexample, "Text(\"s\")");
    assert_eq!(shrinks, 1);
    println!("✓ Oracle shrank \"is\" to \"s\"");
}

pub fn test_oracle_shrinks_through_nesting() {
    let tree = Markup::Div(
        vec![Attribute::new("id", "x")],
        vec![
            Markup::Paragraph(vec![], vec![Markup::text("this")]),
            Markup::Image(vec![Attribute::new("src", "s")]),
        ],
    );
    let result = for_all_arbitrary::<Markup, _>(no_letter_s)
        .named("markup")
        .with_show(Markup::to_string)
        .with_examples(vec![tree])
        .run_with_context(&Config::default(), Some("no_letter_s"), Some(module_path!()));

    let report = result.to_string();
    assert!(report.contains("forAll 0 = "));
    assert!(report.contains("forAll 2 = \ns\n -- markup"));

    let (counterexample, shrinks) = expect_failure(result);
    assert_eq!(counterexample, "\ns\n");
    assert_eq!(shrinks, 2);
    println!("✓ Oracle shrank a nested tree to a single text node");
}

/// Property: every generated failure minimizes to a failing tree none of
/// whose candidates still fails
pub fn test_generated_failures_are_locally_minimal() {
    let prop = for_all_arbitrary::<Markup, _>(|tree| {
        if no_letter_s(tree) {
            return true;
        }
        let minimized = minimize(tree.clone(), shrink, |m| !no_letter_s(m), 1000);
        minimized.value.size() <= tree.size()
            && minimized.value.plain_text().contains('s')
            && shrink(&minimized.value).iter().all(no_letter_s)
            && minimized
                .steps
                .windows(2)
                .all(|pair| weight(&pair[1]) < weight(&pair[0]))
    })
    .classify("fails the oracle", |tree| !no_letter_s(tree));

    let result = prop.run(&Config::default().with_seed(3));
    if !result.is_pass() {
        panic!("Local minimality property failed:\n{result}");
    }
    println!("✓ Local minimality property passed");
}

pub fn test_decode_failures_hide_text() {
    let broken = Markup::Div(
        vec![],
        vec![
            Markup::Image(vec![Attribute::new("src", "\"><div><x y=\"")]),
            Markup::text("sss"),
        ],
    );
    assert_eq!(decode(&broken.render()).ok(), None);
    assert_eq!(broken.plain_text(), "");
    assert!(no_letter_s(&broken));

    let stray = Markup::Paragraph(vec![], vec![Markup::text("a<b sss")]);
    assert_eq!(stray.plain_text(), "a<b sss");
    assert!(!no_letter_s(&stray));
    assert!(!no_letter_s(&Markup::Div(vec![], vec![Markup::text("s")])));
    println!("✓ Decode failures read as empty text");
}

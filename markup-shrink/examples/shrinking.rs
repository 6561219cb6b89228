//! Example showing how a failing markup tree is shrunk.
//!
//! The oracle claims decoded text never contains the letter `s`. It is
//! wrong, and the runner shrinks whatever tree first proves it wrong.

use markup_shrink::*;

fn no_letter_s(markup: &Markup) -> bool {
    !markup.plain_text().contains('s')
}

fn main() {
    println!("Shrinking a known counterexample");
    let example = Markup::Div(
        vec![Attribute::new("id", "main")],
        vec![
            Markup::Paragraph(vec![], vec![Markup::text("this is it")]),
            Markup::Break(vec![]),
            Markup::Image(vec![Attribute::new("src", "s.png")]),
        ],
    );
    let prop = for_all_arbitrary::<Markup, _>(no_letter_s)
        .named("markup")
        .with_show(Markup::to_string)
        .with_examples(vec![example.clone()]);
    println!("{}", prop.run_with_context(&Config::default(), Some("no_letter_s"), None));
    println!();

    println!("Shrinking generated counterexamples");
    let prop = for_all_arbitrary::<Markup, _>(no_letter_s).with_show(Markup::to_string);
    match prop.run(&Config::default().with_seed(2024)) {
        TestResult::Fail {
            counterexample,
            tests_run,
            shrinks_performed,
            ..
        } => println!(
            "Failed after {tests_run} tests, {shrinks_performed} shrinks:{counterexample}"
        ),
        result => println!("Unexpected result: {result}"),
    }
    println!();

    println!("First two levels of candidates for a small tree");
    let small = Markup::Anchor(vec![Attribute::new("href", "x")], vec![Markup::text("ab")]);
    let tree = Tree::unfold(small, &shrink, 2);
    print!("{}", tree.render_with(Markup::render));
    println!("{} candidates for the full tree", shrink(&example).len());
}

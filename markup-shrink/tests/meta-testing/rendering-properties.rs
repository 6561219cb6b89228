//! Rendering and plain-text decoding properties

use crate::assert_passes;
use markup_shrink::*;

const TOKENS: [&str; 4] = ["&amp", "&quot", "&#39", "&gt"];

fn only_tokens_after_ampersands(escaped: &str) -> bool {
    escaped
        .match_indices('&')
        .all(|(index, _)| TOKENS.iter().any(|token| escaped[index..].starts_with(token)))
}

/// Property: escaped text has no reserved characters left but `<`
pub fn test_escaping_removes_reserved_characters() {
    let prop = for_all_named(Gen::<String>::unicode(), "text", |text: &String| {
        let escaped = escape(text);
        !escaped.contains(['"', '\'', '>'])
            && only_tokens_after_ampersands(&escaped)
            && escaped.matches('<').count() == text.matches('<').count()
    })
    .with_examples(vec!["&\"'<>".to_string(), "&amp;".to_string()]);

    assert_passes("Escaping property", prop.run(&Config::default()));
}

fn expected_lines(tree: &Markup) -> usize {
    match tree {
        Markup::Text(content) => 1 + content.matches('\n').count(),
        _ if tree.is_leaf() => 1,
        _ => 2 + tree.children().iter().map(expected_lines).sum::<usize>(),
    }
}

/// Property: one line per leaf and text, two per container
pub fn test_render_line_structure() {
    let prop = for_all_arbitrary::<Markup, _>(|tree| {
        let rendered = tree.render();
        rendered.ends_with('\n') && rendered.matches('\n').count() == expected_lines(tree)
    });

    assert_passes("Render line structure property", prop.run(&Config::default()));
}

pub fn test_concrete_scenarios() {
    let image = Markup::Image(vec![Attribute::new("src", "x")]);
    assert_eq!(render(&image), "<img src=\"x\"/>\n");
    assert_eq!(shrink(&image), vec![Markup::Image(vec![])]);

    assert_eq!(
        shrink(&Markup::Div(vec![], vec![Markup::text("")])),
        vec![Markup::Div(vec![], vec![])]
    );
    assert_eq!(
        shrink(&Markup::Div(vec![], vec![Markup::text("a")])),
        vec![Markup::Div(vec![], vec![]), Markup::text("")]
    );

    assert!(!Markup::Div(vec![], vec![Markup::text("  ")]).is_text());
    assert!(Markup::Div(vec![], vec![Markup::text(" x ")]).is_text());

    assert_eq!(escape("&\"'"), "&amp&quot&#39");
    println!("✓ Concrete scenarios hold");
}

/// Property: decoding any rendered tree returns, never panics, and never
/// leaves spaces at the edges of a line
pub fn test_plain_text_never_panics() {
    let prop = for_all_arbitrary::<Markup, _>(|tree| {
        let text = tree.plain_text();
        text.split('\n')
            .all(|line| !line.starts_with(' ') && !line.ends_with(' '))
    })
    .classify("decodes to text", |tree| !tree.plain_text().is_empty());

    assert_passes("Plain text property", prop.run(&Config::default()));
}

/// Property: easy-to-read text inside attributed containers decodes intact
pub fn test_easy_text_survives_round_trip() {
    let words = Gen::<String>::ascii_lowercase().such_that(|word| !word.is_empty());
    let trees = words.bind(|word| {
        attributes(3).map(move |attrs| {
            Markup::Div(
                attrs.clone(),
                vec![
                    Markup::Anchor(vec![], vec![Markup::text(word.clone())]),
                    Markup::Paragraph(attrs, vec![Markup::text(word.clone())]),
                ],
            )
        })
    });

    let prop = for_all(trees, |tree: &Markup| {
        let Markup::Div(_, children) = tree else {
            return false;
        };
        let word = match children[0].children() {
            [Markup::Text(word)] => word,
            _ => return false,
        };
        decode(&tree.render()) == Ok(format!("{word}\n{word}"))
    });

    assert_passes("Round trip property", prop.run(&Config::default()));
}

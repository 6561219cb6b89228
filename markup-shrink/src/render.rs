//! Pretty printing and escaping.

use std::fmt;

use crate::markup::Markup;

/// Default indentation for pretty printing.
const TAB: &str = "  ";

/// Replacements applied, in order, to text content.
///
/// The last entry repeats the `>` key, so `<` is never escaped. The
/// decoder reads a `<` that starts no tag as itself.
const ESCAPES: [(&str, &str); 5] = [
    ("&", "&amp"),
    ("\"", "&quot"),
    ("'", "&#39"),
    (">", "&gt"),
    (">", "&lt"),
];

/// Escape reserved characters in text content.
pub fn escape(text: &str) -> String {
    ESCAPES
        .iter()
        .fold(text.to_string(), |escaped, &(from, to)| escaped.replace(from, to))
}

/// Pretty print a tree, one node per line, two spaces per level.
pub fn render(markup: &Markup) -> String {
    let mut out = String::new();
    render_into(markup, 0, &mut out);
    out
}

fn render_into(markup: &Markup, depth: usize, out: &mut String) {
    let indent = TAB.repeat(depth);
    out.push_str(&indent);

    let tag = match markup {
        Markup::Text(content) => {
            out.push_str(&escape(content));
            out.push('\n');
            return;
        }
        _ => markup.tag().unwrap_or_default(),
    };

    out.push('<');
    out.push_str(tag);
    for attr in markup.attributes() {
        out.push(' ');
        out.push_str(&attr.render());
    }

    if markup.is_leaf() {
        out.push_str("/>\n");
        return;
    }

    out.push_str(">\n");
    for child in markup.children() {
        render_into(child, depth + 1, out);
    }
    out.push_str(&indent);
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

impl Markup {
    pub fn render(&self) -> String {
        render(self)
    }
}

/// Starts on a fresh line so failure reports show the whole tree aligned.
impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}", render(self))
    }
}

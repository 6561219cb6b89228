//! Structural shrinking of markup trees.
//!
//! Every node offers itself wiped clean first, then whatever its children
//! shrink to, each of those standing in for the whole node. Attributes are
//! dropped wholesale and never shrunk one by one. Text additionally offers
//! shorter non-empty strings.
//!
//! A candidate never has a larger [`Markup::size`] or more nodes than the
//! tree it came from, and it is strictly smaller in one of the two. Only
//! wiped trees have no candidates, so repeatedly taking any candidate
//! terminates.

use markup_shrink_core::shrink_string;

use crate::markup::Markup;

/// Smaller candidates for a failing tree, most aggressive first.
pub fn shrink(markup: &Markup) -> Vec<Markup> {
    if markup.is_wiped() {
        return Vec::new();
    }

    let mut candidates = vec![markup.wiped()];
    match markup {
        Markup::Text(content) => candidates.extend(
            shrink_string(content)
                .into_iter()
                .filter(|shorter| !shorter.is_empty() && shorter.len() < content.len())
                .map(Markup::Text),
        ),
        _ => {
            for child in markup.children() {
                candidates.extend(shrink(child));
            }
        }
    }
    candidates
}

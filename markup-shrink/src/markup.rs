//! The markup tree: a small, closed subset of HTML.

use crate::attribute::Attribute;

/// A markup node.
///
/// `Image`, `Break` and `Area` carry attributes only. `Paragraph`, `Div`,
/// `Table` and `Anchor` carry attributes and ordered children. `Text`
/// carries raw, unescaped content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Markup {
    Image(Vec<Attribute>),
    Break(Vec<Attribute>),
    Area(Vec<Attribute>),
    Paragraph(Vec<Attribute>, Vec<Markup>),
    Div(Vec<Attribute>, Vec<Markup>),
    Table(Vec<Attribute>, Vec<Markup>),
    Anchor(Vec<Attribute>, Vec<Markup>),
    Text(String),
}

impl Markup {
    pub fn text(content: impl Into<String>) -> Self {
        Markup::Text(content.into())
    }

    /// The element name, `None` for text.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Markup::Image(_) => Some("img"),
            Markup::Break(_) => Some("br"),
            Markup::Area(_) => Some("area"),
            Markup::Paragraph(..) => Some("p"),
            Markup::Div(..) => Some("div"),
            Markup::Table(..) => Some("table"),
            Markup::Anchor(..) => Some("a"),
            Markup::Text(_) => None,
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        match self {
            Markup::Image(attrs) | Markup::Break(attrs) | Markup::Area(attrs) => attrs,
            Markup::Paragraph(attrs, _)
            | Markup::Div(attrs, _)
            | Markup::Table(attrs, _)
            | Markup::Anchor(attrs, _) => attrs,
            Markup::Text(_) => &[],
        }
    }

    pub fn children(&self) -> &[Markup] {
        match self {
            Markup::Paragraph(_, children)
            | Markup::Div(_, children)
            | Markup::Table(_, children)
            | Markup::Anchor(_, children) => children,
            Markup::Image(_) | Markup::Break(_) | Markup::Area(_) | Markup::Text(_) => &[],
        }
    }

    /// Attribute-only elements.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Markup::Image(_) | Markup::Break(_) | Markup::Area(_))
    }

    /// Elements with children.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Markup::Paragraph(..) | Markup::Div(..) | Markup::Table(..) | Markup::Anchor(..)
        )
    }

    /// True if any text in the tree is more than whitespace.
    pub fn is_text(&self) -> bool {
        match self {
            Markup::Text(content) => !content.trim().is_empty(),
            _ => self.children().iter().any(Markup::is_text),
        }
    }

    /// Structural weight used to order and bound shrinking.
    ///
    /// Attribute count for elements plus the size of every child; byte
    /// length for text.
    pub fn size(&self) -> usize {
        match self {
            Markup::Text(content) => content.len(),
            _ => {
                self.attributes().len()
                    + self.children().iter().map(Markup::size).sum::<usize>()
            }
        }
    }

    /// Number of nodes in the tree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Markup::node_count)
            .sum::<usize>()
    }

    /// Nesting depth: zero for a node without children.
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// The same kind of node with no attributes, no children and no text.
    pub fn wiped(&self) -> Markup {
        match self {
            Markup::Image(_) => Markup::Image(Vec::new()),
            Markup::Break(_) => Markup::Break(Vec::new()),
            Markup::Area(_) => Markup::Area(Vec::new()),
            Markup::Paragraph(..) => Markup::Paragraph(Vec::new(), Vec::new()),
            Markup::Div(..) => Markup::Div(Vec::new(), Vec::new()),
            Markup::Table(..) => Markup::Table(Vec::new(), Vec::new()),
            Markup::Anchor(..) => Markup::Anchor(Vec::new(), Vec::new()),
            Markup::Text(_) => Markup::Text(String::new()),
        }
    }

    /// True for text with no content and elements with neither attributes
    /// nor children.
    pub fn is_wiped(&self) -> bool {
        match self {
            Markup::Text(content) => content.is_empty(),
            _ => self.attributes().is_empty() && self.children().is_empty(),
        }
    }
}

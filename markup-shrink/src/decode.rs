//! Decoding rendered markup back into plain text.
//!
//! The decoder understands exactly the dialect produced by
//! [`crate::render`]: the seven known elements, double-quoted attribute
//! values and the semicolon-less escape tokens. Block elements and `<br>`
//! start new lines, and literal whitespace collapses the way a browser
//! collapses it.
//!
//! A `<` that does not start a well-formed tag for a known element is read
//! as a literal `<`. Only broken nesting fails the whole document.

use thiserror::Error;
use tracing::warn;

use crate::markup::Markup;

/// Why rendered text could not be decoded. Positions are byte offsets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("</{found}> at byte {position} does not close <{expected}>")]
    MismatchedClose {
        expected: &'static str,
        found: &'static str,
        position: usize,
    },

    #[error("</{name}> at byte {position} closes nothing")]
    UnexpectedClose { name: &'static str, position: usize },

    #[error("<{name}> is never closed")]
    Unclosed { name: &'static str },
}

/// Entity names and the characters they stand for.
const ENTITIES: [(&str, char); 5] = [
    ("amp", '&'),
    ("quot", '"'),
    ("#39", '\''),
    ("gt", '>'),
    ("lt", '<'),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element {
    Image,
    Break,
    Area,
    Paragraph,
    Div,
    Table,
    Anchor,
}

impl Element {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "img" => Some(Element::Image),
            "br" => Some(Element::Break),
            "area" => Some(Element::Area),
            "p" => Some(Element::Paragraph),
            "div" => Some(Element::Div),
            "table" => Some(Element::Table),
            "a" => Some(Element::Anchor),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Element::Image => "img",
            Element::Break => "br",
            Element::Area => "area",
            Element::Paragraph => "p",
            Element::Div => "div",
            Element::Table => "table",
            Element::Anchor => "a",
        }
    }

    fn is_void(self) -> bool {
        matches!(self, Element::Image | Element::Break | Element::Area)
    }

    fn is_block(self) -> bool {
        matches!(self, Element::Paragraph | Element::Div | Element::Table)
    }
}

/// Accumulates plain text, collapsing whitespace lazily.
#[derive(Debug, Default)]
struct PlainText {
    out: String,
    pending_space: bool,
}

impl PlainText {
    fn push(&mut self, c: char) {
        if self.pending_space && !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push(' ');
        }
        self.pending_space = false;
        self.out.push(c);
    }

    fn whitespace(&mut self) {
        self.pending_space = true;
    }

    fn line_break(&mut self) {
        self.out.push('\n');
        self.pending_space = false;
    }

    fn block_boundary(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
        self.pending_space = false;
    }

    fn finish(self) -> String {
        self.out.trim_end().to_string()
    }
}

struct Tag {
    element: Element,
    closing: bool,
    self_closing: bool,
    position: usize,
}

struct Decoder<'a> {
    input: &'a str,
    position: usize,
    open: Vec<Element>,
    text: PlainText,
}

impl<'a> Decoder<'a> {
    fn new(input: &'a str) -> Self {
        Decoder {
            input,
            position: 0,
            open: Vec::new(),
            text: PlainText::default(),
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn take_while<F>(&mut self, predicate: F) -> &'a str
    where
        F: Fn(char) -> bool,
    {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !predicate(c))
            .map_or(rest.len(), |(index, _)| index);
        self.position += len;
        &rest[..len]
    }

    fn skip_whitespace(&mut self) {
        self.take_while(char::is_whitespace);
    }

    fn eat(&mut self, expected: char) -> Option<()> {
        if self.peek()? == expected {
            self.position += expected.len_utf8();
            Some(())
        } else {
            None
        }
    }

    fn run(mut self) -> Result<String, DecodeError> {
        while let Some(c) = self.peek() {
            match c {
                '<' => {
                    let start = self.position;
                    match self.tag() {
                        Some(tag) => self.apply(tag)?,
                        None => {
                            self.position = start + 1;
                            self.text.push('<');
                        }
                    }
                }
                '&' => {
                    self.position += 1;
                    let decoded = self.entity();
                    self.text.push(decoded);
                }
                c if c.is_whitespace() => {
                    self.position += c.len_utf8();
                    self.text.whitespace();
                }
                c => {
                    self.position += c.len_utf8();
                    self.text.push(c);
                }
            }
        }

        if let Some(element) = self.open.pop() {
            return Err(DecodeError::Unclosed {
                name: element.name(),
            });
        }
        Ok(self.text.finish())
    }

    /// The character for the entity after a consumed `&`, or `&` itself.
    fn entity(&mut self) -> char {
        for (name, c) in ENTITIES {
            if self.rest().starts_with(name) {
                self.position += name.len();
                if self.peek() == Some(';') {
                    self.position += 1;
                }
                return c;
            }
        }
        '&'
    }

    /// A tag starting at the current `<`, or `None` if it is malformed.
    fn tag(&mut self) -> Option<Tag> {
        let start = self.position;
        self.position += 1;

        let closing = self.eat('/').is_some();
        let name = self.take_while(|c| c.is_ascii_alphanumeric());
        if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return None;
        }
        let element = Element::from_name(name)?;

        let mut self_closing = false;
        loop {
            self.skip_whitespace();
            match self.peek()? {
                '>' => {
                    self.position += 1;
                    break;
                }
                '/' if !closing => {
                    self.position += 1;
                    self.eat('>')?;
                    self_closing = true;
                    break;
                }
                _ if !closing => self.attribute()?,
                _ => return None,
            }
        }

        Some(Tag {
            element,
            closing,
            self_closing,
            position: start,
        })
    }

    /// `name="value"`. Attribute content never reaches the plain text.
    fn attribute(&mut self) -> Option<()> {
        let name = self.take_while(|c| !(c.is_whitespace() || matches!(c, '=' | '>' | '/' | '"')));
        if name.is_empty() {
            return None;
        }
        self.eat('=')?;
        self.eat('"')?;
        self.take_while(|c| c != '"');
        self.eat('"')
    }

    fn apply(&mut self, tag: Tag) -> Result<(), DecodeError> {
        let element = tag.element;

        if tag.closing {
            if element.is_void() {
                return Err(DecodeError::UnexpectedClose {
                    name: element.name(),
                    position: tag.position,
                });
            }
            match self.open.pop() {
                Some(open) if open == element => {}
                Some(open) => {
                    return Err(DecodeError::MismatchedClose {
                        expected: open.name(),
                        found: element.name(),
                        position: tag.position,
                    })
                }
                None => {
                    return Err(DecodeError::UnexpectedClose {
                        name: element.name(),
                        position: tag.position,
                    })
                }
            }
        } else if element == Element::Break {
            self.text.line_break();
        } else if !element.is_void() && !tag.self_closing {
            self.open.push(element);
        }

        if element.is_block() {
            self.text.block_boundary();
        }
        Ok(())
    }
}

/// Decode rendered markup into plain text.
pub fn decode(rendered: &str) -> Result<String, DecodeError> {
    Decoder::new(rendered).run()
}

/// Decode rendered markup into plain text, or the empty string if it
/// cannot be decoded. The error is logged, never returned.
pub fn to_plain_text(rendered: &str) -> String {
    match decode(rendered) {
        Ok(text) => text,
        Err(error) => {
            warn!(%error, "could not decode rendered markup");
            String::new()
        }
    }
}

impl Markup {
    /// Render, then decode to plain text.
    pub fn plain_text(&self) -> String {
        to_plain_text(&self.render())
    }
}

//! Name/value attributes carried by markup elements.

use std::fmt;

use markup_shrink_core::{Arbitrary, Gen};

/// An attribute on a markup tag.
///
/// No constraint is placed on the content: names and values may be empty
/// or contain reserved characters. Rendering always quotes the value and
/// never escapes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }

    /// `name="value"`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.value)
    }
}

/// Generate between zero and `max` attributes.
pub fn attributes(max: usize) -> Gen<Vec<Attribute>> {
    Gen::vec_of_len(Gen::usize_range(0, max), Attribute::arbitrary())
}

impl Arbitrary for Attribute {
    /// Names are non-empty and values possibly empty, both over `a..=z`.
    fn arbitrary() -> Gen<Self> {
        let names = Gen::<String>::ascii_lowercase().such_that(|name| !name.is_empty());
        names.bind(|name| {
            Gen::<String>::ascii_lowercase().map(move |value| Attribute::new(name.clone(), value))
        })
    }

    // Attributes are only ever removed wholesale by the markup shrinker.
}

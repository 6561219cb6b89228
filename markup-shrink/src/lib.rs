//! Generation and shrinking of markup trees for property-based testing.
//!
//! A [`Markup`] tree is a small, closed subset of HTML: three attribute-only
//! leaves, four containers and text. This crate generates random trees of
//! bounded depth and breadth, renders them with escaping, decodes rendered
//! output back to plain text, and shrinks failing trees through strictly
//! smaller candidates.
//!
//! ```
//! use markup_shrink::*;
//!
//! let result = for_all_arbitrary::<Markup, _>(|markup| markup.depth() <= 4)
//!     .run(&Config::default().with_tests(20));
//! assert!(result.is_pass());
//! ```

pub mod attribute;
pub mod decode;
pub mod generate;
pub mod markup;
pub mod render;
pub mod shrink;

pub use attribute::{attributes, Attribute};
pub use decode::{decode, to_plain_text, DecodeError};
pub use generate::{generate, markup, GenConfig};
pub use markup::Markup;
pub use render::{escape, render};
pub use shrink::shrink;

pub use markup_shrink_core::*;

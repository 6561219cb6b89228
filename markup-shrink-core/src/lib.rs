//! Property-based testing building blocks for markup-shrink.
//!
//! This crate provides seeds and sizes, explicit generators, the
//! `Arbitrary` generation/shrinking capability, the greedy shrinking
//! driver and a small property runner.

pub mod arbitrary;
pub mod data;
pub mod error;
pub mod gen;
pub mod property;
pub mod tree;

// Re-export the main types
pub use arbitrary::*;
pub use data::*;
pub use error::*;
pub use gen::*;
pub use property::*;
pub use tree::*;

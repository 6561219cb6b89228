//! The generation and shrinking capabilities a type plugs into the runner.

use crate::gen::Gen;

/// A type that can produce random instances of itself and propose
/// smaller versions of a failing instance.
///
/// `shrink` must be deterministic and finite. Every candidate should be
/// strictly smaller than `self` under some well-founded measure, otherwise
/// the greedy driver in [`crate::minimize`] is only stopped by its limit.
pub trait Arbitrary: Sized + 'static {
    /// A generator of arbitrary values.
    fn arbitrary() -> Gen<Self>;

    /// Smaller candidates, most aggressive first. Empty when minimal.
    fn shrink(&self) -> Vec<Self> {
        Vec::new()
    }
}

/// Remove chunks of a sequence, largest chunks first.
///
/// For chunk sizes `n/2, n/4, ..., 1` every aligned chunk is removed once,
/// so every candidate is strictly shorter than `items` and there are at
/// most `3n` of them.
pub fn shrink_removals<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let len = items.len();
    let mut candidates = Vec::new();
    let mut chunk = len / 2;
    if len == 1 {
        chunk = 1;
    }

    while chunk > 0 {
        let mut start = 0;
        while start < len {
            let end = (start + chunk).min(len);
            let mut candidate = Vec::with_capacity(len - (end - start));
            candidate.extend_from_slice(&items[..start]);
            candidate.extend_from_slice(&items[end..]);
            candidates.push(candidate);
            start = end;
        }
        chunk /= 2;
    }

    candidates
}

/// Shrink a string by removing chunks of characters.
pub fn shrink_string(value: &str) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    shrink_removals(&chars)
        .into_iter()
        .map(|chars| chars.into_iter().collect())
        .collect()
}

impl Arbitrary for String {
    fn arbitrary() -> Gen<Self> {
        Gen::<String>::unicode()
    }

    fn shrink(&self) -> Vec<Self> {
        shrink_string(self)
    }
}

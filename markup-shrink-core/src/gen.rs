//! Generator combinators for property-based testing.

use crate::data::*;

/// How many times `such_that` redraws before keeping the last value.
const MAX_FILTER_ATTEMPTS: usize = 100;

/// A generator for test data of type `T`.
///
/// Generators are explicit, first-class values that can be composed
/// using combinator functions. Shrinking is not part of a generator:
/// it is supplied separately, see [`crate::Arbitrary`].
pub struct Gen<T> {
    generator: Box<dyn Fn(Size, Seed) -> T>,
}

impl<T> Gen<T> {
    /// Create a new generator from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Size, Seed) -> T + 'static,
    {
        Gen {
            generator: Box::new(f),
        }
    }

    /// Generate a value using the given size and seed.
    pub fn generate(&self, size: Size, seed: Seed) -> T {
        (self.generator)(size, seed)
    }

    /// Create a generator that always produces the same value.
    pub fn constant(value: T) -> Self
    where
        T: Clone + 'static,
    {
        Gen::new(move |_size, _seed| value.clone())
    }
}

impl<T> Gen<T>
where
    T: 'static,
{
    /// Map a function over the generated values.
    pub fn map<U, F>(self, f: F) -> Gen<U>
    where
        F: Fn(T) -> U + 'static,
        U: 'static,
    {
        Gen::new(move |size, seed| f(self.generate(size, seed)))
    }

    /// Bind/flatmap for dependent generation.
    pub fn bind<U, F>(self, f: F) -> Gen<U>
    where
        F: Fn(T) -> Gen<U> + 'static,
        U: 'static,
    {
        Gen::new(move |size, seed| {
            let (seed1, seed2) = seed.split();
            let value = self.generate(size, seed1);
            f(value).generate(size, seed2)
        })
    }

    /// Keep drawing until the predicate holds.
    ///
    /// Each retry uses a fresh seed and a slightly larger size. After
    /// `MAX_FILTER_ATTEMPTS` retries the last drawn value is kept.
    pub fn such_that<F>(self, predicate: F) -> Gen<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        Gen::new(move |size, seed| {
            let (first, mut seed) = seed.split();
            let mut value = self.generate(size, first);
            let mut attempt = 0;
            while !predicate(&value) && attempt < MAX_FILTER_ATTEMPTS {
                attempt += 1;
                let (current, next) = seed.split();
                seed = next;
                value = self.generate(size.grow(attempt), current);
            }
            value
        })
    }

    /// Choose among generators according to a frequency table.
    pub fn frequency(table: Frequency<Gen<T>>) -> Gen<T> {
        Gen::new(move |size, seed| {
            let (pick_seed, gen_seed) = seed.split();
            table.pick(pick_seed).generate(size, gen_seed)
        })
    }

    /// Generate a vector whose length is drawn from `len`.
    pub fn vec_of_len(len: Gen<usize>, element: Gen<T>) -> Gen<Vec<T>> {
        Gen::new(move |size, seed| {
            let (len_seed, mut seed) = seed.split();
            let count = len.generate(size, len_seed);
            let mut values = Vec::with_capacity(count);
            for _ in 0..count {
                let (current, next) = seed.split();
                seed = next;
                values.push(element.generate(size, current));
            }
            values
        })
    }

    /// Generate a vector of length between zero and the current size.
    pub fn sized_vec_of(element: Gen<T>) -> Gen<Vec<T>> {
        let len = Gen::new(|size: Size, seed: Seed| {
            seed.next_bounded(size.get() as u64 + 1).0 as usize
        });
        Gen::vec_of_len(len, element)
    }
}

impl<T> Gen<T>
where
    T: Clone + 'static,
{
    /// Choose a value according to a frequency table.
    pub fn weighted(table: Frequency<T>) -> Gen<T> {
        Gen::new(move |_size, seed| table.pick(seed).clone())
    }
}

impl Gen<usize> {
    /// Generate an integer uniformly in `[min, max]`.
    pub fn usize_range(min: usize, max: usize) -> Self {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        Gen::new(move |_size, seed| {
            let span = (high - low) as u64 + 1;
            low + seed.next_bounded(span).0 as usize
        })
    }
}

impl Gen<char> {
    /// Generate a character from the given alphabet.
    ///
    /// An empty alphabet yields the replacement character.
    pub fn from_alphabet(alphabet: &str) -> Self {
        let chars: Vec<char> = alphabet.chars().collect();
        Gen::new(move |_size, seed| {
            let (index, _) = seed.next_bounded(chars.len() as u64);
            chars
                .get(index as usize)
                .copied()
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        })
    }

    /// Generate any Unicode scalar value, half of the time printable ASCII.
    pub fn unicode() -> Self {
        Gen::new(|_size, seed| {
            let (ascii, seed) = seed.next_bool();
            if ascii {
                let (offset, _) = seed.next_bounded(0x7f - 0x20);
                return char::from(0x20 + offset as u8);
            }
            // Skip the surrogate block so every draw maps to a scalar value.
            let (raw, _) = seed.next_bounded(0x11_0000 - 0x800);
            let code = if raw < 0xd800 { raw } else { raw + 0x800 };
            char::from_u32(code as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
        })
    }
}

impl Gen<String> {
    /// Generate a string of up to `size` characters drawn from `chars`.
    pub fn string_of(chars: Gen<char>) -> Self {
        Gen::sized_vec_of(chars).map(|chars| chars.into_iter().collect::<String>())
    }

    /// Generate a string over the given alphabet.
    pub fn from_alphabet(alphabet: &str) -> Self {
        Gen::string_of(Gen::<char>::from_alphabet(alphabet))
    }

    /// Generate an easy to read string of lowercase ASCII letters.
    pub fn ascii_lowercase() -> Self {
        Gen::<String>::from_alphabet("abcdefghijklmnopqrstuvwxyz")
    }

    /// Generate an unrestricted Unicode string.
    pub fn unicode() -> Self {
        Gen::string_of(Gen::<char>::unicode())
    }
}

/// A frequency table: weighted outcomes of any type.
///
/// Tables are non-empty by construction. A table whose weights are all
/// zero picks uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequency<T> {
    choices: Vec<(u32, T)>,
}

impl<T> Frequency<T> {
    /// Create a table with a single outcome.
    pub fn new(weight: u32, value: T) -> Self {
        Frequency {
            choices: vec![(weight, value)],
        }
    }

    /// Add an outcome.
    pub fn with(mut self, weight: u32, value: T) -> Self {
        self.choices.push((weight, value));
        self
    }

    /// Number of outcomes in the table.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Always false: a table holds at least one outcome.
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u64 {
        self.choices.iter().map(|(weight, _)| *weight as u64).sum()
    }

    /// Sample an outcome.
    pub fn pick(&self, seed: Seed) -> &T {
        let last = self.choices.len() - 1;
        let total = self.total_weight();
        if total == 0 {
            let (index, _) = seed.next_bounded(self.choices.len() as u64);
            return &self.choices[index as usize].1;
        }

        let (mut target, _) = seed.next_bounded(total);
        for (weight, value) in &self.choices {
            let weight = *weight as u64;
            if target < weight {
                return value;
            }
            target -= weight;
        }
        &self.choices[last].1
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Words over the generators of a presentation.
//!
//! A word is an immutable sequence of syllables `g^e` with `e != 0`. Words are
//! shared between the relation tables and the frames of the collection stack,
//! so the syllables live behind an `Arc` and cloning a word is O(1).

use crate::error::{CollectError, Result};
use crate::generator::{Generator, Sign};
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;
use std::sync::Arc;

/// One `(generator, exponent)` pair of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    pub generator: Generator,
    pub exponent: BigInt,
}

impl Syllable {
    /// Create a syllable, panicking on a zero exponent.
    pub fn new(generator: Generator, exponent: impl Into<BigInt>) -> Self {
        let exponent = exponent.into();
        assert!(!exponent.is_zero(), "Syllable exponent is zero for {}", generator);
        Self {
            generator,
            exponent,
        }
    }
}

/// An immutable word `g1^e1 g2^e2 ... gk^ek`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    syllables: Arc<[Syllable]>,
}

impl Word {
    /// The empty word (the identity).
    pub fn identity() -> Self {
        Self {
            syllables: Arc::from(Vec::new()),
        }
    }

    /// The word consisting of a single syllable.
    pub fn syllable(generator: Generator, exponent: impl Into<BigInt>) -> Self {
        Self::from_syllables(vec![Syllable::new(generator, exponent)])
    }

    /// The plain generator `g` or its inverse `g^-1`.
    pub fn generator(generator: Generator, sign: Sign) -> Self {
        Self::syllable(generator, sign.unit())
    }

    /// Build a word from syllables.
    pub fn from_syllables(syllables: Vec<Syllable>) -> Self {
        Self {
            syllables: Arc::from(syllables),
        }
    }

    /// Build a word from `(generator index, exponent)` pairs.
    ///
    /// # Panics
    ///
    /// Panics on a zero generator index or a zero exponent.
    pub fn from_pairs<E: Into<BigInt>>(pairs: impl IntoIterator<Item = (u32, E)>) -> Self {
        Self::from_syllables(
            pairs
                .into_iter()
                .map(|(g, e)| Syllable::new(Generator::new(g), e))
                .collect(),
        )
    }

    /// Read a flat list `[g1, e1, g2, e2, ...]`.
    ///
    /// Fails with [`CollectError::InvalidWord`] if the list has odd length,
    /// and rejects zero exponents and non-positive generator indices.
    pub fn from_flat(flat: &[i64]) -> Result<Self> {
        if flat.len() % 2 != 0 {
            return Err(CollectError::InvalidWord { length: flat.len() });
        }
        let mut syllables = Vec::with_capacity(flat.len() / 2);
        for (position, pair) in flat.chunks_exact(2).enumerate() {
            let (g, e) = (pair[0], pair[1]);
            let generator = u32::try_from(g)
                .ok()
                .and_then(Generator::try_new)
                .ok_or(CollectError::InvalidGenerator { position, value: g })?;
            if e == 0 {
                return Err(CollectError::ZeroExponent { position });
            }
            syllables.push(Syllable {
                generator,
                exponent: BigInt::from(e),
            });
        }
        Ok(Self::from_syllables(syllables))
    }

    /// Number of syllables.
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// The syllable at position `index` (0-based).
    pub fn get(&self, index: usize) -> Option<&Syllable> {
        self.syllables.get(index)
    }

    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Syllable> {
        self.syllables.iter()
    }

    /// Largest generator occurring in the word, if any.
    pub fn max_generator(&self) -> Option<Generator> {
        self.syllables.iter().map(|s| s.generator).max()
    }

    /// Concatenation `self * other`.
    pub fn concat(&self, other: &Word) -> Word {
        let mut syllables = Vec::with_capacity(self.len() + other.len());
        syllables.extend_from_slice(&self.syllables);
        syllables.extend_from_slice(&other.syllables);
        Self::from_syllables(syllables)
    }
}

impl Default for Word {
    fn default() -> Self {
        Self::identity()
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a Syllable;
    type IntoIter = std::slice::Iter<'a, Syllable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "<identity>");
        }
        for (i, s) in self.syllables.iter().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            write!(f, "{}^{}", s.generator, s.exponent)?;
        }
        Ok(())
    }
}

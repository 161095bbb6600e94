// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exponent vectors: the accumulator of collection and the normal form.
//!
//! Entry `g` holds the exponent of generator `g`. After a collection finishes
//! the vector is the normal form `g1^e1 g2^e2 ... gn^en` of the collected
//! element. Zero means "not present".

use crate::generator::Generator;
use crate::word::{Syllable, Word};
use num_bigint::BigInt;
use num_traits::Zero;
use std::ops::{Index, IndexMut};

/// A vector of arbitrary-precision exponents indexed by [`Generator`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExponentVector {
    entries: Vec<BigInt>,
}

impl ExponentVector {
    /// The zero vector with `len` entries.
    pub fn zeros(len: usize) -> Self {
        Self {
            entries: vec![BigInt::zero(); len],
        }
    }

    /// Build a vector from small integers (handy for tests and fixtures).
    pub fn from_i64s(values: &[i64]) -> Self {
        Self {
            entries: values.iter().map(|&v| BigInt::from(v)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if every entry is zero.
    pub fn is_identity(&self) -> bool {
        self.entries.iter().all(Zero::is_zero)
    }

    /// Exponent of `g`, or None if `g` is beyond the vector.
    pub fn get(&self, g: Generator) -> Option<&BigInt> {
        self.entries.get(g.offset())
    }

    /// Replace the exponent of `g`, returning the previous value.
    pub fn replace(&mut self, g: Generator, value: BigInt) -> BigInt {
        std::mem::replace(&mut self[g], value)
    }

    /// Clear the exponent of `g`, returning the previous value.
    pub fn take(&mut self, g: Generator) -> BigInt {
        self.replace(g, BigInt::zero())
    }

    pub fn as_slice(&self) -> &[BigInt] {
        &self.entries
    }

    /// Fold `word * scalar` into the vector: `self[g] += e * scalar` for each
    /// syllable `g^e` of `word`.
    ///
    /// # Panics
    ///
    /// Panics if `word` names a generator beyond the vector.
    pub fn add_in(&mut self, word: &Word, scalar: &BigInt) {
        for Syllable {
            generator,
            exponent,
        } in word
        {
            self[*generator] += exponent * scalar;
        }
    }

    /// The normal-form word: nonzero entries in ascending generator order.
    pub fn to_word(&self) -> Word {
        Word::from_syllables(
            self.entries
                .iter()
                .enumerate()
                .filter(|(_, e)| !e.is_zero())
                .map(|(i, e)| Syllable {
                    generator: Generator::new(i as u32 + 1),
                    exponent: e.clone(),
                })
                .collect(),
        )
    }
}

impl From<Vec<BigInt>> for ExponentVector {
    fn from(entries: Vec<BigInt>) -> Self {
        Self { entries }
    }
}

impl Index<Generator> for ExponentVector {
    type Output = BigInt;

    fn index(&self, g: Generator) -> &BigInt {
        &self.entries[g.offset()]
    }
}

impl IndexMut<Generator> for ExponentVector {
    fn index_mut(&mut self, g: Generator) -> &mut BigInt {
        &mut self.entries[g.offset()]
    }
}

/// Scaled add: `vector[g] += e * scalar` for every syllable `g^e` of `word`.
pub fn add_in(vector: &mut ExponentVector, word: &Word, scalar: &BigInt) {
    vector.add_in(word, scalar);
}

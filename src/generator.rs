// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generator indices of a polycyclic presentation.
//!
//! Generators are numbered from 1, matching the usual mathematical convention
//! `g1, g2, ..., gn`. Index 0 is never a generator.

use std::fmt;

/// A generator of a polycyclic presentation (1-based index).
///
/// This is a newtype wrapper to provide type safety and prevent mixing
/// generator indices with exponents or vector positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generator(u32);

impl Generator {
    /// Create a new generator, panicking if the index is zero.
    ///
    /// # Panics
    ///
    /// Panics if `index == 0`.
    pub fn new(index: u32) -> Self {
        assert!(index >= 1, "Generator index out of range: {}", index);
        Self(index)
    }

    /// Try to create a new generator, returning None for index zero.
    pub fn try_new(index: u32) -> Option<Self> {
        if index >= 1 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the underlying 1-based index.
    pub fn index(self) -> u32 {
        self.0
    }

    /// Get the generator as a zero-based offset (for array indexing).
    pub fn offset(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The generator with the next higher index.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Iterate over `self, self+1, ..., last` (empty if `last < self`).
    pub fn up_to(self, last: Generator) -> impl DoubleEndedIterator<Item = Generator> {
        (self.0..=last.0).map(Generator)
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Direction in which a unit of a generator is collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// The generator itself.
    Positive,
    /// Its inverse.
    Negative,
}

impl Sign {
    /// Sign of a nonzero exponent.
    pub fn of(exponent: &num_bigint::BigInt) -> Self {
        use num_traits::Signed;
        if exponent.is_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// The unit exponent `+1` or `-1`.
    pub fn unit(self) -> i64 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for collection.
//!
//! Only malformed caller input is reported as an error. Defects in a
//! presentation (missing tables, generator indices out of range) panic, since
//! continuing would silently produce a wrong normal form.

use thiserror::Error;

/// Errors reported before any mutation of the exponent vector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectError {
    /// A flat word list has odd length and cannot be read as pairs.
    #[error("Length of word odd: {length}")]
    InvalidWord { length: usize },

    /// The exponent vector is shorter than the number of generators.
    #[error("Vector too short: length {length}, presentation has {ngens} generators")]
    VectorTooShort { length: usize, ngens: usize },

    /// A syllable in a flat word has exponent zero.
    #[error("Syllable {position} has exponent zero")]
    ZeroExponent { position: usize },

    /// A syllable in a flat word names generator index zero or a negative index.
    #[error("Syllable {position} has invalid generator {value}")]
    InvalidGenerator { position: usize, value: i64 },
}

pub type Result<T> = std::result::Result<T, CollectError>;

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Collection from the left for polycyclic presentations.
//!
//! Given a polycyclic presentation of a solvable group (generators with power
//! relations, conjugate relations and commute markers), the collector
//! rewrites any word over the generators into the unique normal form
//! `g1^e1 g2^e2 ... gn^en`, stored as an exponent vector.
//!
//! # Architecture
//!
//! The implementation separates immutable and mutable data:
//!
//! ## Immutable: the presentation
//!
//! A [`Presentation`] is built once with [`PresentationBuilder`] and never
//! changes. Relation tables are sparse: a missing entry means "no relation
//! recorded", never zero.
//!
//! ## Mutable: vector and stack
//!
//! - [`ExponentVector`] - the accumulator, and the result
//! - [`WordStack`] - words still waiting to be collected, replacing recursion
//!
//! Each [`Collector`] owns its own stack, so independent collectors can share
//! one presentation across threads.
//!
//! # Example
//!
//! ```
//! use pc_collect::{collect, ExponentVector, Presentation, Word};
//!
//! // Heisenberg group: y^x = y*z, z central
//! let heisenberg = Presentation::builder(3)
//!     .conjugate(2, 1, Word::from_pairs([(2, 1), (3, 1)]))
//!     .inverse_conjugate(2, 1, Word::from_pairs([(2, -1), (3, -1)]))
//!     .conjugate_by_inverse(2, 1, Word::from_pairs([(2, 1), (3, -1)]))
//!     .inverse_conjugate_by_inverse(2, 1, Word::from_pairs([(2, -1), (3, 1)]))
//!     .central(2)
//!     .build();
//!
//! let mut v = ExponentVector::zeros(3);
//! collect(&heisenberg, &mut v, &Word::from_pairs([(2, 1), (1, 1)])).unwrap();
//! assert_eq!(v, ExponentVector::from_i64s(&[1, 1, 1]));
//! ```
//!
//! # References
//!
//! - Vaughan-Lee, M. R. (1990). "Collection from the left." J. Symbolic
//!   Computation 9, 725-733.
//! - Leedham-Green, C. R. and Soicher, L. H. (1990). "Collection from the
//!   left and other strategies." J. Symbolic Computation 9, 665-675.

pub mod collector;
pub mod error;
pub mod generator;
pub mod presentation;
pub mod vector;
pub mod word;

// Re-export commonly used types
pub use collector::{collect, Collector, CollectorConfig, Counters, Statistics, WordStack};
pub use error::CollectError;
pub use generator::{Generator, Sign};
pub use presentation::{Presentation, PresentationBuilder};
pub use vector::{add_in, ExponentVector};
pub use word::{Syllable, Word};

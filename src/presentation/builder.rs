// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Builder for [`Presentation`].
//!
//! Every relation is checked as it is added. A relation naming a generator
//! outside the presentation, or a relation word that reaches below the
//! generator it describes, is a defect in the caller's data and panics.
//!
//! # Example
//!
//! ```
//! use pc_collect::{Presentation, Word};
//!
//! // S3 = <a, b | a^2, b^3, b^a = b^2>
//! let s3 = Presentation::builder(2)
//!     .relative_order(1, 2)
//!     .relative_order(2, 3)
//!     .conjugate(2, 1, Word::from_pairs([(2, 2)]))
//!     .inverse_conjugate(2, 1, Word::from_pairs([(2, 1)]))
//!     .conjugate_by_inverse(2, 1, Word::from_pairs([(2, 2)]))
//!     .inverse_conjugate_by_inverse(2, 1, Word::from_pairs([(2, 1)]))
//!     .build();
//!
//! let v = s3.normal_form(&Word::from_pairs([(2, 1), (1, 1)])).unwrap();
//! assert_eq!(v.to_word(), Word::from_pairs([(1, 1), (2, 2)]));
//! ```

use super::{ConjugateTable, ConjugateTables, Presentation};
use crate::generator::Generator;
use crate::word::Word;
use num_bigint::BigInt;
use num_traits::Signed;

/// Incrementally assembles a [`Presentation`].
///
/// Generators default to infinite relative order, no power words, no
/// conjugate words and `commute(g) == gn` (may fail to commute with anything
/// above).
#[derive(Debug, Clone)]
pub struct PresentationBuilder {
    presentation: Presentation,
}

impl PresentationBuilder {
    pub fn new(ngens: usize) -> Self {
        assert!(
            ngens <= u32::MAX as usize,
            "Too many generators: {}",
            ngens
        );
        let commute = Generator::try_new(ngens as u32)
            .map(|top| vec![top; ngens])
            .unwrap_or_default();
        Self {
            presentation: Presentation {
                ngens,
                commute,
                relative_orders: vec![None; ngens],
                powers: vec![None; ngens],
                inverse_powers: vec![None; ngens],
                conjugates: ConjugateTables::default(),
            },
        }
    }

    /// Set the relative order of generator `g`.
    pub fn relative_order(mut self, g: u32, order: impl Into<BigInt>) -> Self {
        let g = self.generator(g);
        let order = order.into();
        assert!(
            order.is_positive(),
            "Relative order of {} must be positive, got {}",
            g,
            order
        );
        self.presentation.relative_orders[g.offset()] = Some(order);
        self
    }

    /// Set the word for `g^r` (`r` the relative order). An empty word means
    /// the power is trivial and is stored as "no relation".
    pub fn power(mut self, g: u32, word: Word) -> Self {
        let g = self.generator(g);
        self.check_above(g, &word);
        self.presentation.powers[g.offset()] = Some(word).filter(|w| !w.is_empty());
        self
    }

    /// Set the word for `g^-r`.
    pub fn inverse_power(mut self, g: u32, word: Word) -> Self {
        let g = self.generator(g);
        self.check_above(g, &word);
        self.presentation.inverse_powers[g.offset()] = Some(word).filter(|w| !w.is_empty());
        self
    }

    /// Record `h^g`.
    pub fn conjugate(self, h: u32, g: u32, word: Word) -> Self {
        self.insert_conjugate(h, g, word, |t| &mut t.conjugates)
    }

    /// Record `(h^-1)^g`.
    pub fn inverse_conjugate(self, h: u32, g: u32, word: Word) -> Self {
        self.insert_conjugate(h, g, word, |t| &mut t.inverse_conjugates)
    }

    /// Record `h^(g^-1)`.
    pub fn conjugate_by_inverse(self, h: u32, g: u32, word: Word) -> Self {
        self.insert_conjugate(h, g, word, |t| &mut t.conjugates_by_inverse)
    }

    /// Record `(h^-1)^(g^-1)`.
    pub fn inverse_conjugate_by_inverse(self, h: u32, g: u32, word: Word) -> Self {
        self.insert_conjugate(h, g, word, |t| &mut t.inverse_conjugates_by_inverse)
    }

    /// Set the commute marker of `g`: every generator above `limit` is
    /// central in the subgroup generated by `g` and the generators above it.
    pub fn commute(mut self, g: u32, limit: u32) -> Self {
        let g = self.generator(g);
        let limit = self.generator(limit);
        assert!(
            limit >= g,
            "Commute marker {} of {} lies below the generator",
            limit,
            g
        );
        self.presentation.commute[g.offset()] = limit;
        self
    }

    /// Mark `g` as commuting with every generator above it. The generators
    /// above `g` must commute with each other as well.
    pub fn central(self, g: u32) -> Self {
        self.commute(g, g)
    }

    pub fn build(self) -> Presentation {
        self.presentation
    }

    fn insert_conjugate(
        mut self,
        h: u32,
        g: u32,
        word: Word,
        table: fn(&mut ConjugateTables) -> &mut ConjugateTable,
    ) -> Self {
        let h = self.generator(h);
        let g = self.generator(g);
        assert!(h > g, "Conjugate relation {}^{} needs {} > {}", h, g, h, g);
        assert!(!word.is_empty(), "Conjugate word for {}^{} is empty", h, g);
        self.check_above(g, &word);
        table(&mut self.presentation.conjugates).insert(h, g, word);
        self
    }

    fn generator(&self, index: u32) -> Generator {
        let g = Generator::new(index);
        assert!(
            self.presentation.contains(g),
            "Generator {} out of range for presentation with {} generators",
            g,
            self.presentation.ngens
        );
        g
    }

    /// Relation words for `g` may only use generators above `g`.
    fn check_above(&self, g: Generator, word: &Word) {
        for s in word {
            assert!(
                s.generator > g && self.presentation.contains(s.generator),
                "Relation word {} for {} uses generator {}",
                word,
                g,
                s.generator
            );
        }
    }
}

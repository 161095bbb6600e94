// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Polycyclic presentations (the relation table).
//!
//! A presentation on generators `g1 < g2 < ... < gn` records:
//! - a relative order for some generators (absent means infinite order),
//! - power words: `gi^ri` and `gi^-ri` expressed in generators above `gi`,
//! - conjugate words: `gj^gi`, `(gj^-1)^gi`, `gj^(gi^-1)` and
//!   `(gj^-1)^(gi^-1)` for `j > i`, expressed in generators above `gi`,
//! - a commute marker: every generator above `commute(gi)` is central in the
//!   subgroup generated by `gi` and all higher generators.
//!   `commute(gi) == gi` means `gi` commutes with every generator above it,
//!   and those generators commute with each other.
//!
//! All tables are sparse. A missing entry means "no relation recorded", which
//! is distinct from any arithmetic value: a missing conjugate means the plain
//! generator is its own conjugate, a missing power word means the power is
//! trivial.
//!
//! Presentations are immutable once built; see [`PresentationBuilder`].

pub mod builder;

pub use builder::PresentationBuilder;

use crate::collector::Collector;
use crate::error::Result;
use crate::generator::{Generator, Sign};
use crate::vector::ExponentVector;
use crate::word::Word;
use num_bigint::BigInt;

/// A sparse table of words indexed by `(h, g)` with `h > g`.
///
/// Lookups beyond the recorded extent return `None`.
#[derive(Debug, Clone, Default)]
pub(crate) struct ConjugateTable {
    rows: Vec<Vec<Option<Word>>>,
}

impl ConjugateTable {
    /// The word recorded for `(h, g)`, if any.
    pub(crate) fn get(&self, h: Generator, g: Generator) -> Option<&Word> {
        self.rows.get(h.offset())?.get(g.offset())?.as_ref()
    }

    pub(crate) fn insert(&mut self, h: Generator, g: Generator, word: Word) {
        if self.rows.len() <= h.offset() {
            self.rows.resize_with(h.offset() + 1, Vec::new);
        }
        let row = &mut self.rows[h.offset()];
        if row.len() <= g.offset() {
            row.resize_with(g.offset() + 1, || None);
        }
        row[g.offset()] = Some(word);
    }
}

/// The four conjugate tables, selected by the sign of the conjugated
/// generator and the sign of the conjugating one.
#[derive(Debug, Clone, Default)]
pub(crate) struct ConjugateTables {
    /// `h^g`
    pub conjugates: ConjugateTable,
    /// `(h^-1)^g`
    pub inverse_conjugates: ConjugateTable,
    /// `h^(g^-1)`
    pub conjugates_by_inverse: ConjugateTable,
    /// `(h^-1)^(g^-1)`
    pub inverse_conjugates_by_inverse: ConjugateTable,
}

impl ConjugateTables {
    fn select(&self, h_sign: Sign, g_sign: Sign) -> &ConjugateTable {
        match (h_sign, g_sign) {
            (Sign::Positive, Sign::Positive) => &self.conjugates,
            (Sign::Negative, Sign::Positive) => &self.inverse_conjugates,
            (Sign::Positive, Sign::Negative) => &self.conjugates_by_inverse,
            (Sign::Negative, Sign::Negative) => &self.inverse_conjugates_by_inverse,
        }
    }
}

/// An immutable polycyclic presentation.
#[derive(Debug, Clone)]
pub struct Presentation {
    ngens: usize,
    commute: Vec<Generator>,
    relative_orders: Vec<Option<BigInt>>,
    powers: Vec<Option<Word>>,
    inverse_powers: Vec<Option<Word>>,
    conjugates: ConjugateTables,
}

impl Presentation {
    /// Start building a presentation on `ngens` generators.
    pub fn builder(ngens: usize) -> PresentationBuilder {
        PresentationBuilder::new(ngens)
    }

    /// Number of generators.
    pub fn ngens(&self) -> usize {
        self.ngens
    }

    /// The highest generator, or None for the trivial presentation.
    pub fn last_generator(&self) -> Option<Generator> {
        Generator::try_new(self.ngens as u32)
    }

    /// All generators in ascending order.
    pub fn generators(&self) -> impl DoubleEndedIterator<Item = Generator> {
        (1..=self.ngens as u32).map(Generator::new)
    }

    /// True if `g` is a generator of this presentation.
    pub fn contains(&self, g: Generator) -> bool {
        g.offset() < self.ngens
    }

    /// Every generator above `commute(g)` is central in the subgroup
    /// generated by `g` and the generators above it.
    ///
    /// # Panics
    ///
    /// Panics if `g` is not a generator of this presentation.
    pub fn commute(&self, g: Generator) -> Generator {
        self.commute[self.checked(g)]
    }

    /// True if `g` commutes with every generator above it (and those
    /// generators with each other).
    pub fn is_central_above(&self, g: Generator) -> bool {
        self.commute(g) == g
    }

    /// Relative order of `g`, or None for infinite relative order.
    pub fn relative_order(&self, g: Generator) -> Option<&BigInt> {
        self.relative_orders.get(g.offset())?.as_ref()
    }

    /// The word for `g^r` where `r` is the relative order of `g`.
    pub fn power(&self, g: Generator) -> Option<&Word> {
        self.powers.get(g.offset())?.as_ref()
    }

    /// The word for `g^-r` where `r` is the relative order of `g`.
    pub fn inverse_power(&self, g: Generator) -> Option<&Word> {
        self.inverse_powers.get(g.offset())?.as_ref()
    }

    /// The word for `(h^±1)^(g^±1)`, if one is recorded.
    pub fn conjugate(&self, h: Generator, h_sign: Sign, g: Generator, g_sign: Sign) -> Option<&Word> {
        self.conjugates.select(h_sign, g_sign).get(h, g)
    }

    /// The normal form of `word`, collected into a fresh zero vector.
    pub fn normal_form(&self, word: &Word) -> Result<ExponentVector> {
        let mut vector = ExponentVector::zeros(self.ngens);
        Collector::new(self).collect(&mut vector, word)?;
        Ok(vector)
    }

    /// The normal form of the product `a * b` of two normal forms.
    pub fn multiply(&self, a: &ExponentVector, b: &ExponentVector) -> Result<ExponentVector> {
        let mut product = a.clone();
        Collector::new(self).collect(&mut product, &b.to_word())?;
        Ok(product)
    }

    fn checked(&self, g: Generator) -> usize {
        assert!(
            self.contains(g),
            "Generator {} out of range for presentation with {} generators",
            g,
            self.ngens
        );
        g.offset()
    }
}

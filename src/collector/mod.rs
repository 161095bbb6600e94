// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Collection from the left.
//!
//! The collector multiplies a word onto an exponent vector and leaves the
//! normal form of the product in the vector. Work that would be recursive
//! (collecting a conjugate word, collecting a power word) is pushed onto a
//! [`WordStack`] instead, so the call depth stays constant.
//!
//! # Algorithm
//!
//! The driver repeatedly looks at the top frame of the stack, with active
//! generator `g`:
//!
//! 1. **Fast path.** If `g` commutes with every generator above it, the frame
//!    is at the start of a repeat, and it is not the frame of the word being
//!    collected, the whole remaining `word^repeat` is added to the vector in
//!    one go. A reduction sweep over `g..=gn` then brings every exponent into
//!    range, adding power words as needed.
//! 2. **Slow path.** Otherwise one unit of `g` (or `g^-1`) is collected. If
//!    `g` commutes with everything above it the whole syllable is collected
//!    at once. The exponent of `g` is reduced, but the resulting power word
//!    is held back. Generators above `g` that do not commute with it are then
//!    taken out of the vector and pushed as words, highest first: plain
//!    generators above the highest one with a recorded conjugate, conjugate
//!    words from there down to `g+1`. The held-back power word goes on top.
//! 3. **Collapse.** Frames whose syllable is used up move to the next
//!    syllable, start the next repeat, or are popped.
//!
//! Because flushed generators are pushed highest first, the next frame
//! collected is always the lowest outstanding one, and the vector only ever
//! holds generators that are fully collected.

pub mod stack;
pub mod statistics;

pub use stack::{Frame, StackMark, WordStack, DEFAULT_STACK_CAPACITY};
pub use statistics::{Counters, Statistics};

use crate::error::{CollectError, Result};
use crate::generator::{Generator, Sign};
use crate::presentation::Presentation;
use crate::vector::ExponentVector;
use crate::word::Word;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use stack::Advance;
use tracing::{debug, trace};

/// Default ceiling on driver steps per collection.
///
/// A consistent presentation always terminates; an inconsistent one can loop
/// forever. The ceiling turns that into a panic.
pub const DEFAULT_STEP_LIMIT: u64 = 1 << 32;

/// Collector settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Maximum number of driver steps in one collection, or None for no
    /// limit.
    pub step_limit: Option<u64>,
    /// Initial capacity of the collector's stack.
    pub stack_capacity: usize,
}

impl CollectorConfig {
    pub fn with_step_limit(mut self, step_limit: Option<u64>) -> Self {
        self.step_limit = step_limit;
        self
    }

    pub fn with_stack_capacity(mut self, stack_capacity: usize) -> Self {
        self.stack_capacity = stack_capacity;
        self
    }
}

impl Default for CollectorConfig {
    /// The step ceiling is on in debug builds and with the `step-limit`
    /// feature.
    fn default() -> Self {
        Self {
            step_limit: if cfg!(any(debug_assertions, feature = "step-limit")) {
                Some(DEFAULT_STEP_LIMIT)
            } else {
                None
            },
            stack_capacity: DEFAULT_STACK_CAPACITY,
        }
    }
}

/// Collects words against one presentation.
///
/// A collector owns its stack and statistics; reuse it for many collections
/// to avoid reallocating the stack.
///
/// # Example
///
/// ```
/// use pc_collect::{Collector, ExponentVector, Presentation, Word};
///
/// let abelian = Presentation::builder(2).central(1).central(2).build();
/// let mut collector = Collector::new(&abelian);
/// let mut v = ExponentVector::zeros(2);
/// collector.collect_flat(&mut v, &[1, 3, 2, -2, 1, 1]).unwrap();
/// assert_eq!(v, ExponentVector::from_i64s(&[4, -2]));
/// ```
#[derive(Debug)]
pub struct Collector<'p> {
    presentation: &'p Presentation,
    stack: WordStack,
    config: CollectorConfig,
    statistics: Statistics,
}

impl<'p> Collector<'p> {
    pub fn new(presentation: &'p Presentation) -> Self {
        Self::with_config(presentation, CollectorConfig::default())
    }

    pub fn with_config(presentation: &'p Presentation, config: CollectorConfig) -> Self {
        Self {
            presentation,
            stack: WordStack::with_capacity(config.stack_capacity),
            config,
            statistics: Statistics::new(),
        }
    }

    pub fn presentation(&self) -> &'p Presentation {
        self.presentation
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Counters accumulated over every collection so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn reset_statistics(&mut self) {
        self.statistics.reset();
    }

    /// The collector's own stack (empty between collections).
    pub fn stack(&self) -> &WordStack {
        &self.stack
    }

    /// Multiply `word` onto `vector`, leaving the normal form in `vector`.
    ///
    /// `vector` must already be a normal form (for example the zero vector)
    /// with at least `ngens` entries. Frames left on the collector's stack by
    /// an earlier panicked collection are discarded first.
    ///
    /// # Errors
    ///
    /// [`CollectError::VectorTooShort`] if `vector` has fewer entries than
    /// the presentation has generators. Nothing is modified on error.
    ///
    /// # Panics
    ///
    /// Panics if `word` names a generator outside the presentation, or if
    /// the step limit is exceeded.
    pub fn collect(&mut self, vector: &mut ExponentVector, word: &Word) -> Result<()> {
        self.stack.clear();
        Driver::new(self.presentation, &self.config, &mut self.statistics).run(
            &mut self.stack,
            vector,
            word,
        )
    }

    /// Like [`collect`](Self::collect), but on a caller-owned stack.
    ///
    /// The collection runs above whatever frames `stack` already holds and
    /// leaves them untouched.
    pub fn collect_on(
        &mut self,
        stack: &mut WordStack,
        vector: &mut ExponentVector,
        word: &Word,
    ) -> Result<()> {
        Driver::new(self.presentation, &self.config, &mut self.statistics).run(stack, vector, word)
    }

    /// Read a flat `[g1, e1, g2, e2, ...]` list and collect it.
    ///
    /// # Errors
    ///
    /// [`CollectError::InvalidWord`] for an odd-length list, plus the errors
    /// of [`Word::from_flat`] and [`collect`](Self::collect).
    pub fn collect_flat(&mut self, vector: &mut ExponentVector, flat: &[i64]) -> Result<()> {
        let word = Word::from_flat(flat)?;
        self.collect(vector, &word)
    }
}

/// Multiply `word` onto `vector` with a fresh collector.
pub fn collect(presentation: &Presentation, vector: &mut ExponentVector, word: &Word) -> Result<()> {
    Collector::new(presentation).collect(vector, word)
}

/// A power word held back until the conjugate flush is done.
struct Overflow<'p> {
    word: &'p Word,
    scalar: BigInt,
}

/// State of one collection.
struct Driver<'a, 'p> {
    presentation: &'p Presentation,
    statistics: &'a mut Statistics,
    step_limit: Option<u64>,
    steps: u64,
}

impl<'a, 'p> Driver<'a, 'p> {
    fn new(
        presentation: &'p Presentation,
        config: &CollectorConfig,
        statistics: &'a mut Statistics,
    ) -> Self {
        Self {
            presentation,
            statistics,
            step_limit: config.step_limit,
            steps: 0,
        }
    }

    fn run(&mut self, stack: &mut WordStack, vector: &mut ExponentVector, word: &Word) -> Result<()> {
        let ngens = self.presentation.ngens();
        self.statistics.increment_counter(Counters::Collections);

        if word.is_empty() {
            return Ok(());
        }
        if vector.len() < ngens {
            return Err(CollectError::VectorTooShort {
                length: vector.len(),
                ngens,
            });
        }
        if let Some(top) = word.max_generator() {
            assert!(
                self.presentation.contains(top),
                "Word {} uses generator {} outside presentation with {} generators",
                word,
                top,
                ngens
            );
        }

        debug!(ngens, syllables = word.len(), "collecting word");

        let bottom = stack.mark();
        stack.push(Frame::new(word.clone(), BigInt::one()));

        while stack.is_above(bottom) {
            self.tick();

            let Some(frame) = stack.top() else { break };
            let g = frame.generator();
            let nested = stack.depth() - bottom.depth() > 1;

            if nested && frame.at_start() && self.presentation.is_central_above(g) {
                if let Some(frame) = stack.pop() {
                    self.add_frame(vector, g, &frame);
                }
            } else {
                self.collect_unit(stack, vector);
            }

            Self::collapse(stack, bottom);
        }

        debug_assert_eq!(stack.depth(), bottom.depth());
        stack.rewind_to(bottom);
        debug!(steps = self.steps, "collection finished");
        Ok(())
    }

    fn tick(&mut self) {
        self.steps += 1;
        if let Some(limit) = self.step_limit {
            if self.steps > limit {
                panic!(
                    "Collection step limit exceeded: {} steps (inconsistent presentation?)",
                    limit
                );
            }
        }
    }

    /// Fast path: add `word^repeat` of a frame whose first generator commutes
    /// with everything above it, then reduce `g..=gn`.
    fn add_frame(&mut self, vector: &mut ExponentVector, g: Generator, frame: &Frame) {
        self.statistics.increment_counter(Counters::FastPathFrames);
        vector.add_in(frame.word(), frame.repeat());

        let Some(last) = self.presentation.last_generator() else {
            return;
        };
        for h in g.up_to(last) {
            if vector[h].is_zero() {
                continue;
            }
            if let Some(overflow) = self.reduce(vector, h) {
                vector.add_in(overflow.word, &overflow.scalar);
            }
        }
    }

    /// Slow path: collect one unit of the top frame's generator (or the
    /// whole syllable if the generator commutes with everything above it).
    fn collect_unit(&mut self, stack: &mut WordStack, vector: &mut ExponentVector) {
        let presentation = self.presentation;
        self.statistics.increment_counter(Counters::SlowPathSteps);

        let Some(frame) = stack.top_mut() else {
            return;
        };
        let g = frame.generator();
        let direction = if presentation.is_central_above(g) {
            vector[g] += frame.take_pending();
            Sign::Positive
        } else {
            let direction = Sign::of(frame.pending());
            frame.step_pending(direction.unit());
            vector[g] += direction.unit();
            direction
        };

        let overflow = self.reduce(vector, g);

        // Highest generator that needs a conjugate relation to move past g.
        let top = presentation.commute(g);
        let pivot = g.next().up_to(top).rev().find(|&h| {
            let e = &vector[h];
            !e.is_zero() && presentation.conjugate(h, Sign::of(e), g, direction).is_some()
        });

        if pivot.is_some() || overflow.is_some() {
            let stop = pivot.unwrap_or(g);
            for h in stop.next().up_to(top).rev() {
                if let Some((sign, repeat)) = Self::take_exponent(vector, h) {
                    self.statistics.increment_counter(Counters::PlainFrames);
                    stack.push(Frame::new(Word::generator(h, sign), repeat));
                }
            }
        }

        if let Some(pivot) = pivot {
            for h in g.next().up_to(pivot).rev() {
                if let Some((sign, repeat)) = Self::take_exponent(vector, h) {
                    let word = match presentation.conjugate(h, sign, g, direction) {
                        Some(conjugate) => conjugate.clone(),
                        None => Word::generator(h, sign),
                    };
                    trace!(%h, %g, %word, %repeat, "pushing conjugate");
                    self.statistics.increment_counter(Counters::ConjugateFrames);
                    stack.push(Frame::new(word, repeat));
                }
            }
        }

        if let Some(overflow) = overflow {
            stack.push(Frame::new(overflow.word.clone(), overflow.scalar));
        }
    }

    /// Clear `vector[h]`, returning its sign and magnitude if it was nonzero.
    fn take_exponent(vector: &mut ExponentVector, h: Generator) -> Option<(Sign, BigInt)> {
        if vector[h].is_zero() {
            return None;
        }
        let e = vector.take(h);
        Some((Sign::of(&e), e.abs()))
    }

    /// Bring `vector[h]` into `0..r` for relative order `r`, returning the
    /// power word to multiply on and its scalar.
    ///
    /// A quotient of zero returns no power word even if the value changed.
    fn reduce(&mut self, vector: &mut ExponentVector, h: Generator) -> Option<Overflow<'p>> {
        let presentation = self.presentation;
        let order = presentation.relative_order(h)?;

        let value = &vector[h];
        let too_large = if value >= order {
            true
        } else if value.is_negative() {
            false
        } else {
            return None;
        };
        let (quotient, remainder) = value.div_mod_floor(order);
        vector[h] = remainder;

        let (relation, scalar) = if too_large {
            (presentation.power(h), quotient)
        } else {
            (presentation.inverse_power(h), -quotient)
        };
        let word = relation?;
        if scalar.is_zero() {
            return None;
        }

        trace!(%h, %word, %scalar, "power substitution");
        self.statistics.increment_counter(Counters::PowerSubstitutions);
        Some(Overflow { word, scalar })
    }

    /// Pop or advance frames whose active syllable is used up.
    fn collapse(stack: &mut WordStack, bottom: StackMark) {
        while stack.is_above(bottom) {
            let Some(frame) = stack.top_mut() else { break };
            if !frame.pending().is_zero() {
                break;
            }
            if frame.advance() == Advance::Exhausted {
                stack.pop();
            }
        }
    }
}

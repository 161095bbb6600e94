// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The word stack that replaces recursion in the collector.
//!
//! Each frame is a word still waiting to be multiplied onto the exponent
//! vector, together with how much of it is left: whole-word repeats, the
//! current syllable, and the part of that syllable's exponent not yet
//! collected.
//!
//! # Reentrancy
//!
//! A collection runs above the depth the stack had when it started. The
//! caller saves that depth with [`WordStack::mark`] and the collection
//! never pops below it. A stack may therefore be shared by nested
//! collections, provided each one is started and finished in strict
//! LIFO order: save the mark before the nested call, rewind to it after.

use crate::generator::Generator;
use crate::word::{Syllable, Word};
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Initial capacity of a fresh stack.
pub const DEFAULT_STACK_CAPACITY: usize = 64;

/// A pending word on the stack.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The word being collected
    word: Word,
    /// Whole-word repeats left, counting the current one
    repeat: BigInt,
    /// Index of the active syllable
    syllable: usize,
    /// Exponent of the active syllable not yet collected
    pending: BigInt,
}

/// What happened when a frame moved past its active syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Advance {
    /// The frame has more to collect.
    Continue,
    /// The last repeat of the word is done.
    Exhausted,
}

impl Frame {
    /// A frame collecting `word^repeat`.
    ///
    /// # Panics
    ///
    /// Panics if `word` is empty or `repeat` is not positive.
    pub fn new(word: Word, repeat: BigInt) -> Self {
        assert!(repeat > BigInt::zero(), "Frame repeat must be positive, got {}", repeat);
        let pending = match word.get(0) {
            Some(first) => first.exponent.clone(),
            None => panic!("Cannot push the empty word onto the collection stack"),
        };
        Self {
            word,
            repeat,
            syllable: 0,
            pending,
        }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn repeat(&self) -> &BigInt {
        &self.repeat
    }

    pub fn pending(&self) -> &BigInt {
        &self.pending
    }

    /// True if the frame sits at the first syllable of a fresh repeat.
    pub fn at_start(&self) -> bool {
        self.syllable == 0 && self.pending == self.active().exponent
    }

    /// The generator of the active syllable.
    pub fn generator(&self) -> Generator {
        self.active().generator
    }

    fn active(&self) -> &Syllable {
        &self.word.syllables()[self.syllable]
    }

    /// Take the whole pending exponent of the active syllable.
    pub(crate) fn take_pending(&mut self) -> BigInt {
        std::mem::take(&mut self.pending)
    }

    /// Move one unit of the pending exponent towards zero.
    pub(crate) fn step_pending(&mut self, unit: i64) {
        self.pending -= unit;
    }

    /// Move to the next syllable, rewinding to the first one for the next
    /// repeat when the word is finished.
    pub(crate) fn advance(&mut self) -> Advance {
        self.syllable += 1;
        if self.syllable >= self.word.len() {
            self.repeat -= BigInt::one();
            if self.repeat.is_zero() {
                return Advance::Exhausted;
            }
            self.syllable = 0;
        }
        self.pending = self.active().exponent.clone();
        Advance::Continue
    }
}

/// A saved stack depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StackMark(usize);

impl StackMark {
    pub fn depth(self) -> usize {
        self.0
    }
}

/// The collection stack.
///
/// This is mutable state owned by one collector; frames are pushed in the
/// order they must be collected last-first.
#[derive(Debug)]
pub struct WordStack {
    frames: Vec<Frame>,
}

impl WordStack {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_STACK_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
        }
    }

    /// Save the current depth.
    pub fn mark(&self) -> StackMark {
        StackMark(self.frames.len())
    }

    /// Discard every frame above `mark`.
    ///
    /// # Panics
    ///
    /// Panics if the stack is already below `mark`: frames were popped that
    /// belonged to an enclosing activation.
    pub fn rewind_to(&mut self, mark: StackMark) {
        assert!(
            self.frames.len() >= mark.0,
            "Stack underflow: depth {} is below saved mark {}",
            self.frames.len(),
            mark.0
        );
        self.frames.truncate(mark.0);
    }

    /// Discard every frame.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// True if the stack holds frames above `mark`.
    pub fn is_above(&self, mark: StackMark) -> bool {
        self.frames.len() > mark.0
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    /// Number of frames on the stack.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl Default for WordStack {
    fn default() -> Self {
        Self::new()
    }
}

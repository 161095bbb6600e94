// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the collector and accumulate over every
//! collection it runs, until reset.

use std::fmt;
use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Collections started (including empty words).
    Collections,
    /// Frames added in one go by the fast path.
    FastPathFrames,
    /// Steps taken by the slow path.
    SlowPathSteps,
    /// Power or inverse-power words substituted on overflow.
    PowerSubstitutions,
    /// Conjugate words pushed by a conjugate flush.
    ConjugateFrames,
    /// Plain generator words pushed by a conjugate flush.
    PlainFrames,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub fn reset(&mut self) {
        self.stats = [0; Counters::COUNT];
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use strum::IntoEnumIterator;
        for (i, counter) in Counters::iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        Ok(())
    }
}

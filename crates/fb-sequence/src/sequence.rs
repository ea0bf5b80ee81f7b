//! The lazy `1..=max` FizzBuzz sequence.

use std::fmt;
use std::iter::FusedIterator;

use crate::classify::{classify, Classification};

/// Upper bound used when none is given.
pub const DEFAULT_MAX: u64 = 100;

/// One output line: the number and what it prints as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub n: u64,
    pub class: Classification,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.class, f)
    }
}

/// The sequence `1..=max`, classified.
///
/// Holds only the bound. Every call to [`FizzBuzz::iter`] (or `into_iter`)
/// starts again from 1, so the same value can be printed any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FizzBuzz {
    max: u64,
}

impl Default for FizzBuzz {
    fn default() -> Self {
        Self::new(DEFAULT_MAX)
    }
}

impl FizzBuzz {
    /// Sequence over `1..=max`. `max == 0` is empty.
    pub fn new(max: u64) -> Self {
        Self { max }
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    /// Number of lines the sequence produces.
    pub fn len(&self) -> u64 {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        self.max == 0
    }

    pub fn iter(&self) -> Iter {
        Iter::new(self.max)
    }
}

impl IntoIterator for FizzBuzz {
    type Item = Line;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &FizzBuzz {
    type Item = Line;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the lines of a [`FizzBuzz`] sequence.
///
/// Exact-size on 64-bit targets. Elsewhere a bound past `usize::MAX`
/// reports an unbounded `size_hint`.
#[derive(Debug, Clone)]
pub struct Iter {
    front: u64,
    back: u64,
    exhausted: bool,
}

impl Iter {
    fn new(max: u64) -> Self {
        Self {
            front: 1,
            back: max,
            exhausted: max == 0,
        }
    }

    fn remaining(&self) -> Option<usize> {
        if self.exhausted {
            return Some(0);
        }
        usize::try_from(self.back - self.front)
            .ok()
            .and_then(|r| r.checked_add(1))
    }
}

impl Iterator for Iter {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        if self.exhausted {
            return None;
        }
        let n = self.front;
        if n == self.back {
            self.exhausted = true;
        } else {
            self.front += 1;
        }
        Some(Line { n, class: classify(n) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

impl DoubleEndedIterator for Iter {
    fn next_back(&mut self) -> Option<Line> {
        if self.exhausted {
            return None;
        }
        let n = self.back;
        if n == self.front {
            self.exhausted = true;
        } else {
            self.back -= 1;
        }
        Some(Line { n, class: classify(n) })
    }
}

/// Any `u64` bound fits in `usize` only on 64-bit targets.
#[cfg(target_pointer_width = "64")]
impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}

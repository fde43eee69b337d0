//! Discrete gene copy counts.
//!
//! A person carries 0, 1, or 2 copies of the modeled gene. The three
//! values double as bucket indices into per-person accumulators.

use std::fmt;

/// Number of copies of the modeled gene a person carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GeneCount {
    Zero,
    One,
    Two,
}

impl GeneCount {
    /// All values, ordered by copy count.
    pub const ALL: [GeneCount; 3] = [GeneCount::Zero, GeneCount::One, GeneCount::Two];

    /// Bucket index (0, 1, or 2) into per-person accumulators.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for GeneCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

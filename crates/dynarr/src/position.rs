//! Epoch-scoped position descriptors.
//!
//! A [`Position`] names a slot by index and records the array epoch it was
//! issued in. Any capacity change advances the epoch, so a position held
//! across a relocation is detected in O(1) instead of silently addressing
//! moved storage.

use std::fmt;

/// Index of a slot plus the epoch it is valid for.
///
/// Positions are plain values: they borrow nothing and can be stored, but
/// the array only honours them while its epoch is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub(crate) epoch: u32,
    pub(crate) index: usize,
}

impl Position {
    pub(crate) fn new(epoch: u32, index: usize) -> Self {
        Self { epoch, index }
    }

    /// Slot index this position refers to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Epoch the position was issued in.
    pub fn epoch(&self) -> u32 {
        self.epoch
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(epoch={}, index={})", self.epoch, self.index)
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Residue type: the remainder of a number modulo [`PERIOD`].

use super::constants::PERIOD;
use super::unsigned::Unsigned;

/// A residue in the range 0..PERIOD.
///
/// This is a newtype wrapper so that table indices cannot be mixed up with
/// the numbers being classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Residue(u8);

impl Residue {
    /// Create a new residue, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= PERIOD`.
    pub fn new(value: u8) -> Self {
        assert!((value as usize) < PERIOD, "Residue out of range: {}", value);
        Self(value)
    }

    /// Try to create a new residue, returning None if out of range.
    pub fn try_new(value: u8) -> Option<Self> {
        if (value as usize) < PERIOD {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Reduce any native unsigned integer to its residue.
    ///
    /// Total over the whole domain of `N`, including `N::MAX`.
    #[inline]
    pub fn of<N: Unsigned>(n: N) -> Self {
        Self(n.remainder(PERIOD as u8))
    }

    /// Iterate over all residues in increasing order.
    pub fn all() -> impl Iterator<Item = Residue> {
        (0..PERIOD as u8).map(Residue)
    }

    /// Get the underlying value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the residue as a usize (for array indexing).
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

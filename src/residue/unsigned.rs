// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The native unsigned integer types accepted by the classifiers.

use std::fmt;

use super::residue::Residue;

/// A native unsigned integer that can be classified.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`. The only
/// arithmetic performed is the native `%`, so every value of every width is
/// valid input and nothing can overflow.
///
/// The trait is sealed: [`Residue::of`] relies on `remainder` being the
/// native `%`, so no other implementations are allowed.
///
/// ```compile_fail
/// use fizz_buzz::Unsigned;
///
/// #[derive(Clone, Copy)]
/// struct Wide(u16);
///
/// impl std::fmt::Display for Wide {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
///
/// impl Unsigned for Wide {
///     fn remainder(self, _divisor: u8) -> u8 {
///         (self.0 % 256) as u8
///     }
/// }
/// ```
pub trait Unsigned: sealed::Sealed + Copy + fmt::Display {
    /// Remainder of `self` divided by a small non-zero divisor.
    ///
    /// # Panics
    ///
    /// Panics if `divisor == 0`.
    fn remainder(self, divisor: u8) -> u8;

    /// Whether `self` is an exact multiple of `divisor`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor == 0`.
    #[inline]
    fn divisible_by(self, divisor: u8) -> bool {
        self.remainder(divisor) == 0
    }

    /// The residue of `self` modulo the classification period.
    #[inline]
    fn residue(self) -> Residue {
        Residue::of(self)
    }
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Unsigned for $t {
                #[inline]
                fn remainder(self, divisor: u8) -> u8 {
                    // The result is below `divisor`, so it fits back in a u8.
                    (self % (divisor as $t)) as u8
                }
            }
        )*
    };
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for FizzBuzz classification.
//!
//! Everything else in the crate is derived from the two divisors defined
//! here. The lookup tables in [`crate::memo`] are computed from these values
//! by `const fn`, and the compile-time assertions at the bottom of this file
//! guarantee that a single remainder determines the classification.

/// Divisor that earns the word "Fizz".
pub const FIZZ_DIVISOR: u8 = 3;

/// Divisor that earns the word "Buzz".
pub const BUZZ_DIVISOR: u8 = 5;

/// Label for numbers divisible by [`FIZZ_DIVISOR`] only.
pub const FIZZ: &str = "Fizz";

/// Label for numbers divisible by [`BUZZ_DIVISOR`] only.
pub const BUZZ: &str = "Buzz";

/// Label for numbers divisible by both divisors.
pub const FIZZ_BUZZ: &str = "FizzBuzz";

/// Greatest common divisor, usable in const context.
const fn gcd(a: u8, b: u8) -> u8 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Number of distinct residues, and the period of the classification.
///
/// # Why one remainder is enough
///
/// For coprime divisors `d1` and `d2`, `n` is divisible by both exactly when
/// it is divisible by `d1 * d2`. Since `d1` and `d2` both divide `d1 * d2`,
/// `n mod d1` and `n mod d2` are both functions of `n mod (d1 * d2)`.
/// So the full classification of `n` depends on `n mod 15` alone.
pub const PERIOD: usize = (FIZZ_DIVISOR as usize) * (BUZZ_DIVISOR as usize);

/// The divisors must be coprime, otherwise the combined label would apply at
/// their least common multiple rather than their product.
const _: () = assert!(
    gcd(FIZZ_DIVISOR, BUZZ_DIVISOR) == 1,
    "divisors must be coprime"
);

/// Residues are stored in a `u8`.
const _: () = assert!(PERIOD <= u8::MAX as usize, "period must fit in a u8");

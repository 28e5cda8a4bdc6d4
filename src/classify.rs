// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Table-driven classification.
//!
//! One remainder and one array access replace the three divisibility tests
//! of the branching version in [`crate::naive`].

use std::borrow::Cow;

use crate::memo;
use crate::residue::{Residue, Unsigned};

/// Classify `n` as "FizzBuzz", "Fizz", "Buzz" or its decimal string.
///
/// Labels are borrowed from the static table; only the plain-number case
/// allocates.
///
/// # Example
///
/// ```
/// use fizz_buzz::classify;
///
/// assert_eq!(classify(15u32), "FizzBuzz");
/// assert_eq!(classify(16u64), "16");
/// ```
#[inline]
pub fn classify<N: Unsigned>(n: N) -> Cow<'static, str> {
    let residue = Residue::of(n);
    if memo::is_plain_number(residue) {
        Cow::Owned(n.to_string())
    } else {
        Cow::Borrowed(memo::label_for(residue))
    }
}

/// The label for `n`, or `None` where `n` would be printed as a number.
///
/// Same lookup as [`classify`] without the decimal formatting, so the two can
/// be benchmarked separately.
#[inline]
pub fn label<N: Unsigned>(n: N) -> Option<&'static str> {
    let residue = Residue::of(n);
    if memo::is_plain_number(residue) {
        None
    } else {
        Some(memo::label_for(residue))
    }
}

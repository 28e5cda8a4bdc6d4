// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Branching reference implementation.
//!
//! Checks 15, then 3, then 5 with the native `%` of the input type. The first
//! check is implied by the other two but is kept so this stays the textbook
//! form. Used as the oracle in differential tests and as the benchmark
//! baseline.

use std::borrow::Cow;

use crate::residue::constants::{BUZZ, BUZZ_DIVISOR, FIZZ, FIZZ_BUZZ, FIZZ_DIVISOR, PERIOD};
use crate::residue::Unsigned;

/// Classify `n` by testing each divisor in turn.
pub fn classify<N: Unsigned>(n: N) -> Cow<'static, str> {
    match label(n) {
        Some(word) => Cow::Borrowed(word),
        None => Cow::Owned(n.to_string()),
    }
}

/// The label for `n`, or `None` where `n` would be printed as a number.
pub fn label<N: Unsigned>(n: N) -> Option<&'static str> {
    if n.divisible_by(PERIOD as u8) {
        return Some(FIZZ_BUZZ);
    }
    if n.divisible_by(FIZZ_DIVISOR) {
        return Some(FIZZ);
    }
    if n.divisible_by(BUZZ_DIVISOR) {
        return Some(BUZZ);
    }
    None
}

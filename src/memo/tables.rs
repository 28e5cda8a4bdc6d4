// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The two per-residue lookup tables.
//!
//! # Layout
//!
//! Both tables are indexed by [`Residue`] (0..PERIOD):
//!
//! | r     | 0        | 1 | 2 | 3    | 4 | 5    | 6    | 7 | 8 | 9    | 10   | 11 | 12   | 13 | 14 |
//! |-------|----------|---|---|------|---|------|------|---|---|------|------|----|------|----|----|
//! | label | FizzBuzz |   |   | Fizz |   | Buzz | Fizz |   |   | Fizz | Buzz |    | Fizz |    |    |
//! | plain |          | x | x |      | x |      |      | x | x |      |      | x  |      | x  | x  |
//!
//! Residues with an empty label are exactly the ones flagged as plain numbers.
//! The flag table is kept separately so that the classifier tests a `bool`
//! rather than comparing strings.

use crate::residue::constants::{BUZZ, BUZZ_DIVISOR, FIZZ, FIZZ_BUZZ, FIZZ_DIVISOR, PERIOD};
use crate::residue::Residue;

/// Label for every residue; empty where the number itself is returned.
pub static LABELS: [&str; PERIOD] = build_labels();

/// True for every residue where no label applies.
pub static PLAIN_NUMBER: [bool; PERIOD] = build_plain_number();

const fn divides(divisor: u8, r: usize) -> bool {
    r % (divisor as usize) == 0
}

const fn build_labels() -> [&'static str; PERIOD] {
    let mut labels = [""; PERIOD];
    let mut r = 0;
    while r < PERIOD {
        labels[r] = match (divides(FIZZ_DIVISOR, r), divides(BUZZ_DIVISOR, r)) {
            (true, true) => FIZZ_BUZZ,
            (true, false) => FIZZ,
            (false, true) => BUZZ,
            (false, false) => "",
        };
        r += 1;
    }
    labels
}

const fn build_plain_number() -> [bool; PERIOD] {
    let mut plain = [false; PERIOD];
    let mut r = 0;
    while r < PERIOD {
        plain[r] = !divides(FIZZ_DIVISOR, r) && !divides(BUZZ_DIVISOR, r);
        r += 1;
    }
    plain
}

/// The label stored for a residue (empty for plain numbers).
#[inline]
pub fn label_for(residue: Residue) -> &'static str {
    LABELS[residue.as_usize()]
}

/// Whether a residue means "return the number itself".
#[inline]
pub fn is_plain_number(residue: Residue) -> bool {
    PLAIN_NUMBER[residue.as_usize()]
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Known answers for 0..=18.
pub const KNOWN_CASES: [(u64, &str); 19] = [
    (0, "FizzBuzz"),
    (1, "1"),
    (2, "2"),
    (3, "Fizz"),
    (4, "4"),
    (5, "Buzz"),
    (6, "Fizz"),
    (7, "7"),
    (8, "8"),
    (9, "Fizz"),
    (10, "Buzz"),
    (11, "11"),
    (12, "Fizz"),
    (13, "13"),
    (14, "14"),
    (15, "FizzBuzz"),
    (16, "16"),
    (17, "17"),
    (18, "Fizz"),
];

/// Number of random samples drawn by differential tests.
pub const SAMPLES: usize = 10_000;

/// A deterministic generator, so a failing sample can be reproduced.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x00F1_22B0_22)
}

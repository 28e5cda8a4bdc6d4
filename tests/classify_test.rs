// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Properties of the table-driven classifier.

mod common;

use common::KNOWN_CASES;
use fizz_buzz::{classify, label, Residue};

#[test]
fn test_known_cases() {
    for (n, want) in KNOWN_CASES {
        assert_eq!(classify(n), want, "classify({})", n);
        assert_eq!(fizz_buzz::naive::classify(n), want, "naive::classify({})", n);
    }
}

#[test]
fn test_zero_is_fizz_buzz() {
    assert_eq!(classify(0u8), "FizzBuzz");
    assert_eq!(classify(0u128), "FizzBuzz");
}

#[test]
fn test_multiples_of_fifteen() {
    for k in 0u64..1000 {
        assert_eq!(classify(15 * k), "FizzBuzz", "n = {}", 15 * k);
    }
}

#[test]
fn test_divisibility_rules() {
    for n in 0u64..3000 {
        let got = classify(n);
        match (n % 3 == 0, n % 5 == 0) {
            (true, true) => assert_eq!(got, "FizzBuzz", "n = {}", n),
            (true, false) => assert_eq!(got, "Fizz", "n = {}", n),
            (false, true) => assert_eq!(got, "Buzz", "n = {}", n),
            (false, false) => assert_eq!(got, n.to_string(), "n = {}", n),
        }
    }
}

#[test]
fn test_labels_are_periodic() {
    for n in 0u64..3000 {
        let residue = n % 15;
        assert_eq!(label(n), label(residue), "n = {}", n);
        if label(n).is_some() {
            assert_eq!(classify(n), classify(residue), "n = {}", n);
        }
    }
}

#[test]
fn test_label_agrees_with_classify() {
    for n in 0u32..1000 {
        match label(n) {
            Some(word) => assert_eq!(classify(n), word),
            None => assert_eq!(classify(n), n.to_string()),
        }
    }
}

#[test]
fn test_every_residue_near_the_top() {
    // u64::MAX is divisible by 15, so u64::MAX - r has residue 15 - r.
    for r in 0..15u64 {
        let n = u64::MAX - r;
        assert_eq!(Residue::of(n).value() as u64, (15 - r) % 15);
        assert_eq!(classify(n), fizz_buzz::naive::classify(n), "n = {}", n);
    }
}

#[test]
fn test_shared_across_threads() {
    let handles: Vec<_> = (0..4u64)
        .map(|t| {
            std::thread::spawn(move || {
                (t * 1000..(t + 1) * 1000)
                    .filter(|&n| classify(n) == "FizzBuzz")
                    .count()
            })
        })
        .collect();
    let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    // Multiples of 15 in 0..4000: 0, 15, ..., 3990.
    assert_eq!(total, 267);
}

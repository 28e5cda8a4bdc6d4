// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Table-driven FizzBuzz.
//!
//! Maps an unsigned integer to "FizzBuzz" (divisible by 15), "Fizz"
//! (divisible by 3), "Buzz" (divisible by 5), or its decimal string.
//!
//! # Architecture
//!
//! ## MEMO Data (Immutable)
//!
//! Two 15-entry tables indexed by `n mod 15`, computed at compile time:
//! - The label for each residue ("FizzBuzz", "Fizz", "Buzz" or empty)
//! - Whether the residue means "return the number itself"
//!
//! ## Classification
//!
//! [`classify`] reduces its input to a [`Residue`] once and reads both
//! tables. [`naive::classify`] is the branching version used as a reference
//! in tests and as the baseline in `benches/classify.rs`.
//!
//! Both accept any native unsigned integer through the [`Unsigned`] trait.
//! They are total over the whole domain: there is no arithmetic other than
//! `%`, so `N::MAX` is classified like any other value.

pub mod classify;
pub mod memo;
pub mod naive;
pub mod residue;

// Re-export commonly used types
pub use classify::{classify, label};
pub use residue::{Residue, Unsigned};

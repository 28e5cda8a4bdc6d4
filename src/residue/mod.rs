// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Residue arithmetic for FizzBuzz classification.
//!
//! This module contains:
//! - constants: The divisors, labels and period (15)
//! - Residue: A remainder modulo the period (0..15)
//! - Unsigned: The native unsigned integer types that can be reduced to a residue

pub mod constants;
#[allow(clippy::module_inception)]
pub mod residue;
pub mod unsigned;

// Re-export for convenience
pub use constants::*;
pub use residue::Residue;
pub use unsigned::Unsigned;

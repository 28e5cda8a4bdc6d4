// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! MEMO data (immutable, precomputed).
//!
//! The lookup tables are computed by `const fn` at compile time and stored in
//! `static` arrays. They are never mutated and are shared freely between
//! threads.

pub mod tables;

pub use tables::{is_plain_number, label_for, LABELS, PLAIN_NUMBER};

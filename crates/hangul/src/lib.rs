//! Hangul text primitives for fuzzy search
//!
//! This crate contains:
//! - `jamo`: Syllable decomposition, choseong extraction, full jamo disassembly
//! - `matcher`: The three-strategy fuzzy matching predicate
//!
//! Everything here is a pure function over `&str`: no I/O, no shared state,
//! no dependencies. Safe to call from any number of threads.

pub mod jamo;
pub mod matcher;

pub use jamo::{choseong, disassemble, is_choseong_jamo, is_syllable};
pub use matcher::matches;

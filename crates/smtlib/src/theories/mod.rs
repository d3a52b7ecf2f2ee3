//! Theories shipped with the crate.
//!
//! Other theories plug in by implementing [`Theory`](crate::theory::Theory).

pub mod arith;

//! fb-sequence: FizzBuzz classification and the number sequence it runs over.
//!
//! This crate is pure: no I/O, no configuration. The printer and the rest of
//! the application live in `fb-core`.

pub mod classify;
pub mod sequence;

pub use classify::{classify, Classification};
pub use sequence::{FizzBuzz, Iter, Line, DEFAULT_MAX};

//! fb-core: Application logic for the `fizzbuzz` binary.
//!
//! Argument parsing, configuration, styling, the printer and the run
//! journal. Exposed as a library for integration testing.

pub mod cli;
pub mod config;
pub mod error;
pub mod journal;
pub mod printer;
pub mod run;
pub mod style;

pub use error::RunError;
pub use run::run;

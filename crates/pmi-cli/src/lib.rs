//! Command-line driver for memberwise initializer expansion.
//!
//! Finds Swift files, expands every declaration marked
//! `@PublicMemberwiseInitializer` and prints, writes or checks the result.

pub mod args;
pub mod config;
pub mod driver;
pub mod reporter;
pub mod splice;
pub mod tracing_config;

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod args_tests;

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;

#[cfg(test)]
#[path = "tests/splice_tests.rs"]
mod splice_tests;

#[cfg(test)]
#[path = "tests/reporter_tests.rs"]
mod reporter_tests;

pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod counter;
pub mod error;
pub mod output;
pub mod runner;
pub mod scanner;

pub use error::{FileProbeError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FILES_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

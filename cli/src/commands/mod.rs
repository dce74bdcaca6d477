//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function.

pub mod collect;
pub mod completions;
pub mod demo;
pub mod run;

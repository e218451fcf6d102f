//! CLI functionality for the statexpr tool
//!
//! Each subcommand takes a config struct built by the binary from its
//! arguments and prints its result to stdout.

pub mod deps;
pub mod evaluate;
pub mod input;
pub mod output;
pub mod substitute;

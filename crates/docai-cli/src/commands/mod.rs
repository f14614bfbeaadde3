//! CLI subcommands.

pub mod process;
pub mod run;

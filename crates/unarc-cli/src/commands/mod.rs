//! Subcommand implementations.

pub mod actions;
pub mod check;
pub mod completion;
pub mod extract;

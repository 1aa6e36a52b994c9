//! CLI command handlers

pub mod commands;

pub use commands::{resolve_input, run, InputSource, Paths, RunReport};

// file: src/cli/mod.rs
// version: 1.0.0
// guid: 04d9566d-61e1-44cd-9583-7926bb806c6c

//! Command line interface for the normatives import agent

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;

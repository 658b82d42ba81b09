//! Command-line flag parsing with typed lookups.
//!
//! Flags look like `-name`, `--name`, `-name=value` or `-noname`. A `-noNAME`
//! flag implies `-NAME=0` unless `-NAME` is given explicitly.

pub mod args;
pub mod config;

pub use args::ParsedArgs;

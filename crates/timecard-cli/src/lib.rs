//! Timecard CLI library.
//!
//! This crate provides the command-line interface around `timecard-core`:
//! argument parsing, configuration, and file persistence of the serialized
//! timecard.

mod cli;
pub mod commands;
mod config;
pub mod store;

pub use cli::{Cli, Commands};
pub use config::Config;

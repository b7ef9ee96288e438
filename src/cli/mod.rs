//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing, value enums, and the
//! `--show-terminal` report.

mod args;
mod commands;
mod enums;

pub use args::Args;
pub use commands::show_terminal;
pub use enums::ColorChoice;

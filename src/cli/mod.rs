//! CLI module
//!
//! Command-line interface for the Metal API.
//!
//! # Commands
//!
//! - `batches get` - Show one batch
//! - `batches list` - List a project's batches, following pagination
//! - `batches delete` - Delete a batch

mod commands;
mod runner;

pub use commands::{BatchCommands, Cli, Commands, OutputFormat, QueryArgs, SortArg};
pub use runner::Runner;

//! CLI module for zookeepr
//!
//! Provides command-line interface for:
//! - init: Create the backing file and public directory
//! - serve: Load the store and run the HTTP server
//! - list: One-shot filtered listing to stdout

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, DEFAULT_CONFIG_PATH};
pub use commands::{init, list, run, run_command, serve};
pub use config::{resolve_port, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;

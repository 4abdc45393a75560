//! CLI argument definitions using clap
//!
//! Commands:
//! - zookeepr init --config <path>
//! - zookeepr serve --config <path> [--port <n>]
//! - zookeepr list --config <path> [--name] [--species] [--diet] [--trait ...]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "./zookeepr.json";

/// zookeepr - a small REST API for zoo animal records
#[derive(Parser, Debug)]
#[command(name = "zookeepr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty animals file and the public directory
    Init {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Serve the animal API and HTML pages
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Port to listen on (overrides PORT and the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the animals matching the given filters and exit
    List {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        species: Option<String>,

        #[arg(long)]
        diet: Option<String>,

        /// Required personality trait; repeat for several
        #[arg(long = "trait")]
        traits: Vec<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

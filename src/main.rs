//! zookeepr CLI entry point
//!
//! Parses arguments, dispatches to the command, prints errors to stderr
//! and exits non-zero on failure. All logic lives in the `cli` module.

use zookeepr::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

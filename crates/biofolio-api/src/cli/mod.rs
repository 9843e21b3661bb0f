//! CLI command definitions for the `bfolio` binary.
//!
//! Uses clap derive macros for argument parsing. Running `bfolio` with no
//! subcommand starts an interactive session.

pub mod form;
pub mod render;
pub mod session;
pub mod view;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Collect biographies in a session and view them grouped by type.
#[derive(Parser)]
#[command(name = "bfolio", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session (the default).
    Session,

    /// Build a session from a JSON file of submissions and print it grouped.
    Render {
        /// Path to a JSON array of biography submissions.
        file: PathBuf,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["bfolio"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_render_with_global_flags() {
        let cli = Cli::try_parse_from(["bfolio", "render", "bios.json", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Render { file }) => assert_eq!(file, PathBuf::from("bios.json")),
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }
}

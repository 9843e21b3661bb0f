//! Biofolio CLI entry point.
//!
//! Binary name: `bfolio`
//!
//! Parses CLI arguments, sets up tracing, loads configuration, then runs an
//! interactive session or renders a batch file.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,biofolio=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Shell completions don't need app state
    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "bfolio", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await?;

    match cli.command {
        None | Some(Commands::Session) => {
            cli::session::run_session(&state, cli.json).await?;
        }

        Some(Commands::Render { file }) => {
            cli::render::render_file(&state, &file, cli.json).await?;
        }

        Some(Commands::Completions { .. }) => unreachable!("handled above"),
    }

    Ok(())
}

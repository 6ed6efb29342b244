//! Quill terminal assistant entry point.
//!
//! Binary name: `quill`
//!
//! Parses CLI arguments, initializes tracing, then dispatches to the
//! interactive chat loop or one of the listing commands.

mod cli;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,quill=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Chat { model } => {
            cli::chat::run_chat(model).await?;
        }

        Commands::Templates => {
            cli::templates::list_templates(cli.json)?;
        }

        Commands::Models => {
            cli::models::list_models(cli.json)?;
        }

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "quill", &mut std::io::stdout());
        }
    }

    Ok(())
}

//! CLI command definitions and dispatch for the `quill` binary.
//!
//! Uses clap derive macros for argument parsing. The interesting surface
//! is `quill chat`; the rest are small listing commands.

pub mod chat;
pub mod models;
pub mod style;
pub mod templates;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with a hosted model from your terminal.
#[derive(Parser)]
#[command(name = "quill", version, about, long_about = None)]
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
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat {
        /// Model identifier to chat with (defaults to the catalog default).
        #[arg(short, long)]
        model: Option<String>,
    },

    /// List the prompt templates.
    Templates,

    /// List the selectable models.
    Models,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for templates,
//! transcripts, statistics, and model switching.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Run a prompt template interactively.
    Template,
    /// List the template names.
    Templates,
    /// Save the conversation under a name.
    Save(String),
    /// Load a saved conversation by name.
    Load(String),
    /// List saved conversations.
    Saved,
    /// Show session statistics.
    Stats,
    /// Show the conversation so far.
    History,
    /// Clear the conversation history.
    Clear,
    /// Switch to a different model.
    Model,
    /// Exit the chat session.
    Exit,
    /// Unknown command or bad arguments.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts.get(1).map(|s| s.trim().to_string());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/template" | "/t" => Some(ChatCommand::Template),
        "/templates" => Some(ChatCommand::Templates),
        "/save" => match arg.filter(|a| !a.is_empty()) {
            Some(name) => Some(ChatCommand::Save(name)),
            None => Some(ChatCommand::Unknown("/save requires a name".to_string())),
        },
        "/load" => match arg.filter(|a| !a.is_empty()) {
            Some(name) => Some(ChatCommand::Load(name)),
            None => Some(ChatCommand::Unknown("/load requires a name".to_string())),
        },
        "/saved" => Some(ChatCommand::Saved),
        "/stats" => Some(ChatCommand::Stats),
        "/history" => Some(ChatCommand::History),
        "/clear" => Some(ChatCommand::Clear),
        "/model" => Some(ChatCommand::Model),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}     {}", style("/template").cyan(), "Run a prompt template");
    println!("  {}    {}", style("/templates").cyan(), "List template names");
    println!("  {}  {}", style("/save <name>").cyan(), "Save the conversation");
    println!("  {}  {}", style("/load <name>").cyan(), "Load a saved conversation");
    println!("  {}        {}", style("/saved").cyan(), "List saved conversations");
    println!("  {}        {}", style("/stats").cyan(), "Session statistics");
    println!("  {}      {}", style("/history").cyan(), "Show the conversation");
    println!("  {}        {}", style("/clear").cyan(), "Clear the history");
    println!("  {}        {}", style("/model").cyan(), "Switch model");
    println!("  {}         {}", style("/exit").cyan(), "Leave the chat");
    println!();
}

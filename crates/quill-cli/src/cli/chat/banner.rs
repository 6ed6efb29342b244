//! Welcome banner display for chat sessions.

use console::style;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(model: &str, max_history: usize) {
    println!();
    println!("  {}", style("Quill").cyan().bold());
    println!("  {}", style("Your terminal AI assistant").dim());
    println!();
    println!("  {}  {}", style("Model:").bold(), style(model).dim());
    println!(
        "  {}  {}",
        style("Window:").bold(),
        style(format!("{max_history} turns")).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, /exit to leave").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}

//! Shared styled-output helpers for the CLI.

use console::style;

/// Print a success line.
pub fn success(msg: &str) {
    println!("  {} {msg}", style("✓").green().bold());
}

/// Print an error line.
pub fn error(msg: &str) {
    eprintln!("  {} {msg}", style("✗").red().bold());
}

/// Print a warning line.
pub fn warning(msg: &str) {
    println!("  {} {msg}", style("!").yellow().bold());
}

/// Print a dim informational line.
pub fn info(msg: &str) {
    println!("  {}", style(msg).dim());
}

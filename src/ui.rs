//! Terminal output helpers

use colored::Colorize;

/// Print an error line to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

/// Print a follow-up hint to stderr
pub fn print_hint(message: &str) {
    eprintln!("{}", message.dimmed());
}

/// Hint shown after a usage error
pub fn usage_hint(program: &str) -> String {
    format!("For more information, try '{} --help'.", program)
}

//! Status message functions for terminal output.

use owo_colors::OwoColorize;

use super::colors_enabled;

fn print(symbol: String, plain_symbol: &str, message: String, plain_message: &str) {
    if colors_enabled() {
        eprintln!("{symbol} {message}");
    } else {
        eprintln!("{plain_symbol} {plain_message}");
    }
}

/// Print a success message to stderr.
pub fn success(message: &str) {
    print("✓".green().bold().to_string(), "✓", message.to_string(), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    print(
        "⚠".yellow().bold().to_string(),
        "⚠",
        message.yellow().to_string(),
        message,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        success("Success message");
        warning("Warning message");
    }
}

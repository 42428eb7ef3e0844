//! Terminal output formatting for the demo driver.
//!
//! Standardized message styling for the CLI: red for errors, green for
//! success, white for plain messages, with blank lines around each block.
//! The cache core never prints; it logs through the `log` facade.

use colored::*;

/// Formats and prints an error message with consistent styling
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_helpers_do_not_panic() {
        print_error("Test error message");
        print_success("Operation completed");
        print_info("Information message");
    }
}

//! Colored status lines for the lesson binaries.
//!
//! Results themselves are printed plain to stdout; everything here goes to
//! stderr so piping the output stays clean.

use colored::Colorize;

pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Applies the `NO_COLOR` convention to everything `colored` renders.
pub fn init() {
    if !should_use_colors() {
        colored::control::set_override(false);
    }
}

pub fn heading(title: &str) -> String {
    format!("=== {} ===", title).bold().cyan().to_string()
}

pub fn detail(label: &str, area: f64) -> String {
    format!("  {:<10} area = {:.4}", label.yellow(), area)
}

pub fn success(message: &str) -> String {
    format!("{} {}", "✓".green(), message)
}

pub fn failure(message: &str) -> String {
    format!("{} {}", "error:".bold().red(), message)
}

pub fn section(title: &str) {
    eprintln!("\n{}", heading(title));
}

pub fn status(message: &str) {
    eprintln!("{}", success(message));
}

pub fn report_error(err: &dyn std::error::Error) {
    eprintln!("{}", failure(&err.to_string()));
}

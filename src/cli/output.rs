//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR, and is dropped when not a terminal):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings, missing secrets
//! - Cyan: secret names, paths, hints
//! - Dimmed: secondary info

use console::style;
use std::io::{self, Write as IoWrite};

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ secret 'AI-key' set`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ connection failed: ...`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
///
/// Example: `⚠ secret 'missing' not found`
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: az login`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").cyan().for_stderr(),
            style(msg).cyan().for_stderr()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a list item.
///
/// Example: `  - AI-key`
pub fn list_item(item: &str) {
    println!("  - {}", item);
}

/// Print a resolved secret as `name: value`.
pub fn secret(name: &str, value: &str) {
    if colors_enabled() {
        println!("{}: {}", style(name).cyan(), value);
    } else {
        println!("{}: {}", name, value);
    }
}

/// Print a secret that could not be resolved as `name: [NOT FOUND]`.
pub fn missing(name: &str) {
    if colors_enabled() {
        println!("{}: {}", style(name).cyan(), style("[NOT FOUND]").yellow());
    } else {
        println!("{}: [NOT FOUND]", name);
    }
}

/// Format a path string in cyan.
pub fn path(p: &str) -> String {
    if colors_enabled() {
        style(p).cyan().to_string()
    } else {
        p.to_string()
    }
}

/// Start a progress line in the format `Label... `.
///
/// Call `progress_done()` to finish the line.
pub fn progress(label: &str) {
    if colors_enabled() {
        print!("{}... ", style(label).dim());
    } else {
        print!("{}... ", label);
    }
    let _ = io::stdout().flush();
}

/// Finish a progress line with success/failure indicator.
pub fn progress_done(success: bool) {
    let word = if success { "ok" } else { "failed" };
    if !colors_enabled() {
        println!("{}", word);
    } else if success {
        println!("{}", style(word).green());
    } else {
        println!("{}", style(word).red());
    }
}

/// Print a dimmed/secondary message.
///
/// Example: `No secrets found`
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}

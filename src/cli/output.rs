//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR and non-tty stdout):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: keys, hints
//! - Dimmed: secondary info

use std::fmt::Display;
use std::io::{self, Write as IoWrite};

use console::style;

const RULE_WIDTH: usize = 56;

/// Check if color output is enabled.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err() && atty::is(atty::Stream::Stdout)
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ 2 registered`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ secrets file not found`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
///
/// Example: `⚠ 1 registered, 2 failed`
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ run: gh auth login`
pub fn hint(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        println!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  client  /usr/bin/gh`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", style(label).dim(), style(value.to_string()).bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Print a list item with bullet.
///
/// Example: `  • DATABASE_URL`
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Print a horizontal rule separator.
pub fn rule() {
    if colors_enabled() {
        println!("{}", style("─".repeat(RULE_WIDTH)).dim());
    } else {
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Format a key name in cyan.
pub fn key(k: &str) -> String {
    if colors_enabled() {
        style(k).cyan().to_string()
    } else {
        k.to_string()
    }
}

/// Start a progress line in the format `label... `.
///
/// Flushed before returning so the label is visible while the external
/// call is in flight. Call `progress_done()` to finish the line.
pub fn progress(label: &str) {
    if colors_enabled() {
        print!("{}... ", style(label).dim());
    } else {
        print!("{}... ", label);
    }
    let _ = io::stdout().flush();
}

/// Finish a progress line with a success/failure marker.
pub fn progress_done(success: bool) {
    if colors_enabled() {
        if success {
            println!("{}", style("ok").green());
        } else {
            println!("{}", style("failed").red());
        }
    } else {
        println!("{}", if success { "ok" } else { "failed" });
    }
}

/// Print a dimmed/secondary message.
///
/// Example: `no secrets registered`
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}

/// Print a section header with a separator line.
pub fn section(title: &str) {
    println!();
    header(title);
    rule();
}
